use std::collections::HashSet;

use crate::models::JobTitles;

/// Picks out short lines that mention a role or seniority keyword.
///
/// Lines longer than `max_length` characters are treated as prose and skipped.
#[derive(Debug, Clone)]
pub struct JobTitleExtractor {
    keywords: Vec<String>,
    max_titles: usize,
    max_length: usize,
}

impl JobTitleExtractor {
    pub fn new(keywords: &[String], max_titles: usize, max_length: usize) -> Self {
        Self {
            keywords: keywords.to_vec(),
            max_titles,
            max_length,
        }
    }

    pub fn extract(&self, text: &str) -> JobTitles {
        let mut seen = HashSet::new();
        text.split('\n')
            .filter(|line| {
                let line_lower = line.to_lowercase();
                self.keywords.iter().any(|k| line_lower.contains(k.as_str()))
            })
            .map(str::trim)
            .filter(|title| !title.is_empty() && title.chars().count() <= self.max_length)
            .filter(|title| seen.insert(*title))
            .take(self.max_titles)
            .map(String::from)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::vocabulary::Vocabulary;

    fn extractor() -> JobTitleExtractor {
        JobTitleExtractor::new(&Vocabulary::default().titles, 10, 100)
    }

    #[test]
    fn test_titles_in_first_seen_order() {
        let text = "John Doe\n    Software Engineer\n    Senior Full Stack Developer at TechCorp (2020-2023)\n    - Led team of 5";
        assert_eq!(
            extractor().extract(text),
            vec![
                "Software Engineer",
                "Senior Full Stack Developer at TechCorp (2020-2023)",
            ]
        );
    }

    #[test]
    fn test_duplicates_removed_after_trim() {
        let text = "Staff Engineer\n   Staff Engineer   \nStaff Engineer";
        assert_eq!(extractor().extract(text), vec!["Staff Engineer"]);
    }

    #[test]
    fn test_long_lines_skipped() {
        let prose = format!("As a developer I {}", "x".repeat(120));
        let at_limit = format!("Lead {}", "y".repeat(95));
        assert_eq!(at_limit.chars().count(), 100);
        let text = format!("{prose}\n{at_limit}");
        assert_eq!(extractor().extract(&text), vec![at_limit]);
    }

    #[test]
    fn test_capped_after_dedup() {
        let mut lines: Vec<String> = (0..12).map(|i| format!("Engineer {i}")).collect();
        lines.insert(1, "Engineer 0".to_string());
        let titles = JobTitleExtractor::new(&Vocabulary::default().titles, 10, 100)
            .extract(&lines.join("\n"));
        assert_eq!(titles.len(), 10);
        assert_eq!(titles[0], "Engineer 0");
        assert_eq!(titles[1], "Engineer 1");
        assert_eq!(titles[9], "Engineer 9");
    }

    #[test]
    fn test_no_match_is_empty() {
        assert!(extractor().extract("Hobbies\nChess").is_empty());
    }
}
