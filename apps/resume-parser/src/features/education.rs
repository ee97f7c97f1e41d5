use crate::models::EducationEntries;

/// Collects lines that mention a degree or institution keyword, in source order.
#[derive(Debug, Clone)]
pub struct EducationExtractor {
    keywords: Vec<String>,
    max_entries: usize,
}

impl EducationExtractor {
    pub fn new(keywords: &[String], max_entries: usize) -> Self {
        Self {
            keywords: keywords.to_vec(),
            max_entries,
        }
    }

    pub fn extract(&self, text: &str) -> EducationEntries {
        text.split('\n')
            .filter(|line| {
                let line_lower = line.to_lowercase();
                self.keywords.iter().any(|k| line_lower.contains(k.as_str()))
            })
            .map(|line| line.trim().to_string())
            .take(self.max_entries)
            .collect()
    }
}
