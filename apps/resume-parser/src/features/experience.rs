use regex::Regex;

use crate::config::ConfigError;

/// Estimates years of experience by summing `YYYY - YYYY` style date ranges.
///
/// Overlapping ranges are summed as-is; the total is clamped to `max_years`.
#[derive(Debug, Clone)]
pub struct ExperienceEstimator {
    pattern: Regex,
    reference_year: i32,
    max_years: u32,
}

impl ExperienceEstimator {
    /// `ongoing_terms` are the words (e.g. "Present") that resolve to `reference_year`.
    pub fn new(
        ongoing_terms: &[String],
        reference_year: i32,
        max_years: u32,
    ) -> Result<Self, ConfigError> {
        let mut end_alternatives = vec![r"[0-9]{4}".to_string()];
        end_alternatives.extend(ongoing_terms.iter().map(|t| regex::escape(t)));
        let pattern = format!(
            r"([0-9]{{4}})\s*[-\u{{2013}}\u{{2014}}]\s*({})",
            end_alternatives.join("|")
        );

        Ok(Self {
            pattern: Regex::new(&pattern)?,
            reference_year,
            max_years,
        })
    }

    pub fn estimate(&self, text: &str) -> u32 {
        let mut total: u32 = 0;
        for caps in self.pattern.captures_iter(text) {
            let Some(start) = caps.get(1).and_then(|m| m.as_str().parse::<i32>().ok()) else {
                continue;
            };
            let end = match caps.get(2).map(|m| m.as_str()) {
                Some(year) if year.bytes().all(|b| b.is_ascii_digit()) => {
                    match year.parse::<i32>() {
                        Ok(y) => y,
                        Err(_) => continue,
                    }
                }
                Some(_) => self.reference_year,
                None => continue,
            };
            let span = u32::try_from((end - start).max(0)).unwrap_or(0);
            total = total.saturating_add(span);
        }
        total.min(self.max_years)
    }
}
