use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Canonical skill names found in a resume. Sorted so serialized output is stable.
pub type SkillSet = BTreeSet<String>;

/// Education lines in source order, capped.
pub type EducationEntries = Vec<String>;

/// Job title lines, deduplicated in first-seen order, capped.
pub type JobTitles = Vec<String>;

/// Fixed-length embedding, components in [-1, 1).
pub type EmbeddingVector = Vec<f32>;

/// Decoded document text. Cheap to clone; every extractor reads the same snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResumeText(Arc<str>);

impl ResumeText {
    pub fn new(text: impl Into<Arc<str>>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<String> for ResumeText {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl From<&str> for ResumeText {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl AsRef<str> for ResumeText {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for ResumeText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Structured output of one resume parse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParseResult {
    pub raw_text: ResumeText,
    pub skills: SkillSet,
    pub experience_years: u32,
    pub education: EducationEntries,
    pub job_titles: JobTitles,
    pub embedding: EmbeddingVector,
    /// Which embedder produced `embedding` ("hash-placeholder" by default).
    pub embedding_model: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resume_text_serializes_as_plain_string() {
        let text = ResumeText::from("Jane Doe\nRust Engineer");
        let json = serde_json::to_string(&text).unwrap();
        assert_eq!(json, r#""Jane Doe\nRust Engineer""#);
    }

    #[test]
    fn test_parse_result_field_names() {
        let result = ParseResult {
            raw_text: ResumeText::from("text"),
            skills: ["Rust".to_string()].into_iter().collect(),
            experience_years: 3,
            education: vec!["BSc Computer Science".to_string()],
            job_titles: vec!["Senior Engineer".to_string()],
            embedding: vec![0.5, -0.25],
            embedding_model: "hash-placeholder".to_string(),
        };
        let value = serde_json::to_value(&result).unwrap();
        for key in [
            "raw_text",
            "skills",
            "experience_years",
            "education",
            "job_titles",
            "embedding",
            "embedding_model",
        ] {
            assert!(value.get(key).is_some(), "missing field {key}");
        }
        assert_eq!(value["skills"], serde_json::json!(["Rust"]));
        assert_eq!(value["experience_years"], 3);
    }
}
