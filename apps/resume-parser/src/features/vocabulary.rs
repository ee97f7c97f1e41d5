//! Keyword vocabularies driving the feature extractors.
//!
//! Built-in defaults cover common software roles. A TOML file can replace any
//! section; sections absent from the file keep their defaults.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::ConfigError;
use crate::features::skills::MatchMode;

const DEFAULT_SKILLS: &[&str] = &[
    "javascript",
    "typescript",
    "python",
    "java",
    "c++",
    "c#",
    "ruby",
    "go",
    "rust",
    "react",
    "angular",
    "vue",
    "node.js",
    "express",
    "django",
    "flask",
    "spring",
    "postgresql",
    "mysql",
    "mongodb",
    "redis",
    "elasticsearch",
    "aws",
    "azure",
    "gcp",
    "docker",
    "kubernetes",
    "terraform",
    "git",
    "ci/cd",
    "jenkins",
    "github actions",
    "rest",
    "graphql",
    "microservices",
    "agile",
    "scrum",
];

const DEFAULT_EDUCATION: &[&str] = &[
    "bachelor",
    "master",
    "phd",
    "doctorate",
    "associate",
    "b.s.",
    "m.s.",
    "b.a.",
    "m.a.",
    "mba",
    "computer science",
    "engineering",
    "university",
    "college",
    "institute",
];

const DEFAULT_TITLES: &[&str] = &[
    "developer",
    "engineer",
    "architect",
    "manager",
    "director",
    "analyst",
    "designer",
    "consultant",
    "specialist",
    "lead",
    "senior",
    "junior",
    "staff",
    "principal",
];

const DEFAULT_ONGOING_TERMS: &[&str] = &["Present", "Current"];

/// Term lists for every keyword-driven extractor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Vocabulary {
    /// Skill terms, matched case-insensitively.
    pub skills: Vec<String>,
    /// Display name overrides keyed by skill term (e.g. "aws" = "AWS").
    pub skill_aliases: BTreeMap<String, String>,
    pub skill_match: MatchMode,
    pub education: Vec<String>,
    pub titles: Vec<String>,
    /// Words standing in for the end year of a range still in progress.
    /// Matched case-sensitively.
    pub ongoing_terms: Vec<String>,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self {
            skills: to_owned(DEFAULT_SKILLS),
            skill_aliases: BTreeMap::new(),
            skill_match: MatchMode::default(),
            education: to_owned(DEFAULT_EDUCATION),
            titles: to_owned(DEFAULT_TITLES),
            ongoing_terms: to_owned(DEFAULT_ONGOING_TERMS),
        }
    }
}

impl Vocabulary {
    /// Parses a TOML document. Unknown keys are rejected so typos surface at startup.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let vocabulary: Vocabulary = toml::from_str(source)?;
        Ok(vocabulary.normalized())
    }

    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    /// Lower-cases and trims keyword terms, dropping blanks and duplicates.
    /// Ongoing terms keep their case.
    pub fn normalized(self) -> Self {
        Self {
            skills: normalize_terms(self.skills),
            skill_aliases: self
                .skill_aliases
                .into_iter()
                .map(|(term, display)| (term.trim().to_lowercase(), display))
                .collect(),
            skill_match: self.skill_match,
            education: normalize_terms(self.education),
            titles: normalize_terms(self.titles),
            ongoing_terms: self
                .ongoing_terms
                .into_iter()
                .map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty())
                .collect(),
        }
    }
}

fn to_owned(terms: &[&str]) -> Vec<String> {
    terms.iter().map(|t| t.to_string()).collect()
}

fn normalize_terms(terms: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(terms.len());
    for term in terms {
        let term = term.trim().to_lowercase();
        if !term.is_empty() && !out.contains(&term) {
            out.push(term);
        }
    }
    out
}
