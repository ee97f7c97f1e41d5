use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::{Datelike, Utc};
use thiserror::Error;

use crate::features::Vocabulary;

pub const DEFAULT_MAX_EXPERIENCE_YEARS: u32 = 30;
pub const DEFAULT_MAX_EDUCATION_ENTRIES: usize = 5;
pub const DEFAULT_MAX_JOB_TITLES: usize = 10;
pub const DEFAULT_MAX_TITLE_LENGTH: usize = 100;
pub const DEFAULT_READ_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_MAX_DOCUMENT_BYTES: usize = 10 * 1024 * 1024;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read vocabulary file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid vocabulary TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid date-range pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Process configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Optional TOML file replacing sections of the built-in vocabulary.
    pub vocabulary_path: Option<PathBuf>,
    /// Year substituted for "Present"/"Current". Defaults to the current UTC year.
    pub reference_year: Option<i32>,
    pub read_timeout_secs: u64,
    pub max_document_bytes: usize,
    /// Browser origins allowed to call the API. Empty allows any origin.
    pub allowed_origins: Vec<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: optional_env("PORT")?.unwrap_or(8080),
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            vocabulary_path: std::env::var_os("RESUME_VOCABULARY_PATH").map(PathBuf::from),
            reference_year: optional_env("RESUME_REFERENCE_YEAR")?,
            read_timeout_secs: optional_env("RESUME_READ_TIMEOUT_SECS")?
                .unwrap_or(DEFAULT_READ_TIMEOUT.as_secs()),
            max_document_bytes: optional_env("RESUME_MAX_DOCUMENT_BYTES")?
                .unwrap_or(DEFAULT_MAX_DOCUMENT_BYTES),
            allowed_origins: std::env::var("RESUME_ALLOWED_ORIGINS")
                .map(|raw| parse_origins(&raw))
                .unwrap_or_default(),
        })
    }

    /// Builds the parser configuration, loading the vocabulary file if one is set.
    pub fn parser_config(&self) -> Result<ParserConfig, ConfigError> {
        let vocabulary = match &self.vocabulary_path {
            Some(path) => Vocabulary::from_toml_file(path)?,
            None => Vocabulary::default(),
        };

        let mut config = ParserConfig {
            vocabulary,
            read_timeout: Duration::from_secs(self.read_timeout_secs),
            max_document_bytes: self.max_document_bytes,
            ..ParserConfig::default()
        };
        if let Some(year) = self.reference_year {
            config.reference_year = year;
        }
        config.validate()?;
        Ok(config)
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}

fn optional_env<T>(key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .with_context(|| format!("Environment variable '{key}' has an invalid value '{raw}'")),
        Err(_) => Ok(None),
    }
}

/// Everything the pipeline needs to turn a document into a `ParseResult`.
///
/// Two parses with equal configs over the same bytes produce equal results.
#[derive(Debug, Clone)]
pub struct ParserConfig {
    pub vocabulary: Vocabulary,
    pub reference_year: i32,
    pub max_experience_years: u32,
    pub max_education_entries: usize,
    pub max_job_titles: usize,
    /// Lines longer than this (in characters) are not considered job titles.
    pub max_title_length: usize,
    pub read_timeout: Duration,
    pub max_document_bytes: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            vocabulary: Vocabulary::default(),
            reference_year: Utc::now().year(),
            max_experience_years: DEFAULT_MAX_EXPERIENCE_YEARS,
            max_education_entries: DEFAULT_MAX_EDUCATION_ENTRIES,
            max_job_titles: DEFAULT_MAX_JOB_TITLES,
            max_title_length: DEFAULT_MAX_TITLE_LENGTH,
            read_timeout: DEFAULT_READ_TIMEOUT,
            max_document_bytes: DEFAULT_MAX_DOCUMENT_BYTES,
        }
    }
}

impl ParserConfig {
    pub fn with_reference_year(mut self, year: i32) -> Self {
        self.reference_year = year;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1000..=9999).contains(&self.reference_year) {
            return Err(ConfigError::Invalid(format!(
                "reference year {} is not a four-digit year",
                self.reference_year
            )));
        }
        if self.read_timeout.is_zero() {
            return Err(ConfigError::Invalid(
                "read timeout must be greater than zero".to_string(),
            ));
        }
        if self.max_document_bytes == 0 {
            return Err(ConfigError::Invalid(
                "max document size must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> Config {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            vocabulary_path: None,
            reference_year: Some(2024),
            read_timeout_secs: 5,
            max_document_bytes: 1024,
            allowed_origins: Vec::new(),
        }
    }

    #[test]
    fn test_parser_config_defaults() {
        let parser = base_config().parser_config().unwrap();
        assert_eq!(parser.reference_year, 2024);
        assert_eq!(parser.max_experience_years, 30);
        assert_eq!(parser.max_education_entries, 5);
        assert_eq!(parser.max_job_titles, 10);
        assert_eq!(parser.max_title_length, 100);
        assert_eq!(parser.read_timeout, Duration::from_secs(5));
        assert_eq!(parser.max_document_bytes, 1024);
        assert_eq!(parser.vocabulary, Vocabulary::default());
    }

    #[test]
    fn test_missing_reference_year_uses_current_year() {
        let config = Config {
            reference_year: None,
            ..base_config()
        };
        let parser = config.parser_config().unwrap();
        assert_eq!(parser.reference_year, Utc::now().year());
    }

    #[test]
    fn test_parse_origins_skips_blanks() {
        assert_eq!(
            parse_origins(" https://jobs.example.com, ,http://localhost:3000,"),
            vec!["https://jobs.example.com", "http://localhost:3000"]
        );
        assert!(parse_origins("").is_empty());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let config = Config {
            read_timeout_secs: 0,
            ..base_config()
        };
        assert!(matches!(
            config.parser_config(),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_bad_reference_year_rejected() {
        let parser = ParserConfig::default().with_reference_year(99);
        assert!(parser.validate().is_err());
    }

    #[test]
    fn test_missing_vocabulary_file_is_error() {
        let config = Config {
            vocabulary_path: Some(PathBuf::from("/no/such/vocabulary.toml")),
            ..base_config()
        };
        assert!(matches!(
            config.parser_config(),
            Err(ConfigError::Read { .. })
        ));
    }
}
