use std::path::Path;
use std::sync::Arc;

use tracing::info;

use crate::config::{ConfigError, ParserConfig};
use crate::embedding::{HashEmbedder, TextEmbedder};
use crate::extraction::{DocumentError, DocumentExtractor};
use crate::features::FeatureExtractors;
use crate::models::{ParseResult, ResumeText};

/// The resume pipeline: document -> text -> features + embedding -> `ParseResult`.
///
/// Immutable once built; share it as `Arc<ResumeParser>`.
pub struct ResumeParser {
    extractor: DocumentExtractor,
    features: FeatureExtractors,
    embedder: Arc<dyn TextEmbedder>,
}

impl ResumeParser {
    /// Builds a parser with the placeholder `HashEmbedder`.
    pub fn new(config: &ParserConfig) -> Result<Self, ConfigError> {
        Self::with_embedder(config, Arc::new(HashEmbedder))
    }

    pub fn with_embedder(
        config: &ParserConfig,
        embedder: Arc<dyn TextEmbedder>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            extractor: DocumentExtractor::new(config),
            features: FeatureExtractors::new(config)?,
            embedder,
        })
    }

    /// Parses a resume file. Only document extraction can fail.
    pub async fn parse(&self, path: &Path) -> Result<ParseResult, DocumentError> {
        let text = self.extractor.extract(path).await?;
        info!("Extracted {} bytes of text from {}", text.len(), path.display());
        Ok(self.analyze(text).await)
    }

    /// Parses an in-memory document; `file_name` is used as a format hint.
    pub async fn parse_bytes(
        &self,
        bytes: Vec<u8>,
        file_name: Option<&str>,
    ) -> Result<ParseResult, DocumentError> {
        let text = self.extractor.extract_bytes(bytes, file_name).await?;
        Ok(self.analyze(text).await)
    }

    /// Runs every feature extractor and the embedder over one text snapshot.
    pub async fn analyze(&self, text: ResumeText) -> ParseResult {
        let features = self.features.extract(text.as_str());
        let embedding = self.embedder.embed(text.as_str()).await;

        info!(
            "Parsed resume: {} skills, {} years, {} education lines, {} titles",
            features.skills.len(),
            features.experience_years,
            features.education.len(),
            features.job_titles.len()
        );

        ParseResult {
            raw_text: text,
            skills: features.skills,
            experience_years: features.experience_years,
            education: features.education,
            job_titles: features.job_titles,
            embedding,
            embedding_model: self.embedder.name().to_string(),
        }
    }
}
