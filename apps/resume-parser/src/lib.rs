//! Resume parser: turns PDF, DOCX or plain-text resumes into structured
//! features (skills, experience years, education, job titles) plus a
//! placeholder embedding, and scores parsed resumes against job postings.

pub mod config;
pub mod embedding;
pub mod errors;
pub mod extraction;
pub mod features;
pub mod models;
pub mod pipeline;
pub mod ranking;
pub mod routes;
pub mod state;

pub use config::{Config, ConfigError, ParserConfig};
pub use embedding::{HashEmbedder, TextEmbedder, EMBEDDING_DIMENSIONS};
pub use extraction::{DocumentError, DocumentFormat};
pub use features::{MatchMode, Vocabulary};
pub use models::{ParseResult, ResumeText};
pub use pipeline::ResumeParser;
pub use ranking::{MatchScore, MatchScorer};
