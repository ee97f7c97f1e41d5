use std::sync::Arc;

use crate::config::Config;
use crate::pipeline::ResumeParser;
use crate::ranking::MatchScorer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Built once at startup from `Config::parser_config`; immutable afterwards.
    pub parser: Arc<ResumeParser>,
    pub scorer: MatchScorer,
}
