use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::ranking::{Candidate, JobPosting, RankedCandidate};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RankCandidatesRequest {
    pub job: JobPosting,
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Serialize)]
pub struct RankCandidatesResponse {
    pub candidates: Vec<RankedCandidate>,
}

/// POST /api/v1/candidates/rank
pub async fn handle_rank_candidates(
    State(state): State<AppState>,
    Json(req): Json<RankCandidatesRequest>,
) -> Result<Json<RankCandidatesResponse>, AppError> {
    if req.job.title.trim().is_empty() {
        return Err(AppError::Validation("job title is required".to_string()));
    }

    let candidates = state.scorer.rank(&req.job, &req.candidates);
    info!(
        "Ranked {} candidates for '{}'",
        candidates.len(),
        req.job.title
    );
    Ok(Json(RankCandidatesResponse { candidates }))
}
