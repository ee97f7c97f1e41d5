//! Candidate match scoring: a parsed resume against a job posting.
//!
//! Four component scores, each in [0, 100]:
//! - skills: share of the candidate's skills named in the job requirements
//! - experience: full marks at or above the required years, linear below
//! - title: best per-title share of job-title words found in a candidate title
//! - education: 50 when the posting or the resume says nothing about degrees,
//!   otherwise 100 if the candidate lists a degree level and 30 if not
//!
//! `total_score` is their weighted sum. Every score is rounded to an integer.
//! Scoring is pure; nothing is stored.

pub mod handlers;

use serde::{Deserialize, Serialize};

use crate::models::{EducationEntries, EmbeddingVector, JobTitles, ParseResult, SkillSet};

const DEGREE_LEVELS: &[&str] = &["phd", "doctorate", "master", "bachelor", "associate"];

/// Score when a posting or resume gives no signal about education.
const NEUTRAL_EDUCATION_SCORE: f64 = 50.0;
const MISSING_EDUCATION_SCORE: f64 = 30.0;

/// The job side of a match.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobPosting {
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Free text searched for skills and degree levels.
    pub requirements: String,
    #[serde(default)]
    pub experience_required: u32,
}

/// The resume fields that scoring reads. Missing fields count as empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CandidateResume {
    pub skills: SkillSet,
    pub experience_years: u32,
    pub education: EducationEntries,
    pub job_titles: JobTitles,
    pub embedding: EmbeddingVector,
}

impl From<ParseResult> for CandidateResume {
    fn from(result: ParseResult) -> Self {
        Self {
            skills: result.skills,
            experience_years: result.experience_years,
            education: result.education,
            job_titles: result.job_titles,
            embedding: result.embedding,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    pub id: String,
    pub resume: CandidateResume,
}

/// Rounded scores, 0 – 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchScore {
    pub total_score: u32,
    pub skill_match: u32,
    pub experience_match: u32,
    pub title_match: u32,
    pub education_match: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedCandidate {
    pub id: String,
    pub score: MatchScore,
}

/// Component weights. They sum to 1.0 so `total_score` stays within 0 – 100.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    pub skills: f64,
    pub experience: f64,
    pub title: f64,
    pub education: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            skills: 0.4,
            experience: 0.25,
            title: 0.2,
            education: 0.15,
        }
    }
}

/// Scores and ranks candidates for a posting.
#[derive(Debug, Clone, Copy, Default)]
pub struct MatchScorer {
    weights: ScoringWeights,
}

impl MatchScorer {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn score(&self, job: &JobPosting, resume: &CandidateResume) -> MatchScore {
        let skills = skill_match(&job.requirements, &resume.skills);
        let experience = experience_match(job.experience_required, resume.experience_years);
        let title = title_match(&job.title, &resume.job_titles);
        let education = education_match(&job.requirements, &resume.education);

        let total = skills * self.weights.skills
            + experience * self.weights.experience
            + title * self.weights.title
            + education * self.weights.education;

        MatchScore {
            total_score: rounded(total),
            skill_match: rounded(skills),
            experience_match: rounded(experience),
            title_match: rounded(title),
            education_match: rounded(education),
        }
    }

    /// Highest `total_score` first. Ties keep their input order.
    pub fn rank(&self, job: &JobPosting, candidates: &[Candidate]) -> Vec<RankedCandidate> {
        let mut ranked: Vec<RankedCandidate> = candidates
            .iter()
            .map(|candidate| RankedCandidate {
                id: candidate.id.clone(),
                score: self.score(job, &candidate.resume),
            })
            .collect();
        ranked.sort_by(|a, b| b.score.total_score.cmp(&a.score.total_score));
        ranked
    }
}

/// Percentage of the candidate's skills that appear in `requirements`.
pub fn skill_match(requirements: &str, skills: &SkillSet) -> f64 {
    if skills.is_empty() {
        return 0.0;
    }
    let requirements = requirements.to_lowercase();
    let matched = skills
        .iter()
        .filter(|skill| requirements.contains(&skill.to_lowercase()))
        .count();
    matched as f64 / skills.len() as f64 * 100.0
}

pub fn experience_match(required_years: u32, candidate_years: u32) -> f64 {
    if candidate_years >= required_years {
        return 100.0;
    }
    f64::from(candidate_years) / f64::from(required_years) * 100.0
}

/// Best share of job-title words contained in any one candidate title.
pub fn title_match(job_title: &str, candidate_titles: &[String]) -> f64 {
    let job_title = job_title.to_lowercase();
    let words: Vec<&str> = job_title.split_whitespace().collect();
    if words.is_empty() {
        return 0.0;
    }

    candidate_titles
        .iter()
        .map(|title| {
            let title = title.to_lowercase();
            let hits = words.iter().filter(|word| title.contains(*word)).count();
            hits as f64 / words.len() as f64 * 100.0
        })
        .fold(0.0, f64::max)
}

pub fn education_match(requirements: &str, education: &[String]) -> f64 {
    if education.is_empty() {
        return NEUTRAL_EDUCATION_SCORE;
    }
    if !mentions_degree(&requirements.to_lowercase()) {
        return NEUTRAL_EDUCATION_SCORE;
    }
    if mentions_degree(&education.join(" ").to_lowercase()) {
        100.0
    } else {
        MISSING_EDUCATION_SCORE
    }
}

/// Cosine of the angle between two embeddings. 0 when lengths differ or
/// either vector is all zeros.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f64 {
    if a.len() != b.len() {
        return 0.0;
    }

    let (mut dot, mut norm_a, mut norm_b) = (0.0_f64, 0.0_f64, 0.0_f64);
    for (&x, &y) in a.iter().zip(b) {
        let (x, y) = (f64::from(x), f64::from(y));
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    let denominator = norm_a.sqrt() * norm_b.sqrt();
    if denominator == 0.0 {
        0.0
    } else {
        dot / denominator
    }
}

fn mentions_degree(lowercase: &str) -> bool {
    DEGREE_LEVELS.iter().any(|level| lowercase.contains(level))
}

fn rounded(score: f64) -> u32 {
    score.round().clamp(0.0, 100.0) as u32
}
