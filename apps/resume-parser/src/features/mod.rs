// Feature extractors: pure functions of resume text plus configuration.
// None of them can fail; missing signal degrades to empty collections or zero.

pub mod education;
pub mod experience;
pub mod skills;
pub mod titles;
pub mod vocabulary;

pub use education::EducationExtractor;
pub use experience::ExperienceEstimator;
pub use skills::{MatchMode, SkillExtractor};
pub use titles::JobTitleExtractor;
pub use vocabulary::Vocabulary;

use crate::config::{ConfigError, ParserConfig};
use crate::models::{EducationEntries, JobTitles, SkillSet};

/// Output of one pass of every feature extractor over the same text.
#[derive(Debug, Clone, PartialEq)]
pub struct Features {
    pub skills: SkillSet,
    pub experience_years: u32,
    pub education: EducationEntries,
    pub job_titles: JobTitles,
}

/// All feature extractors, compiled once from a `ParserConfig`.
#[derive(Debug, Clone)]
pub struct FeatureExtractors {
    skills: SkillExtractor,
    experience: ExperienceEstimator,
    education: EducationExtractor,
    titles: JobTitleExtractor,
}

impl FeatureExtractors {
    pub fn new(config: &ParserConfig) -> Result<Self, ConfigError> {
        let vocabulary = config.vocabulary.clone().normalized();
        Ok(Self {
            skills: SkillExtractor::new(&vocabulary),
            experience: ExperienceEstimator::new(
                &vocabulary.ongoing_terms,
                config.reference_year,
                config.max_experience_years,
            )?,
            education: EducationExtractor::new(
                &vocabulary.education,
                config.max_education_entries,
            ),
            titles: JobTitleExtractor::new(
                &vocabulary.titles,
                config.max_job_titles,
                config.max_title_length,
            ),
        })
    }

    pub fn extract(&self, text: &str) -> Features {
        Features {
            skills: self.skills.extract(text),
            experience_years: self.experience.estimate(text),
            education: self.education.extract(text),
            job_titles: self.titles.extract(text),
        }
    }
}
