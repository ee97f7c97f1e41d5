pub mod resume;

pub use resume::{
    EducationEntries, EmbeddingVector, JobTitles, ParseResult, ResumeText, SkillSet,
};
