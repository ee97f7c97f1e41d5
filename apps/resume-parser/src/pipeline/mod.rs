// Resume pipeline: orchestration plus its HTTP entry point.
// Document extraction is the only fallible step; everything after it is total.

pub mod handlers;
pub mod parser;

pub use parser::ResumeParser;
