//! Resume screener library
//!
//! Extracts a fixed vocabulary of skills from resumes and a job description
//! and ranks candidates by how many of the job's skills they cover.

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod pipeline;
pub mod processing;

pub use config::Config;
pub use error::{Result, ResumeScreenerError};
pub use input::{extract_text, DocumentKind, ExtractedText, RawDocument};
pub use pipeline::{LinguisticPipeline, SharedPipeline, Token};
pub use processing::{
    candidate_name, score, CandidateResult, ResumeUpload, Screener, ScreeningResults, SkillMatcher, SkillSet,
    SkillVocabulary,
};
