//! Skill extraction, naming, scoring and batch screening

pub mod candidate;
pub mod scorer;
pub mod screener;
pub mod skill_matcher;
pub mod skills;

pub use candidate::{candidate_name, NAME_NOT_FOUND};
pub use scorer::{matching_skills, score};
pub use screener::{read_uploads, CandidateResult, ResumeUpload, Screener, ScreeningResults, SkippedDocument};
pub use skill_matcher::SkillMatcher;
pub use skills::{SkillSet, SkillVocabulary};
