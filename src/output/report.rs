//! Screening report structures

use crate::processing::{CandidateResult, ScreeningResults, SkillSet, SkippedDocument};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Everything a front end needs to render one screening run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreeningReport {
    pub metadata: ReportMetadata,

    /// Known skills required by the job description
    pub job_skills: SkillSet,

    /// Candidates ranked by descending score
    pub candidates: Vec<CandidateResult>,

    /// Files that were not screened
    pub skipped: Vec<SkippedDocument>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub generated_at: DateTime<Utc>,

    /// Version of the screener used
    pub screener_version: String,

    /// Job description source (file path, or `<inline>`)
    pub job_source: String,

    /// Segmentation backend of the linguistic pipeline
    pub tokenizer_backend: String,

    pub vocabulary_size: usize,

    pub processing_time_ms: u64,
}

impl ScreeningReport {
    pub fn new(results: ScreeningResults, metadata: ReportMetadata) -> Self {
        Self {
            metadata,
            job_skills: results.job_skills,
            candidates: results.candidates,
            skipped: results.skipped,
        }
    }

    pub fn top_candidate(&self) -> Option<&CandidateResult> {
        self.candidates.first()
    }

    /// Job skills no candidate has
    pub fn uncovered_skills(&self) -> SkillSet {
        self.candidates
            .iter()
            .fold(self.job_skills.clone(), |remaining, candidate| {
                remaining.difference(&candidate.matching_skills)
            })
    }
}

impl ReportMetadata {
    pub fn new(job_source: impl Into<String>, tokenizer_backend: impl Into<String>, vocabulary_size: usize) -> Self {
        Self {
            generated_at: Utc::now(),
            screener_version: env!("CARGO_PKG_VERSION").to_string(),
            job_source: job_source.into(),
            tokenizer_backend: tokenizer_backend.into(),
            vocabulary_size,
            processing_time_ms: 0,
        }
    }

    pub fn with_processing_time(mut self, processing_time_ms: u64) -> Self {
        self.processing_time_ms = processing_time_ms;
        self
    }
}
