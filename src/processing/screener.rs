//! Batch screening of resumes against one job description

use crate::config::ScreeningConfig;
use crate::error::{Result, ResumeScreenerError};
use crate::input::{extract_text, RawDocument};
use crate::pipeline::LinguisticPipeline;
use crate::processing::candidate::candidate_name;
use crate::processing::scorer::{matching_skills, score};
use crate::processing::skill_matcher::SkillMatcher;
use crate::processing::skills::SkillSet;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs;

/// A resume as received from the caller: file name plus raw bytes
#[derive(Debug, Clone)]
pub struct ResumeUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl ResumeUpload {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }

    /// Read a resume from disk, named after its file name
    pub async fn from_path(path: &Path) -> Result<Self> {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .ok_or_else(|| ResumeScreenerError::InvalidInput(format!("Not a file: {}", path.display())))?;

        let bytes = fs::read(path).await.map_err(|e| {
            ResumeScreenerError::InvalidInput(format!("Cannot read resume {}: {}", path.display(), e))
        })?;
        Ok(Self::new(file_name, bytes))
    }
}

/// Read resumes from disk. A path that cannot be read is reported as skipped
/// and the rest are still returned.
pub async fn read_uploads(paths: &[PathBuf]) -> (Vec<ResumeUpload>, Vec<SkippedDocument>) {
    let mut uploads = Vec::with_capacity(paths.len());
    let mut skipped = Vec::new();

    for path in paths {
        match ResumeUpload::from_path(path).await {
            Ok(upload) => uploads.push(upload),
            Err(e) => {
                warn!("Skipping '{}': {}", path.display(), e);
                skipped.push(SkippedDocument {
                    file_name: path.display().to_string(),
                    reason: e.to_string(),
                });
            }
        }
    }

    (uploads, skipped)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateResult {
    pub name: String,
    /// Percentage of job skills found, 0-100 with two decimals
    pub score: f64,
    pub source_file_name: String,
    pub matching_skills: SkillSet,
    pub resume_skills: SkillSet,
}

/// A file left out of the ranking, with the reason shown to the user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkippedDocument {
    pub file_name: String,
    pub reason: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScreeningResults {
    pub job_skills: SkillSet,
    /// Ranked by descending score
    pub candidates: Vec<CandidateResult>,
    pub skipped: Vec<SkippedDocument>,
}

pub struct Screener {
    matcher: SkillMatcher,
    skip_undecodable: bool,
}

impl Screener {
    pub fn new(pipeline: Arc<LinguisticPipeline>, config: &ScreeningConfig) -> Result<Self> {
        Ok(Self::with_matcher(SkillMatcher::new(pipeline)?, config))
    }

    pub fn with_matcher(matcher: SkillMatcher, config: &ScreeningConfig) -> Self {
        Self {
            matcher,
            skip_undecodable: config.skip_undecodable,
        }
    }

    pub fn matcher(&self) -> &SkillMatcher {
        &self.matcher
    }

    /// Extract, match, name and score a single resume
    pub fn screen_document(&self, document: &RawDocument, job_skills: &SkillSet) -> Result<CandidateResult> {
        let text = extract_text(document)?;
        let resume_skills = self.matcher.extract_skills(&text)?;

        Ok(CandidateResult {
            name: candidate_name(&text),
            score: score(&resume_skills, job_skills),
            source_file_name: document.name.clone(),
            matching_skills: matching_skills(&resume_skills, job_skills),
            resume_skills,
        })
    }

    /// Screen every upload in order and rank the results.
    ///
    /// Unsupported file types are skipped with a warning. Undecodable text files
    /// are skipped too unless `skip_undecodable` is off, in which case the run
    /// fails on the first one.
    pub fn screen(&self, job_description: &str, uploads: Vec<ResumeUpload>) -> Result<ScreeningResults> {
        let job_skills = self.matcher.extract_skills(job_description)?;
        info!("Job description requires {} known skills: {}", job_skills.len(), job_skills);

        let mut candidates = Vec::with_capacity(uploads.len());
        let mut skipped = Vec::new();

        for upload in uploads {
            let document = match RawDocument::from_upload(upload.file_name.clone(), upload.bytes) {
                Ok(document) => document,
                Err(e) => {
                    warn!("Skipping '{}': {}", upload.file_name, e);
                    skipped.push(SkippedDocument {
                        file_name: upload.file_name,
                        reason: e.to_string(),
                    });
                    continue;
                }
            };

            match self.screen_document(&document, &job_skills) {
                Ok(result) => {
                    info!("Screened '{}': {:.2}%", result.source_file_name, result.score);
                    candidates.push(result);
                }
                Err(e @ ResumeScreenerError::Decode { .. }) if self.skip_undecodable => {
                    warn!("Skipping '{}': {}", document.name, e);
                    skipped.push(SkippedDocument {
                        file_name: document.name,
                        reason: e.to_string(),
                    });
                }
                Err(e) => return Err(e),
            }
        }

        Ok(ScreeningResults {
            job_skills,
            candidates: Self::rank(candidates),
            skipped,
        })
    }

    /// Stable sort by descending score
    pub fn rank(mut candidates: Vec<CandidateResult>) -> Vec<CandidateResult> {
        candidates.sort_by(|a, b| b.score.total_cmp(&a.score));
        candidates
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screener(skip_undecodable: bool) -> Screener {
        Screener::new(
            Arc::new(LinguisticPipeline::unicode()),
            &ScreeningConfig { skip_undecodable },
        )
        .unwrap()
    }

    fn candidate(file: &str, score: f64) -> CandidateResult {
        CandidateResult {
            name: file.to_string(),
            score,
            source_file_name: file.to_string(),
            matching_skills: SkillSet::new(),
            resume_skills: SkillSet::new(),
        }
    }

    #[test]
    fn test_rank_is_stable_and_descending() {
        let ranked = Screener::rank(vec![
            candidate("a", 40.0),
            candidate("b", 90.0),
            candidate("c", 90.0),
            candidate("d", 0.0),
        ]);
        let order: Vec<&str> = ranked.iter().map(|c| c.source_file_name.as_str()).collect();
        assert_eq!(order, vec!["b", "c", "a", "d"]);
    }

    #[test]
    fn test_end_to_end_text_resume() {
        let results = screener(true)
            .screen(
                "Looking for a Python developer with SQL and Docker skills",
                vec![ResumeUpload::new("john.txt", b"John Smith\nSkills: Python, SQL, Git".to_vec())],
            )
            .unwrap();

        let expected_job: SkillSet = ["python", "sql", "docker"].into_iter().collect();
        assert_eq!(results.job_skills, expected_job);

        let john = &results.candidates[0];
        assert_eq!(john.name, "John Smith");
        assert_eq!(john.score, 66.67);
        assert_eq!(john.source_file_name, "john.txt");
        assert_eq!(john.resume_skills, ["python", "sql", "git"].into_iter().collect::<SkillSet>());
        assert_eq!(john.matching_skills, ["python", "sql"].into_iter().collect::<SkillSet>());
    }

    #[test]
    fn test_matching_skills_equal_intersection() {
        let results = screener(true)
            .screen(
                "python sql docker aws",
                vec![
                    ResumeUpload::new("a.txt", b"A\naws git react".to_vec()),
                    ResumeUpload::new("b.txt", b"B\npython docker java".to_vec()),
                ],
            )
            .unwrap();

        for candidate in &results.candidates {
            assert_eq!(candidate.matching_skills, candidate.resume_skills.intersection(&results.job_skills));
        }
    }

    #[test]
    fn test_unsupported_and_corrupt_files_do_not_abort_batch() {
        let results = screener(true)
            .screen(
                "python",
                vec![
                    ResumeUpload::new("resume.docx", b"PK\x03\x04".to_vec()),
                    ResumeUpload::new("broken.pdf", b"not a pdf".to_vec()),
                    ResumeUpload::new("bad.txt", vec![0xFF, 0xFE, 0x00]),
                    ResumeUpload::new("good.txt", b"Ada\npython".to_vec()),
                ],
            )
            .unwrap();

        let screened: Vec<&str> = results.candidates.iter().map(|c| c.source_file_name.as_str()).collect();
        assert_eq!(screened, vec!["good.txt", "broken.pdf"]);

        let broken = &results.candidates[1];
        assert_eq!(broken.name, "Name not found");
        assert_eq!(broken.score, 0.0);

        let skipped: Vec<&str> = results.skipped.iter().map(|s| s.file_name.as_str()).collect();
        assert_eq!(skipped, vec!["resume.docx", "bad.txt"]);
    }

    #[test]
    fn test_undecodable_text_fails_when_not_skipping() {
        let result = screener(false).screen("python", vec![ResumeUpload::new("bad.txt", vec![0xC3, 0x28])]);
        assert!(matches!(result, Err(ResumeScreenerError::Decode { .. })));
    }

    #[test]
    fn test_job_without_known_skills_scores_zero() {
        let results = screener(true)
            .screen(
                "We want a friendly colleague",
                vec![ResumeUpload::new("a.txt", b"A\npython sql".to_vec())],
            )
            .unwrap();

        assert!(results.job_skills.is_empty());
        assert_eq!(results.candidates[0].score, 0.0);
        assert!(results.candidates[0].matching_skills.is_empty());
    }

    #[tokio::test]
    async fn test_unreadable_paths_are_skipped() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let readable = temp_dir.path().join("ada.txt");
        std::fs::write(&readable, "Ada Lovelace\nPython").unwrap();
        let missing = temp_dir.path().join("missing.txt");

        let (uploads, skipped) = read_uploads(&[missing.clone(), readable]).await;

        assert_eq!(uploads.len(), 1);
        assert_eq!(uploads[0].file_name, "ada.txt");
        assert_eq!(skipped.len(), 1);
        assert_eq!(skipped[0].file_name, missing.display().to_string());
        assert!(skipped[0].reason.contains("Cannot read resume"));
    }
}
