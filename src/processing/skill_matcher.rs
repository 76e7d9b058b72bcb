//! Exact-token skill matching against the skill vocabulary

use crate::error::Result;
use crate::pipeline::LinguisticPipeline;
use crate::processing::skills::{SkillSet, SkillVocabulary};
use log::debug;
use std::sync::Arc;

/// Finds vocabulary skills among the tokens of a text.
///
/// A skill is found only when one token equals it exactly. Entries the
/// pipeline never produces as a token (`machine learning`) therefore never
/// match; they are listed by [`SkillMatcher::unmatchable_entries`].
pub struct SkillMatcher {
    pipeline: Arc<LinguisticPipeline>,
    vocabulary: Arc<SkillVocabulary>,
    unmatchable: Vec<String>,
}

impl SkillMatcher {
    /// Matcher over the built-in vocabulary
    pub fn new(pipeline: Arc<LinguisticPipeline>) -> Result<Self> {
        Self::with_vocabulary(pipeline, SkillVocabulary::builtin())
    }

    pub fn with_vocabulary(pipeline: Arc<LinguisticPipeline>, vocabulary: Arc<SkillVocabulary>) -> Result<Self> {
        let mut unmatchable = Vec::new();
        for skill in vocabulary.iter() {
            let tokens = pipeline.tokenize(skill)?;
            if !tokens.iter().any(|token| token.text == skill) {
                unmatchable.push(skill.to_string());
            }
        }

        if !unmatchable.is_empty() {
            debug!(
                "{} vocabulary entries are not single tokens and cannot match: {}",
                unmatchable.len(),
                unmatchable.join(", ")
            );
        }

        Ok(Self {
            pipeline,
            vocabulary,
            unmatchable,
        })
    }

    /// Skills of the vocabulary that appear as tokens in `text`
    pub fn extract_skills(&self, text: &str) -> Result<SkillSet> {
        let skills: SkillSet = self
            .pipeline
            .tokenize(text)?
            .into_iter()
            .filter(|token| self.vocabulary.contains(&token.text))
            .map(|token| token.text)
            .collect();

        debug!("Found {} skills: {}", skills.len(), skills);
        Ok(skills)
    }

    /// Vocabulary entries that are never produced as a single token
    pub fn unmatchable_entries(&self) -> &[String] {
        &self.unmatchable
    }

    pub fn vocabulary(&self) -> &SkillVocabulary {
        &self.vocabulary
    }
}
