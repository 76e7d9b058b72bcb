//! Segmentation backends

use crate::error::{Result, ResumeScreenerError};
use std::path::Path;
use tokenizers::{
    NormalizedString, Normalizer, OffsetReferential, OffsetType, PreTokenizedString, PreTokenizer, Tokenizer,
};
use unicode_segmentation::UnicodeSegmentation;

/// Splits text into byte spans. Spans may contain punctuation; whitespace-only
/// spans may be omitted.
pub trait Segmenter: Send + Sync {
    fn segment(&self, text: &str) -> Result<Vec<(usize, usize)>>;

    fn name(&self) -> &str;
}

/// UAX #29 word boundaries
#[derive(Debug, Default)]
pub struct UnicodeSegmenter;

impl Segmenter for UnicodeSegmenter {
    fn segment(&self, text: &str) -> Result<Vec<(usize, usize)>> {
        Ok(text
            .split_word_bound_indices()
            .filter(|(_, word)| !word.trim().is_empty())
            .map(|(start, word)| (start, start + word.len()))
            .collect())
    }

    fn name(&self) -> &str {
        "unicode"
    }
}

/// Normalizer and pre-tokenizer of a Hugging Face `tokenizer.json`.
/// Only word-level splitting is used; the subword model is ignored.
/// Spans always refer to the text as given, not the normalized form.
pub struct HfSegmenter {
    tokenizer: Tokenizer,
    name: String,
}

impl HfSegmenter {
    pub fn from_file(path: &Path) -> Result<Self> {
        let tokenizer = Tokenizer::from_file(path).map_err(|e| {
            ResumeScreenerError::ModelLoading(format!(
                "Failed to load tokenizer from {}: {}",
                path.display(),
                e
            ))
        })?;

        Ok(Self {
            tokenizer,
            name: format!("hugging_face:{}", path.display()),
        })
    }
}

impl Segmenter for HfSegmenter {
    fn segment(&self, text: &str) -> Result<Vec<(usize, usize)>> {
        let mut normalized = NormalizedString::from(text);
        if let Some(normalizer) = self.tokenizer.get_normalizer() {
            normalizer
                .normalize(&mut normalized)
                .map_err(|e| ResumeScreenerError::Tokenization(e.to_string()))?;
        }

        let mut pretokenized = PreTokenizedString::from(normalized);
        if let Some(pre_tokenizer) = self.tokenizer.get_pre_tokenizer() {
            pre_tokenizer
                .pre_tokenize(&mut pretokenized)
                .map_err(|e| ResumeScreenerError::Tokenization(e.to_string()))?;
        }

        Ok(pretokenized
            .get_splits(OffsetReferential::Original, OffsetType::Byte)
            .into_iter()
            .map(|(_, offsets, _)| offsets)
            .collect())
    }

    fn name(&self) -> &str {
        &self.name
    }
}
