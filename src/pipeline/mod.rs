//! Linguistic pipeline: lowercasing, segmentation, token assembly.
//!
//! The pipeline is an explicit handle. Build it once with
//! [`LinguisticPipeline::load`] (or share a lazily built one through
//! [`SharedPipeline`]) and pass it to whatever needs tokens.

mod assemble;
pub mod model_manager;
pub mod segmenter;

use crate::config::{PipelineConfig, TokenizerBackend};
use crate::error::Result;
use log::{debug, info};
use model_manager::ModelManager;
use segmenter::{HfSegmenter, Segmenter, UnicodeSegmenter};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::OnceCell;

/// A lowercase token with its byte span in the lowercased input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub text: String,
    pub start: usize,
    pub end: usize,
}

pub struct LinguisticPipeline {
    segmenter: Box<dyn Segmenter>,
}

impl LinguisticPipeline {
    pub fn new(segmenter: Box<dyn Segmenter>) -> Self {
        Self { segmenter }
    }

    /// Pipeline backed by built-in UAX #29 segmentation
    pub fn unicode() -> Self {
        Self::new(Box::new(UnicodeSegmenter))
    }

    /// Build the pipeline described by `config`. For the Hugging Face backend
    /// the tokenizer is downloaded on a cache miss before loading.
    pub async fn load(config: &PipelineConfig) -> Result<Self> {
        let pipeline = match config.backend {
            TokenizerBackend::Unicode => Self::unicode(),
            TokenizerBackend::HuggingFace => {
                let manager = ModelManager::new(config.models_dir.clone()).await?;
                let path = manager.ensure_tokenizer(&config.tokenizer_repo).await?;
                Self::new(Box::new(HfSegmenter::from_file(&path)?))
            }
        };

        info!("Linguistic pipeline ready ({})", pipeline.backend_name());
        Ok(pipeline)
    }

    pub fn backend_name(&self) -> &str {
        self.segmenter.name()
    }

    /// Lowercase and tokenize `text`
    pub fn tokenize(&self, text: &str) -> Result<Vec<Token>> {
        let lowered = text.to_lowercase();
        let segments = self.segmenter.segment(&lowered)?;
        let tokens = assemble::assemble(&lowered, &segments);
        debug!("Tokenized {} bytes into {} tokens", text.len(), tokens.len());
        Ok(tokens)
    }
}

/// Lazily initialized pipeline shared between requests.
/// Concurrent callers of [`SharedPipeline::get`] trigger at most one load.
pub struct SharedPipeline {
    config: PipelineConfig,
    cell: OnceCell<Arc<LinguisticPipeline>>,
}

impl SharedPipeline {
    pub fn new(config: PipelineConfig) -> Self {
        Self {
            config,
            cell: OnceCell::new(),
        }
    }

    pub async fn get(&self) -> Result<Arc<LinguisticPipeline>> {
        self.cell
            .get_or_try_init(|| async { LinguisticPipeline::load(&self.config).await.map(Arc::new) })
            .await
            .cloned()
    }

    pub fn is_initialized(&self) -> bool {
        self.cell.initialized()
    }
}
