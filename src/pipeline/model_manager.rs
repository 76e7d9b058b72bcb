//! Tokenizer model management: local cache plus Hugging Face Hub downloads

use crate::error::{Result, ResumeScreenerError};
use hf_hub::api::tokio::Api;
use log::info;
use std::path::{Path, PathBuf};
use tokio::fs;

const TOKENIZER_FILE: &str = "tokenizer.json";

/// Keeps one directory per repository under `models_dir`
pub struct ModelManager {
    models_dir: PathBuf,
}

impl ModelManager {
    /// Create a new model manager, making sure the models directory exists
    pub async fn new(models_dir: PathBuf) -> Result<Self> {
        if !models_dir.exists() {
            fs::create_dir_all(&models_dir).await.map_err(|e| {
                ResumeScreenerError::ModelLoading(format!("Failed to create models directory: {}", e))
            })?;
        }

        Ok(Self { models_dir })
    }

    pub fn models_dir(&self) -> &Path {
        &self.models_dir
    }

    /// Directory holding the files of `repo_id`, e.g. `bert-base-uncased` or `org/name`
    pub fn model_dir(&self, repo_id: &str) -> PathBuf {
        self.models_dir.join(repo_id.replace('/', "--"))
    }

    pub fn tokenizer_path(&self, repo_id: &str) -> PathBuf {
        self.model_dir(repo_id).join(TOKENIZER_FILE)
    }

    pub fn is_downloaded(&self, repo_id: &str) -> bool {
        self.tokenizer_path(repo_id).is_file()
    }

    /// Fetch `tokenizer.json` of `repo_id` into the models directory
    pub async fn download_tokenizer(&self, repo_id: &str, force: bool) -> Result<PathBuf> {
        let dest = self.tokenizer_path(repo_id);
        if !force && dest.is_file() {
            return Ok(dest);
        }

        info!("Downloading tokenizer for {}", repo_id);

        let api = Api::new()?;
        let cached = api.model(repo_id.to_string()).get(TOKENIZER_FILE).await?;

        fs::create_dir_all(self.model_dir(repo_id)).await?;
        fs::copy(&cached, &dest).await.map_err(|e| {
            ResumeScreenerError::ModelLoading(format!("Failed to copy {}: {}", TOKENIZER_FILE, e))
        })?;

        info!("Tokenizer for {} stored at {}", repo_id, dest.display());
        Ok(dest)
    }

    /// Local tokenizer path, downloading it on a cache miss
    pub async fn ensure_tokenizer(&self, repo_id: &str) -> Result<PathBuf> {
        if self.is_downloaded(repo_id) {
            return Ok(self.tokenizer_path(repo_id));
        }
        self.download_tokenizer(repo_id, false).await
    }

    pub async fn remove(&self, repo_id: &str) -> Result<bool> {
        let dir = self.model_dir(repo_id);
        if !dir.exists() {
            return Ok(false);
        }
        fs::remove_dir_all(&dir).await?;
        Ok(true)
    }
}
