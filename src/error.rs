//! Error handling for the resume screener

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResumeScreenerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to decode '{name}' as UTF-8: {source}")]
    Decode {
        name: String,
        #[source]
        source: std::string::FromUtf8Error,
    },

    #[error("Tokenization error: {0}")]
    Tokenization(String),

    #[error("Model loading error: {0}")]
    ModelLoading(String),

    #[error("Model not found: {0}")]
    ModelNotFound(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),

    #[error("Screening failed: {0}")]
    ScreeningFailed(String),
}

pub type Result<T> = std::result::Result<T, ResumeScreenerError>;

/// Convert anyhow errors to our custom error type
impl From<anyhow::Error> for ResumeScreenerError {
    fn from(err: anyhow::Error) -> Self {
        ResumeScreenerError::ScreeningFailed(err.to_string())
    }
}

/// Convert Hugging Face Hub errors to our custom error type
impl From<hf_hub::api::tokio::ApiError> for ResumeScreenerError {
    fn from(err: hf_hub::api::tokio::ApiError) -> Self {
        ResumeScreenerError::Network(err.to_string())
    }
}
