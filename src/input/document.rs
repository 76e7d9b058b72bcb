//! Raw uploaded documents

use crate::error::{Result, ResumeScreenerError};
use crate::input::file_detector::{extension_of, DocumentKind};
use std::path::Path;
use tokio::fs;

/// An uploaded file: its bytes plus the declared type tag
#[derive(Debug, Clone)]
pub struct RawDocument {
    pub name: String,
    pub bytes: Vec<u8>,
    pub kind: DocumentKind,
}

impl RawDocument {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>, kind: DocumentKind) -> Self {
        Self {
            name: name.into(),
            bytes,
            kind,
        }
    }

    /// Build a document from in-memory bytes, deriving the type from the file name
    pub fn from_upload(name: impl Into<String>, bytes: Vec<u8>) -> Result<Self> {
        let name = name.into();
        let kind = DocumentKind::from_file_name(&name).ok_or_else(|| {
            ResumeScreenerError::UnsupportedFormat(format!(
                "Unsupported file type: {} ({})",
                extension_of(&name),
                name
            ))
        })?;
        Ok(Self::new(name, bytes, kind))
    }

    /// Read a document from disk
    pub async fn from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ResumeScreenerError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());

        // Reject before reading the payload
        if DocumentKind::from_file_name(&name).is_none() {
            return Self::from_upload(name, Vec::new());
        }

        let bytes = fs::read(path).await?;
        Self::from_upload(name, bytes)
    }
}
