//! File type detection

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Declared type of an uploaded document, derived from its extension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    Pdf,
    Text,
}

impl DocumentKind {
    /// Map a file extension to a supported kind; `None` for anything else
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "pdf" => Some(DocumentKind::Pdf),
            "txt" => Some(DocumentKind::Text),
            _ => None,
        }
    }

    /// Detect the kind of a file name such as `resume.PDF`
    pub fn from_file_name(name: &str) -> Option<Self> {
        Path::new(name)
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }

    pub fn supported_extensions() -> &'static [&'static str] {
        &["pdf", "txt"]
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentKind::Pdf => write!(f, "pdf"),
            DocumentKind::Text => write!(f, "text"),
        }
    }
}

/// Lowercased extension of a file name, or an empty string when it has none
pub fn extension_of(name: &str) -> String {
    Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_extension() {
        assert_eq!(DocumentKind::from_extension("pdf"), Some(DocumentKind::Pdf));
        assert_eq!(DocumentKind::from_extension("PDF"), Some(DocumentKind::Pdf));
        assert_eq!(DocumentKind::from_extension("txt"), Some(DocumentKind::Text));
        assert_eq!(DocumentKind::from_extension("docx"), None);
    }

    #[test]
    fn test_from_file_name() {
        assert_eq!(DocumentKind::from_file_name("jane.Resume.TXT"), Some(DocumentKind::Text));
        assert_eq!(DocumentKind::from_file_name("no_extension"), None);
        assert_eq!(extension_of("cv.DocX"), "docx");
        assert_eq!(extension_of("cv"), "");
    }
}
