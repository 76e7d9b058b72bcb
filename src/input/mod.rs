//! Input processing module
//! Handles file type detection, raw documents, and text extraction

pub mod document;
pub mod file_detector;
pub mod text_extractor;

pub use document::RawDocument;
pub use file_detector::DocumentKind;
pub use text_extractor::{extract_text, ExtractedText};
