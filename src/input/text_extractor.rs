//! Text extraction from uploaded documents

use crate::error::{Result, ResumeScreenerError};
use crate::input::document::RawDocument;
use crate::input::file_detector::DocumentKind;
use log::{debug, warn};
use lopdf::Document;
use regex::Regex;
use std::fmt;
use std::ops::Deref;
use std::sync::LazyLock;

static HORIZONTAL_SPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t\u{00A0}\u{2009}\u{202F}]+").expect("Invalid whitespace regex"));

/// Plain text pulled out of a document. Never mutated after creation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedText(String);

impl ExtractedText {
    pub fn new(text: &str) -> Self {
        Self(normalize_text(text))
    }

    pub fn empty() -> Self {
        Self(String::new())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl Deref for ExtractedText {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ExtractedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub trait TextExtractor {
    fn extract(&self, document: &RawDocument) -> Result<ExtractedText>;
}

/// Page-by-page PDF extraction. Never fails: a broken container yields empty text.
pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    fn extract(&self, document: &RawDocument) -> Result<ExtractedText> {
        let pdf = match Document::load_mem(&document.bytes) {
            Ok(pdf) => pdf,
            Err(e) => {
                warn!("Error processing PDF '{}': {}", document.name, e);
                return Ok(ExtractedText::empty());
            }
        };

        let mut text = String::new();
        for page_number in pdf.get_pages().keys() {
            let page_text = pdf.extract_text(&[*page_number]).unwrap_or_else(|e| {
                debug!("No extractable text on page {} of '{}': {}", page_number, document.name, e);
                String::new()
            });

            if !text.is_empty() && !text.ends_with('\n') && !page_text.is_empty() {
                text.push('\n');
            }
            text.push_str(&page_text);
        }

        Ok(ExtractedText::new(&text))
    }
}

/// UTF-8 decoding of plain text uploads
pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    fn extract(&self, document: &RawDocument) -> Result<ExtractedText> {
        let bytes = document
            .bytes
            .strip_prefix(b"\xEF\xBB\xBF")
            .unwrap_or(&document.bytes[..]);

        let content = String::from_utf8(bytes.to_vec()).map_err(|source| ResumeScreenerError::Decode {
            name: document.name.clone(),
            source,
        })?;

        Ok(ExtractedText::new(&content))
    }
}

/// Extract the text of a document, dispatching on its declared type
pub fn extract_text(document: &RawDocument) -> Result<ExtractedText> {
    debug!("Extracting {} text from '{}' ({} bytes)", document.kind, document.name, document.bytes.len());
    match document.kind {
        DocumentKind::Pdf => PdfExtractor.extract(document),
        DocumentKind::Text => PlainTextExtractor.extract(document),
    }
}

/// Normalize line endings, typographic punctuation and horizontal whitespace.
/// Line structure is kept.
pub fn normalize_text(text: &str) -> String {
    let unified: String = text
        .replace("\r\n", "\n")
        .chars()
        .map(|c| match c {
            '\r' | '\u{000C}' => '\n',
            '\u{2018}' | '\u{2019}' => '\'',
            '\u{201C}' | '\u{201D}' => '"',
            '\u{2013}' | '\u{2014}' => '-',
            _ => c,
        })
        .collect();

    unified
        .lines()
        .map(|line| HORIZONTAL_SPACE.replace_all(line, " ").trim_end().to_string())
        .collect::<Vec<_>>()
        .join("\n")
}
