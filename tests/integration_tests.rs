//! Integration tests for the resume screener

mod common;

use resume_screener::config::ScreeningConfig;
use resume_screener::input::{extract_text, DocumentKind, RawDocument};
use resume_screener::output::{ReportGenerator, ReportMetadata, ScreeningReport};
use resume_screener::pipeline::LinguisticPipeline;
use resume_screener::processing::{ResumeUpload, Screener, SkillSet};
use resume_screener::ResumeScreenerError;
use std::path::Path;
use std::sync::Arc;

fn screener() -> Screener {
    Screener::new(Arc::new(LinguisticPipeline::unicode()), &ScreeningConfig::default()).unwrap()
}

fn set(skills: &[&str]) -> SkillSet {
    skills.iter().copied().collect()
}

#[test]
fn test_pdf_pages_are_extracted_in_order() {
    let bytes = common::create_test_pdf(&[&["Jane Doe"], &["Skills: Python, SQL, Docker"], &["Tools: Node.js, Git"]]);
    let document = RawDocument::new("jane.pdf", bytes, DocumentKind::Pdf);

    let text = extract_text(&document).unwrap();
    let name = text.find("Jane Doe").unwrap();
    let skills = text.find("Skills: Python").unwrap();
    let tools = text.find("Tools: Node.js").unwrap();
    assert!(name < skills && skills < tools);
}

#[test]
fn test_corrupt_pdf_extracts_to_empty_string() {
    let mut bytes = common::create_test_pdf(&[&["Jane Doe"]]);
    bytes.truncate(bytes.len() / 3);
    bytes.reverse();
    let document = RawDocument::new("broken.pdf", bytes, DocumentKind::Pdf);

    assert_eq!(extract_text(&document).unwrap().as_str(), "");
}

#[test]
fn test_unreadable_pdf_page_does_not_drop_other_pages() {
    let bytes = common::create_test_pdf_with_broken_page(
        &[&["Jane Doe"], &["Lost page with Java"], &["Skills: Python"]],
        1,
    );
    let document = RawDocument::new("jane.pdf", bytes, DocumentKind::Pdf);

    let text = extract_text(&document).unwrap();
    let name = text.find("Jane Doe").unwrap();
    let skills = text.find("Skills: Python").unwrap();
    assert!(name < skills);
    assert!(!text.contains("Lost page"));

    let results = screener()
        .screen("Python and Java", vec![ResumeUpload::new("jane.pdf", document.bytes)])
        .unwrap();
    assert_eq!(results.candidates[0].name, "Jane Doe");
    assert_eq!(results.candidates[0].score, 50.0);
}

#[test]
fn test_pdf_resume_is_screened() {
    let bytes = common::create_test_pdf(&[&["Jane Doe"], &["Skills: Python, SQL, Docker"], &["Tools: Node.js, Git"]]);

    let results = screener()
        .screen(
            "Looking for a Python developer with SQL and Docker skills",
            vec![ResumeUpload::new("jane.pdf", bytes)],
        )
        .unwrap();

    let jane = &results.candidates[0];
    assert_eq!(jane.name, "Jane Doe");
    assert_eq!(jane.score, 100.0);
    assert_eq!(jane.resume_skills, set(&["docker", "git", "node.js", "python", "sql"]));
    assert_eq!(jane.matching_skills, set(&["docker", "python", "sql"]));
}

#[tokio::test]
async fn test_text_extraction_from_txt() {
    let document = RawDocument::from_path(Path::new("tests/fixtures/sample_resume.txt")).await.unwrap();
    assert_eq!(document.kind, DocumentKind::Text);

    let text = extract_text(&document).unwrap();
    assert!(text.contains("John Doe"));
    assert!(text.contains("Software Engineer"));
    assert!(text.contains("Node.js"));
}

#[tokio::test]
async fn test_unsupported_file_type() {
    let result = RawDocument::from_path(Path::new("Cargo.toml")).await;
    assert!(matches!(result, Err(ResumeScreenerError::UnsupportedFormat(_))));
}

#[tokio::test]
async fn test_nonexistent_file() {
    let result = RawDocument::from_path(Path::new("tests/fixtures/nonexistent.txt")).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_fixture_batch_ranking() {
    let job = std::fs::read_to_string("tests/fixtures/job_description.txt").unwrap();
    let resume = std::fs::read("tests/fixtures/sample_resume.txt").unwrap();

    let uploads = vec![
        ResumeUpload::new("empty.txt", Vec::new()),
        ResumeUpload::new("sample_resume.txt", resume),
        ResumeUpload::new("portfolio.docx", b"PK".to_vec()),
        ResumeUpload::new("partial.txt", b"Ada Lovelace\nJava and Git".to_vec()),
    ];
    let results = screener().screen(&job, uploads).unwrap();

    assert_eq!(results.job_skills, set(&["aws", "backend", "docker", "java", "kubernetes", "python", "sql"]));

    let order: Vec<(&str, f64)> = results
        .candidates
        .iter()
        .map(|c| (c.source_file_name.as_str(), c.score))
        .collect();
    assert_eq!(
        order,
        vec![("sample_resume.txt", 85.71), ("partial.txt", 14.29), ("empty.txt", 0.0)]
    );
    assert_eq!(results.candidates[0].name, "John Doe");
    assert_eq!(results.candidates[2].name, "Name not found");
    assert_eq!(results.skipped.len(), 1);
    assert_eq!(results.skipped[0].file_name, "portfolio.docx");

    let report = ScreeningReport::new(results, ReportMetadata::new("job_description.txt", "unicode", 36));
    let markdown = ReportGenerator::with_options(false, false, true, true)
        .generate_report(&report, resume_screener::config::OutputFormat::Markdown)
        .unwrap();
    assert!(markdown.contains("| 1 | John Doe | 85.71% | sample_resume.txt |"));
}
