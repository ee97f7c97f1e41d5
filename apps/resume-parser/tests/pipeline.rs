use std::io::{Cursor, Write};
use std::path::PathBuf;

use resume_parser::{
    Config, DocumentError, MatchMode, ParserConfig, ResumeParser, EMBEDDING_DIMENSIONS,
};
use tempfile::TempDir;
use zip::write::SimpleFileOptions;

fn parser() -> ResumeParser {
    ResumeParser::new(&ParserConfig::default().with_reference_year(2024)).unwrap()
}

fn write_file(dir: &TempDir, name: &str, contents: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

fn docx(paragraphs: &[&str]) -> Vec<u8> {
    let body: String = paragraphs
        .iter()
        .map(|p| format!("<w:p><w:r><w:t xml:space=\"preserve\">{p}</w:t></w:r></w:p>"))
        .collect();
    let xml = format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>{body}</w:body></w:document>"#
    );

    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    writer
        .start_file("[Content_Types].xml", SimpleFileOptions::default())
        .unwrap();
    writer.write_all(b"<Types/>").unwrap();
    writer
        .start_file("word/document.xml", SimpleFileOptions::default())
        .unwrap();
    writer.write_all(xml.as_bytes()).unwrap();
    writer.finish().unwrap().into_inner()
}

#[tokio::test]
async fn test_text_resume_end_to_end() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        &dir,
        "resume.txt",
        b"Jane Smith\r\nPrincipal Engineer\r\nAcme (2020-2023)\r\nBeta (2018-2020)\r\nSkills: Python, Django, AWS\r\nMaster of Science, Stanford University\r\n",
    );

    let result = parser().parse(&path).await.unwrap();
    let skills: Vec<&str> = result.skills.iter().map(String::as_str).collect();
    assert_eq!(skills, vec!["Aws", "Django", "Python"]);
    assert_eq!(result.experience_years, 5);
    assert_eq!(result.education, vec!["Master of Science, Stanford University"]);
    assert_eq!(result.job_titles, vec!["Principal Engineer"]);
    assert_eq!(result.embedding.len(), EMBEDDING_DIMENSIONS);
    assert!(!result.raw_text.as_str().contains('\r'));
}

#[tokio::test]
async fn test_education_cap_preserves_order() {
    let dir = TempDir::new().unwrap();
    let lines: Vec<String> = (1..=7).map(|i| format!("College course {i}")).collect();
    let path = write_file(&dir, "edu.md", lines.join("\n").as_bytes());

    let result = parser().parse(&path).await.unwrap();
    assert_eq!(result.education.len(), 5);
    assert_eq!(result.education, lines[..5].to_vec());
}

#[tokio::test]
async fn test_experience_clamped_at_thirty() {
    let result = parser()
        .parse_bytes(b"1980-2000\n2000-2015\n2015 - Present".to_vec(), None)
        .await
        .unwrap();
    assert_eq!(result.experience_years, 30);
}

#[tokio::test]
async fn test_docx_resume() {
    let dir = TempDir::new().unwrap();
    let bytes = docx(&[
        "Alex Kim",
        "Staff Developer",
        "Globex 2019 - Present",
        "Rust, Kubernetes &amp; Terraform",
        "Bachelor of Engineering",
    ]);
    let path = write_file(&dir, "resume.docx", &bytes);

    let result = parser().parse(&path).await.unwrap();
    assert!(result.raw_text.as_str().starts_with("Alex Kim\nStaff Developer\n"));
    assert_eq!(result.experience_years, 5);
    assert!(result.skills.contains("Rust"));
    assert!(result.skills.contains("Kubernetes"));
    assert!(result.skills.contains("Terraform"));
    // "engineering" contains the title keyword "engineer"
    assert_eq!(
        result.job_titles,
        vec!["Staff Developer", "Bachelor of Engineering"]
    );
    assert_eq!(result.education, vec!["Bachelor of Engineering"]);
}

#[tokio::test]
async fn test_zip_without_document_part_is_format_error() {
    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    writer
        .start_file("hello.txt", SimpleFileOptions::default())
        .unwrap();
    writer.write_all(b"not a word document").unwrap();
    let bytes = writer.finish().unwrap().into_inner();

    let err = parser()
        .parse_bytes(bytes, Some("resume.docx"))
        .await
        .unwrap_err();
    assert!(matches!(err, DocumentError::Format(_)), "got {err:?}");
}

#[tokio::test]
async fn test_nonexistent_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let err = parser()
        .parse(&dir.path().join("missing.pdf"))
        .await
        .unwrap_err();
    assert!(matches!(err, DocumentError::Io { .. }), "got {err:?}");
}

#[tokio::test]
async fn test_text_named_pdf_is_format_error() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "resume.pdf", b"Senior Engineer, 2019-2023");
    let err = parser().parse(&path).await.unwrap_err();
    assert!(matches!(err, DocumentError::Format(_)), "got {err:?}");
}

#[tokio::test]
async fn test_file_over_size_limit_is_rejected_before_read() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "big.txt", &vec![b'a'; 2048]);
    let config = ParserConfig {
        max_document_bytes: 1024,
        ..ParserConfig::default()
    };
    let err = ResumeParser::new(&config)
        .unwrap()
        .parse(&path)
        .await
        .unwrap_err();
    assert!(matches!(err, DocumentError::Format(_)), "got {err:?}");
}

#[tokio::test]
async fn test_text_mentioning_pdf_header_parses_as_text() {
    let result = parser()
        .parse_bytes(
            b"Jane Doe\nSenior Engineer\nWrote a %PDF-1.7 linter in Rust".to_vec(),
            Some("cv.txt"),
        )
        .await
        .unwrap();
    assert_eq!(result.job_titles, vec!["Senior Engineer"]);
    assert!(result.skills.contains("Rust"));
}

#[tokio::test]
async fn test_same_bytes_same_result() {
    let bytes = docx(&["Lead Engineer", "Go, Redis", "2016-2021"]);
    let p = parser();
    let a = p.parse_bytes(bytes.clone(), Some("a.docx")).await.unwrap();
    let b = p.parse_bytes(bytes, Some("b.docx")).await.unwrap();
    assert_eq!(a, b);
}

#[tokio::test]
async fn test_vocabulary_file_from_env_config() {
    let dir = TempDir::new().unwrap();
    let vocab_path = write_file(
        &dir,
        "vocabulary.toml",
        br#"
skills = ["rust", "tokio", "java"]
skill_match = "substring"
ongoing_terms = ["Now"]

[skill_aliases]
tokio = "Tokio"
"#,
    );

    let config = Config {
        port: 0,
        rust_log: "info".to_string(),
        vocabulary_path: Some(vocab_path),
        reference_year: Some(2030),
        read_timeout_secs: 5,
        max_document_bytes: 1024 * 1024,
        allowed_origins: Vec::new(),
    };
    let parser_config = config.parser_config().unwrap();
    assert_eq!(parser_config.vocabulary.skill_match, MatchMode::Substring);

    let result = ResumeParser::new(&parser_config)
        .unwrap()
        .parse_bytes(
            b"Rust and Tokio on JavaScript teams, 2025 - Now".to_vec(),
            None,
        )
        .await
        .unwrap();
    let skills: Vec<&str> = result.skills.iter().map(String::as_str).collect();
    // substring mode: "java" matches inside "javascript"
    assert_eq!(skills, vec!["Java", "Rust", "Tokio"]);
    assert_eq!(result.experience_years, 5);
}

#[test]
fn test_shipped_vocabulary_file_parses() {
    let source = include_str!("../config/vocabulary.toml");
    let vocabulary = resume_parser::Vocabulary::from_toml_str(source).unwrap();
    assert!(!vocabulary.skills.is_empty());
    assert_eq!(vocabulary.skill_match, MatchMode::WordBoundary);
}
