use clipnote_cli::OutputFormat;
use clipnote_core::chapters::ChapterEntry;
use std::path::PathBuf;
use tempfile::TempDir;

/// Helper to get path to test fixtures
fn fixture_path(filename: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("tests")
        .join("fixtures")
        .join(filename)
}

fn extract_to_json(fixture: &str, drop_malformed: bool) -> Vec<ChapterEntry> {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("chapters.json");

    let result = clipnote_cli::commands::chapters::execute(
        &fixture_path(fixture),
        OutputFormat::Json,
        drop_malformed,
        Some(output.clone()),
    );
    assert!(result.is_ok(), "Chapters extraction should succeed");

    let json = std::fs::read_to_string(&output).unwrap();
    serde_json::from_str(&json).unwrap()
}

/// Description parsing: dedup by offset, labels cut at the next timestamp
/// line and at blank lines.
#[test]
fn test_chapters_from_description() {
    let entries = extract_to_json("watch_description.json", false);

    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0].label, "Intro");
    assert_eq!(entries[0].offset_seconds, 0);
    assert_eq!(entries[1].label, "Main topic");
    assert_eq!(entries[1].offset_seconds, 90);
    assert_eq!(entries[2].label, "Outro");
    assert_eq!(entries[2].offset_seconds, 615);
}

/// Structured markers win over the description when both are present.
#[test]
fn test_chapters_prefer_markers() {
    let entries = extract_to_json("watch_markers.json", false);

    let labels: Vec<&str> = entries.iter().map(|e| e.label.as_str()).collect();
    assert_eq!(labels, vec!["Welcome", "Ownership", "Q&A"]);

    let offsets: Vec<u32> = entries.iter().map(|e| e.offset_seconds).collect();
    assert_eq!(offsets, vec![0, 120, 3600]);
}

/// A capture without timestamps yields an empty list, not an error.
#[test]
fn test_chapters_empty_when_no_timestamps() {
    let entries = extract_to_json("no_chapters.json", false);
    assert!(entries.is_empty());
}

/// File output stays machine-readable JSON whatever terminal format was
/// requested.
#[test]
fn test_chapters_output_file_is_json_for_any_format() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("chapters.json");

    clipnote_cli::commands::chapters::execute(
        &fixture_path("watch_markers.json"),
        OutputFormat::Table,
        false,
        Some(output.clone()),
    )
    .unwrap();

    let entries: Vec<ChapterEntry> =
        serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(entries.len(), 3);
}

/// A missing capture file is a real error.
#[test]
fn test_chapters_missing_file_fails() {
    let result = clipnote_cli::commands::chapters::execute(
        &fixture_path("does_not_exist.json"),
        OutputFormat::Json,
        false,
        None,
    );
    assert!(result.is_err());
}
