use predicates::prelude::*;
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

/// End to end through the binary: the handoff URL lands on stdout, with
/// the sanitized filename percent-encoded into the file parameter.
#[test]
fn test_clip_prints_handoff_url() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("config.json"); // missing -> defaults

    let mut cmd = assert_cmd::Command::cargo_bin("clipnote").unwrap();
    cmd.arg("clip")
        .arg(fixture_path("no_chapters.json"))
        .arg("--config")
        .arg(&config);

    cmd.assert().success().stdout(
        predicate::str::starts_with("obsidian://new?file=Video.%20A%20quiet%20video.md&content="),
    );
}

/// Settings drive the vault and folder that end up in the URL.
#[test]
fn test_clip_uses_configured_vault() {
    // Arrange
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("config.json");
    std::fs::write(
        &config,
        r#"{
            "vaults": [{"name": "Work", "folderPath": "videos", "isDefault": true}],
            "tags": "Clips",
            "titlePrefix": "Video. ",
            "noteTemplate": "{{title}}"
        }"#,
    )
    .unwrap();

    // Act
    let mut cmd = assert_cmd::Command::cargo_bin("clipnote").unwrap();
    cmd.arg("clip")
        .arg(fixture_path("no_chapters.json"))
        .arg("--config")
        .arg(&config);

    // Assert
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("file=videos%2FVideo.%20A%20quiet%20video.md"))
        .stdout(predicate::str::contains("&vault=Work"));
}

/// The note body written with --output matches the rendered template.
#[test]
fn test_clip_writes_note_body() {
    // Arrange
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("config.json");
    std::fs::write(
        &config,
        r#"{"noteTemplate": "{{title}}", "tags": "Clips"}"#,
    )
    .unwrap();
    let output = temp_dir.path().join("note.md");

    // Act
    let result = clipnote_cli::commands::clip::execute(
        &fixture_path("no_chapters.json"),
        Some(config),
        None,
        false,
        false,
        Some(output.clone()),
    );

    // Assert
    assert!(result.is_ok(), "Clip should succeed");
    let body = std::fs::read_to_string(&output).unwrap();
    assert_eq!(body, "A quiet video");
}
