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

/// A chapterless capture with an explicit template renders to exactly the
/// substituted template, no timestamps table.
#[test]
fn test_render_front_matter_only() {
    // Arrange
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("config.json"); // missing -> defaults
    let output = temp_dir.path().join("note.md");

    // Act
    let result = clipnote_cli::commands::render::execute(
        &fixture_path("no_chapters.json"),
        Some(config),
        Some("---\nmedia_link: {{url}}\ntags: {{tags}}\n---".to_string()),
        Some("A".to_string()),
        None,
        false,
        Some(output.clone()),
    );

    // Assert
    assert!(result.is_ok(), "Render should succeed");
    let body = std::fs::read_to_string(&output).unwrap();
    assert_eq!(
        body,
        "---\nmedia_link: https://www.youtube.com/watch?v=xyz789&t=7\ntags: A\n---"
    );
}

/// With chapters present, the default template gains a linked timestamps
/// table; each row's link replaces the t parameter with the row's offset.
#[test]
fn test_render_appends_timestamps_table() {
    // Arrange
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("config.json");
    let output = temp_dir.path().join("note.md");

    // Act
    let result = clipnote_cli::commands::render::execute(
        &fixture_path("watch_description.json"),
        Some(config),
        None,
        None,
        None,
        false,
        Some(output.clone()),
    );

    // Assert
    assert!(result.is_ok());
    let body = std::fs::read_to_string(&output).unwrap();
    assert!(body.contains("media_link: https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=42"));
    assert!(body.contains("tags: YouTube"));
    assert!(body.contains("## Timestamps"));
    assert!(body.contains("| [0:00](https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=0) | Intro |"));
    assert!(
        body.contains("| [1:30](https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=90) | Main topic |")
    );
    assert!(body.contains("| [10:15](https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=615) | Outro |"));
}

/// The --title-prefix flag overrides the settings prefix in the derived
/// filename.
#[test]
fn test_render_title_prefix_override() {
    // Arrange
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("config.json");
    let output = temp_dir.path().join("note.md");

    // Act
    let mut cmd = assert_cmd::Command::cargo_bin("clipnote").unwrap();
    cmd.arg("render")
        .arg(fixture_path("no_chapters.json"))
        .arg("--config")
        .arg(&config)
        .arg("--title-prefix")
        .arg("Talk. ")
        .arg("--output")
        .arg(&output);

    // Assert
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Talk. A quiet video.md"));
    assert!(output.exists());
}

/// Rendering is deterministic: two runs over the same capture and settings
/// produce byte-identical notes.
#[test]
fn test_render_is_deterministic() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("config.json");
    let first = temp_dir.path().join("first.md");
    let second = temp_dir.path().join("second.md");

    for output in [&first, &second] {
        clipnote_cli::commands::render::execute(
            &fixture_path("watch_description.json"),
            Some(config.clone()),
            None,
            None,
            None,
            false,
            Some(output.clone()),
        )
        .unwrap();
    }

    assert_eq!(
        std::fs::read_to_string(&first).unwrap(),
        std::fs::read_to_string(&second).unwrap()
    );
}
