use anyhow::Result;
use clipnote_core::capture::CaptureReader;
use clipnote_core::handoff::HandoffRequest;
use clipnote_core::note::{self, NoteData};
use clipnote_core::settings::Settings;
use clipnote_core::{chapters, filename};
use std::path::{Path, PathBuf};

pub fn execute(
    file: &Path,
    config: Option<PathBuf>,
    vault_index: Option<usize>,
    drop_malformed: bool,
    show_content: bool,
    output: Option<PathBuf>,
) -> Result<()> {
    tracing::debug!("Clipping capture: {}", file.display());

    let settings = Settings::load(&crate::config_path(config)?)?;
    let vault = settings.selected_vault(vault_index);

    let capture = CaptureReader::from_file(file)?;
    CaptureReader::validate(&capture)?;

    let entries = chapters::extract(&capture, super::malformed_policy(drop_malformed));
    tracing::debug!("Extracted {} chapters", entries.len());

    let data = NoteData {
        url: capture.url.clone(),
        title: capture.title.clone(),
        tags: settings.tags.clone(),
        timestamp_seconds: capture.position_seconds,
        chapters: entries,
    };
    let content = note::render(&settings.note_template, &data);

    let request = HandoffRequest {
        folder: vault.folder_path,
        vault: Some(vault.name),
        filename: filename::note_filename(&capture.title, &settings.title_prefix),
        content: content.clone(),
    };

    println!("{}", request.to_url());

    if show_content {
        println!();
        println!("{}", content);
    }

    if let Some(output_path) = output {
        tracing::debug!("Writing note body to: {}", output_path.display());
        std::fs::write(&output_path, &content)?;
    }

    Ok(())
}
