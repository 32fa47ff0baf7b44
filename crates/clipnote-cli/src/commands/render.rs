use anyhow::Result;
use clipnote_core::capture::CaptureReader;
use clipnote_core::note::{self, NoteData};
use clipnote_core::settings::Settings;
use clipnote_core::{chapters, filename};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

pub fn execute(
    file: &Path,
    config: Option<PathBuf>,
    template: Option<String>,
    tags: Option<String>,
    title_prefix: Option<String>,
    drop_malformed: bool,
    output: Option<PathBuf>,
) -> Result<()> {
    tracing::debug!("Rendering note for capture: {}", file.display());

    let settings = Settings::load(&crate::config_path(config)?)?;

    let capture = CaptureReader::from_file(file)?;
    CaptureReader::validate(&capture)?;

    let entries = chapters::extract(&capture, super::malformed_policy(drop_malformed));
    let data = NoteData {
        url: capture.url.clone(),
        title: capture.title.clone(),
        tags: tags.unwrap_or(settings.tags),
        timestamp_seconds: capture.position_seconds,
        chapters: entries,
    };

    let body = note::render(template.as_deref().unwrap_or(&settings.note_template), &data);

    if let Some(output_path) = output {
        tracing::debug!("Writing note body to: {}", output_path.display());
        std::fs::write(&output_path, &body)?;
        println!(
            "Wrote {} to {}",
            filename::note_filename(
                &capture.title,
                title_prefix.as_deref().unwrap_or(&settings.title_prefix),
            ),
            output_path.display()
        );
    } else {
        io::stdout().write_all(body.as_bytes())?;
        io::stdout().write_all(b"\n")?;
    }

    Ok(())
}
