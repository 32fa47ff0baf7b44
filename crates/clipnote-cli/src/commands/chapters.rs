use crate::OutputFormat;
use anyhow::Result;
use clipnote_core::capture::CaptureReader;
use clipnote_core::chapters::{self, ChapterEntry};
use console::style;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

pub fn execute(
    file: &Path,
    format: OutputFormat,
    drop_malformed: bool,
    output: Option<PathBuf>,
) -> Result<()> {
    tracing::debug!("Extracting chapters from capture: {}", file.display());

    let capture = CaptureReader::from_file(file)?;
    CaptureReader::validate(&capture)?;

    let entries = chapters::extract(&capture, super::malformed_policy(drop_malformed));

    // File output is always JSON so it can be fed back into render/clip
    // pipelines; the format flag shapes terminal output only.
    if let Some(output_path) = output {
        tracing::debug!("Writing chapter list to: {}", output_path.display());
        let json = serde_json::to_string_pretty(&entries)?;
        std::fs::write(&output_path, json)?;
        return Ok(());
    }

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&entries)?;
            io::stdout().write_all(json.as_bytes())?;
            io::stdout().write_all(b"\n")?;
        }
        OutputFormat::Table => {
            println!("{:>10}  {:>8}  Chapter", "Time", "Offset");
            for entry in &entries {
                println!(
                    "{:>10}  {:>8}  {}",
                    entry.time_text, entry.offset_seconds, entry.label
                );
            }
        }
        OutputFormat::Pretty => print_pretty(&capture.title, &entries),
    }

    Ok(())
}

fn print_pretty(title: &str, entries: &[ChapterEntry]) {
    println!("{} {}", style("Chapters for").bold(), style(title).cyan());
    println!();

    if entries.is_empty() {
        println!("  (no chapters found)");
        return;
    }

    for entry in entries {
        println!("  {}  {}", style(&entry.time_text).green(), entry.label);
    }
    println!();
    println!("{} chapters", entries.len());
}
