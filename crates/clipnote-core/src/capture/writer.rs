use super::types::PageCapture;
use crate::Result;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

pub struct CaptureWriter;

impl CaptureWriter {
    /// Write a capture snapshot to a file
    pub fn to_file(capture: &PageCapture, path: &Path) -> Result<()> {
        tracing::debug!("Writing capture file to: {}", path.display());

        let file = File::create(path)?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, capture)?;

        tracing::info!(
            "Wrote capture of \"{}\" to {}",
            capture.title,
            path.display()
        );

        Ok(())
    }

    /// Convert a capture snapshot to a pretty JSON string
    pub fn to_string(capture: &PageCapture) -> Result<String> {
        let json = serde_json::to_string_pretty(capture)?;
        Ok(json)
    }
}
