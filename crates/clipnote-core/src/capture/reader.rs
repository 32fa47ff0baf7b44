use super::types::PageCapture;
use crate::{Error, Result};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

pub struct CaptureReader;

impl CaptureReader {
    /// Read and parse a capture snapshot from the given path
    pub fn from_file(path: &Path) -> Result<PageCapture> {
        tracing::debug!("Reading capture file from: {}", path.display());

        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let capture: PageCapture = serde_json::from_reader(reader)?;

        tracing::info!(
            "Parsed capture of \"{}\" at {}s",
            capture.title,
            capture.position_seconds
        );

        Ok(capture)
    }

    /// Parse a capture snapshot from a JSON string
    pub fn from_str(content: &str) -> Result<PageCapture> {
        tracing::debug!("Parsing capture from string");

        let capture: PageCapture = serde_json::from_str(content)?;

        Ok(capture)
    }

    /// Validate that a capture is well-formed enough to clip from.
    ///
    /// A capture without a description or markers is still valid; it just
    /// yields an empty chapter list downstream.
    pub fn validate(capture: &PageCapture) -> Result<()> {
        if capture.url.trim().is_empty() {
            return Err(Error::MissingSource(
                "capture has no page URL".to_string(),
            ));
        }

        if capture.title.trim().is_empty() {
            return Err(Error::InvalidStructure(
                "capture has an empty title".to_string(),
            ));
        }

        if capture.description.is_none() && capture.markers.is_empty() {
            tracing::warn!("Capture has neither description nor chapter markers");
        }

        Ok(())
    }
}
