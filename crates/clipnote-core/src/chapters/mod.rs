mod timecode;

pub use timecode::parse_timecode;

use crate::capture::{ChapterMarker, PageCapture};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A chapter label paired with its playback offset.
///
/// Entries are constructed fresh on every extraction and never persisted.
/// Within one extraction the offsets are non-decreasing and unique; when a
/// source repeats an offset, the first occurrence wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChapterEntry {
    pub label: String,
    #[serde(rename = "offsetSeconds")]
    pub offset_seconds: u32,
    #[serde(rename = "timeText")]
    pub time_text: String,
}

/// What to do with a clock-time string that does not convert cleanly.
///
/// The original behavior silently defaults the offset to zero; dropping the
/// entry is offered as the stricter alternative.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum MalformedPolicy {
    #[default]
    ZeroOffset,
    Drop,
}

lazy_static! {
    // M:SS, MM:SS, or H:MM:SS / HH:MM:SS clock times.
    static ref TIMECODE: Regex = Regex::new(r"\d{1,2}:(?:\d{1,2}:)?\d{1,2}").unwrap();
    // A label ends at a blank line or at the next line-leading timestamp.
    static ref LABEL_END: Regex = Regex::new(r"\n[ \t]*\n|\n\d{1,2}:").unwrap();
}

/// Extract chapters from a capture.
///
/// Structured markers take precedence: when the page exposed markers and
/// they yield at least one entry, the description text is not parsed at
/// all. Extraction is total; a capture with no usable source produces an
/// empty list, never an error.
pub fn extract(capture: &PageCapture, policy: MalformedPolicy) -> Vec<ChapterEntry> {
    if !capture.markers.is_empty() {
        let entries = extract_from_markers(&capture.markers, policy);
        if !entries.is_empty() {
            tracing::debug!("Using {} structured chapter markers", entries.len());
            return entries;
        }
        tracing::debug!("Structured markers yielded no entries, falling back to description");
    }

    match &capture.description {
        Some(text) => extract_from_text(text, policy),
        None => {
            tracing::debug!("Capture has no description text, no chapters extracted");
            Vec::new()
        }
    }
}

/// Extract chapters from structured markers (mode (a)). No regex scanning;
/// each marker converts directly, subject to the malformed policy.
pub fn extract_from_markers(
    markers: &[ChapterMarker],
    policy: MalformedPolicy,
) -> Vec<ChapterEntry> {
    let mut entries = Vec::new();
    let mut seen = HashSet::new();

    for marker in markers {
        let time_text = marker.time_text.trim().to_string();
        let offset_seconds = match resolve_offset(&time_text, policy) {
            Some(offset) => offset,
            None => continue,
        };

        if seen.insert(offset_seconds) {
            entries.push(ChapterEntry {
                label: marker.label.trim().to_string(),
                offset_seconds,
                time_text,
            });
        }
    }

    entries
}

/// Extract chapters from free description text (mode (b)).
///
/// Scans for clock-time tokens; each token's label runs from the token to
/// the next line-leading timestamp, a blank line, or end of input,
/// whichever comes first. Duplicate offsets collapse to the first
/// occurrence, preserving source order.
pub fn extract_from_text(text: &str, policy: MalformedPolicy) -> Vec<ChapterEntry> {
    let mut entries = Vec::new();
    let mut seen = HashSet::new();

    for token in TIMECODE.find_iter(text) {
        let time_text = token.as_str().to_string();
        let offset_seconds = match resolve_offset(&time_text, policy) {
            Some(offset) => offset,
            None => continue,
        };

        let rest = &text[token.end()..];
        let label_end = LABEL_END
            .find(rest)
            .map(|delimiter| delimiter.start())
            .unwrap_or(rest.len());
        let label = normalize_label(&rest[..label_end]);

        if seen.insert(offset_seconds) {
            entries.push(ChapterEntry {
                label,
                offset_seconds,
                time_text,
            });
        }
    }

    tracing::debug!("Extracted {} chapters from description text", entries.len());
    entries
}

fn resolve_offset(time_text: &str, policy: MalformedPolicy) -> Option<u32> {
    match parse_timecode(time_text) {
        Some(offset) => Some(offset),
        None => match policy {
            MalformedPolicy::ZeroOffset => {
                tracing::debug!("Malformed timecode \"{}\", defaulting to 0", time_text);
                Some(0)
            }
            MalformedPolicy::Drop => {
                tracing::debug!("Malformed timecode \"{}\", dropping entry", time_text);
                None
            }
        },
    }
}

/// Collapse runs of whitespace (including newlines inside a multi-line
/// label) into single spaces.
fn normalize_label(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}
