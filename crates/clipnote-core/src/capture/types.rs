use serde::{Deserialize, Serialize};

/// Snapshot of a video watch page at the moment the user clipped it.
///
/// This is the boundary object between the browser collaborator (which
/// reads the live page) and the pure extraction/rendering pipeline. A
/// capture can be serialized to disk and replayed offline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageCapture {
    /// Canonical watch URL, with the playback position folded into the
    /// `t` query parameter.
    pub url: String,
    /// Page title with the host-site suffix stripped.
    pub title: String,
    /// Playback position at capture time, in whole seconds.
    #[serde(rename = "positionSeconds")]
    pub position_seconds: u32,
    /// Full description text, in its expanded form. Absent when the page
    /// exposed no description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Structured chapter markers exposed by the host page, in page order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub markers: Vec<ChapterMarker>,
    /// RFC 3339 capture time.
    #[serde(rename = "capturedAt", default, skip_serializing_if = "Option::is_none")]
    pub captured_at: Option<String>,
}

/// A chapter marker as exposed by the host page's own chapter UI.
///
/// Markers carry the raw clock-time text; conversion to a second offset
/// happens during extraction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChapterMarker {
    #[serde(rename = "timeText")]
    pub time_text: String,
    pub label: String,
}
