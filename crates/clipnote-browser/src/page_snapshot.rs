use crate::{Error, Result};
use chromiumoxide::Page;
use chromiumoxide::browser::Browser;
use chromiumoxide::cdp::js_protocol::runtime::EvaluateParams;
use clipnote_core::capture::{ChapterMarker, PageCapture};
use futures::StreamExt;
use serde::Deserialize;
use std::time::Duration;
use tokio::task::JoinHandle;

/// Bounded wait for the description expansion to settle before reading it.
pub const DEFAULT_SETTLE: Duration = Duration::from_millis(500);

/// Clicks the description expander when the page has one. Absence is not
/// an error; the description may already be expanded.
const EXPAND_JS: &str = r#"
(() => {
    const button = document.querySelector('tp-yt-paper-button#expand');
    if (!button) return false;
    button.click();
    return true;
})()
"#;

/// Reads the page in one pass: pauses playback, folds the playback
/// position into the URL, strips the site suffix from the title, and
/// collects the expanded description plus any structured chapter markers.
const SNAPSHOT_JS: &str = r#"
(() => {
    const video = document.querySelector('video');
    if (!video) return { error: 'no video element on page' };
    if (!video.paused) video.pause();
    const position = Math.floor(video.currentTime || 0);
    const url = new URL(window.location.href);
    url.searchParams.set('t', position);
    const markers = [];
    document.querySelectorAll('ytd-chapter-renderer').forEach((chapter) => {
        const time = chapter.querySelector('.ytd-thumbnail-overlay-time-status-renderer');
        const label = chapter.querySelector('#chapter-title');
        if (time && label) {
            markers.push({ timeText: time.textContent.trim(), label: label.textContent.trim() });
        }
    });
    const description = document.querySelector('#description-inline-expander');
    return {
        url: url.toString(),
        title: document.title.replace(/ - YouTube$/, ''),
        positionSeconds: position,
        description: description ? description.textContent : null,
        markers,
    };
})()
"#;

#[derive(Debug, Deserialize)]
struct RawSnapshot {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    url: String,
    #[serde(default)]
    title: String,
    #[serde(rename = "positionSeconds", default)]
    position_seconds: u32,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    markers: Vec<ChapterMarker>,
}

/// A CDP connection to the tab showing the watch page.
///
/// The snapshot runs in three explicit phases so each is independently
/// testable against a live page: `request_expand`, `await_settle`, then
/// `snapshot`. Skipping the first two only costs chapters from a
/// collapsed description, never the clip itself.
pub struct PageSnapshotter {
    _browser: Browser,
    page: Page,
    handler_task: JoinHandle<()>,
}

impl PageSnapshotter {
    /// Connect to Chrome on the given debugging port and attach to the
    /// watch-page tab (the first tab whose URL contains `url_hint`, or
    /// the first open tab when no hint matches).
    pub async fn connect(debugging_port: u16, url_hint: Option<&str>) -> Result<Self> {
        let ws_url = format!("http://localhost:{}", debugging_port);

        // Chrome may not be fully ready yet; retry the connection.
        let (browser, mut handler) = {
            let mut retries = 5;
            loop {
                tracing::debug!("Attempting CDP connection to {}...", ws_url);
                match Browser::connect(&ws_url).await {
                    Ok(result) => {
                        tracing::info!("CDP connection established");
                        break result;
                    }
                    Err(e) => {
                        retries -= 1;
                        if retries == 0 {
                            return Err(Error::Cdp(format!(
                                "Failed to connect to Chrome after 5 attempts: {}",
                                e
                            )));
                        }
                        tracing::info!("CDP connection attempt failed, retrying ({} left)", retries);
                        tokio::time::sleep(Duration::from_millis(500)).await;
                    }
                }
            }
        };

        // The handler task must run for any page command to resolve.
        let handler_task = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if let Err(e) = event {
                    tracing::debug!("CDP handler event error (continuing): {}", e);
                }
            }
        });

        // Give Chrome a moment to register its initial page.
        tokio::time::sleep(Duration::from_millis(500)).await;

        let pages = browser.pages().await?;
        let mut chosen = None;

        if let Some(hint) = url_hint {
            for page in &pages {
                if let Ok(Some(url)) = page.url().await {
                    if url.contains(hint) {
                        tracing::debug!("Attached to tab at {}", url);
                        chosen = Some(page.clone());
                        break;
                    }
                }
            }
        }

        let page = match chosen.or_else(|| pages.first().cloned()) {
            Some(page) => page,
            None => {
                handler_task.abort();
                return Err(Error::Browser("no open pages to snapshot".to_string()));
            }
        };

        Ok(Self {
            _browser: browser,
            page,
            handler_task,
        })
    }

    /// Phase one: click the description expander if the page has one.
    /// Returns whether an expansion was actually triggered.
    pub async fn request_expand(&self) -> Result<bool> {
        let clicked: bool = self.evaluate(EXPAND_JS).await?;
        if clicked {
            tracing::debug!("Clicked description expander");
        } else {
            tracing::debug!("No expander found, description may already be expanded");
        }
        Ok(clicked)
    }

    /// Phase two: wait out the settle delay so the expansion can finish.
    /// If the delay is too short, extraction later sees fewer chapters;
    /// nothing escalates.
    pub async fn await_settle(&self, delay: Duration) {
        tracing::debug!("Waiting {:?} for description to settle", delay);
        tokio::time::sleep(delay).await;
    }

    /// Phase three: read the page into a [`PageCapture`].
    ///
    /// A page without a video element is the one hard failure here; it
    /// surfaces as [`Error::Snapshot`] with the page's own message.
    pub async fn snapshot(&self) -> Result<PageCapture> {
        let raw: RawSnapshot = self.evaluate(SNAPSHOT_JS).await?;

        if let Some(message) = raw.error {
            return Err(Error::Snapshot(message));
        }

        tracing::info!(
            "Captured \"{}\" at {}s ({} markers)",
            raw.title,
            raw.position_seconds,
            raw.markers.len()
        );

        Ok(PageCapture {
            url: raw.url,
            title: raw.title,
            position_seconds: raw.position_seconds,
            description: raw.description,
            markers: raw.markers,
            captured_at: Some(chrono::Utc::now().to_rfc3339()),
        })
    }

    /// Detach from Chrome, leaving the browser running.
    pub fn close(self) {
        self.handler_task.abort();
    }

    async fn evaluate<T: serde::de::DeserializeOwned>(&self, expression: &str) -> Result<T> {
        let params = EvaluateParams::builder()
            .expression(expression)
            .return_by_value(true)
            .build()
            .map_err(Error::Cdp)?;

        let result = self.page.evaluate(params).await?;
        Ok(result.into_value()?)
    }
}
