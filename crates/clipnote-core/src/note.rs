use crate::chapters::ChapterEntry;
use lazy_static::lazy_static;
use regex::{Captures, Regex};
use url::Url;

/// Everything the renderer needs to produce one note. Immutable; built
/// once per clip and consumed by [`render`].
#[derive(Debug, Clone)]
pub struct NoteData {
    pub url: String,
    pub title: String,
    pub tags: String,
    pub timestamp_seconds: u32,
    pub chapters: Vec<ChapterEntry>,
}

lazy_static! {
    static ref TOKEN: Regex = Regex::new(r"\{\{(\w+)\}\}").unwrap();
}

/// Render a note from a template and clip data.
///
/// Every `{{url}}`, `{{title}}`, `{{tags}}` and `{{timestamp}}` token is
/// replaced with the corresponding field; unknown tokens stay verbatim.
/// When the clip carries chapters, a `## Timestamps` table is appended
/// after substitution, one linked row per chapter in extraction order.
/// Pure: identical inputs always produce identical output.
pub fn render(template: &str, data: &NoteData) -> String {
    let mut content = TOKEN
        .replace_all(template, |caps: &Captures| match &caps[1] {
            "url" => data.url.clone(),
            "title" => data.title.clone(),
            "tags" => data.tags.clone(),
            "timestamp" => data.timestamp_seconds.to_string(),
            _ => caps[0].to_string(),
        })
        .into_owned();

    if !data.chapters.is_empty() {
        content.push_str(&chapters_table(&data.url, &data.chapters));
    }

    content
}

fn chapters_table(url: &str, chapters: &[ChapterEntry]) -> String {
    let mut table = String::from("\n\n## Timestamps\n\n| Time | Chapter |\n|------|--------|\n");

    for entry in chapters {
        let link = offset_link(url, entry.offset_seconds);
        table.push_str(&format!(
            "| [{}]({}) | {} |\n",
            entry.time_text, link, entry.label
        ));
    }

    table
}

/// Rewrite a watch URL so its `t` query parameter points at the given
/// offset. Any existing `t` parameter is replaced; other parameters are
/// kept in order.
pub fn offset_link(url: &str, offset_seconds: u32) -> String {
    match Url::parse(url) {
        Ok(mut parsed) => {
            let kept: Vec<(String, String)> = parsed
                .query_pairs()
                .filter(|(key, _)| key != "t")
                .map(|(key, value)| (key.into_owned(), value.into_owned()))
                .collect();

            {
                let mut pairs = parsed.query_pairs_mut();
                pairs.clear();
                pairs.extend_pairs(kept);
                pairs.append_pair("t", &offset_seconds.to_string());
            }

            parsed.to_string()
        }
        Err(e) => {
            tracing::debug!("Failed to parse capture URL {}: {}", url, e);
            format!("{}&t={}", url, offset_seconds)
        }
    }
}
