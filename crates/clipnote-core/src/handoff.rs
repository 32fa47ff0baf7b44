use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Everything `obsidian://new` leaves unescaped beyond alphanumerics.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// A fully prepared note handoff: the destination file, the vault it
/// belongs to, and the rendered content. This core only builds the URL;
/// opening it is the caller's business.
#[derive(Debug, Clone)]
pub struct HandoffRequest {
    /// Folder path inside the vault; empty means the vault root.
    pub folder: String,
    /// Vault name; `None` or blank targets the default vault.
    pub vault: Option<String>,
    /// Sanitized note filename, including the `.md` extension.
    pub filename: String,
    /// Rendered note body.
    pub content: String,
}

impl HandoffRequest {
    /// Build the `obsidian://new` URL for this handoff.
    pub fn to_url(&self) -> String {
        let mut folder = self.folder.clone();
        if !folder.is_empty() && !folder.ends_with('/') {
            folder.push('/');
        }

        let file = format!("{}{}", folder, self.filename);
        let mut url = format!("obsidian://new?file={}", encode(&file));

        if let Some(vault) = &self.vault {
            if !vault.trim().is_empty() {
                url.push_str(&format!("&vault={}", encode(vault)));
            }
        }

        url.push_str(&format!("&content={}", encode(&self.content)));

        tracing::debug!("Built handoff URL for {}", file);
        url
    }
}

fn encode(text: &str) -> String {
    utf8_percent_encode(text, COMPONENT).to_string()
}
