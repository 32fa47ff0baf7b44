use crate::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default tags applied to new notes.
pub const DEFAULT_TAGS: &str = "YouTube";

/// Default prefix for derived note titles.
pub const DEFAULT_TITLE_PREFIX: &str = "Video. ";

/// Default note template: front matter linking back to the clip.
pub const DEFAULT_NOTE_TEMPLATE: &str = "---\nmedia_link: {{url}}\ntags: {{tags}}\n---";

const DEFAULT_HANDOFF_DELAY_MS: u64 = 2500;

/// One Obsidian vault destination. An empty name targets whatever vault
/// Obsidian considers the default.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Vault {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "folderPath", default)]
    pub folder_path: String,
    #[serde(rename = "isDefault", default)]
    pub is_default: bool,
}

/// User settings, stored as a JSON document.
///
/// Every field has a documented default, so a missing file or a partial
/// document always loads. The wire names match the original extension's
/// storage schema, including the legacy flat single-vault form, which is
/// migrated on load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    // Deliberately defaults to empty, not to the default vault: an empty
    // list after parsing is the signal to try the legacy migration.
    #[serde(default)]
    pub vaults: Vec<Vault>,
    #[serde(default = "default_tags")]
    pub tags: String,
    #[serde(rename = "titlePrefix", default = "default_title_prefix")]
    pub title_prefix: String,
    #[serde(rename = "noteTemplate", default = "default_note_template")]
    pub note_template: String,
    /// Kept for schema compatibility; the CLI prints the handoff URL
    /// rather than navigating, so nothing sleeps on this.
    #[serde(rename = "closeTabDelay", default = "default_handoff_delay")]
    pub handoff_delay_ms: u64,
}

fn default_tags() -> String {
    DEFAULT_TAGS.to_string()
}

fn default_title_prefix() -> String {
    DEFAULT_TITLE_PREFIX.to_string()
}

fn default_note_template() -> String {
    DEFAULT_NOTE_TEMPLATE.to_string()
}

fn default_handoff_delay() -> u64 {
    DEFAULT_HANDOFF_DELAY_MS
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            vaults: vec![Vault {
                name: String::new(),
                folder_path: String::new(),
                is_default: true,
            }],
            tags: DEFAULT_TAGS.to_string(),
            title_prefix: DEFAULT_TITLE_PREFIX.to_string(),
            note_template: DEFAULT_NOTE_TEMPLATE.to_string(),
            handoff_delay_ms: DEFAULT_HANDOFF_DELAY_MS,
        }
    }
}

impl Settings {
    /// Load settings from a file; a missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("No settings file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let settings = Self::from_str(&content)?;

        tracing::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Parse settings from a JSON string, migrating the legacy flat
    /// `{vaultName, folderPath}` form into the vaults list.
    pub fn from_str(content: &str) -> Result<Self> {
        let document: serde_json::Value = serde_json::from_str(content)?;
        let mut settings: Settings = serde_json::from_value(document.clone())?;

        if settings.vaults.is_empty() {
            settings.vaults = vec![migrate_legacy_vault(&document)];
            tracing::debug!("Migrated legacy single-vault settings");
        }

        if !settings.vaults.iter().any(|vault| vault.is_default) {
            settings.vaults[0].is_default = true;
        }

        Ok(settings)
    }

    /// Write settings as pretty JSON, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;

        tracing::info!("Saved settings to {}", path.display());
        Ok(())
    }

    /// Resolve the destination vault: an explicit index wins, then the
    /// default-flagged vault, then the first. Falls back to the default
    /// Obsidian vault when the list is somehow empty.
    pub fn selected_vault(&self, index: Option<usize>) -> Vault {
        if let Some(index) = index {
            if let Some(vault) = self.vaults.get(index) {
                return vault.clone();
            }
            tracing::warn!("Vault index {} out of range, using default vault", index);
        }

        self.vaults
            .iter()
            .find(|vault| vault.is_default)
            .or_else(|| self.vaults.first())
            .cloned()
            .unwrap_or_default()
    }
}

fn migrate_legacy_vault(document: &serde_json::Value) -> Vault {
    let field = |key: &str| {
        document
            .get(key)
            .and_then(|value| value.as_str())
            .unwrap_or_default()
            .to_string()
    };

    Vault {
        name: field("vaultName"),
        folder_path: field("folderPath"),
        is_default: true,
    }
}
