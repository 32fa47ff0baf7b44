use anyhow::Result;
use clap::Subcommand;
use clipnote_core::settings::Settings;
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the effective settings as JSON
    Show,
    /// Write a default settings file
    Init,
    /// Print the settings file location
    Path,
}

pub fn execute(action: ConfigAction, config: Option<PathBuf>) -> Result<()> {
    let path = crate::config_path(config)?;

    match action {
        ConfigAction::Show => {
            let settings = Settings::load(&path)?;
            println!("{}", serde_json::to_string_pretty(&settings)?);
        }
        ConfigAction::Init => {
            if path.exists() {
                anyhow::bail!("Settings file already exists at {}", path.display());
            }
            Settings::default().save(&path)?;
            println!("Wrote default settings to {}", path.display());
        }
        ConfigAction::Path => {
            println!("{}", path.display());
        }
    }

    Ok(())
}
