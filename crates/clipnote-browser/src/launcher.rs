use crate::{Error, Result};
use std::path::PathBuf;
use std::process::{Child, Command, Stdio};

/// Spawns the Chrome process that will host the watch page.
pub struct ChromeLauncher {
    chrome_path: PathBuf,
    profile_path: PathBuf,
    watch_url: Option<String>,
    debugging_port: u16,
}

impl ChromeLauncher {
    pub fn new(chrome_path: PathBuf, profile_path: PathBuf, watch_url: Option<String>) -> Self {
        Self {
            chrome_path,
            profile_path,
            watch_url,
            debugging_port: 9222,
        }
    }

    /// Launch Chrome with remote debugging enabled.
    pub fn launch(&self) -> Result<Child> {
        let args = self.build_args();

        Command::new(&self.chrome_path)
            .args(&args)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| Error::Browser(format!("Failed to launch Chrome: {}", e)))
    }

    fn build_args(&self) -> Vec<String> {
        let mut args = vec![
            format!("--remote-debugging-port={}", self.debugging_port),
            "--no-first-run".to_string(),
            "--no-default-browser-check".to_string(),
            // Playback must be able to start so there is a position to clip.
            "--autoplay-policy=no-user-gesture-required".to_string(),
            format!("--user-data-dir={}", self.profile_path.display()),
        ];

        if let Some(url) = &self.watch_url {
            let url = if !url.starts_with("http://") && !url.starts_with("https://") {
                format!("https://{}", url)
            } else {
                url.clone()
            };
            args.push(url);
        } else {
            args.push("about:blank".to_string());
        }

        args
    }

    pub fn debugging_port(&self) -> u16 {
        self.debugging_port
    }
}
