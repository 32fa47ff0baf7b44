use crate::{Error, Result};
use std::path::{Path, PathBuf};

/// Names `which` tries on PATH, in preference order.
const PATH_CANDIDATES: &[&str] = &["google-chrome", "chromium", "chromium-browser", "chrome"];

/// Locates a Chrome or Chromium binary on the system.
pub struct ChromeFinder {
    custom_path: Option<PathBuf>,
}

impl ChromeFinder {
    pub fn new(custom_path: Option<PathBuf>) -> Self {
        Self { custom_path }
    }

    /// Find the browser binary: custom path first, then PATH lookup, then
    /// platform install locations.
    pub fn find(&self) -> Result<PathBuf> {
        if let Some(ref path) = self.custom_path {
            return validate(path);
        }

        for name in PATH_CANDIDATES {
            if let Ok(path) = which::which(name) {
                tracing::debug!("Found {} on PATH at {}", name, path.display());
                return Ok(path);
            }
        }

        for path in Self::install_paths() {
            if let Ok(valid) = validate(&path) {
                return Ok(valid);
            }
        }

        Err(Error::Browser(
            "Chrome not found on PATH or in default install locations. \
             Use --chrome-path to specify one."
                .to_string(),
        ))
    }

    fn install_paths() -> Vec<PathBuf> {
        #[cfg(target_os = "macos")]
        return vec![
            PathBuf::from("/Applications/Google Chrome.app/Contents/MacOS/Google Chrome"),
            PathBuf::from("/Applications/Chromium.app/Contents/MacOS/Chromium"),
        ];

        #[cfg(target_os = "linux")]
        return vec![
            PathBuf::from("/usr/bin/google-chrome"),
            PathBuf::from("/usr/bin/chromium"),
            PathBuf::from("/usr/bin/chromium-browser"),
        ];

        #[cfg(target_os = "windows")]
        return vec![
            PathBuf::from(r"C:\Program Files\Google\Chrome\Application\chrome.exe"),
            PathBuf::from(r"C:\Program Files (x86)\Google\Chrome\Application\chrome.exe"),
        ];

        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        return vec![];
    }
}

fn validate(path: &Path) -> Result<PathBuf> {
    if !path.exists() {
        return Err(Error::Browser(format!(
            "Chrome not found at: {}",
            path.display()
        )));
    }

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let metadata = std::fs::metadata(path)?;
        if metadata.permissions().mode() & 0o111 == 0 {
            return Err(Error::Browser(format!(
                "Chrome binary not executable: {}",
                path.display()
            )));
        }
    }

    Ok(path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_custom_path_wins() {
        let temp = tempfile::NamedTempFile::new().unwrap();
        let path = temp.path();

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755)).unwrap();
        }

        let finder = ChromeFinder::new(Some(path.to_path_buf()));
        assert_eq!(finder.find().unwrap(), path);
    }

    #[test]
    fn test_missing_custom_path_fails() {
        let finder = ChromeFinder::new(Some(PathBuf::from("/nonexistent/chrome")));
        let result = finder.find();

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("not found"));
    }
}
