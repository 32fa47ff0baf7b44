use crate::Result;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Chrome profile directory: either a throwaway temp dir that disappears
/// on drop, or a persistent one so logins survive between captures.
pub struct ProfileManager {
    path: PathBuf,
    // Held so the directory is removed when the manager drops.
    _temp: Option<TempDir>,
}

impl ProfileManager {
    /// Create a temporary profile, deleted when this manager drops.
    pub fn temporary() -> Result<Self> {
        let temp = tempfile::tempdir()?;
        Ok(Self {
            path: temp.path().to_path_buf(),
            _temp: Some(temp),
        })
    }

    /// Create or reuse a persistent profile at the given path.
    pub fn persistent(path: PathBuf) -> Result<Self> {
        if !path.exists() {
            std::fs::create_dir_all(&path)?;
        }

        Ok(Self { path, _temp: None })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_temporary(&self) -> bool {
        self._temp.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temporary_profile_cleans_up() {
        let path;
        {
            let profile = ProfileManager::temporary().unwrap();
            assert!(profile.is_temporary());
            path = profile.path().to_path_buf();
            assert!(path.exists());
        }
        assert!(!path.exists());
    }

    #[test]
    fn test_persistent_profile_creates_and_keeps() {
        let base = tempfile::tempdir().unwrap();
        let profile_path = base.path().join("profiles").join("work");

        {
            let profile = ProfileManager::persistent(profile_path.clone()).unwrap();
            assert!(!profile.is_temporary());
            assert!(profile.path().exists());
        }
        assert!(profile_path.exists());
    }
}
