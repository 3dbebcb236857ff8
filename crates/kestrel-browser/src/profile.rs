use std::path::{Path, PathBuf};

use crate::Result;

/// Chrome profile directories. Worker profiles persist so logins and
/// cookies survive between runs without colliding across workers;
/// temporary profiles are wiped on drop.
pub struct ProfileManager {
    path: PathBuf,
    is_temporary: bool,
}

impl ProfileManager {
    /// Create a throwaway profile that is deleted on drop.
    pub fn temporary() -> Result<Self> {
        let temp_dir = tempfile::tempdir()?;
        let path = temp_dir.keep();

        Ok(Self {
            path,
            is_temporary: true,
        })
    }

    /// Persistent per-worker profile under `root`, created on demand.
    pub fn worker(root: &Path, index: usize) -> Result<Self> {
        let path = root.join(format!("worker-{}", index));
        if !path.exists() {
            std::fs::create_dir_all(&path)?;
        }

        Ok(Self {
            path,
            is_temporary: false,
        })
    }

    /// Get the profile directory path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Check if this is a temporary profile.
    pub fn is_temporary(&self) -> bool {
        self.is_temporary
    }
}

impl Drop for ProfileManager {
    fn drop(&mut self) {
        if self.is_temporary && self.path.exists() {
            let _ = std::fs::remove_dir_all(&self.path);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temp_profile_creates_and_cleans_up() {
        let profile = ProfileManager::temporary().unwrap();
        let path = profile.path().to_path_buf();

        assert!(path.exists());
        assert!(profile.is_temporary());

        drop(profile);
        assert!(!path.exists());
    }

    #[test]
    fn test_worker_profile_is_stable_across_sessions() {
        let root = tempfile::tempdir().unwrap();

        let profile = ProfileManager::worker(root.path(), 2).unwrap();
        let path = profile.path().to_path_buf();

        assert!(path.ends_with("worker-2"));
        assert!(path.exists());

        drop(profile);
        assert!(path.exists());

        // Reopening points at the same directory.
        let reopened = ProfileManager::worker(root.path(), 2).unwrap();
        assert_eq!(reopened.path(), path);
    }

    #[test]
    fn test_worker_profiles_do_not_collide() {
        let root = tempfile::tempdir().unwrap();

        let a = ProfileManager::worker(root.path(), 0).unwrap();
        let b = ProfileManager::worker(root.path(), 1).unwrap();

        assert_ne!(a.path(), b.path());
    }
}
