//! Per-user, per-version location of provisioned runtimes.
//!
//! A provisioned runtime lives at `<data root>/<app name>/<version tag>`.
//! There is no metadata file: the directory existing is the whole record.

use std::path::{Path, PathBuf};

use super::candidate::{RuntimeCandidate, RuntimeOrigin};
use super::platform::Platform;
use crate::error::{LauncherError, Result};

/// Where one pinned runtime version is (or would be) provisioned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvisionRecord {
    cache_root: PathBuf,
    version_tag: String,
    platform: Platform,
}

impl ProvisionRecord {
    pub fn cache_root(&self) -> &Path {
        &self.cache_root
    }

    pub fn version_tag(&self) -> &str {
        &self.version_tag
    }

    /// Directory appended to the search path when this record is used.
    pub fn executable_dir(&self) -> PathBuf {
        self.platform.provisioned_bin_dir(&self.cache_root)
    }

    /// Expected runtime executable inside the record.
    pub fn runtime_path(&self, base_name: &str) -> PathBuf {
        self.platform
            .provisioned_executable(&self.cache_root, base_name)
    }

    /// Candidate pointing into this record.
    pub fn candidate(&self, base_name: &str) -> RuntimeCandidate {
        RuntimeCandidate::new(self.runtime_path(base_name), RuntimeOrigin::Provisioned)
    }
}

/// Computes deterministic store locations.
#[derive(Debug, Clone)]
pub struct ProvisionStore {
    app_root: PathBuf,
    platform: Platform,
}

impl ProvisionStore {
    /// Store rooted at `<data_root>/<app_name>`.
    pub fn new(data_root: &Path, app_name: &str, platform: Platform) -> Self {
        Self {
            app_root: data_root.join(app_name),
            platform,
        }
    }

    /// Store under the platform's per-user data directory.
    ///
    /// No vendor or author level is inserted between the data root and
    /// the app name.
    pub fn user_default(app_name: &str, platform: Platform) -> Result<Self> {
        let data_root = dirs::data_local_dir().ok_or(LauncherError::NoDataDirectory)?;
        Ok(Self::new(&data_root, app_name, platform))
    }

    pub fn app_root(&self) -> &Path {
        &self.app_root
    }

    /// The record for a version tag. Pure; touches nothing on disk.
    pub fn location_for(&self, version_tag: &str) -> ProvisionRecord {
        ProvisionRecord {
            cache_root: self.app_root.join(version_tag),
            version_tag: version_tag.to_string(),
            platform: self.platform,
        }
    }

    /// Whether a record's directory is present on disk.
    pub fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}
