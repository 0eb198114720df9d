//! Resolved runtime candidates and the search path handed to them.

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

use crate::error::{LauncherError, Result};

/// Where a runtime candidate came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeOrigin {
    /// Found on the inherited search path.
    PreInstalled,
    /// Lives in the launcher's private per-user store.
    Provisioned,
}

/// A runtime executable the launcher may hand off to.
///
/// The path pointed at an executable file when the candidate was built;
/// the version gate re-checks it by actually running it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeCandidate {
    path: PathBuf,
    origin: RuntimeOrigin,
}

impl RuntimeCandidate {
    pub fn new(path: impl Into<PathBuf>, origin: RuntimeOrigin) -> Self {
        Self {
            path: path.into(),
            origin,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn origin(&self) -> RuntimeOrigin {
        self.origin
    }
}

/// An ordered list of directories consulted for executables.
///
/// Parsed and rendered with the host platform's separator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchPath {
    dirs: Vec<PathBuf>,
}

impl SearchPath {
    /// Parse a search-path string such as the value of `PATH`.
    pub fn parse(raw: &OsStr) -> Self {
        Self {
            dirs: std::env::split_paths(raw).collect(),
        }
    }

    pub fn from_dirs(dirs: Vec<PathBuf>) -> Self {
        Self { dirs }
    }

    pub fn dirs(&self) -> &[PathBuf] {
        &self.dirs
    }

    /// Add a directory at the lowest priority.
    ///
    /// Appending keeps every inherited directory ahead of the new one.
    pub fn append(&mut self, dir: impl Into<PathBuf>) {
        self.dirs.push(dir.into());
    }

    /// Render back into a single variable value.
    pub fn to_os_string(&self) -> Result<OsString> {
        std::env::join_paths(&self.dirs).map_err(|e| LauncherError::InvalidSearchPath {
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candidate_reports_origin() {
        let pre = RuntimeCandidate::new("/usr/bin/node", RuntimeOrigin::PreInstalled);
        let prov = RuntimeCandidate::new("/data/bin/node", RuntimeOrigin::Provisioned);
        assert_eq!(pre.origin(), RuntimeOrigin::PreInstalled);
        assert_eq!(prov.origin(), RuntimeOrigin::Provisioned);
        assert_eq!(pre.path(), Path::new("/usr/bin/node"));
    }

    #[cfg(unix)]
    #[test]
    fn parse_splits_on_colon() {
        let path = SearchPath::parse(OsStr::new("/usr/local/bin:/usr/bin"));
        assert_eq!(
            path.dirs(),
            &[PathBuf::from("/usr/local/bin"), PathBuf::from("/usr/bin")]
        );
    }

    #[cfg(unix)]
    #[test]
    fn append_goes_last() {
        let mut path = SearchPath::parse(OsStr::new("/usr/bin"));
        path.append("/data/myst/18.0.0/bin");
        assert_eq!(
            path.to_os_string().unwrap(),
            OsString::from("/usr/bin:/data/myst/18.0.0/bin")
        );
        assert_eq!(path.dirs().last(), Some(&PathBuf::from("/data/myst/18.0.0/bin")));
    }

    #[cfg(unix)]
    #[test]
    fn directory_containing_separator_is_rejected() {
        let path = SearchPath::from_dirs(vec![PathBuf::from("/weird:dir")]);
        assert!(matches!(
            path.to_os_string(),
            Err(LauncherError::InvalidSearchPath { .. })
        ));
    }

    #[test]
    fn round_trips_host_format() {
        let raw = std::env::join_paths(["a", "b"]).unwrap();
        let path = SearchPath::parse(&raw);
        assert_eq!(path.to_os_string().unwrap(), raw);
    }
}
