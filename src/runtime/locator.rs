//! Search-path lookup for an already-installed runtime.
//!
//! The locator walks the inherited search path itself rather than shelling
//! out to `which`: `which` behavior varies across systems and is sometimes a
//! shell builtin with inconsistent error handling.
//!
//! # Example
//!
//! ```no_run
//! use std::ffi::OsStr;
//! use myst_launcher::runtime::{Platform, RuntimeLocator, SearchPath};
//!
//! let locator = RuntimeLocator::new("node", Platform::current());
//! let path = SearchPath::parse(OsStr::new("/usr/local/bin:/usr/bin"));
//! if let Some(candidate) = locator.locate(&path) {
//!     println!("found {}", candidate.path().display());
//! }
//! ```

use std::path::{Path, PathBuf};

use super::candidate::{RuntimeCandidate, RuntimeOrigin, SearchPath};
use super::platform::Platform;

/// Check whether a file has executable permission bits set.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// On Windows, executability is determined by file extension, not permission bits.
#[cfg(not(unix))]
pub fn is_executable(_path: &Path) -> bool {
    true
}

/// Resolve a tool's binary path by iterating over search-path entries.
///
/// Returns the first match that exists and is executable.
pub fn resolve_tool_path(tool: &str, path_entries: &[PathBuf]) -> Option<PathBuf> {
    for dir in path_entries {
        let candidate = dir.join(tool);
        if candidate.is_file() && is_executable(&candidate) {
            return Some(candidate);
        }
    }
    None
}

/// Finds a pre-installed runtime on the search path.
#[derive(Debug, Clone)]
pub struct RuntimeLocator {
    base_name: String,
    platform: Platform,
}

impl RuntimeLocator {
    pub fn new(base_name: impl Into<String>, platform: Platform) -> Self {
        Self {
            base_name: base_name.into(),
            platform,
        }
    }

    /// Return the first matching executable, in search-path order.
    ///
    /// Within one directory, platform names are tried in preference order.
    pub fn locate(&self, search_path: &SearchPath) -> Option<RuntimeCandidate> {
        let names = self.platform.executable_names(&self.base_name);

        for dir in search_path.dirs() {
            let entry = std::slice::from_ref(dir);
            if let Some(found) = names.iter().find_map(|n| resolve_tool_path(n, entry)) {
                tracing::debug!("Found installed {} at {}", self.base_name, found.display());
                return Some(RuntimeCandidate::new(
                    absolute(found),
                    RuntimeOrigin::PreInstalled,
                ));
            }
        }

        tracing::debug!(
            "No installed {} on a search path of {} entries",
            self.base_name,
            search_path.dirs().len()
        );
        None
    }
}

/// Anchor relative search-path hits (such as `.`) to the working directory.
fn absolute(path: PathBuf) -> PathBuf {
    std::path::absolute(&path).unwrap_or(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    /// Create a fake binary at a path (creates parent dirs as needed).
    fn create_fake_binary(path: &Path) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, "#!/bin/sh\n").unwrap();
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(path, fs::Permissions::from_mode(0o755)).unwrap();
        }
    }

    /// Create a non-executable file at a path.
    #[cfg(unix)]
    fn create_non_executable_file(path: &Path) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, "not executable").unwrap();
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o644)).unwrap();
    }

    #[test]
    fn resolve_tool_path_finds_first_match() {
        let temp = TempDir::new().unwrap();
        let dir_a = temp.path().join("a");
        let dir_b = temp.path().join("b");
        create_fake_binary(&dir_a.join("node"));
        create_fake_binary(&dir_b.join("node"));

        let result = resolve_tool_path("node", &[dir_a.clone(), dir_b.clone()]);
        assert_eq!(result, Some(dir_a.join("node")));
    }

    #[test]
    fn resolve_tool_path_returns_none_when_not_found() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("empty");
        fs::create_dir_all(&dir).unwrap();

        assert!(resolve_tool_path("node", &[dir]).is_none());
    }

    #[cfg(unix)]
    #[test]
    fn resolve_tool_path_skips_non_executable() {
        let temp = TempDir::new().unwrap();
        let dir_a = temp.path().join("a");
        let dir_b = temp.path().join("b");
        create_non_executable_file(&dir_a.join("node"));
        create_fake_binary(&dir_b.join("node"));

        let result = resolve_tool_path("node", &[dir_a, dir_b.clone()]);
        assert_eq!(result, Some(dir_b.join("node")));
    }

    #[test]
    fn resolve_tool_path_skips_directories() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("a").join("node")).unwrap();

        assert!(resolve_tool_path("node", &[temp.path().join("a")]).is_none());
    }

    #[cfg(unix)]
    #[test]
    fn is_executable_checks_mode_bits() {
        let temp = TempDir::new().unwrap();
        let exe = temp.path().join("exe");
        let plain = temp.path().join("plain");
        create_fake_binary(&exe);
        create_non_executable_file(&plain);
        assert!(is_executable(&exe));
        assert!(!is_executable(&plain));
    }

    #[test]
    fn is_executable_returns_false_for_nonexistent_file() {
        if cfg!(unix) {
            assert!(!is_executable(Path::new("/nonexistent/path/to/file")));
        }
    }

    #[test]
    fn locate_returns_preinstalled_candidate() {
        let temp = TempDir::new().unwrap();
        let bin = temp.path().join("bin");
        create_fake_binary(&bin.join("node"));

        let locator = RuntimeLocator::new("node", Platform::Posix);
        let found = locator
            .locate(&SearchPath::from_dirs(vec![bin.clone()]))
            .unwrap();

        assert_eq!(found.path(), bin.join("node"));
        assert_eq!(found.origin(), RuntimeOrigin::PreInstalled);
    }

    #[test]
    fn locate_honors_search_path_order() {
        let temp = TempDir::new().unwrap();
        let first = temp.path().join("first");
        let second = temp.path().join("second");
        create_fake_binary(&first.join("node"));
        create_fake_binary(&second.join("node"));

        let locator = RuntimeLocator::new("node", Platform::Posix);
        let found = locator
            .locate(&SearchPath::from_dirs(vec![second.clone(), first]))
            .unwrap();

        assert_eq!(found.path(), second.join("node"));
    }

    #[test]
    fn locate_returns_none_on_miss() {
        let temp = TempDir::new().unwrap();
        let locator = RuntimeLocator::new("node", Platform::Posix);
        assert!(locator
            .locate(&SearchPath::from_dirs(vec![temp.path().to_path_buf()]))
            .is_none());
    }

    #[test]
    fn windows_lookup_ignores_suffixless_match() {
        let temp = TempDir::new().unwrap();
        let shim_dir = temp.path().join("shims");
        let real_dir = temp.path().join("nodejs");
        create_fake_binary(&shim_dir.join("node"));
        create_fake_binary(&real_dir.join("node.exe"));

        let locator = RuntimeLocator::new("node", Platform::Windows);
        let found = locator
            .locate(&SearchPath::from_dirs(vec![shim_dir, real_dir.clone()]))
            .unwrap();

        assert_eq!(found.path(), real_dir.join("node.exe"));
    }

    #[test]
    fn windows_lookup_prefers_exe_in_same_directory() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("nodejs");
        create_fake_binary(&dir.join("node"));
        create_fake_binary(&dir.join("node.exe"));

        let locator = RuntimeLocator::new("node", Platform::Windows);
        let found = locator
            .locate(&SearchPath::from_dirs(vec![dir.clone()]))
            .unwrap();

        assert_eq!(found.path(), dir.join("node.exe"));
    }
}
