//! Injected view of the process environment.
//!
//! The launcher reads its environment exactly once, at startup, into a
//! [`ProcessEnv`]. Every component that needs a variable receives this value
//! explicitly, so consent and environment propagation can be exercised in
//! tests without touching the real process state.
//!
//! # Example
//!
//! ```
//! use myst_launcher::config::ProcessEnv;
//!
//! let mut env = ProcessEnv::from_pairs([("HOME", "/home/me"), ("PATH", "/usr/bin")]);
//! env.set("MYST_LANG", "PYTHON");
//!
//! assert_eq!(env.get_string("MYST_LANG").as_deref(), Some("PYTHON"));
//! assert_eq!(env.len(), 3);
//! ```

use std::collections::BTreeMap;
use std::ffi::{OsStr, OsString};

/// Name of the executable search-path variable.
pub const SEARCH_PATH_VAR: &str = "PATH";

/// Search path used when the variable is unset.
#[cfg(windows)]
pub const DEFAULT_SEARCH_PATH: &str = ".;C:\\bin";

/// Search path used when the variable is unset.
#[cfg(not(windows))]
pub const DEFAULT_SEARCH_PATH: &str = "/bin:/usr/bin";

/// An owned snapshot of environment variables.
///
/// Keys compare case-insensitively on Windows, where `Path` and `PATH`
/// name the same variable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessEnv {
    vars: BTreeMap<OsString, OsString>,
}

impl ProcessEnv {
    /// Create an empty environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot the current process environment.
    pub fn from_process() -> Self {
        let mut env = Self::new();
        for (key, value) in std::env::vars_os() {
            env.set(key, value);
        }
        env
    }

    /// Build an environment from key/value pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<OsString>,
        V: Into<OsString>,
    {
        let mut env = Self::new();
        for (key, value) in pairs {
            env.set(key, value);
        }
        env
    }

    /// Look up a variable.
    pub fn get(&self, key: &str) -> Option<&OsStr> {
        self.find_key(key)
            .and_then(|k| self.vars.get(k))
            .map(OsString::as_os_str)
    }

    /// Look up a variable as UTF-8, lossily.
    pub fn get_string(&self, key: &str) -> Option<String> {
        self.get(key).map(|v| v.to_string_lossy().into_owned())
    }

    /// Set a variable, replacing any existing entry with the same name.
    pub fn set(&mut self, key: impl Into<OsString>, value: impl Into<OsString>) {
        let key = key.into();
        if let Some(existing) = key.to_str().and_then(|k| self.find_key(k)).cloned() {
            self.vars.remove(&existing);
        }
        self.vars.insert(key, value.into());
    }

    /// The inherited search path, or the platform default when unset.
    pub fn search_path(&self) -> OsString {
        self.get(SEARCH_PATH_VAR)
            .map(OsStr::to_os_string)
            .unwrap_or_else(|| OsString::from(DEFAULT_SEARCH_PATH))
    }

    /// Iterate over all variables in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&OsStr, &OsStr)> {
        self.vars.iter().map(|(k, v)| (k.as_os_str(), v.as_os_str()))
    }

    /// Number of variables.
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Check if there are no variables.
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    fn find_key(&self, key: &str) -> Option<&OsString> {
        if cfg!(windows) {
            self.vars
                .keys()
                .find(|k| k.to_str().is_some_and(|k| k.eq_ignore_ascii_case(key)))
        } else {
            self.vars.get_key_value(OsStr::new(key)).map(|(k, _)| k)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_replaces_existing_value() {
        let mut env = ProcessEnv::from_pairs([("KEY", "old")]);
        env.set("KEY", "new");
        assert_eq!(env.get_string("KEY").as_deref(), Some("new"));
        assert_eq!(env.len(), 1);
    }

    #[test]
    fn get_missing_returns_none() {
        let env = ProcessEnv::new();
        assert!(env.get("MISSING").is_none());
        assert!(env.is_empty());
    }

    #[test]
    fn search_path_reads_path_variable() {
        let env = ProcessEnv::from_pairs([("PATH", "/opt/bin")]);
        assert_eq!(env.search_path(), OsString::from("/opt/bin"));
    }

    #[test]
    fn search_path_falls_back_to_platform_default() {
        let env = ProcessEnv::new();
        assert_eq!(env.search_path(), OsString::from(DEFAULT_SEARCH_PATH));
    }

    #[test]
    fn iter_is_sorted_by_key() {
        let env = ProcessEnv::from_pairs([("B", "2"), ("A", "1")]);
        let keys: Vec<_> = env.iter().map(|(k, _)| k.to_os_string()).collect();
        assert_eq!(keys, vec![OsString::from("A"), OsString::from("B")]);
    }

    #[test]
    fn from_process_contains_current_variables() {
        let env = ProcessEnv::from_process();
        assert_eq!(env.len(), std::env::vars_os().count());
    }

    #[cfg(windows)]
    #[test]
    fn keys_are_case_insensitive_on_windows() {
        let mut env = ProcessEnv::from_pairs([("Path", "C:\\old")]);
        env.set("PATH", "C:\\new");
        assert_eq!(env.len(), 1);
        assert_eq!(env.get_string("path").as_deref(), Some("C:\\new"));
    }

    #[cfg(not(windows))]
    #[test]
    fn keys_are_case_sensitive_elsewhere() {
        let mut env = ProcessEnv::from_pairs([("Path", "/old")]);
        env.set("PATH", "/new");
        assert_eq!(env.len(), 2);
        assert_eq!(env.get_string("Path").as_deref(), Some("/old"));
    }
}
