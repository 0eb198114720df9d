//! Configuration file discovery and loading.
//!
//! The launcher reads at most one YAML file, chosen in this order:
//! 1. The file named by `MYST_LAUNCHER_CONFIG` (must exist)
//! 2. `<user config dir>/<app>/launcher.yml`, when present
//! 3. Built-in defaults
//!
//! `MYST_LAUNCHER_BUNDLE` then overrides the bundle path.

use crate::config::environment::ProcessEnv;
use crate::config::schema::LauncherConfig;
use crate::error::{LauncherError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Names a config file explicitly.
pub const CONFIG_PATH_VAR: &str = "MYST_LAUNCHER_CONFIG";

/// Overrides the bundle path.
pub const BUNDLE_PATH_VAR: &str = "MYST_LAUNCHER_BUNDLE";

const CONFIG_APP_DIR: &str = "myst";
const CONFIG_FILE_NAME: &str = "launcher.yml";

/// Where the launcher config came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Named by `MYST_LAUNCHER_CONFIG`.
    Explicit(PathBuf),
    /// Found in the user config directory.
    UserFile(PathBuf),
    /// No file; built-in defaults.
    Defaults,
}

impl ConfigSource {
    /// Pick the config source for this environment.
    ///
    /// `config_root` is the platform's per-user config directory.
    pub fn discover(env: &ProcessEnv, config_root: Option<&Path>) -> Self {
        if let Some(explicit) = env.get(CONFIG_PATH_VAR).filter(|v| !v.is_empty()) {
            return Self::Explicit(PathBuf::from(explicit));
        }

        config_root
            .map(|root| root.join(CONFIG_APP_DIR).join(CONFIG_FILE_NAME))
            .filter(|path| path.is_file())
            .map(Self::UserFile)
            .unwrap_or(Self::Defaults)
    }
}

/// Load the launcher config for the current user.
pub fn load_config(env: &ProcessEnv) -> Result<LauncherConfig> {
    load_config_from(env, dirs::config_dir().as_deref())
}

/// Load the launcher config with an explicit config root.
pub fn load_config_from(env: &ProcessEnv, config_root: Option<&Path>) -> Result<LauncherConfig> {
    let source = ConfigSource::discover(env, config_root);
    tracing::debug!("Loading launcher config from {:?}", source);

    let mut config = match &source {
        ConfigSource::Explicit(path) | ConfigSource::UserFile(path) => load_config_file(path)?,
        ConfigSource::Defaults => LauncherConfig::default(),
    };

    if let Some(bundle) = env.get(BUNDLE_PATH_VAR).filter(|v| !v.is_empty()) {
        config.bundle = Some(PathBuf::from(bundle));
    }

    config.validate()?;
    Ok(config)
}

/// Load a single config file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<LauncherConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            LauncherError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            LauncherError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into LauncherConfig.
///
/// An empty document yields the defaults.
pub fn parse_config(content: &str, source_path: &Path) -> Result<LauncherConfig> {
    if content.trim().is_empty() {
        return Ok(LauncherConfig::default());
    }

    serde_yaml::from_str(content).map_err(|e| LauncherError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_user_config(root: &Path, content: &str) -> PathBuf {
        let dir = root.join(CONFIG_APP_DIR);
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(CONFIG_FILE_NAME);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn discover_prefers_explicit_variable() {
        let temp = TempDir::new().unwrap();
        write_user_config(temp.path(), "app_name: user");
        let env = ProcessEnv::from_pairs([(CONFIG_PATH_VAR, "/elsewhere/launcher.yml")]);

        let source = ConfigSource::discover(&env, Some(temp.path()));
        assert_eq!(
            source,
            ConfigSource::Explicit(PathBuf::from("/elsewhere/launcher.yml"))
        );
    }

    #[test]
    fn discover_finds_user_file() {
        let temp = TempDir::new().unwrap();
        let path = write_user_config(temp.path(), "app_name: user");

        let source = ConfigSource::discover(&ProcessEnv::new(), Some(temp.path()));
        assert_eq!(source, ConfigSource::UserFile(path));
    }

    #[test]
    fn discover_falls_back_to_defaults() {
        let temp = TempDir::new().unwrap();
        let source = ConfigSource::discover(&ProcessEnv::new(), Some(temp.path()));
        assert_eq!(source, ConfigSource::Defaults);

        let source = ConfigSource::discover(&ProcessEnv::new(), None);
        assert_eq!(source, ConfigSource::Defaults);
    }

    #[test]
    fn load_without_file_returns_defaults() {
        let temp = TempDir::new().unwrap();
        let config = load_config_from(&ProcessEnv::new(), Some(temp.path())).unwrap();
        assert_eq!(config, LauncherConfig::default());
    }

    #[test]
    fn load_user_file_overrides_named_fields() {
        let temp = TempDir::new().unwrap();
        write_user_config(
            temp.path(),
            "runtime:\n  allowed_majors: [20, 22]\nconsent_variable: ALLOW_IT\n",
        );

        let config = load_config_from(&ProcessEnv::new(), Some(temp.path())).unwrap();
        assert_eq!(config.runtime.allowed_majors, vec![20, 22]);
        assert_eq!(config.consent_variable, "ALLOW_IT");
        assert_eq!(config.runtime.target_version, "18.0.0");
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("nope.yml");
        let env = ProcessEnv::from_pairs([(CONFIG_PATH_VAR, missing.as_os_str())]);

        let result = load_config_from(&env, None);
        assert!(matches!(result, Err(LauncherError::ConfigNotFound { .. })));
    }

    #[test]
    fn invalid_yaml_is_a_parse_error() {
        let temp = TempDir::new().unwrap();
        write_user_config(temp.path(), "runtime: [unclosed");

        let result = load_config_from(&ProcessEnv::new(), Some(temp.path()));
        assert!(matches!(result, Err(LauncherError::ConfigParseError { .. })));
    }

    #[test]
    fn invalid_values_fail_validation() {
        let temp = TempDir::new().unwrap();
        write_user_config(temp.path(), "runtime:\n  allowed_majors: []\n");

        let result = load_config_from(&ProcessEnv::new(), Some(temp.path()));
        assert!(matches!(
            result,
            Err(LauncherError::ConfigValidationError { .. })
        ));
    }

    #[test]
    fn bundle_variable_overrides_file() {
        let temp = TempDir::new().unwrap();
        write_user_config(temp.path(), "bundle: /from/file.cjs\n");
        let env = ProcessEnv::from_pairs([(BUNDLE_PATH_VAR, "/from/env.cjs")]);

        let config = load_config_from(&env, Some(temp.path())).unwrap();
        assert_eq!(config.bundle, Some(PathBuf::from("/from/env.cjs")));
    }

    #[test]
    fn empty_file_yields_defaults() {
        let config = parse_config("\n", Path::new("launcher.yml")).unwrap();
        assert_eq!(config, LauncherConfig::default());
    }
}
