//! Configuration schema definitions for the launcher.
//!
//! This module contains the struct definitions that map to the optional
//! `launcher.yml` file. Every field has a default, so an empty file (or no
//! file at all) yields the stock MyST launcher.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{LauncherError, Result};

/// Root configuration structure for launcher.yml
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LauncherConfig {
    /// Application name; names the per-user data directory
    pub app_name: String,

    /// Which runtime to look for and which versions are acceptable
    pub runtime: RuntimeSettings,

    /// External installer used to provision a private runtime
    pub installer: InstallerSettings,

    /// Variable that pre-answers the provisioning consent prompt
    pub consent_variable: String,

    /// Variable written into the runtime's environment
    pub marker: MarkerSettings,

    /// Bundle handed to the runtime (defaults to `myst.cjs` beside the launcher)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bundle: Option<PathBuf>,

    /// Override for the per-user data root
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            app_name: "myst".to_string(),
            runtime: RuntimeSettings::default(),
            installer: InstallerSettings::default(),
            consent_variable: "MYSTMD_ALLOW_NODEENV".to_string(),
            marker: MarkerSettings::default(),
            bundle: None,
            data_dir: None,
        }
    }
}

/// Runtime lookup and compatibility policy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeSettings {
    /// Executable base name, without platform suffix
    pub name: String,

    /// Version provisioned when no runtime is installed
    pub target_version: String,

    /// Flag that makes the runtime print its version
    pub version_flag: String,

    /// Accepted major versions; anything newer than the highest is accepted too
    pub allowed_majors: Vec<u64>,

    /// Where operators are sent to install the runtime by hand
    pub help_url: String,
}

impl Default for RuntimeSettings {
    fn default() -> Self {
        Self {
            name: "node".to_string(),
            target_version: "18.0.0".to_string(),
            version_flag: "-v".to_string(),
            allowed_majors: vec![18, 20, 22],
            help_url: "https://nodejs.org/en/download".to_string(),
        }
    }
}

/// Installer command prefix
///
/// Provisioning flags and the destination are appended to `args`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InstallerSettings {
    /// Program to run
    pub program: String,

    /// Leading arguments
    pub args: Vec<String>,
}

impl Default for InstallerSettings {
    fn default() -> Self {
        let program = if cfg!(windows) { "python" } else { "python3" };
        Self {
            program: program.to_string(),
            args: vec!["-m".to_string(), "nodeenv".to_string(), "-v".to_string()],
        }
    }
}

/// Marker variable telling the bundle how it was launched
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkerSettings {
    pub name: String,
    pub value: String,
}

impl Default for MarkerSettings {
    fn default() -> Self {
        Self {
            name: "MYST_LANG".to_string(),
            value: "PYTHON".to_string(),
        }
    }
}

impl LauncherConfig {
    /// Reject values the launcher cannot work with.
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("app_name", &self.app_name),
            ("runtime.name", &self.runtime.name),
            ("runtime.target_version", &self.runtime.target_version),
            ("installer.program", &self.installer.program),
            ("marker.name", &self.marker.name),
            ("consent_variable", &self.consent_variable),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(LauncherError::ConfigValidationError {
                    message: format!("'{}' must not be empty", field),
                });
            }
        }

        if self.runtime.allowed_majors.is_empty() {
            return Err(LauncherError::ConfigValidationError {
                message: "'runtime.allowed_majors' must list at least one version".to_string(),
            });
        }

        Ok(())
    }
}
