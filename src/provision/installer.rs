//! Runtime provisioning through an external installer.
//!
//! The installer (by default `python3 -m nodeenv`) is asked for a specific
//! version, prebuilt binaries only, and no leftover sources, written into the
//! store directory. If anything goes wrong the directory is removed, so the
//! next run starts clean instead of reusing a half-written install.

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::Path;

use crate::error::{LauncherError, Result};
use crate::runtime::{ProvisionRecord, RuntimeCandidate};
use crate::shell::{execute_streaming, indent, CommandOptions, CommandSpec, OutputCallback};
use crate::ui::UserInterface;

/// Width used when quoting installer output in errors.
const OUTPUT_INDENT: usize = 4;

/// The installer program and its leading arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallerCommand {
    pub program: OsString,
    pub args: Vec<OsString>,
}

impl InstallerCommand {
    pub fn new<I, S>(program: impl Into<OsString>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Full command line for provisioning `version_tag` into `dest`.
    pub fn command_for(&self, version_tag: &str, dest: &Path) -> CommandSpec {
        CommandSpec::new(&self.program)
            .args(self.args.iter().cloned())
            .arg(format!("--node={}", version_tag))
            .arg("--prebuilt")
            .arg("--clean-src")
            .arg(dest)
    }
}

/// Materializes a runtime into the provision store.
#[derive(Debug, Clone)]
pub struct Provisioner {
    installer: InstallerCommand,
    runtime_name: String,
}

impl Provisioner {
    pub fn new(installer: InstallerCommand, runtime_name: impl Into<String>) -> Self {
        Self {
            installer,
            runtime_name: runtime_name.into(),
        }
    }

    /// Run the installer for `record` and return the provisioned runtime.
    ///
    /// # Errors
    ///
    /// `ProvisionFailure` when the installer cannot start, exits non-zero,
    /// or exits zero without producing the runtime executable. The record's
    /// directory is removed first; if that fails the detail names it.
    pub fn provision(
        &self,
        record: &ProvisionRecord,
        ui: &mut dyn UserInterface,
    ) -> Result<RuntimeCandidate> {
        let cache_root = record.cache_root();
        let spec = self.installer.command_for(record.version_tag(), cache_root);
        tracing::info!("Provisioning {} with: {}", self.runtime_name, spec);

        if let Some(parent) = cache_root.parent() {
            fs::create_dir_all(parent).map_err(|e| LauncherError::ProvisionFailure {
                detail: format!("could not create {}: {}", parent.display(), e),
            })?;
        }

        let mut spinner = ui.start_spinner(&format!(
            "Installing {} {}...",
            self.runtime_name,
            record.version_tag()
        ));
        let callback: OutputCallback = match spinner.message_sink() {
            Some(sink) => Box::new(move |line| sink(line.text())),
            None => Box::new(|_| {}),
        };

        let outcome = execute_streaming(&spec, &CommandOptions::default(), callback);

        let failure = match outcome {
            Err(e) => Some(format!("could not start installer `{}`: {}", spec, e)),
            Ok(result) if !result.success => {
                tracing::debug!("Installer exited with {:?}", result.exit_code);
                let code = result
                    .exit_code
                    .map(|c| c.to_string())
                    .unwrap_or_else(|| "signal".to_string());
                Some(format!(
                    "installer `{}` exited with {}:\n{}",
                    spec,
                    code,
                    indent(result.combined.trim_end(), OUTPUT_INDENT)
                ))
            }
            Ok(_) => {
                let runtime_path = record.runtime_path(&self.runtime_name);
                if runtime_path.is_file() {
                    None
                } else {
                    Some(format!(
                        "installer `{}` succeeded but {} is missing",
                        spec,
                        runtime_path.display()
                    ))
                }
            }
        };

        match failure {
            None => {
                spinner.finish_success(&format!(
                    "Installed {} {} in {}",
                    self.runtime_name,
                    record.version_tag(),
                    cache_root.display()
                ));
                Ok(record.candidate(&self.runtime_name))
            }
            Some(mut detail) => {
                spinner.finish_error(&format!("Failed to install {}", self.runtime_name));
                if let Err(e) = discard_partial_install(cache_root) {
                    tracing::warn!(
                        "Could not remove partial install at {}: {}",
                        cache_root.display(),
                        e
                    );
                    detail.push_str(&format!(
                        "\n\nThe partial install at {} could not be removed ({}).\n\
                         Delete it before running again, or it will be reused.",
                        cache_root.display(),
                        e
                    ));
                }
                Err(LauncherError::ProvisionFailure { detail })
            }
        }
    }
}

/// Remove whatever the installer left behind.
fn discard_partial_install(cache_root: &Path) -> io::Result<()> {
    if !cache_root.exists() {
        return Ok(());
    }
    fs::remove_dir_all(cache_root)?;
    tracing::debug!("Removed partial install at {}", cache_root.display());
    Ok(())
}
