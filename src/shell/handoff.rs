//! Transferring control to the resolved runtime.
//!
//! On POSIX the launcher's process image is replaced, so the runtime keeps
//! the launcher's pid and standard streams. Where that is unavailable the
//! runtime is spawned with inherited streams and its exit code becomes the
//! launcher's.

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

use crate::config::{MarkerSettings, ProcessEnv, SEARCH_PATH_VAR};
use crate::error::{LauncherError, Result};
use crate::runtime::{Platform, SearchPath};

/// Everything needed to start the runtime. Built once, never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionPlan {
    runtime_path: PathBuf,
    argument_vector: Vec<OsString>,
    environment: ProcessEnv,
}

impl ExecutionPlan {
    /// Plan running `bundle` under `runtime_path`, followed by `forwarded`
    /// exactly as the launcher received them.
    pub fn new<I>(
        runtime_path: impl Into<PathBuf>,
        bundle: &Path,
        forwarded: I,
        environment: ProcessEnv,
    ) -> Self
    where
        I: IntoIterator<Item = OsString>,
    {
        let mut argument_vector = vec![bundle.as_os_str().to_os_string()];
        argument_vector.extend(forwarded);
        Self {
            runtime_path: runtime_path.into(),
            argument_vector,
            environment,
        }
    }

    pub fn runtime_path(&self) -> &Path {
        &self.runtime_path
    }

    /// Arguments after the program name: the bundle, then forwarded ones.
    pub fn argument_vector(&self) -> &[OsString] {
        &self.argument_vector
    }

    pub fn environment(&self) -> &ProcessEnv {
        &self.environment
    }

    fn command(&self) -> Command {
        let mut cmd = Command::new(&self.runtime_path);
        cmd.args(&self.argument_vector);
        cmd.env_clear();
        cmd.envs(self.environment.iter());
        cmd
    }
}

/// Build the runtime's environment from the launcher's.
///
/// Exactly two keys differ from `parent`: the search path and the marker.
pub fn build_child_environment(
    parent: &ProcessEnv,
    search_path: &SearchPath,
    marker: &MarkerSettings,
) -> Result<ProcessEnv> {
    let mut env = parent.clone();
    env.set(SEARCH_PATH_VAR, search_path.to_os_string()?);
    env.set(marker.name.as_str(), marker.value.as_str());
    Ok(env)
}

/// A way of transferring control to the runtime.
pub trait Handoff {
    /// Start the runtime described by `plan`.
    ///
    /// Returns the exit code the launcher should exit with. Strategies that
    /// replace the process image only return on failure.
    fn transfer(&self, plan: &ExecutionPlan) -> Result<i32>;

    fn name(&self) -> &'static str;
}

/// Replace the launcher's process image with the runtime.
#[cfg(unix)]
#[derive(Debug, Clone, Copy, Default)]
pub struct ReplaceImage;

#[cfg(unix)]
impl Handoff for ReplaceImage {
    fn transfer(&self, plan: &ExecutionPlan) -> Result<i32> {
        use std::os::unix::process::CommandExt as _;

        let mut cmd = plan.command();
        cmd.arg0(arg0(plan.runtime_path()));
        tracing::debug!("Replacing process image with {}", plan.runtime_path().display());

        // exec only returns on failure
        let source = cmd.exec();
        Err(LauncherError::HandoffFailed {
            runtime: plan.runtime_path().to_path_buf(),
            source,
        })
    }

    fn name(&self) -> &'static str {
        "replace-image"
    }
}

/// Spawn the runtime with inherited streams and wait for it.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpawnAndWait;

impl Handoff for SpawnAndWait {
    fn transfer(&self, plan: &ExecutionPlan) -> Result<i32> {
        tracing::debug!("Spawning {}", plan.runtime_path().display());

        let status = plan
            .command()
            .status()
            .map_err(|source| LauncherError::HandoffFailed {
                runtime: plan.runtime_path().to_path_buf(),
                source,
            })?;

        let code = exit_code(status);
        tracing::debug!("Runtime exited with {}", code);
        Ok(code)
    }

    fn name(&self) -> &'static str {
        "spawn-and-wait"
    }
}

/// The strategy for `platform`.
pub fn handoff_for(platform: Platform) -> Box<dyn Handoff> {
    if platform.replaces_image() {
        if let Some(strategy) = image_replacement() {
            return strategy;
        }
    }
    Box::new(SpawnAndWait)
}

#[cfg(unix)]
fn image_replacement() -> Option<Box<dyn Handoff>> {
    Some(Box::new(ReplaceImage))
}

#[cfg(not(unix))]
fn image_replacement() -> Option<Box<dyn Handoff>> {
    None
}

fn arg0(runtime_path: &Path) -> &OsStr {
    runtime_path
        .file_name()
        .unwrap_or_else(|| runtime_path.as_os_str())
}

/// Map a child's status to the launcher's exit code.
fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt as _;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    1
}
