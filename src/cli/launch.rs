//! The launch pipeline.
//!
//! Resolve a runtime, check its version, then hand off to it with the
//! bundle and the launcher's arguments. Any failure stops the pipeline
//! before handoff.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::config::{LauncherConfig, ProcessEnv};
use crate::error::Result;
use crate::provision::{ConsentGate, InstallerCommand, Provisioner};
use crate::runtime::{
    Platform, ProvisionStore, RuntimeLocator, RuntimeResolver, SearchPath, VersionGate,
    VersionPolicy,
};
use crate::shell::{build_child_environment, handoff_for, ExecutionPlan, Handoff};
use crate::ui::UserInterface;

/// Bundle file looked up next to the launcher executable.
pub const DEFAULT_BUNDLE_NAME: &str = "myst.cjs";

/// Label used when asking to install the runtime.
const RUNTIME_LABEL: &str = "Node.js";

/// One launcher invocation, wired from configuration.
pub struct Launcher {
    config: LauncherConfig,
    env: ProcessEnv,
    platform: Platform,
    handoff: Box<dyn Handoff>,
}

impl Launcher {
    /// Launcher for `platform`, using the platform's handoff strategy.
    pub fn new(config: LauncherConfig, env: ProcessEnv, platform: Platform) -> Self {
        Self {
            config,
            env,
            platform,
            handoff: handoff_for(platform),
        }
    }

    /// Replace the handoff strategy.
    pub fn with_handoff(mut self, handoff: Box<dyn Handoff>) -> Self {
        self.handoff = handoff;
        self
    }

    pub fn config(&self) -> &LauncherConfig {
        &self.config
    }

    /// Build the resolver described by the configuration.
    pub fn resolver(&self) -> Result<RuntimeResolver> {
        let runtime = &self.config.runtime;
        let store = match &self.config.data_dir {
            Some(root) => ProvisionStore::new(root, &self.config.app_name, self.platform),
            None => ProvisionStore::user_default(&self.config.app_name, self.platform)?,
        };
        let installer = InstallerCommand::new(
            &self.config.installer.program,
            self.config.installer.args.iter(),
        );

        Ok(RuntimeResolver::new(
            RuntimeLocator::new(&runtime.name, self.platform),
            store,
            ConsentGate::new(&self.config.consent_variable, RUNTIME_LABEL),
            Provisioner::new(installer, &runtime.name),
        )
        .with_runtime_name(&runtime.name)
        .with_target_version(&runtime.target_version)
        .with_help_url(&runtime.help_url))
    }

    /// Build the version gate described by the configuration.
    pub fn version_gate(&self) -> VersionGate {
        let runtime = &self.config.runtime;
        VersionGate::new(
            &runtime.name,
            &runtime.version_flag,
            VersionPolicy::new(runtime.allowed_majors.iter().copied()),
            &runtime.help_url,
        )
    }

    /// Resolve and validate a runtime, and plan the handoff.
    pub fn prepare(
        &self,
        args: Vec<OsString>,
        ui: &mut dyn UserInterface,
    ) -> Result<ExecutionPlan> {
        let inherited = SearchPath::parse(&self.env.search_path());
        let resolution = self.resolver()?.resolve(inherited, &self.env, ui)?;
        tracing::debug!(
            "Using {} ({:?})",
            resolution.candidate.path().display(),
            resolution.candidate.origin()
        );

        let child_env =
            build_child_environment(&self.env, &resolution.search_path, &self.config.marker)?;
        let report = self
            .version_gate()
            .ensure_compatible(&resolution.candidate, &child_env)?;
        tracing::info!("{} {} accepted", self.config.runtime.name, report.major);

        let bundle = self.bundle_path()?;
        Ok(ExecutionPlan::new(resolution.candidate.path(), &bundle, args, child_env))
    }

    /// Run the whole pipeline and return the exit code to use.
    ///
    /// With image replacement this only returns on failure.
    pub fn run(&self, args: Vec<OsString>, ui: &mut dyn UserInterface) -> Result<i32> {
        let plan = self.prepare(args, ui)?;
        tracing::debug!("Handing off with {}", self.handoff.name());
        self.handoff.transfer(&plan)
    }

    fn bundle_path(&self) -> Result<PathBuf> {
        if let Some(bundle) = &self.config.bundle {
            return Ok(bundle.clone());
        }
        let exe = std::env::current_exe()?;
        Ok(bundle_beside(&exe))
    }
}

/// The default bundle location for a launcher at `exe`.
pub fn bundle_beside(exe: &Path) -> PathBuf {
    exe.parent()
        .unwrap_or_else(|| Path::new("."))
        .join(DEFAULT_BUNDLE_NAME)
}
