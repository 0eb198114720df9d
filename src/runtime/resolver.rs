//! Deciding which runtime to hand off to.
//!
//! Resolution order:
//! 1. A runtime already on the inherited search path
//! 2. A runtime provisioned by an earlier run
//! 3. A fresh provision, only after consent

use std::path::Path;

use super::candidate::{RuntimeCandidate, SearchPath};
use super::locator::RuntimeLocator;
use super::store::ProvisionStore;
use crate::config::ProcessEnv;
use crate::error::{LauncherError, Result};
use crate::provision::{ConsentGate, Provisioner};
use crate::ui::UserInterface;

/// The chosen runtime and the search path it should run with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub candidate: RuntimeCandidate,
    pub search_path: SearchPath,
}

/// Chooses between a pre-installed and a provisioned runtime.
#[derive(Debug, Clone)]
pub struct RuntimeResolver {
    locator: RuntimeLocator,
    store: ProvisionStore,
    consent: ConsentGate,
    provisioner: Provisioner,
    runtime_name: String,
    target_version: String,
    help_url: String,
}

impl RuntimeResolver {
    pub fn new(
        locator: RuntimeLocator,
        store: ProvisionStore,
        consent: ConsentGate,
        provisioner: Provisioner,
    ) -> Self {
        Self {
            locator,
            store,
            consent,
            provisioner,
            runtime_name: "node".to_string(),
            target_version: "18.0.0".to_string(),
            help_url: String::new(),
        }
    }

    /// Base name of the runtime, used for the provisioned executable.
    pub fn with_runtime_name(mut self, name: impl Into<String>) -> Self {
        self.runtime_name = name.into();
        self
    }

    /// Version provisioned when nothing is installed.
    pub fn with_target_version(mut self, version: impl Into<String>) -> Self {
        self.target_version = version.into();
        self
    }

    /// Where the operator can get the runtime by hand.
    pub fn with_help_url(mut self, url: impl Into<String>) -> Self {
        self.help_url = url.into();
        self
    }

    pub fn store(&self) -> &ProvisionStore {
        &self.store
    }

    /// Resolve a runtime for `inherited`.
    ///
    /// A pre-installed runtime is returned with the search path untouched.
    /// Otherwise the provisioned runtime's directory is appended to it.
    /// Consent is asked at most once, and never when a previous install
    /// is reused.
    ///
    /// # Errors
    ///
    /// `PermissionDenied` when consent is withheld (nothing is written to
    /// disk), or the provisioner's `ProvisionFailure` unchanged.
    pub fn resolve(
        &self,
        inherited: SearchPath,
        env: &ProcessEnv,
        ui: &mut dyn UserInterface,
    ) -> Result<Resolution> {
        if let Some(candidate) = self.locator.locate(&inherited) {
            return Ok(Resolution {
                candidate,
                search_path: inherited,
            });
        }

        let record = self.store.location_for(&self.target_version);
        let cache_root = record.cache_root();

        let candidate = if self.store.exists(cache_root) {
            tracing::info!(
                "Reusing {} {} from {}",
                self.runtime_name,
                record.version_tag(),
                cache_root.display()
            );
            record.candidate(&self.runtime_name)
        } else {
            self.announce_missing(ui, cache_root);

            let decision = self
                .consent
                .decide(env, record.version_tag(), cache_root, ui);
            if !decision.is_granted() {
                return Err(LauncherError::PermissionDenied {
                    runtime: self.runtime_name.clone(),
                    install_root: cache_root.to_path_buf(),
                    variable: self.consent.variable().to_string(),
                    help_url: self.help_url.clone(),
                });
            }

            self.provisioner.provision(&record, ui)?
        };

        let mut search_path = inherited;
        search_path.append(record.executable_dir());

        Ok(Resolution {
            candidate,
            search_path,
        })
    }

    fn announce_missing(&self, ui: &mut dyn UserInterface, cache_root: &Path) {
        ui.message(&format!("Couldn't find installed `{}`.", self.runtime_name));
        ui.message(&format!(
            "MyST can install {} {} in {}",
            self.runtime_name,
            self.target_version,
            cache_root.display()
        ));
    }
}
