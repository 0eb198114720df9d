//! Runtime version parsing and compatibility checks.
//!
//! The runtime's self-report is untrusted free text. Only the first line is
//! considered, and it must start with `v` followed by the major version
//! digits; anything else is fatal.

use regex::Regex;
use std::collections::BTreeSet;
use std::fmt;
use std::sync::LazyLock;

use super::candidate::RuntimeCandidate;
use crate::config::ProcessEnv;
use crate::error::{LauncherError, Result};
use crate::shell::{execute, CommandOptions, CommandSpec};

static VERSION_MARKER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^v(\d+)").unwrap());

/// The part of a runtime version the launcher cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionReport {
    pub major: u64,
}

/// Parse a runtime's self-reported version.
///
/// Returns `None` when the first line does not match `v<digits>...`.
///
/// ```
/// use myst_launcher::runtime::parse_version_report;
///
/// assert_eq!(parse_version_report("v18.2.0\n").map(|r| r.major), Some(18));
/// assert!(parse_version_report("nodejs-unknown").is_none());
/// ```
pub fn parse_version_report(output: &str) -> Option<VersionReport> {
    let first_line = output.lines().next()?.trim();
    let caps = VERSION_MARKER.captures(first_line)?;
    let major = caps.get(1)?.as_str().parse().ok()?;
    Some(VersionReport { major })
}

/// Which major versions the launcher accepts.
///
/// Every listed version is accepted, and so is anything newer than the
/// highest one listed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionPolicy {
    allowed: BTreeSet<u64>,
}

impl VersionPolicy {
    pub fn new(allowed: impl IntoIterator<Item = u64>) -> Self {
        Self {
            allowed: allowed.into_iter().collect(),
        }
    }

    pub fn accepts(&self, major: u64) -> bool {
        self.allowed.contains(&major) || self.allowed.last().is_some_and(|&max| major > max)
    }
}

impl fmt::Display for VersionPolicy {
    /// Renders as `18, 20, or 22+`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut labels: Vec<String> = self.allowed.iter().map(u64::to_string).collect();
        if let Some(last) = labels.last_mut() {
            last.push('+');
        }
        match labels.as_slice() {
            [] => Ok(()),
            [only] => write!(f, "{}", only),
            [a, b] => write!(f, "{} or {}", a, b),
            [rest @ .., last] => write!(f, "{}, or {}", rest.join(", "), last),
        }
    }
}

/// Runs a candidate and checks its version against a policy.
#[derive(Debug, Clone)]
pub struct VersionGate {
    runtime_name: String,
    version_flag: String,
    policy: VersionPolicy,
    help_url: String,
}

impl VersionGate {
    pub fn new(
        runtime_name: impl Into<String>,
        version_flag: impl Into<String>,
        policy: VersionPolicy,
        help_url: impl Into<String>,
    ) -> Self {
        Self {
            runtime_name: runtime_name.into(),
            version_flag: version_flag.into(),
            policy,
            help_url: help_url.into(),
        }
    }

    pub fn policy(&self) -> &VersionPolicy {
        &self.policy
    }

    /// Run the candidate with the version flag under `env` and validate it.
    ///
    /// `env` should be the environment the runtime will be handed, so a
    /// provisioned runtime already sees its own directory on the path.
    pub fn ensure_compatible(
        &self,
        candidate: &RuntimeCandidate,
        env: &ProcessEnv,
    ) -> Result<VersionReport> {
        let spec = CommandSpec::new(candidate.path()).arg(&self.version_flag);
        let options = CommandOptions {
            env: Some(env.clone()),
        };

        let result = execute(&spec, &options).map_err(|e| LauncherError::VersionQueryFailed {
            runtime: self.runtime_name.clone(),
            path: candidate.path().to_path_buf(),
            message: e.to_string(),
        })?;

        if !result.success {
            return Err(LauncherError::VersionQueryFailed {
                runtime: self.runtime_name.clone(),
                path: candidate.path().to_path_buf(),
                message: format!(
                    "exited with code {:?}: {}",
                    result.exit_code,
                    result.combined.trim()
                ),
            });
        }

        self.check_output(&result.stdout)
    }

    /// Validate already-captured version output.
    pub fn check_output(&self, output: &str) -> Result<VersionReport> {
        let Some(report) = parse_version_report(output) else {
            return Err(LauncherError::VersionUnparseable {
                runtime: self.runtime_name.clone(),
                output: output.trim().to_string(),
            });
        };

        tracing::debug!("{} reports major version {}", self.runtime_name, report.major);

        if !self.policy.accepts(report.major) {
            return Err(LauncherError::VersionUnsupported {
                runtime: self.runtime_name.clone(),
                major: report.major,
                allowed: self.policy.to_string(),
                help_url: self.help_url.clone(),
            });
        }

        Ok(report)
    }
}
