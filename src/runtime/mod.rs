//! Finding, provisioning, and checking the JavaScript runtime.
//!
//! The pieces here are deliberately small and injectable:
//! - [`RuntimeLocator`] looks on the inherited search path
//! - [`ProvisionStore`] computes where a private runtime lives
//! - [`RuntimeResolver`] picks between the two, provisioning when allowed
//! - [`VersionGate`] runs the chosen runtime and checks its major version
//!
//! # Example
//!
//! ```
//! use myst_launcher::runtime::{parse_version_report, VersionPolicy};
//!
//! let report = parse_version_report("v20.11.1\n").unwrap();
//! assert_eq!(report.major, 20);
//! assert!(VersionPolicy::new([18, 20, 22]).accepts(report.major));
//! ```

pub mod candidate;
pub mod locator;
pub mod platform;
pub mod resolver;
pub mod store;
pub mod version;

pub use candidate::{RuntimeCandidate, RuntimeOrigin, SearchPath};
pub use locator::{is_executable, resolve_tool_path, RuntimeLocator};
pub use platform::Platform;
pub use resolver::{Resolution, RuntimeResolver};
pub use store::{ProvisionRecord, ProvisionStore};
pub use version::{parse_version_report, VersionGate, VersionPolicy, VersionReport};
