//! MyST launcher - runs the MyST bundle on a compatible Node.js.
//!
//! The launcher finds a Node.js runtime on the search path, or provisions a
//! private one after asking, checks that its major version is supported,
//! and then hands control to it with the MyST bundle and the launcher's own
//! arguments.
//!
//! # Modules
//!
//! - [`cli`] - Argument capture and the launch pipeline
//! - [`config`] - Launcher configuration and the process environment
//! - [`error`] - Error types and result aliases
//! - [`provision`] - Consent and installation of a private runtime
//! - [`runtime`] - Locating, storing, resolving and version-checking runtimes
//! - [`shell`] - Subprocess execution and handoff
//! - [`ui`] - Prompts, spinners, and terminal output
//!
//! # Example
//!
//! ```
//! use std::path::Path;
//! use myst_launcher::runtime::{Platform, ProvisionStore};
//!
//! let store = ProvisionStore::new(Path::new("/data"), "myst", Platform::Posix);
//! let record = store.location_for("18.0.0");
//! assert_eq!(record.cache_root(), Path::new("/data/myst/18.0.0"));
//! assert_eq!(record.executable_dir(), Path::new("/data/myst/18.0.0/bin"));
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod provision;
pub mod runtime;
pub mod shell;
pub mod ui;

pub use error::{LauncherError, Result};
