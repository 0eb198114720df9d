//! Launcher configuration and the injected process environment.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - The process environment snapshot in [`environment`]
//!
//! # Example
//!
//! ```
//! use myst_launcher::config::{load_config_from, ProcessEnv};
//!
//! let env = ProcessEnv::from_pairs([("MYST_LAUNCHER_BUNDLE", "/opt/myst/myst.cjs")]);
//! let config = load_config_from(&env, None).unwrap();
//!
//! assert_eq!(config.runtime.name, "node");
//! assert_eq!(config.bundle.unwrap().to_str(), Some("/opt/myst/myst.cjs"));
//! ```

pub mod environment;
pub mod loader;
pub mod schema;

pub use environment::{ProcessEnv, DEFAULT_SEARCH_PATH, SEARCH_PATH_VAR};
pub use loader::{
    load_config, load_config_file, load_config_from, parse_config, ConfigSource, BUNDLE_PATH_VAR,
    CONFIG_PATH_VAR,
};
pub use schema::{InstallerSettings, LauncherConfig, MarkerSettings, RuntimeSettings};
