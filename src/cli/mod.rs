//! Command-line interface for the MyST launcher.
//!
//! # Architecture
//!
//! - [`args`] - Argument capture using clap's derive macros
//! - [`launch`] - The resolve, check, hand off pipeline

pub mod args;
pub mod launch;

pub use args::Cli;
pub use launch::{bundle_beside, Launcher, DEFAULT_BUNDLE_NAME};
