//! CLI argument definitions.
//!
//! The launcher is a pass-through: every argument belongs to the bundle, so
//! [`Cli`] captures them all without interpreting any, `--help` and
//! `--version` included.

use clap::Parser;
use std::ffi::OsString;

/// MyST launcher - runs the MyST bundle on a compatible Node.js.
#[derive(Debug, Parser)]
#[command(name = "myst")]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// Arguments forwarded verbatim to the MyST bundle
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, num_args = 0..)]
    pub args: Vec<OsString>,
}

impl Cli {
    /// Capture the current process's arguments.
    pub fn capture() -> Self {
        Self::from_args_os(std::env::args_os())
    }

    /// Build from a full argument list, program name first.
    ///
    /// clap treats a leading `--` as an escape and drops it; the bundle
    /// must still see it, so any difference falls back to the raw list.
    pub fn from_args_os<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let argv: Vec<OsString> = args.into_iter().map(Into::into).collect();
        match Self::try_parse_from(&argv) {
            Ok(cli) if cli.args.len() + 1 == argv.len() => cli,
            _ => Self {
                args: argv.into_iter().skip(1).collect(),
            },
        }
    }
}
