//! MyST launcher entry point.

use myst_launcher::cli::{Cli, Launcher};
use myst_launcher::config::{load_config, ProcessEnv};
use myst_launcher::runtime::Platform;
use myst_launcher::ui::{TerminalUI, UserInterface};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Logs go to stderr so the runtime's stdout is untouched. `RUST_LOG`
/// overrides the default of warnings only.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("myst_launcher=warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn run(cli: Cli, ui: &mut dyn UserInterface) -> myst_launcher::Result<i32> {
    let env = ProcessEnv::from_process();
    let config = load_config(&env)?;
    let platform = Platform::current();
    tracing::debug!("Launching on {} with {:?}", platform.name(), cli.args);

    Launcher::new(config, env, platform).run(cli.args, ui)
}

fn main() {
    let cli = Cli::capture();
    init_tracing();

    let mut ui = TerminalUI::new();

    match run(cli, &mut ui) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            std::process::exit(1);
        }
    }
}
