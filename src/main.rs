// Only the Windows build reaches the GUI and the Win32 backend.
#![cfg_attr(not(windows), allow(dead_code))]

mod cli;
mod config;
mod logging;
mod state;
#[cfg(windows)]
mod ui;
#[cfg(windows)]
mod win32;

use clap::Parser;

use crate::cli::{Cli, Commands};
use crate::config::Config;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = config::load(cli.config.as_deref());
    let _log_guard = logging::init(&config.log);
    tracing::debug!(?config, "loaded configuration");

    run(cli.command, config)
}

#[cfg(windows)]
fn run(command: Option<Commands>, config: Config) -> anyhow::Result<()> {
    let backend = win32::Win32Backend;
    let mut stdout = std::io::stdout().lock();

    match command {
        None => {
            ui::run(config.defaults);
            Ok(())
        }
        Some(Commands::List) => cli::list(backend, &mut stdout),
        Some(Commands::Apply(args)) => cli::apply(backend, &args, &config.defaults, &mut stdout),
    }
}

#[cfg(not(windows))]
fn run(_command: Option<Commands>, _config: Config) -> anyhow::Result<()> {
    anyhow::bail!("window-opacity manipulates Win32 windows and only runs on Windows")
}
