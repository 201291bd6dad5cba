//! Process wiring for the menu: flags, config, logging, colors, then the shell.
//!
//! Logs go to stderr so stdout carries only the menu transcript. The filter comes
//! from `ROSTER_LOG` when set, then `--verbose` (debug), then the config file's
//! `log_level`.

use super::setup::Cli;
use super::shell::Shell;
use clap::Parser;
use roster::config::RosterConfig;
use roster::error::Result;
use roster::service::StudentService;
use std::io::{self, IsTerminal};
use tracing::{debug, info};
use tracing_subscriber::{fmt, EnvFilter};

const LOG_ENV: &str = "ROSTER_LOG";

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    init_tracing(cli.verbose, &config);
    init_colors(cli.no_color, &config);
    debug!(?config, "configuration loaded");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(stdin.lock(), stdout.lock(), StudentService::new());

    info!("roster session started");
    shell.run()?;
    info!("roster session ended");
    Ok(())
}

fn load_config(cli: &Cli) -> Result<RosterConfig> {
    match cli.config.clone().or_else(RosterConfig::default_path) {
        Some(path) => RosterConfig::load(path),
        None => Ok(RosterConfig::default()),
    }
}

fn init_tracing(verbose: bool, config: &RosterConfig) {
    let fallback = if verbose {
        "debug"
    } else {
        config.log_level.as_str()
    };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback));
    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .compact()
        .init();
}

fn init_colors(no_color: bool, config: &RosterConfig) {
    if no_color || !config.color || !io::stdout().is_terminal() {
        colored::control::set_override(false);
    }
}
