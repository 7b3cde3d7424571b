// phpfn: command-line front end for the phpfuncs library.
// Usage: phpfn <command> [args], see `phpfn --help`.

mod args;
mod commands;

use std::io;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use phpfuncs::settings::{load_settings, Settings};

use crate::args::Cli;

fn verbosity_filter(verbose: u8) -> Option<&'static str> {
    match verbose {
        0 => None,
        1 => Some("info"),
        2 => Some("debug"),
        _ => Some("trace"),
    }
}

/// `RUST_LOG` wins, then `-v`, then `fallback`.
fn env_filter(verbose: u8, fallback: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity_filter(verbose).unwrap_or(fallback)))
}

fn stderr_subscriber(filter: EnvFilter) -> impl tracing::Subscriber + Send + Sync {
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .finish()
}

/// Settings are read under a scoped subscriber driven by `RUST_LOG`/`-v`
/// only, since the settings file is what configures the global one.
fn load_settings_logged(cli: &Cli) -> Result<Settings> {
    let bootstrap = stderr_subscriber(env_filter(cli.verbose, "warn"));
    tracing::subscriber::with_default(bootstrap, || load_settings(cli.config.as_deref()))
        .context("loading settings")
}

fn init_tracing(verbose: u8, settings: &Settings) {
    let subscriber = stderr_subscriber(env_filter(verbose, &settings.log_filter));
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("phpfn: logging disabled: {}", e);
    }
}

fn run(cli: Cli) -> Result<()> {
    let settings = load_settings_logged(&cli)?;
    init_tracing(cli.verbose, &settings);
    tracing::debug!("running {:?}", cli.command);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    commands::execute(cli.command, &settings, &mut out)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("phpfn: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
