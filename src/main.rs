//! payroll CLI
//!
//! Usage: payroll [OPTIONS] [COMMAND]
//!
//! Without a command, runs a full session: pay period, employee entry,
//! run summary, then the stored-record report.
//!
//! Commands:
//!   report  Show stored records and their totals

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use payroll::config::load_or_default;
use payroll::presentation::{console_for, Cli, Commands, UiContext};
use payroll::{FlatFileStore, SessionUseCase};

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose >= 2)
        .with_line_number(verbose >= 3)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let cwd = std::env::current_dir().context("cannot determine working directory")?;
    let loaded = load_or_default(Some(&cwd));
    if let Some(source) = &loaded.source {
        debug!(file = %source.display(), "using config file");
    }
    for warning in &loaded.warnings {
        warn!("{warning}");
    }

    let mut config = loaded.config;
    if let Some(path) = cli.data_file {
        config.storage.data_file = path;
    }
    if let Some(color) = cli.color {
        config.output.color = color.into();
    }

    let ui = UiContext::new(config.output.color);
    let store = FlatFileStore::new(&config.storage.data_file);
    let session = SessionUseCase::new(&store, ui);
    let mut console = console_for(&ui);

    match cli.command {
        None => {
            session
                .execute(console.as_mut())
                .with_context(|| format!("payroll session failed ({})", store.path().display()))?;
        }
        Some(Commands::Report { from }) => {
            session
                .report(console.as_mut(), from)
                .with_context(|| format!("report failed ({})", store.path().display()))?;
        }
    }

    Ok(())
}
