use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod commands;
mod deck;
mod domain;
mod services;

use cli::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "redeck=debug"
    } else {
        "redeck=info"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let summary = commands::handle_restart_command(&cli)?;
    tracing::debug!(
        "done: step {:04}, restored={}, backed_up={}, changed={}",
        summary.step,
        summary.restored,
        summary.backed_up,
        summary.changed
    );
    Ok(())
}
