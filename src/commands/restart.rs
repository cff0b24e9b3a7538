use crate::cli::Cli;
use crate::deck::Deck;
use crate::domain::models::RunSummary;
use crate::services::reports::scan_reports;
use crate::services::rewrite::rewrite_restart;
use crate::services::storage::{read_deck, replace_deck, restore_backup, write_backup};
use tracing::{debug, info};

/// One restart-preparation pass: optional restore, optional backup, then
/// scan the report files, rewrite the deck text and write it back.
///
/// Restore runs first so a backup taken in the same invocation captures
/// the restored content.
pub fn handle_restart_command(cli: &Cli) -> anyhow::Result<RunSummary> {
    let deck = Deck::from_arg(&cli.deck);
    debug!("control file: {}", deck.data_path().display());

    if cli.restore {
        restore_backup(&deck)?;
    }
    if cli.backup {
        write_backup(&deck)?;
    }

    let step = scan_reports(&deck)?;
    let text = read_deck(&deck)?;
    let outcome = rewrite_restart(&text, deck.base_name(), step)?;
    if outcome.had_restart {
        info!("updated RESTART record (report step {step:04})");
    } else {
        info!("new RESTART record added (report step {step:04})");
    }
    replace_deck(&deck, &outcome.text)?;

    Ok(RunSummary {
        step,
        restored: cli.restore,
        backed_up: cli.backup,
        changed: outcome.changed,
    })
}
