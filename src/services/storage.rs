use crate::deck::{Deck, DeckError};
use std::io::Write;
use std::path::Path;
use tracing::info;

pub fn read_deck(deck: &Deck) -> Result<String, DeckError> {
    let path = deck.data_path();
    std::fs::read_to_string(&path).map_err(|source| DeckError::Io { path, source })
}

/// Copy `NAME.DATA.BACKUP` over `NAME.DATA`. The sidecar must exist.
pub fn restore_backup(deck: &Deck) -> Result<(), DeckError> {
    let backup = deck.backup_path();
    let data = deck.data_path();
    if !backup.exists() {
        return Err(DeckError::RestoreMissing { path: backup });
    }
    std::fs::copy(&backup, &data).map_err(|source| DeckError::Io {
        path: backup.clone(),
        source,
    })?;
    info!("restored {} from {}", data.display(), backup.display());
    Ok(())
}

/// Copy `NAME.DATA` to `NAME.DATA.BACKUP`, overwriting any prior backup.
pub fn write_backup(deck: &Deck) -> Result<(), DeckError> {
    let backup = deck.backup_path();
    std::fs::copy(deck.data_path(), &backup).map_err(|source| DeckError::BackupWrite {
        path: backup.clone(),
        source,
    })?;
    info!("backup created: {}", backup.display());
    Ok(())
}

/// Replace the deck's content whole. The text goes to a temp file in the
/// deck's directory first and is persisted over the target, so a failure
/// mid-write leaves the original untouched.
pub fn replace_deck(deck: &Deck, text: &str) -> Result<(), DeckError> {
    let path = deck.data_path();
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));

    let result = tempfile::NamedTempFile::new_in(dir)
        .and_then(|mut tmp| {
            tmp.write_all(text.as_bytes())?;
            tmp.persist(&path).map_err(|e| e.error)?;
            Ok(())
        })
        .map_err(|source| DeckError::Io {
            path: path.clone(),
            source,
        });
    if result.is_ok() {
        info!("deck written: {}", path.display());
    }
    result
}
