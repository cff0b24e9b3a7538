use std::path::PathBuf;

/// Error kinds surfaced by a restart-preparation run.
///
/// Every variant is fatal for the current invocation; nothing is retried.
#[derive(thiserror::Error, Debug)]
pub enum DeckError {
    #[error("no report step with both {base}.X#### and {base}.S#### files")]
    NoCommonReportStep { base: String },
    #[error("{reason} at line {line}")]
    Parse { line: usize, reason: String },
    #[error("--restore requested but backup file {} does not exist", .path.display())]
    RestoreMissing { path: PathBuf },
    #[error("failed to write backup {}", .path.display())]
    BackupWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A simulation deck identified by its base name.
///
/// The base may carry directory components (`runs/SPE1`). All sibling paths
/// (`NAME.DATA`, `NAME.DATA.BACKUP`, report files) are derived from it.
#[derive(Debug, Clone)]
pub struct Deck {
    base: PathBuf,
}

impl Deck {
    /// Build a deck from the CLI argument, stripping one trailing `.DATA`
    /// extension (any casing) if present.
    pub fn from_arg(arg: &str) -> Self {
        let base = if arg.len() > 5
            && arg.is_char_boundary(arg.len() - 5)
            && arg[arg.len() - 5..].eq_ignore_ascii_case(".DATA")
        {
            &arg[..arg.len() - 5]
        } else {
            arg
        };
        Self {
            base: PathBuf::from(base),
        }
    }

    /// Base name without directory components, as it appears in report-file
    /// names and in the RESTART record.
    pub fn base_name(&self) -> &str {
        self.base
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default()
    }

    /// Directory holding the deck and its report files.
    pub fn dir(&self) -> PathBuf {
        match self.base.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }

    pub fn data_path(&self) -> PathBuf {
        self.with_suffix(".DATA")
    }

    pub fn backup_path(&self) -> PathBuf {
        self.with_suffix(".DATA.BACKUP")
    }

    fn with_suffix(&self, suffix: &str) -> PathBuf {
        let mut name = self.base.as_os_str().to_owned();
        name.push(suffix);
        PathBuf::from(name)
    }
}
