use crate::deck::{Deck, DeckError};
use crate::domain::models::ReportKind;
use std::collections::BTreeSet;
use tracing::debug;

/// Parse a directory-entry name against `base`, yielding the report kind
/// and step when it matches `base.<kind><nnnn>` exactly.
///
/// The kind letter is case-sensitive and the step suffix must be exactly
/// four ASCII digits; both series use the same width.
pub fn parse_report_name(name: &str, base: &str) -> Option<(ReportKind, u32)> {
    let rest = name.strip_prefix(base)?.strip_prefix('.')?;
    let mut chars = rest.chars();
    let kind = match chars.next()? {
        'X' => ReportKind::X,
        'S' => ReportKind::S,
        _ => return None,
    };
    let digits = chars.as_str();
    if digits.len() != 4 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok().map(|step| (kind, step))
}

fn collect_steps<I, N>(names: I, base: &str) -> (BTreeSet<u32>, BTreeSet<u32>)
where
    I: IntoIterator<Item = N>,
    N: AsRef<str>,
{
    let mut x_steps = BTreeSet::new();
    let mut s_steps = BTreeSet::new();
    for name in names {
        match parse_report_name(name.as_ref(), base) {
            Some((ReportKind::X, step)) => {
                x_steps.insert(step);
            }
            Some((ReportKind::S, step)) => {
                s_steps.insert(step);
            }
            None => {}
        }
    }
    (x_steps, s_steps)
}

/// Highest step present in both series of `names`, if any.
///
/// Pure over a name listing so it can be exercised without a file system.
/// A step seen in only one series never qualifies; file modification times
/// play no part.
pub fn latest_common_step<I, N>(names: I, base: &str) -> Option<u32>
where
    I: IntoIterator<Item = N>,
    N: AsRef<str>,
{
    let (x_steps, s_steps) = collect_steps(names, base);
    x_steps.iter().rev().find(|s| s_steps.contains(s)).copied()
}

/// Scan the deck's directory for report files and pick the restart step.
pub fn scan_reports(deck: &Deck) -> Result<u32, DeckError> {
    let dir = deck.dir();
    let base = deck.base_name();

    let mut names = Vec::new();
    let entries = std::fs::read_dir(&dir).map_err(|source| DeckError::Io {
        path: dir.clone(),
        source,
    })?;
    for entry in entries {
        let entry = entry.map_err(|source| DeckError::Io {
            path: dir.clone(),
            source,
        })?;
        if let Some(name) = entry.file_name().to_str() {
            names.push(name.to_string());
        }
    }

    let (x_steps, s_steps) = collect_steps(&names, base);
    let step = x_steps
        .iter()
        .rev()
        .find(|s| s_steps.contains(s))
        .copied()
        .ok_or_else(|| DeckError::NoCommonReportStep {
            base: base.to_string(),
        })?;

    if let Some(&top_x) = x_steps.last() {
        if top_x > step {
            debug!(
                "{base}.X{top_x:04} has no matching {base}.S{top_x:04}; falling back to step {step:04}"
            );
        }
    }
    debug!("restart step {step:04} selected for {base}");
    Ok(step)
}
