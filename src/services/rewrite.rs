use crate::deck::DeckError;
use crate::domain::models::RewriteOutcome;
use std::ops::Range;
use tracing::debug;

/// Section keywords that open a new part of the deck. A RESTART record must
/// be terminated before the next one of these begins.
const SECTION_KEYWORDS: &[&str] = &[
    "RUNSPEC", "GRID", "EDIT", "PROPS", "REGIONS", "SOLUTION", "SUMMARY", "SCHEDULE", "OPTIMIZE",
];

/// Split into lines with their terminators attached, so untouched lines can
/// be copied out byte-for-byte (CRLF included).
fn split_keep_ends(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    for (idx, byte) in text.bytes().enumerate() {
        if byte == b'\n' {
            lines.push(&text[start..=idx]);
            start = idx + 1;
        }
    }
    if start < text.len() {
        lines.push(&text[start..]);
    }
    lines
}

fn line_content(line: &str) -> &str {
    line.trim_end_matches('\n').trim_end_matches('\r')
}

/// Line-ending style used for inserted lines. Lines already in the deck
/// keep whatever they had.
fn dominant_eol(text: &str) -> &'static str {
    let total = text.bytes().filter(|b| *b == b'\n').count();
    let crlf = text.matches("\r\n").count();
    if crlf > 0 && crlf * 2 >= total {
        "\r\n"
    } else {
        "\n"
    }
}

/// Record data ends at the first `--` comment marker.
fn strip_comment(content: &str) -> &str {
    match content.find("--") {
        Some(idx) => &content[..idx],
        None => content,
    }
}

fn is_blank_or_comment(content: &str) -> bool {
    let trimmed = content.trim_start();
    trimmed.is_empty() || trimmed.starts_with("--")
}

/// Keyword lines start in the first column. Matching is case-insensitive.
fn is_keyword(content: &str, keyword: &str) -> bool {
    !content.starts_with(char::is_whitespace)
        && content
            .split_whitespace()
            .next()
            .is_some_and(|tok| tok.eq_ignore_ascii_case(keyword))
}

fn is_section_keyword(content: &str) -> bool {
    SECTION_KEYWORDS.iter().any(|kw| is_keyword(content, kw))
}

/// `INCLUDE` statements the deck's author disabled still mark the spot the
/// initial state would be read from.
fn is_commented_include(content: &str) -> bool {
    content
        .strip_prefix("--")
        .map(|rest| is_keyword(rest.trim_start(), "INCLUDE"))
        .unwrap_or(false)
}

/// Locate every RESTART record as a range of line indices, terminator line
/// included. An unterminated record is a parse failure; the deck must not
/// be rewritten on a guess.
fn find_restart_records(lines: &[&str]) -> Result<Vec<Range<usize>>, DeckError> {
    let mut records = Vec::new();
    let mut idx = 0;
    while idx < lines.len() {
        let content = line_content(lines[idx]);
        if !is_keyword(content, "RESTART") {
            idx += 1;
            continue;
        }
        let start = idx;
        let unterminated = || DeckError::Parse {
            line: start + 1,
            reason: "unterminated RESTART record".to_string(),
        };
        let end = if strip_comment(content).contains('/') {
            idx
        } else {
            let mut cursor = idx + 1;
            loop {
                let Some(line) = lines.get(cursor) else {
                    return Err(unterminated());
                };
                let content = line_content(line);
                if strip_comment(content).contains('/') {
                    break cursor;
                }
                if is_section_keyword(content) || is_keyword(content, "RESTART") {
                    return Err(unterminated());
                }
                cursor += 1;
            }
        };
        records.push(start..end + 1);
        idx = end + 1;
    }
    Ok(records)
}

/// Where a brand-new record goes: inside SOLUTION, immediately before the
/// first `INCLUDE` (commented or not), since that is the statement the
/// restart supersedes; directly after the SOLUTION keyword when the section
/// has none. Decks without a SOLUTION section get the record at the top of
/// the file, before the first non-comment, non-blank line.
fn insertion_point(lines: &[&str]) -> usize {
    let mut solution_at = None;
    for (idx, line) in lines.iter().enumerate() {
        let content = line_content(line);
        if is_keyword(content, "SOLUTION") {
            solution_at = Some(idx);
            continue;
        }
        if let Some(solution) = solution_at {
            if is_section_keyword(content) {
                return solution + 1;
            }
            if is_keyword(content, "INCLUDE") || is_commented_include(content) {
                return idx;
            }
        }
    }
    if let Some(solution) = solution_at {
        return solution + 1;
    }
    debug!("deck has no SOLUTION section; placing RESTART at the top of the file");
    lines
        .iter()
        .position(|line| !is_blank_or_comment(line_content(line)))
        .unwrap_or(lines.len())
}

/// Rewrite `text` so it carries exactly one RESTART record naming `step`.
///
/// Every prior record is removed; the canonical record lands where the
/// first one stood, or at the insertion point above when none existed.
/// All other lines pass through untouched and in order. Running the
/// rewriter on its own output with the same step is a no-op
/// (`changed = false`).
pub fn rewrite_restart(text: &str, base: &str, step: u32) -> Result<RewriteOutcome, DeckError> {
    let lines = split_keep_ends(text);
    let records = find_restart_records(&lines)?;
    let had_restart = !records.is_empty();
    let eol = dominant_eol(text);

    let insert_at = match records.first() {
        Some(record) => record.start,
        None => insertion_point(&lines),
    };
    debug!(
        "{} RESTART record for step {step:04} at line {}",
        if had_restart { "replacing" } else { "adding" },
        insert_at + 1
    );

    let mut out = String::with_capacity(text.len() + 64);
    let mut emitted = false;
    let emit_record = |out: &mut String| {
        out.push_str("RESTART");
        out.push_str(eol);
        out.push_str(&format!(" {base} {step:04} /"));
        out.push_str(eol);
        if !had_restart {
            out.push_str(eol);
        }
    };
    for (idx, line) in lines.iter().enumerate() {
        if idx == insert_at {
            emit_record(&mut out);
            emitted = true;
        }
        if records.iter().any(|r| r.contains(&idx)) {
            continue;
        }
        out.push_str(line);
    }
    if !emitted {
        emit_record(&mut out);
    }

    let changed = out != text;
    Ok(RewriteOutcome {
        text: out,
        changed,
        had_restart,
    })
}
