//! Trace Loader.
//!
//! Reads memory access traces from disk. Each non-blank line holds one record:
//!
//! ```text
//! <kind> <address>
//! ```
//!
//! where `kind` is `l` (load) or `s` (store) and `address` is hexadecimal, with or without
//! a `0x` prefix. Fields after the address are ignored. Blank lines are skipped and do not
//! take a trace position. The whole file is parsed before replay starts, so a bad record
//! aborts the run without producing statistics.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::common::{AccessKind, SimError, SimResult, TraceRecord};

/// Parses a single trace line.
///
/// # Arguments
///
/// * `line` - Raw line text (trailing newline allowed).
/// * `line_no` - 1-based line number, used in error messages.
///
/// # Returns
///
/// `None` for a blank line, otherwise the parsed record.
///
/// # Errors
///
/// Returns [`SimError::InvalidAccessKind`] if the kind is not `l` or `s`, and
/// [`SimError::MalformedRecord`] if the address is missing or not hexadecimal.
pub fn parse_record(line: &str, line_no: usize) -> SimResult<Option<TraceRecord>> {
    let mut fields = line.split_whitespace();
    let Some(kind) = fields.next() else {
        return Ok(None);
    };
    let kind: AccessKind = kind.parse().map_err(|e: SimError| e.at_line(line_no))?;
    let addr = fields.next().ok_or_else(|| SimError::MalformedRecord {
        line: line_no,
        reason: "missing address".to_string(),
    })?;
    let addr = parse_hex(addr).ok_or_else(|| SimError::MalformedRecord {
        line: line_no,
        reason: format!("\"{addr}\" is not a hexadecimal address"),
    })?;
    Ok(Some(TraceRecord::new(kind, addr)))
}

/// Parses a hexadecimal address with an optional `0x`/`0X` prefix.
fn parse_hex(token: &str) -> Option<u64> {
    let digits = token
        .strip_prefix("0x")
        .or_else(|| token.strip_prefix("0X"))
        .unwrap_or(token);
    u64::from_str_radix(digits, 16).ok()
}

/// Parses every record from `reader`.
///
/// # Arguments
///
/// * `reader` - Source of trace lines.
/// * `origin` - Path reported if reading fails.
///
/// # Errors
///
/// Returns the first record error, or [`SimError::Io`] if a line cannot be read.
pub fn parse_trace<R: BufRead>(reader: R, origin: &Path) -> SimResult<Vec<TraceRecord>> {
    let mut records = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| SimError::Io {
            path: origin.to_path_buf(),
            source,
        })?;
        if let Some(record) = parse_record(&line, i + 1)? {
            records.push(record);
        }
    }
    Ok(records)
}

/// Loads and parses a trace file.
///
/// # Errors
///
/// Returns [`SimError::Io`] if the file cannot be opened or read, otherwise as
/// [`parse_trace`].
pub fn load_trace(path: &Path) -> SimResult<Vec<TraceRecord>> {
    let file = File::open(path).map_err(|source| SimError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let records = parse_trace(BufReader::new(file), path)?;
    tracing::debug!(path = %path.display(), records = records.len(), "loaded trace");
    Ok(records)
}
