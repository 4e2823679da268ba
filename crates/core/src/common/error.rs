//! Simulator error definitions.
//!
//! Every error is terminal for the run that raised it: the simulation is a deterministic
//! computation over a complete trace, so nothing is retried and no partial statistics are
//! reported. The variants fall into three groups:
//! 1. **Input errors:** Bad trace records, unknown policy names, invalid configuration.
//! 2. **I/O errors:** The trace or configuration file cannot be read or parsed.
//! 3. **Internal errors:** Broken frame-table or policy bookkeeping. These signal a bug in
//!    the paging core, never bad input.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use super::addr::PageNumber;
use super::data::Timestamp;

/// Result alias used throughout the crate.
pub type SimResult<T> = Result<T, SimError>;

/// Errors raised while configuring or running a simulation.
#[derive(Debug, Error)]
pub enum SimError {
    /// A trace record's access kind is neither `l` nor `s`.
    #[error("invalid access type \"{kind}\" on line {line}, expected \"l\" or \"s\"")]
    InvalidAccessKind {
        /// The offending token.
        kind: String,
        /// 1-based line number in the trace file.
        line: usize,
    },

    /// A trace line is missing its address or the address is not hexadecimal.
    #[error("malformed trace record on line {line}: {reason}")]
    MalformedRecord {
        /// 1-based line number in the trace file.
        line: usize,
        /// What was wrong with the line.
        reason: String,
    },

    /// Unrecognized eviction policy name.
    #[error("invalid eviction type \"{0}\", should be \"opt\", \"lru\", or \"second\"")]
    InvalidPolicy(String),

    /// Configuration values outside their valid range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// An OPT frame table was requested without a future-access index.
    #[error("the opt policy requires a future-access index built from the trace")]
    MissingFutureIndex,

    /// No free frame was found right after an eviction.
    #[error("internal invariant violated: {0}")]
    InternalInvariantViolation(&'static str),

    /// OPT asked for the next use of a page that is never referenced again.
    #[error("page {page} has no reference after trace position {index}")]
    FutureLookupUnreachable {
        /// Page whose next use was requested.
        page: PageNumber,
        /// Trace position the lookup started from.
        index: Timestamp,
    },

    /// The trace or configuration file could not be read.
    #[error("could not read '{}': {source}", .path.display())]
    Io {
        /// File being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The JSON configuration could not be parsed.
    #[error("invalid JSON configuration: {0}")]
    Json(#[from] serde_json::Error),
}

impl SimError {
    /// Returns `true` for errors that indicate a bug in the paging core rather than bad input.
    pub const fn is_internal(&self) -> bool {
        matches!(
            self,
            Self::InternalInvariantViolation(_) | Self::FutureLookupUnreachable { .. }
        )
    }

    /// Attaches a trace line number to errors raised while parsing a single record.
    pub(crate) fn at_line(self, line: usize) -> Self {
        match self {
            Self::InvalidAccessKind { kind, .. } => Self::InvalidAccessKind { kind, line },
            Self::MalformedRecord { reason, .. } => Self::MalformedRecord { line, reason },
            other => other,
        }
    }
}
