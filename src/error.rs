//! Error types and handling

use std::io;
use std::process::ExitStatus;
use thiserror::Error;

/// Errors raised by the harness itself, as opposed to assertion failures.
///
/// Content mismatches found by an oracle are reported through
/// [`Mismatch`](crate::oracle::Mismatch) instead, so that a broken tool is never
/// confused with a wrong symbol.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{tool} is not available")]
    ToolUnavailable { tool: &'static str },

    #[error("{tool} failed ({status}): {stderr}")]
    Subprocess {
        tool: &'static str,
        status: ExitStatus,
        stderr: String,
    },

    #[error("{tool} produced unexpected output: {reason}")]
    Protocol { tool: &'static str, reason: String },

    #[error("invalid escape sequence at position {position}: {reason}")]
    InvalidEscape { position: usize, reason: &'static str },

    #[error("invalid index selector '{0}'")]
    InvalidSelector(String),

    #[error("invalid debug mask '{0}'")]
    InvalidDebugMask(String),

    #[error("image error: {0}")]
    Image(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
