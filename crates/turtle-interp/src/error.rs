//! Error types for command interpretation.

use thiserror::Error;

/// A rejected command line.
///
/// Every rejection is a no-op on the canvas and carries the full
/// user-facing message; the variant records which class of failure
/// occurred. The "argument missing" / "argument malformed" distinction is
/// deliberate and preserved per operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// The first token matched no known command name.
    #[error("Unknown command: {0}")]
    Unknown(String),

    /// A required argument was absent (or the argument count was wrong).
    #[error("{0}")]
    MissingArgument(String),

    /// An argument was present but did not parse as an integer, or named
    /// an unknown option.
    #[error("{0}")]
    MalformedArgument(String),

    /// An argument parsed but fell outside the operation's valid range.
    #[error("{0}")]
    OutOfRange(String),

    /// A geometric constraint failed: the projected move would leave the
    /// canvas, or the side lengths violate the triangle inequality.
    #[error("{0}")]
    Geometry(String),

    /// A persistence collaborator failed; in-memory state is unchanged.
    #[error("{0}")]
    Io(String),
}
