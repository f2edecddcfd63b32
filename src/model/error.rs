//! Error types for the flextab application.
//!
//! A small `thiserror` hierarchy: [`AppError`] is the top-level type main
//! logic returns, composing input, parse, and terminal failures via `From`.
//!
//! Parse errors are non-fatal: a malformed row line is logged and skipped so
//! the table keeps working with partial data. Input and terminal errors are
//! fatal and propagate to the top-level handler.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error encompassing all failure modes.
#[derive(Debug, Error)]
pub enum AppError {
    /// Failed to read row data from file or stdin. Fatal.
    #[error("Failed to read input: {0}")]
    InputRead(#[from] InputError),

    /// Failed to parse a row line. Non-fatal at the ingestion boundary;
    /// surfaces here only if a caller chooses to escalate.
    #[error("Failed to parse row: {0}")]
    Parse(#[from] ParseError),

    /// Terminal or TUI rendering error. Fatal.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Errors encountered when reading row input from files or stdin.
#[derive(Debug, Error)]
pub enum InputError {
    /// The specified row file does not exist.
    #[error("File not found: {path}")]
    FileNotFound {
        /// Path that was attempted.
        path: PathBuf,
    },

    /// No file argument was given and stdin is an interactive terminal.
    #[error("No input source: provide a file path, pipe rows via stdin, or pass --sample N")]
    NoInput,

    /// Generic I/O failure (permissions, disk errors, broken pipes).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors encountered when parsing a single row line.
///
/// Every variant carries the 1-based line number so diagnostics can point at
/// the offending input.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParseError {
    /// Line is not valid JSON.
    #[error("Line {line}: invalid JSON: {reason}")]
    InvalidJson {
        /// 1-based line number.
        line: usize,
        /// Parser diagnostic.
        reason: String,
    },

    /// Line parsed but is not a JSON object.
    #[error("Line {line}: expected a JSON object, got {found}")]
    NotAnObject {
        /// 1-based line number.
        line: usize,
        /// What the line actually contained.
        found: String,
    },

    /// Row object has no usable numeric `id` field.
    #[error("Line {line}: row is missing a numeric `id` field")]
    MissingId {
        /// 1-based line number.
        line: usize,
    },
}
