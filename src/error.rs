//! trace2dox error types
//!
//! Uses anyhow for error propagation. Trace2DoxError covers the failures that
//! need a specific exit code and a diagnostic log entry in main.rs.

use std::path::PathBuf;

/// Exit status for every fatal error the tool knows about.
pub const FATAL_EXIT_CODE: i32 = 2;

/// Semantic errors raised by the pipeline stages.
#[derive(Debug)]
pub enum Trace2DoxError {
    /// The configuration file could not be opened
    ConfigNotFound { path: PathBuf },
    /// No configuration layer defined `traceid`
    MissingTraceId { path: PathBuf },
    /// A `traceid` or `namespace` value is not a valid regular expression
    InvalidPattern {
        key: &'static str,
        pattern: String,
        error: String,
    },
    /// The config file set `logic` to an unsupported mode
    InvalidLogic { value: String },
    /// The input trace log could not be opened
    InputNotFound { path: PathBuf },
    /// Reading the input trace log failed part way through
    InputRead { path: PathBuf, error: String },
    /// The output file could not be opened or written
    OutputWrite { path: PathBuf, error: String },
    /// A cleaned trace did not match the message grammar
    ParseError { trace: String },
}

impl std::fmt::Display for Trace2DoxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Trace2DoxError::ConfigNotFound { path } => {
                write!(f, "Configuration file {} not found!", path.display())
            }
            Trace2DoxError::MissingTraceId { path } => write!(
                f,
                "No traceid defined; add a `traceid:` line to {}",
                path.display()
            ),
            Trace2DoxError::InvalidPattern {
                key,
                pattern,
                error,
            } => write!(f, "Invalid {key} pattern '{pattern}': {error}"),
            Trace2DoxError::InvalidLogic { value } => write!(
                f,
                "Invalid logic '{value}' (expected AND, OR, NOT, NAND or XOR)"
            ),
            Trace2DoxError::InputNotFound { path } => {
                write!(f, "Input file {} not found!", path.display())
            }
            Trace2DoxError::InputRead { path, error } => {
                write!(f, "Failed to read {}: {error}", path.display())
            }
            Trace2DoxError::OutputWrite { path, error } => write!(
                f,
                "Failed to open {} for writing! Exiting... ({error})",
                path.display()
            ),
            Trace2DoxError::ParseError { trace } => {
                write!(f, "Trace '{trace}' is not of the form <entity><arrow><entity>")
            }
        }
    }
}

impl std::error::Error for Trace2DoxError {}

/// Extract the process exit code for an error, if it is one of ours.
pub fn exit_code(err: &anyhow::Error) -> Option<i32> {
    err.downcast_ref::<Trace2DoxError>()
        .map(|_| FATAL_EXIT_CODE)
}
