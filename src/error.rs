use std::path::PathBuf;

use thiserror::Error;

/// Convenient alias for fallible results returned throughout the crate.
pub type Result<T> = std::result::Result<T, ReportError>;

/// Error type covering the failures that abort a report run.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Wrapper for IO failures other than a missing input file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Raised when the CSV reader fails, e.g. on invalid UTF-8.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Raised when a configuration file is not valid JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Raised when a named input file does not exist.
    #[error("input file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// Raised when a file's header does not yield a salary column.
    #[error("invalid header in {}: {source}", path.display())]
    Schema {
        path: PathBuf,
        #[source]
        source: SchemaError,
    },

    /// Raised under the `reject` row policy when a row's field count differs
    /// from the header.
    #[error(
        "malformed row at {}:{line}: expected {expected} fields, found {found}",
        path.display()
    )]
    MalformedRow {
        path: PathBuf,
        line: u64,
        expected: usize,
        found: usize,
    },

    /// Raised when the requested report type is not one of the configured choices.
    #[error("unknown report type '{requested}' (expected one of: {})", allowed.join(", "))]
    UnknownReport {
        requested: String,
        allowed: Vec<String>,
    },

    /// Raised when the tracing subscriber fails to initialise.
    #[error("failed to initialise logging: {0}")]
    Logging(String),
}

/// Failures of salary column inference on a single header row.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// The file does not contain a header line.
    #[error("file has no header line")]
    EmptyHeader,

    /// Every header is a standard column, so none can be the salary.
    #[error("no non-standard column found among [{}]", headers.join(", "))]
    NoSalaryColumn { headers: Vec<String> },
}
