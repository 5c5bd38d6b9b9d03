//! Core library for the payroll-tools command line application.
//!
//! Employee CSV files are read by [`io::csv_read`], which relabels each file's
//! salary column (found by [`normalize`]) to a canonical name. [`aggregate`]
//! merges and orders the records, and [`report`] renders them. The
//! [`pipeline`] module ties the stages together for the CLI.

pub mod aggregate;
pub mod config;
pub mod error;
pub mod io;
pub mod model;
pub mod normalize;
pub mod pipeline;
pub mod report;

pub use error::{ReportError, Result, SchemaError};
