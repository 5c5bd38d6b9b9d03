use std::path::Path;

use tracing::{info, instrument};

use crate::config::ReportConfig;
use crate::error::Result;
use crate::io::csv_read::load_records;
use crate::model::EmployeeRecord;

/// Loads every file in order and returns all records sorted by department.
///
/// The sort is stable, so records in the same department keep file order and
/// then row order. The first failing file aborts the whole aggregation.
#[instrument(level = "info", skip_all, fields(file_count = paths.len()))]
pub fn aggregate<P: AsRef<Path>>(paths: &[P], config: &ReportConfig) -> Result<Vec<EmployeeRecord>> {
    let mut records = Vec::new();
    for path in paths {
        records.extend(load_records(path.as_ref(), config)?);
    }
    records.sort_by(|lhs, rhs| lhs.department().cmp(rhs.department()));
    info!(record_count = records.len(), "aggregated employee records");
    Ok(records)
}
