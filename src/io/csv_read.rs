use std::fs::File;
use std::io;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use tracing::{debug, instrument};

use crate::config::{ReportConfig, RowPolicy};
use crate::error::{ReportError, Result, SchemaError};
use crate::model::{EmployeeRecord, SALARY};
use crate::normalize::detect_salary_column;

const BOM: char = '\u{feff}';

/// Reads one employee CSV file into records, relabelling its salary column
/// to [`SALARY`].
///
/// Fields are split on bare commas; quoting and escaping are not recognised.
/// Relative paths are resolved against [`ReportConfig::data_dir`].
#[instrument(level = "debug", skip_all, fields(path = %path.display()))]
pub fn load_records(path: &Path, config: &ReportConfig) -> Result<Vec<EmployeeRecord>> {
    let resolved = config.resolve_input(path);
    let file = File::open(&resolved).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => ReportError::FileNotFound(resolved.clone()),
        _ => ReportError::Io(err),
    })?;
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(file);
    let mut rows = reader.records();

    let mut headers: Vec<String> = match rows.next().transpose()? {
        Some(record) => record.iter().map(str::to_string).collect(),
        None => Vec::new(),
    };
    if let Some(first) = headers.first_mut() {
        *first = first.trim_start_matches(BOM).to_string();
    }
    let salary_index = detect_salary_column(&headers, &config.standard_columns).map_err(
        |source: SchemaError| ReportError::Schema {
            path: resolved.clone(),
            source,
        },
    )?;
    debug!(column = %headers[salary_index], index = salary_index, "detected salary column");
    headers[salary_index] = SALARY.to_string();

    let mut records = Vec::new();
    for row in rows {
        let row = row?;
        if row.iter().all(|field| field.trim().is_empty()) {
            continue;
        }
        if row.len() != headers.len() && config.row_policy == RowPolicy::Reject {
            return Err(ReportError::MalformedRow {
                path: resolved,
                line: row.position().map_or(0, |position| position.line()),
                expected: headers.len(),
                found: row.len(),
            });
        }
        records.push(pair_fields(&headers, &row, config.row_policy));
    }

    debug!(record_count = records.len(), "loaded records");
    Ok(records)
}

/// Builds a record by pairing values with headers positionally.
///
/// Values past the last header are always dropped; headers past the last
/// value are left out unless the policy fills them with "".
fn pair_fields(headers: &[String], row: &StringRecord, policy: RowPolicy) -> EmployeeRecord {
    let mut values: Vec<String> = row.iter().map(str::to_string).collect();
    if policy == RowPolicy::FillMissing && values.len() < headers.len() {
        values.resize(headers.len(), String::new());
    }
    headers.iter().cloned().zip(values).collect()
}
