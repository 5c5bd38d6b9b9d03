use tracing::warn;

use crate::config::StandardColumns;
use crate::error::SchemaError;

/// Finds the position of the salary column in a header row.
///
/// The salary column is the header that is not part of `standard`, compared
/// case-insensitively. When several headers qualify, the first one in header
/// order wins and the ambiguity is logged.
pub fn detect_salary_column(
    headers: &[String],
    standard: &StandardColumns,
) -> Result<usize, SchemaError> {
    if headers.iter().all(|header| header.trim().is_empty()) {
        return Err(SchemaError::EmptyHeader);
    }

    let candidates: Vec<usize> = headers
        .iter()
        .enumerate()
        .filter(|(_, header)| !header.trim().is_empty() && !standard.contains(header))
        .map(|(index, _)| index)
        .collect();

    match candidates.as_slice() {
        [] => Err(SchemaError::NoSalaryColumn {
            headers: headers.to_vec(),
        }),
        [index] => Ok(*index),
        [first, ..] => {
            let names: Vec<&str> = candidates.iter().map(|i| headers[*i].as_str()).collect();
            warn!(
                candidates = ?names,
                chosen = %headers[*first],
                "several non-standard columns; using the first as salary"
            );
            Ok(*first)
        }
    }
}
