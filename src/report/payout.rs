use std::io::{self, Write};

use thiserror::Error;
use tracing::{instrument, warn};

use crate::error::Result;
use crate::model::{EmployeeRecord, HOURS_WORKED, SALARY};

/// Column labels of the payout table, in display order.
pub const PAYOUT_HEADERS: [&str; 5] = ["Department", "Name", "Hours", "Rate", "Payout"];

/// Reason a record was left out of the payout report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowError {
    #[error("missing {0} value")]
    MissingField(&'static str),

    #[error("{field} is not an integer: '{value}'")]
    InvalidNumber { field: &'static str, value: String },

    #[error("{field} must not be negative ({value})")]
    Negative { field: &'static str, value: i64 },

    #[error("payout overflows for {hours} hours at rate {salary}")]
    Overflow { hours: i64, salary: i64 },
}

/// A record excluded from the table together with the reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRecord {
    pub name: String,
    pub reason: RowError,
}

impl std::fmt::Display for SkippedRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.name.is_empty() {
            write!(f, "skipping employee record: {}", self.reason)
        } else {
            write!(f, "skipping employee record '{}': {}", self.name, self.reason)
        }
    }
}

/// One valid line of the payout report.
///
/// The Hours and Rate cells show the source text (trimmed); the parsed
/// values are kept alongside for the payout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayoutRow {
    pub department: String,
    pub name: String,
    pub hours_text: String,
    pub salary_text: String,
    pub hours_worked: i64,
    pub salary: i64,
    pub payout: i64,
}

impl PayoutRow {
    fn from_record(record: &EmployeeRecord) -> std::result::Result<Self, RowError> {
        let hours_worked = parse_field(record, HOURS_WORKED)?;
        let salary = parse_field(record, SALARY)?;
        check_non_negative(HOURS_WORKED, hours_worked)?;
        check_non_negative(SALARY, salary)?;
        let payout = hours_worked
            .checked_mul(salary)
            .ok_or(RowError::Overflow {
                hours: hours_worked,
                salary,
            })?;

        Ok(Self {
            department: record.department().to_string(),
            name: record.name().to_string(),
            hours_text: trimmed(record, HOURS_WORKED),
            salary_text: trimmed(record, SALARY),
            hours_worked,
            salary,
            payout,
        })
    }

    fn cells(&self, currency: &str) -> [String; 5] {
        [
            self.department.clone(),
            self.name.clone(),
            self.hours_text.clone(),
            format!("{currency}{}", self.salary_text),
            format!("{currency}{}", self.payout),
        ]
    }
}

fn parse_field(record: &EmployeeRecord, field: &'static str) -> std::result::Result<i64, RowError> {
    let raw = record.get(field).ok_or(RowError::MissingField(field))?;
    raw.trim().parse().map_err(|_| RowError::InvalidNumber {
        field,
        value: raw.to_string(),
    })
}

fn trimmed(record: &EmployeeRecord, field: &str) -> String {
    record.get(field).unwrap_or_default().trim().to_string()
}

fn check_non_negative(field: &'static str, value: i64) -> std::result::Result<(), RowError> {
    if value < 0 {
        Err(RowError::Negative { field, value })
    } else {
        Ok(())
    }
}

/// Valid payout rows plus the records that were skipped, both in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PayoutTable {
    pub rows: Vec<PayoutRow>,
    pub skipped: Vec<SkippedRecord>,
}

/// Computes the payout for every record. Invalid records never abort the
/// report; they are collected in [`PayoutTable::skipped`].
pub fn build_payout_table(records: &[EmployeeRecord]) -> PayoutTable {
    let mut table = PayoutTable::default();
    for record in records {
        match PayoutRow::from_record(record) {
            Ok(row) => table.rows.push(row),
            Err(reason) => {
                warn!(employee = record.name(), %reason, "skipping employee record");
                table.skipped.push(SkippedRecord {
                    name: record.name().to_string(),
                    reason,
                });
            }
        }
    }
    table
}

/// Writes one diagnostic line per skipped record followed by the payout table.
#[instrument(level = "debug", skip_all, fields(record_count = records.len()))]
pub fn render_payout_report<W: Write>(
    records: &[EmployeeRecord],
    currency: &str,
    out: &mut W,
) -> Result<()> {
    let table = build_payout_table(records);
    for skipped in &table.skipped {
        writeln!(out, "{skipped}")?;
    }

    let rows: Vec<[String; 5]> = table.rows.iter().map(|row| row.cells(currency)).collect();
    write_table(out, &PAYOUT_HEADERS.map(str::to_string), &rows)?;
    Ok(())
}

/// Renders the payout report to standard output.
pub fn print_payout_report(records: &[EmployeeRecord], currency: &str) -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    render_payout_report(records, currency, &mut handle)?;
    handle.flush()?;
    Ok(())
}

/// Width of each column: the longest cell in characters, header included.
fn column_widths<const N: usize>(headers: &[String; N], rows: &[[String; N]]) -> [usize; N] {
    let mut widths = headers.each_ref().map(|header| header.chars().count());
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }
    widths
}

fn write_table<W: Write, const N: usize>(
    out: &mut W,
    headers: &[String; N],
    rows: &[[String; N]],
) -> io::Result<()> {
    let widths = column_widths(headers, rows);
    let border = border_line(&widths);

    writeln!(out, "{border}")?;
    writeln!(out, "{}", table_row(headers, &widths))?;
    writeln!(out, "{border}")?;
    for row in rows {
        writeln!(out, "{}", table_row(row, &widths))?;
    }
    writeln!(out, "{border}")
}

fn border_line(widths: &[usize]) -> String {
    let segments: Vec<String> = widths.iter().map(|width| "-".repeat(width + 2)).collect();
    format!("+{}+", segments.join("+"))
}

fn table_row(cells: &[String], widths: &[usize]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect();
    format!("| {} |", padded.join(" | "))
}
