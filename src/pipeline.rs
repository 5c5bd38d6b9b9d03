use std::io::Write;
use std::path::Path;

use tracing::{info, instrument, warn};

use crate::aggregate::aggregate;
use crate::config::{ReportConfig, ReportKind};
use crate::error::{ReportError, Result};
use crate::report::render_payout_report;

/// Checks a report selector against the configured choices.
pub fn select_report(name: &str, config: &ReportConfig) -> Result<ReportKind> {
    if !config.allows_report(name) {
        return Err(ReportError::UnknownReport {
            requested: name.to_string(),
            allowed: config.report_choices.clone(),
        });
    }
    Ok(ReportKind::from_selector(name))
}

/// Aggregates the given files and writes the selected report to `out`.
#[instrument(level = "info", skip_all, fields(?report, file_count = paths.len()))]
pub fn generate_report<P: AsRef<Path>, W: Write>(
    paths: &[P],
    report: &ReportKind,
    config: &ReportConfig,
    out: &mut W,
) -> Result<()> {
    let records = aggregate(paths, config)?;
    match report {
        ReportKind::Payout => {
            render_payout_report(&records, &config.currency, out)?;
            info!(record_count = records.len(), "payout report written");
        }
        ReportKind::Other(name) => {
            warn!(report = %name, "report type has no renderer; nothing written");
        }
    }
    Ok(())
}
