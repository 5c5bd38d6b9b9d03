use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::Result;

/// Report selector implemented by the core.
pub const PAYOUT_REPORT: &str = "payout";

/// Header names that are never the salary column.
pub const DEFAULT_STANDARD_COLUMNS: [&str; 6] =
    ["id", "email", "name", "department", "hours_worked", "age"];

/// The fixed set of known non-salary headers used to infer the salary column
/// by elimination. Names are stored lowercased.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "Vec<String>")]
pub struct StandardColumns {
    names: BTreeSet<String>,
}

impl StandardColumns {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            names: names
                .into_iter()
                .map(|name| name.as_ref().trim().to_lowercase())
                .collect(),
        }
    }

    /// Case-insensitive membership test.
    pub fn contains(&self, header: &str) -> bool {
        self.names.contains(&header.trim().to_lowercase())
    }
}

impl Default for StandardColumns {
    fn default() -> Self {
        Self::new(DEFAULT_STANDARD_COLUMNS)
    }
}

impl From<Vec<String>> for StandardColumns {
    fn from(names: Vec<String>) -> Self {
        Self::new(names)
    }
}

/// How a data row is paired with the header when the field counts differ.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RowPolicy {
    /// Extra values are dropped and missing trailing keys are left absent.
    #[default]
    Truncate,
    /// Extra values are dropped and missing trailing keys are set to "".
    FillMissing,
    /// Any mismatch fails the load.
    Reject,
}

/// Report requested on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportKind {
    Payout,
    /// A configured selector with no renderer in the core.
    Other(String),
}

impl ReportKind {
    pub fn from_selector(name: &str) -> Self {
        if name == PAYOUT_REPORT {
            ReportKind::Payout
        } else {
            ReportKind::Other(name.to_string())
        }
    }
}

/// Process-wide settings handed explicitly to the loader and the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub standard_columns: StandardColumns,
    pub report_choices: Vec<String>,
    /// Directory that relative input paths are resolved against.
    pub data_dir: Option<PathBuf>,
    /// Marker prefixed to monetary cells.
    pub currency: String,
    pub row_policy: RowPolicy,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            standard_columns: StandardColumns::default(),
            report_choices: vec![PAYOUT_REPORT.to_string()],
            data_dir: None,
            currency: "$".to_string(),
            row_policy: RowPolicy::default(),
        }
    }
}

impl ReportConfig {
    /// Loads a JSON configuration file. Keys that are absent keep their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let source = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&source)?)
    }

    /// Resolves an input path against `data_dir` when it is relative.
    pub fn resolve_input(&self, path: &Path) -> PathBuf {
        match &self.data_dir {
            Some(dir) if path.is_relative() => dir.join(path),
            _ => path.to_path_buf(),
        }
    }

    pub fn allows_report(&self, name: &str) -> bool {
        self.report_choices.iter().any(|choice| choice == name)
    }
}
