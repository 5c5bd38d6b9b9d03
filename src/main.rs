use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use payroll_tools::config::{ReportConfig, RowPolicy};
use payroll_tools::pipeline;
use payroll_tools::{ReportError, Result};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    if let Err(error) = run(cli) {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    init_logging(cli.verbose)?;

    let mut config = match &cli.config {
        Some(path) => ReportConfig::from_json_file(path)?,
        None => ReportConfig::default(),
    };
    if let Some(policy) = cli.row_policy {
        config.row_policy = policy.into();
    }

    let report = pipeline::select_report(&cli.report, &config)?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    pipeline::generate_report(&cli.files, &report, &config, &mut handle)?;
    handle.flush()?;
    Ok(())
}

fn init_logging(verbose: bool) -> Result<()> {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init()
        .map_err(|err| ReportError::Logging(err.to_string()))
}

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Merge employee CSV files and print a payout report."
)]
struct Cli {
    /// Employee CSV files to merge.
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Report type to print.
    #[arg(long)]
    report: String,

    /// JSON file overriding the standard columns, report choices, data
    /// directory, currency marker, or row policy.
    #[arg(long)]
    config: Option<PathBuf>,

    /// How rows whose field count differs from the header are handled.
    #[arg(long, value_enum)]
    row_policy: Option<RowPolicyArg>,

    /// Log debug details to stderr.
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum RowPolicyArg {
    Truncate,
    FillMissing,
    Reject,
}

impl From<RowPolicyArg> for RowPolicy {
    fn from(arg: RowPolicyArg) -> Self {
        match arg {
            RowPolicyArg::Truncate => RowPolicy::Truncate,
            RowPolicyArg::FillMissing => RowPolicy::FillMissing,
            RowPolicyArg::Reject => RowPolicy::Reject,
        }
    }
}
