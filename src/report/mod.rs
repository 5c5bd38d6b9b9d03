//! Text reports rendered from aggregated employee records.

pub mod payout;

pub use payout::{build_payout_table, print_payout_report, render_payout_report};
