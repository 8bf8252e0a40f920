use clap::Parser;

pub mod report;

use crate::generator::{DEFAULT_RECORD_COUNT, DEFAULT_YEAR};

/// Generate a year of synthetic retail sales and print the quarterly
/// income report. Run with no flags for the standard 1000-record report.
#[derive(Parser)]
#[command(name = "quarterly", version)]
pub struct Cli {
    /// Seed for the random source; omit to seed from entropy
    #[arg(long)]
    pub seed: Option<u64>,

    /// Number of sales records to generate
    #[arg(long, default_value_t = DEFAULT_RECORD_COUNT)]
    pub records: usize,

    /// Calendar year the generated sales fall in
    #[arg(long, default_value_t = DEFAULT_YEAR)]
    pub year: i32,
}
