use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use derive_getters::Getters;

#[derive(Parser, Debug, Getters)]
#[command(name = "noise-maker")]
#[command(about = "Generate synthetic access logs for the analyzer", long_about = None)]
pub struct CliArgs {
    /// Number of lines to write
    #[arg(long, default_value_t = 1000)]
    count: usize,

    /// Makes the output reproducible, timestamps included
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long, value_enum, default_value_t = LogFormat::Combined)]
    format: LogFormat,

    /// Share of lines that will not match the access log format
    #[arg(long, default_value_t = 0.0, value_parser = parse_ratio)]
    malformed_ratio: f64,

    /// Write to this file instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum LogFormat {
    Common,
    Combined,
}

fn parse_ratio(s: &str) -> Result<f64, String> {
    let ratio: f64 = s.parse().map_err(|e| format!("{e}"))?;
    if (0.0..=1.0).contains(&ratio) {
        Ok(ratio)
    } else {
        Err(format!("{ratio} is not between 0 and 1"))
    }
}
