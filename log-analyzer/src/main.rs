use std::{io, path::PathBuf};

use anyhow::Result;
use clap::{Parser, ValueEnum, builder::RangedU64ValueParser};
use log_analyzer::{TOP_N, analyse_top, ingest, report};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Copy, Clone, Debug, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(version, about = "Summarise a Common/Combined Log Format access log", long_about = None)]
struct Args {
    /// Access log to analyse
    #[arg(default_value = "programming-task-example-data.log")]
    path: PathBuf,

    /// Rows to keep in each ranking
    #[arg(long, default_value_t = TOP_N, value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
    top: usize,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Used when RUST_LOG is unset
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(&args.log_level);

    let parsed = ingest::read_log(&args.path)?;
    let stats = analyse_top(&parsed.entries, args.top);
    info!(
        path = %args.path.display(),
        unique_ips = stats.unique_ip_count,
        "analysis complete"
    );

    let stdout = io::stdout().lock();
    match args.format {
        OutputFormat::Text => report::write_text(&stats, args.top, stdout)?,
        OutputFormat::Json => report::write_json(&stats, stdout)?,
    }
    Ok(())
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
