use std::io::{self, Write};

use chrono::{DateTime, FixedOffset, Local, TimeDelta, TimeZone};
use rand::Rng;

use crate::args::{CliArgs, LogFormat};
use crate::generator::{generate_combined_log, generate_common_log, generate_malformed_line};

const MAX_STEP_SECS: i64 = 5;

/// Seeded runs start from a fixed moment so their output is byte-for-byte repeatable.
pub fn start_time(seed: Option<u64>) -> DateTime<FixedOffset> {
    let fixed = seed.and_then(|_| {
        FixedOffset::east_opt(2 * 3600)?
            .with_ymd_and_hms(2018, 7, 9, 10, 0, 0)
            .single()
    });
    fixed.unwrap_or_else(|| Local::now().fixed_offset())
}

pub fn write_log_stream<W: Write, R: Rng + ?Sized>(
    mut sink: W,
    rng: &mut R,
    args: &CliArgs,
    start: DateTime<FixedOffset>,
) -> io::Result<()> {
    let mut at = start;
    for _ in 0..*args.count() {
        let line = if rng.random_bool(*args.malformed_ratio()) {
            generate_malformed_line(rng)
        } else {
            match args.format() {
                LogFormat::Common => generate_common_log(rng, &at),
                LogFormat::Combined => generate_combined_log(rng, &at),
            }
        };
        writeln!(sink, "{line}")?;
        at += TimeDelta::seconds(rng.random_range(0..MAX_STEP_SECS));
    }
    sink.flush()
}
