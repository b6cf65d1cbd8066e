//! Renders a [`LogStats`] summary for people or for other tools.

use std::io::{self, Write};

use num_format::{Locale, ToFormattedString};

use crate::models::LogStats;

fn unit<'a>(count: usize, singular: &'a str, plural: &'a str) -> &'a str {
    if count == 1 { singular } else { plural }
}

/// Writes the plain-text report; `top` is the ranking width used for the headings.
pub fn write_text<W: Write>(stats: &LogStats, top: usize, mut sink: W) -> io::Result<()> {
    writeln!(sink, "Log Analysis Results:")?;
    writeln!(sink, "---------------------")?;
    writeln!(
        sink,
        "Number of unique IP addresses: {}",
        stats.unique_ip_count.to_formatted_string(&Locale::en)
    )?;

    writeln!(sink, "\nTop {top} most visited URLs:")?;
    for (rank, item) in stats.top_urls.iter().enumerate() {
        writeln!(
            sink,
            "{}. {} ({} {})",
            rank + 1,
            item.url,
            item.count.to_formatted_string(&Locale::en),
            unit(item.count, "visit", "visits")
        )?;
    }

    writeln!(sink, "\nTop {top} most active IP addresses:")?;
    for (rank, item) in stats.top_ips.iter().enumerate() {
        writeln!(
            sink,
            "{}. {} ({} {})",
            rank + 1,
            item.ip,
            item.count.to_formatted_string(&Locale::en),
            unit(item.count, "request", "requests")
        )?;
    }
    Ok(())
}

pub fn write_json<W: Write>(stats: &LogStats, mut sink: W) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut sink, stats)?;
    writeln!(sink)
}
