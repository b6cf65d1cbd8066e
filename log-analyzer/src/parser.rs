use std::sync::LazyLock;

use regex::Regex;

use crate::models::LogEntry;

// 177.71.128.21 - - [10/Jul/2018:22:21:28 +0200] "GET /intranet-analytics/ HTTP/1.1" 200 3574
// The identity field between `-` and `[` is matched but not captured.
static LINE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^([0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3})",
        r"\s+-\s+[^\[]*?\s+",
        r"\[([0-9]{2}/[A-Za-z]{3}/[0-9]{4}:[0-9]{2}:[0-9]{2}:[0-9]{2}\s+[+-][0-9]{4})\]",
        r#"\s+"(GET|POST|PUT|DELETE|HEAD|OPTIONS|PATCH)\s+(\S+)\s+(HTTP/[0-9]\.[0-9])""#,
        r"\s+([0-9]{3})\s+([0-9]+)",
    ))
    .expect("access log pattern is valid")
});

/// Parses one access log line, `None` when it does not match the format.
///
/// Anything after the response size (referrer, user agent) is ignored.
pub fn parse_line(line: &str) -> Option<LogEntry> {
    let caps = LINE_PATTERN.captures(line)?;
    Some(LogEntry {
        ip: caps[1].to_string(),
        timestamp: caps[2].to_string(),
        method: caps[3].parse().ok()?,
        url: caps[4].to_string(),
        protocol: caps[5].to_string(),
        status_code: caps[6].parse().ok()?,
        response_size: caps[7].parse().ok()?,
    })
}
