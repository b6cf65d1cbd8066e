use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::invariants::Method;

// Access log timestamp: 10/Jul/2018:22:21:28 +0200
const TS_FORMAT: &str = "%d/%b/%Y:%H:%M:%S %z";

/// One well-formed request line from an access log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub ip: String,
    /// Kept exactly as it appeared between the brackets.
    pub timestamp: String,
    pub method: Method,
    pub url: String,
    pub protocol: String,
    pub status_code: u16,
    pub response_size: u64,
}

impl LogEntry {
    /// Requests below 400 count as visits; redirects included.
    pub fn is_success(&self) -> bool {
        self.status_code < 400
    }

    /// Interprets the raw timestamp, `None` when the calendar values are impossible.
    pub fn time(&self) -> Option<DateTime<FixedOffset>> {
        DateTime::parse_from_str(&self.timestamp, TS_FORMAT).ok()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlCount {
    pub url: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IpCount {
    pub ip: String,
    pub count: usize,
}

/// Summary of one analysis run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogStats {
    pub unique_ip_count: usize,
    pub top_urls: Vec<UrlCount>,
    pub top_ips: Vec<IpCount>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use asserting::prelude::*;
    use chrono::{TimeZone, Utc};

    fn entry(timestamp: &str, status_code: u16) -> LogEntry {
        LogEntry {
            ip: "177.71.128.21".into(),
            timestamp: timestamp.into(),
            method: Method::Get,
            url: "/intranet-analytics/".into(),
            protocol: "HTTP/1.1".into(),
            status_code,
            response_size: 3574,
        }
    }

    #[test]
    fn time_applies_offset() {
        let parsed = entry("10/Jul/2018:22:21:28 +0200", 200).time();
        assert_that!(parsed.map(|t| t.with_timezone(&Utc)))
            .is_equal_to(Some(Utc.with_ymd_and_hms(2018, 7, 10, 20, 21, 28).unwrap()));
    }

    #[test]
    fn time_is_none_for_unknown_month() {
        assert_that!(entry("10/Foo/2018:22:21:28 +0200", 200).time()).is_none();
    }

    #[test]
    fn redirects_are_successes_client_errors_are_not() {
        assert!(entry("10/Jul/2018:22:21:28 +0200", 307).is_success());
        assert!(entry("10/Jul/2018:22:21:28 +0200", 399).is_success());
        assert!(!entry("10/Jul/2018:22:21:28 +0200", 400).is_success());
        assert!(!entry("10/Jul/2018:22:21:28 +0200", 500).is_success());
    }
}
