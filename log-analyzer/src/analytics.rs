use std::collections::HashMap;

use crate::models::{IpCount, LogEntry, LogStats, UrlCount};

/// Number of ranked rows in a default summary.
pub const TOP_N: usize = 3;

/// Counts keys while remembering the order each key was first seen.
#[derive(Debug, Default)]
struct OrderedCounter {
    index: HashMap<String, usize>,
    counts: Vec<(String, usize)>,
}

impl OrderedCounter {
    fn record(&mut self, key: &str) {
        match self.index.get(key) {
            Some(&slot) => self.counts[slot].1 += 1,
            None => {
                self.index.insert(key.to_string(), self.counts.len());
                self.counts.push((key.to_string(), 1));
            }
        }
    }

    fn distinct(&self) -> usize {
        self.counts.len()
    }

    fn top(&self, n: usize) -> Vec<(String, usize)> {
        let mut entries = self.counts.clone();
        // stable: equal counts stay in first-seen order
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries.truncate(n);
        entries
    }
}

/// Running totals over a sequence of log entries.
#[derive(Debug, Default)]
pub struct Analytics {
    paths: OrderedCounter,
    hosts: OrderedCounter,
}

impl Analytics {
    pub fn record(&mut self, entry: &LogEntry) {
        self.record_host(&entry.ip);
        if entry.is_success() {
            self.record_path(&entry.url);
        }
    }
    pub fn record_path(&mut self, path: &str) {
        self.paths.record(path);
    }
    pub fn record_host(&mut self, host: &str) {
        self.hosts.record(host);
    }

    pub fn unique_hosts(&self) -> usize {
        self.hosts.distinct()
    }
    pub fn top_path_frequency(&self, n: usize) -> Vec<UrlCount> {
        self.paths
            .top(n)
            .into_iter()
            .map(|(url, count)| UrlCount { url, count })
            .collect()
    }
    pub fn top_host_frequency(&self, n: usize) -> Vec<IpCount> {
        self.hosts
            .top(n)
            .into_iter()
            .map(|(ip, count)| IpCount { ip, count })
            .collect()
    }
    pub fn summarize(&self, n: usize) -> LogStats {
        LogStats {
            unique_ip_count: self.unique_hosts(),
            top_urls: self.top_path_frequency(n),
            top_ips: self.top_host_frequency(n),
        }
    }
}

/// Summarises entries with the top three urls and hosts.
pub fn analyse<'a>(entries: impl IntoIterator<Item = &'a LogEntry>) -> LogStats {
    analyse_top(entries, TOP_N)
}

/// Like [`analyse`] but keeps `n` rows in each ranking.
pub fn analyse_top<'a>(entries: impl IntoIterator<Item = &'a LogEntry>, n: usize) -> LogStats {
    let mut analytics = Analytics::default();
    for entry in entries {
        analytics.record(entry);
    }
    analytics.summarize(n)
}
