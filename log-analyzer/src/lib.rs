//! Summaries of Common/Combined Log Format access logs.
//!
//! [`parse_line`] turns one raw line into a [`LogEntry`]; [`analyse`] ranks a
//! sequence of entries into [`LogStats`]. Both are pure. Reading files lives in
//! [`ingest`] and rendering in [`report`].

pub mod analytics;
pub mod ingest;
pub mod invariants;
pub mod models;
pub mod parser;
pub mod report;

pub use analytics::{TOP_N, analyse, analyse_top};
pub use invariants::Method;
pub use models::{IpCount, LogEntry, LogStats, UrlCount};
pub use parser::parse_line;
