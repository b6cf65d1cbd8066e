use std::{
    fs, io,
    path::{Path, PathBuf},
};

use thiserror::Error;
use tracing::{debug, info};

use crate::{models::LogEntry, parser::parse_line};

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("failed to read log file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Entries recovered from a log, plus how many non-blank lines were dropped.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ParsedLog {
    pub entries: Vec<LogEntry>,
    pub skipped: usize,
}

pub fn read_log(path: &Path) -> Result<ParsedLog, IngestError> {
    let bytes = fs::read(path).map_err(|source| IngestError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let text = String::from_utf8_lossy(&bytes);
    Ok(parse_log(&text))
}

pub fn parse_log(text: &str) -> ParsedLog {
    let mut parsed = ParsedLog::default();
    for (idx, line) in text.split('\n').enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match parse_line(line) {
            Some(entry) => parsed.entries.push(entry),
            None => {
                parsed.skipped += 1;
                debug!(line = idx + 1, "skipping unparseable log line");
            }
        }
    }
    info!(
        parsed = parsed.entries.len(),
        skipped = parsed.skipped,
        "finished reading access log"
    );
    parsed
}
