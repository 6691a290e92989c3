//! Log file loading
//!
//! Every log is plain text, one entry per `\n`-separated piece. Entries are
//! kept exactly as split: a file ending in a newline has an empty last
//! entry, and `\r` from CRLF files stays on the entry.

use crate::types::{CheckerError, LineCounts, LogKind, Result};
use std::fs;
use std::path::Path;

/// The three aligned logs of one run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogTriple {
    pub baseline: Vec<String>,
    pub candidate: Vec<String>,
    pub description: Vec<String>,
}

impl LogTriple {
    /// Read all three logs from disk
    pub fn load(baseline: &Path, candidate: &Path, description: &Path) -> Result<Self> {
        Ok(Self {
            baseline: read_log(baseline, LogKind::Baseline)?,
            candidate: read_log(candidate, LogKind::Candidate)?,
            description: read_log(description, LogKind::Description)?,
        })
    }

    /// Build a triple from in-memory file contents
    pub fn from_contents(baseline: &str, candidate: &str, description: &str) -> Self {
        Self {
            baseline: split_entries(baseline),
            candidate: split_entries(candidate),
            description: split_entries(description),
        }
    }

    pub fn counts(&self) -> LineCounts {
        LineCounts {
            baseline: self.baseline.len(),
            candidate: self.candidate.len(),
            description: self.description.len(),
        }
    }

    /// Entries of the given log
    pub fn entries(&self, kind: LogKind) -> &[String] {
        match kind {
            LogKind::Baseline => &self.baseline,
            LogKind::Candidate => &self.candidate,
            LogKind::Description => &self.description,
        }
    }

    /// Entry `index` of the given log, or `MissingLine` past the end
    pub fn entry(&self, kind: LogKind, index: usize) -> Result<&str> {
        self.entries(kind)
            .get(index)
            .map(String::as_str)
            .ok_or(CheckerError::MissingLine { kind, index })
    }
}

/// Read a whole log file and split it into entries
pub fn read_log(path: &Path, kind: LogKind) -> Result<Vec<String>> {
    log::info!("Loading {} log: {:?}", kind, path);

    let content = fs::read_to_string(path).map_err(|source| CheckerError::Io {
        kind,
        path: path.to_path_buf(),
        source,
    })?;

    let entries = split_entries(&content);
    log::debug!("{} log {:?}: {} entries", kind, path, entries.len());
    Ok(entries)
}

/// Split file content on `\n`. Always yields at least one entry.
pub fn split_entries(content: &str) -> Vec<String> {
    content.split('\n').map(str::to_string).collect()
}
