//! Core types for the performance log checker
//!
//! This module defines the values the checker produces when comparing a
//! baseline log against a candidate log: which log a line came from, the
//! per-line verdict, and the errors that can stop a run.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::path::PathBuf;

/// Result type for checker operations
pub type Result<T> = std::result::Result<T, CheckerError>;

/// Which of the three input logs a line belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogKind {
    /// Reference measurements ("std" log)
    Baseline,
    /// Measurements of the implementation under test ("ft" log)
    Candidate,
    /// Human-readable test case names
    Description,
}

impl fmt::Display for LogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogKind::Baseline => write!(f, "baseline"),
            LogKind::Candidate => write!(f, "candidate"),
            LogKind::Description => write!(f, "description"),
        }
    }
}

/// Number of entries read from each log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineCounts {
    pub baseline: usize,
    pub candidate: usize,
    pub description: usize,
}

impl LineCounts {
    /// True when no two of the three counts agree.
    ///
    /// Two equal counts out of three are accepted silently.
    pub fn is_mismatched(&self) -> bool {
        self.baseline != self.candidate
            && self.baseline != self.description
            && self.candidate != self.description
    }
}

impl fmt::Display for LineCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "baseline={}, candidate={}, description={}",
            self.baseline, self.candidate, self.description
        )
    }
}

/// Pass/fail classification of one test case
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// Candidate stayed within the threshold
    #[serde(rename = "OK")]
    Ok,
    /// Candidate exceeded the threshold
    #[serde(rename = "NG")]
    Ng,
}

impl Verdict {
    pub const GREEN: &'static str = "\x1b[32m";
    pub const RED: &'static str = "\x1b[31m";
    pub const RESET: &'static str = "\x1b[0m";

    pub fn is_ok(&self) -> bool {
        matches!(self, Verdict::Ok)
    }

    /// ANSI color that wraps this verdict
    pub fn color(&self) -> &'static str {
        match self {
            Verdict::Ok => Self::GREEN,
            Verdict::Ng => Self::RED,
        }
    }

    /// Render as `OK!` / `NG!`, wrapped in escape codes when `color` is set
    pub fn render(&self, color: bool) -> String {
        if color {
            format!("{}{}{}", self.color(), self, Self::RESET)
        } else {
            self.to_string()
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Ok => write!(f, "OK!"),
            Verdict::Ng => write!(f, "NG!"),
        }
    }
}

/// One compared test case: both measurements, its name, and the verdict
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonRecord {
    /// Zero-based entry index shared by the three logs
    pub index: usize,
    pub baseline: i64,
    pub candidate: i64,
    pub description: String,
    pub verdict: Verdict,
}

/// Errors that can occur while loading or comparing logs
#[derive(Debug, thiserror::Error)]
pub enum CheckerError {
    #[error("Failed to read {kind} log {path:?}")]
    Io {
        kind: LogKind,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid integer in {kind} log at line {line}: {value:?}")]
    Parse {
        kind: LogKind,
        /// 1-based line number
        line: usize,
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("Missing line {} in {kind} log", .index + 1)]
    MissingLine { kind: LogKind, index: usize },

    #[error("Log line counts do not match: {0}")]
    CountMismatch(LineCounts),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
