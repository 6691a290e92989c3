//! Performance Log Checker Library
//!
//! Compares a baseline measurement log against a candidate measurement log
//! and classifies every test case as OK or NG.
//!
//! # Architecture
//!
//! The library only loads and compares:
//! - Reads the baseline, candidate and description logs (one entry per line)
//! - Parses measurements as base-10 integers
//! - Classifies each pair: OK while `candidate <= baseline * threshold`
//!
//! Rendering the report (text or JSON, colors, exit codes) lives in the
//! application layer (perf-log-cli).
//!
//! # Example Usage
//!
//! ```no_run
//! use perf_log_checker::{Checker, CheckerConfig, LogTriple};
//! use std::path::Path;
//!
//! let logs = LogTriple::load(
//!     Path::new("std.log"),
//!     Path::new("ft.log"),
//!     Path::new("test.log"),
//! ).unwrap();
//!
//! let checker = Checker::new(CheckerConfig::new()).unwrap();
//! for record in checker.compare(&logs) {
//!     match record {
//!         Ok(record) => println!("{} : {}", record.verdict, record.description),
//!         Err(e) => eprintln!("Comparison error: {}", e),
//!     }
//! }
//! ```

// Public modules
pub mod checker;
pub mod config;
pub mod logs;
pub mod types;

// Re-export main types for convenience
pub use checker::{parse_value, Checker, Comparisons};
pub use config::{CheckerConfig, DEFAULT_THRESHOLD};
pub use logs::{read_log, split_entries, LogTriple};
pub use types::{CheckerError, ComparisonRecord, LineCounts, LogKind, Result, Verdict};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
