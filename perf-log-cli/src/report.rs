//! Report generation
//!
//! Renders the verdict report as text (the classic colored listing) or as a
//! single JSON document.

use crate::config::OutputFormat;
use anyhow::Result;
use perf_log_checker::{Checker, ComparisonRecord, LineCounts, LogTriple};
use serde::Serialize;
use std::io::Write;

/// Verdict tally of one report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ReportSummary {
    pub total: usize,
    pub ok: usize,
    pub ng: usize,
}

impl ReportSummary {
    fn add(&mut self, record: &ComparisonRecord) {
        self.total += 1;
        if record.verdict.is_ok() {
            self.ok += 1;
        } else {
            self.ng += 1;
        }
    }
}

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    label: &'a str,
    counts: LineCounts,
    count_mismatch: bool,
    records: Vec<ComparisonRecord>,
    summary: ReportSummary,
}

/// Write the report for `logs` in the requested format
pub fn write_report<W: Write>(
    out: &mut W,
    format: OutputFormat,
    label: &str,
    logs: &LogTriple,
    checker: &Checker,
    color: bool,
) -> Result<ReportSummary> {
    match format {
        OutputFormat::Txt => write_text(out, label, logs, checker, color),
        OutputFormat::Json => write_json(out, label, logs, checker),
    }
}

/// Text report: header, one line per verdict, trailing blank line
///
/// Lines are written as they are produced, so a failing entry leaves the
/// header and the earlier verdicts on the output.
pub fn write_text<W: Write>(
    out: &mut W,
    label: &str,
    logs: &LogTriple,
    checker: &Checker,
    color: bool,
) -> Result<ReportSummary> {
    writeln!(out, "--------{}--------", label)?;

    let mismatch = checker.check_counts(logs);
    if !matches!(mismatch, Ok(false)) {
        writeln!(out, "Error")?;
    }
    mismatch?;

    let mut summary = ReportSummary::default();
    for record in checker.compare(logs) {
        let record = record?;
        writeln!(out, "{} : {}", record.verdict.render(color), record.description)?;
        summary.add(&record);
    }

    writeln!(out)?;
    out.flush()?;
    Ok(summary)
}

/// JSON report; nothing is written unless every entry compares cleanly
pub fn write_json<W: Write>(
    out: &mut W,
    label: &str,
    logs: &LogTriple,
    checker: &Checker,
) -> Result<ReportSummary> {
    let count_mismatch = checker.check_counts(logs)?;
    let records = checker.compare_all(logs)?;

    let mut summary = ReportSummary::default();
    for record in &records {
        summary.add(record);
    }

    let report = JsonReport {
        label,
        counts: logs.counts(),
        count_mismatch,
        records,
        summary,
    };
    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)?;
    out.flush()?;
    Ok(summary)
}
