//! Main checker API
//!
//! The Checker pairs the baseline and candidate logs entry by entry and
//! classifies each pair against the configured threshold.

use crate::config::CheckerConfig;
use crate::logs::LogTriple;
use crate::types::{CheckerError, ComparisonRecord, LogKind, Result, Verdict};

/// The main checker struct - entry point for all comparisons
#[derive(Debug, Clone)]
pub struct Checker {
    config: CheckerConfig,
}

impl Checker {
    /// Create a checker, rejecting an invalid configuration
    pub fn new(config: CheckerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &CheckerConfig {
        &self.config
    }

    /// Classify one measurement pair
    ///
    /// The product is widened to `i128` so extreme baselines cannot overflow.
    pub fn verdict(&self, baseline: i64, candidate: i64) -> Verdict {
        let limit = i128::from(baseline) * i128::from(self.config.threshold);
        if i128::from(candidate) <= limit {
            Verdict::Ok
        } else {
            Verdict::Ng
        }
    }

    /// Inspect the line counts of a triple
    ///
    /// Returns `Ok(true)` when all three counts differ and the checker is
    /// configured to carry on anyway, `Err(CountMismatch)` when it is
    /// configured to halt.
    pub fn check_counts(&self, logs: &LogTriple) -> Result<bool> {
        let counts = logs.counts();
        log::debug!("Line counts: {}", counts);

        if !counts.is_mismatched() {
            return Ok(false);
        }

        log::warn!("Log line counts do not match ({})", counts);
        if self.config.halt_on_count_mismatch {
            return Err(CheckerError::CountMismatch(counts));
        }
        Ok(true)
    }

    /// Compare a triple, yielding one record per visited index
    ///
    /// The iterator stops after the first error.
    ///
    /// # Example
    /// ```
    /// use perf_log_checker::{Checker, CheckerConfig, LogTriple, Verdict};
    ///
    /// let logs = LogTriple::from_contents("1\n2\n", "20\n41\n", "a\nb\n");
    /// let checker = Checker::new(CheckerConfig::new()).unwrap();
    /// let verdicts: Vec<Verdict> = checker
    ///     .compare(&logs)
    ///     .map(|record| record.unwrap().verdict)
    ///     .collect();
    /// assert_eq!(verdicts, vec![Verdict::Ok, Verdict::Ng]);
    /// ```
    pub fn compare<'a>(&'a self, logs: &'a LogTriple) -> Comparisons<'a> {
        Comparisons::new(self, logs)
    }

    /// Compare a triple and collect every record, failing on the first error
    pub fn compare_all(&self, logs: &LogTriple) -> Result<Vec<ComparisonRecord>> {
        self.compare(logs).collect()
    }

    fn compare_at(&self, logs: &LogTriple, index: usize) -> Result<ComparisonRecord> {
        let raw_baseline = logs.entry(LogKind::Baseline, index)?;
        let baseline = parse_value(LogKind::Baseline, index, raw_baseline)?;
        let raw_candidate = logs.entry(LogKind::Candidate, index)?;
        let candidate = parse_value(LogKind::Candidate, index, raw_candidate)?;
        let verdict = self.verdict(baseline, candidate);
        let description = logs.entry(LogKind::Description, index)?.to_string();

        log::trace!(
            "#{} baseline={} candidate={} -> {:?}",
            index,
            baseline,
            candidate,
            verdict
        );

        Ok(ComparisonRecord {
            index,
            baseline,
            candidate,
            description,
            verdict,
        })
    }
}

/// Parse one measurement entry as a base-10 integer
pub fn parse_value(kind: LogKind, index: usize, raw: &str) -> Result<i64> {
    raw.trim()
        .parse::<i64>()
        .map_err(|source| CheckerError::Parse {
            kind,
            line: index + 1,
            value: raw.to_string(),
            source,
        })
}

/// Iterator over the records of one comparison run
pub struct Comparisons<'a> {
    checker: &'a Checker,
    logs: &'a LogTriple,
    index: usize,
    end: usize,
    failed: bool,
}

impl<'a> Comparisons<'a> {
    fn new(checker: &'a Checker, logs: &'a LogTriple) -> Self {
        let end = checker.config.iterations(logs.baseline.len());
        Self {
            checker,
            logs,
            index: 0,
            end,
            failed: false,
        }
    }
}

impl<'a> Iterator for Comparisons<'a> {
    type Item = Result<ComparisonRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.index >= self.end {
            return None;
        }

        let result = self.checker.compare_at(self.logs, self.index);
        self.index += 1;
        if result.is_err() {
            self.failed = true;
        }
        Some(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_checker() -> Checker {
        Checker::new(CheckerConfig::new()).unwrap()
    }

    #[test]
    fn test_threshold_boundary() {
        let checker = default_checker();
        assert_eq!(checker.verdict(1, 20), Verdict::Ok);
        assert_eq!(checker.verdict(1, 21), Verdict::Ng);
        assert_eq!(checker.verdict(2, 40), Verdict::Ok);
        assert_eq!(checker.verdict(2, 41), Verdict::Ng);
        assert_eq!(checker.verdict(0, 0), Verdict::Ok);
        assert_eq!(checker.verdict(0, 1), Verdict::Ng);
    }

    #[test]
    fn test_custom_threshold() {
        let checker = Checker::new(CheckerConfig::new().with_threshold(2)).unwrap();
        assert_eq!(checker.verdict(10, 20), Verdict::Ok);
        assert_eq!(checker.verdict(10, 21), Verdict::Ng);
    }

    #[test]
    fn test_large_values_do_not_overflow() {
        let checker = default_checker();
        assert_eq!(checker.verdict(i64::MAX, i64::MAX), Verdict::Ok);
        assert_eq!(checker.verdict(i64::MIN, 0), Verdict::Ng);
    }

    #[test]
    fn test_last_entry_is_skipped() {
        let logs = LogTriple::from_contents("1\n2\n3", "20\n41\n60", "a\nb\nc");
        let records = default_checker().compare_all(&logs).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].verdict, Verdict::Ok);
        assert_eq!(records[0].description, "a");
        assert_eq!(records[1].verdict, Verdict::Ng);
        assert_eq!(records[1].description, "b");
    }

    #[test]
    fn test_final_entry_included_when_configured() {
        let logs = LogTriple::from_contents("1\n2\n3", "20\n41\n60", "a\nb\nc");
        let checker = Checker::new(CheckerConfig::new().with_final_entry(true)).unwrap();
        let records = checker.compare_all(&logs).unwrap();

        assert_eq!(records.len(), 3);
        assert_eq!(records[2].verdict, Verdict::Ok);
    }

    #[test]
    fn test_whitespace_around_values_is_accepted() {
        let logs = LogTriple::from_contents(" 5\r\n", "100 \r\n", "x\r\n");
        let records = default_checker().compare_all(&logs).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].baseline, 5);
        assert_eq!(records[0].candidate, 100);
        assert_eq!(records[0].description, "x\r");
    }

    #[test]
    fn test_digit_separators_and_oversized_values_are_rejected() {
        assert!(matches!(
            parse_value(LogKind::Baseline, 0, "1_000"),
            Err(CheckerError::Parse { line: 1, .. })
        ));
        assert!(matches!(
            parse_value(LogKind::Candidate, 2, "99999999999999999999"),
            Err(CheckerError::Parse { line: 3, .. })
        ));
        assert_eq!(parse_value(LogKind::Baseline, 0, "+42").unwrap(), 42);
    }

    #[test]
    fn test_parse_error_stops_iteration() {
        let logs = LogTriple::from_contents("1\nx\n3\n", "1\n1\n1\n", "a\nb\nc\n");
        let checker = default_checker();
        let mut records = checker.compare(&logs);

        assert!(records.next().unwrap().is_ok());
        match records.next() {
            Some(Err(CheckerError::Parse {
                kind: LogKind::Baseline,
                line: 2,
                value,
                ..
            })) => assert_eq!(value, "x"),
            other => panic!("expected parse error, got {:?}", other),
        }
        assert!(records.next().is_none());
    }

    #[test]
    fn test_candidate_shorter_than_baseline() {
        let logs = LogTriple::from_contents("1\n2\n3\n", "1", "a\nb\nc\nd\ne");
        let err = default_checker().compare_all(&logs).unwrap_err();
        assert!(matches!(
            err,
            CheckerError::MissingLine {
                kind: LogKind::Candidate,
                index: 1
            }
        ));
    }

    #[test]
    fn test_count_mismatch_policy() {
        let logs = LogTriple::from_contents("1\n2\n3", "1\n2\n3\n4", "a\nb\nc\nd\ne");
        assert!(default_checker().check_counts(&logs).unwrap());

        let halting = Checker::new(CheckerConfig::new().with_halt_on_mismatch(true)).unwrap();
        assert!(matches!(
            halting.check_counts(&logs),
            Err(CheckerError::CountMismatch(_))
        ));

        let aligned = LogTriple::from_contents("1\n2", "1\n2", "a");
        assert!(!halting.check_counts(&aligned).unwrap());
    }

    #[test]
    fn test_invalid_config_rejected() {
        assert!(Checker::new(CheckerConfig::new().with_threshold(0)).is_err());
    }
}
