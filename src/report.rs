//! Timing report generation.
//!
//! The timing harness records one elapsed time per algorithm and appends its
//! results to the output file in the driver protocol the harness has always
//! used:
//!
//! ```text
//! {...previous text}
//! {SORTED_ARRAY}           one line, space-separated
//! {TIME FOR INSERTION}     microseconds, one line per algorithm
//! {TIME FOR MERGE}
//! {TIME FOR QUICK}
//! {TIME FOR RADIX}
//! ```
//!
//! All elapsed times are in microseconds.

use std::fmt::Write as _;
use std::fs::OpenOptions;
use std::io::{self, Write as _};
use std::path::Path;

use crate::Algorithm;

/// Elapsed time for a single algorithm run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlgorithmTiming {
    /// Which algorithm was timed.
    pub algorithm: Algorithm,
    /// Wall-clock time for one full sort, in microseconds.
    pub elapsed_us: u128,
}

/// A complete timing run: the sorted sequence plus one timing per algorithm.
#[derive(Debug, Clone, Default)]
pub struct TimingReport {
    /// The input sequence in sorted order.
    pub sorted: Vec<i32>,
    /// Timings in the order the algorithms were run.
    pub timings: Vec<AlgorithmTiming>,
}

impl TimingReport {
    /// Create an empty report.
    pub fn new() -> Self {
        TimingReport::default()
    }

    /// Record the elapsed time for one algorithm.
    pub fn add_timing(&mut self, algorithm: Algorithm, elapsed_us: u128) {
        self.timings.push(AlgorithmTiming {
            algorithm,
            elapsed_us,
        });
    }

    /// Render the report in the driver protocol: the sorted sequence on one
    /// line, then one elapsed-microseconds line per algorithm.
    pub fn to_text(&self) -> String {
        let mut output = String::new();

        let sorted_line: Vec<String> = self.sorted.iter().map(|v| v.to_string()).collect();
        writeln!(output, "{}", sorted_line.join(" ")).unwrap();

        for timing in &self.timings {
            writeln!(output, "{}", timing.elapsed_us).unwrap();
        }

        output
    }

    /// Append the rendered report to `path`, creating the file if needed.
    pub fn append_to<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        file.write_all(self.to_text().as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn sample_report() -> TimingReport {
        let mut report = TimingReport::new();
        report.sorted = vec![1, 3, 3, 5];
        report.add_timing(Algorithm::Insertion, 120);
        report.add_timing(Algorithm::Merge, 95);
        report.add_timing(Algorithm::Quick, 88);
        report.add_timing(Algorithm::Radix, 40);
        report
    }

    #[test]
    fn test_to_text_format() {
        let text = sample_report().to_text();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines, vec!["1 3 3 5", "120", "95", "88", "40"]);
    }

    #[test]
    fn test_to_text_empty_report() {
        let report = TimingReport::new();
        assert_eq!(report.to_text(), "\n");
    }

    #[test]
    fn test_append_preserves_existing_content() {
        let path = std::env::temp_dir().join("sort_lab_report_test.txt");
        fs::write(&path, "4 1 2 3\n").unwrap();

        sample_report().append_to(&path).unwrap();
        let content = fs::read_to_string(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(content, "4 1 2 3\n1 3 3 5\n120\n95\n88\n40\n");
    }
}
