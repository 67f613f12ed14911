//! Input file parsing.
//!
//! Both binaries read their unsorted array from a text file of
//! whitespace-separated signed integers (spaces and newlines are equivalent).

use std::fs;
use std::io;
use std::path::Path;

/// Read a whitespace-separated list of integers from `path`.
///
/// Returns the underlying io error if the file cannot be opened, and
/// `InvalidData` if any token fails to parse as an `i32`.
pub fn read_integers<P: AsRef<Path>>(path: P) -> io::Result<Vec<i32>> {
    let content = fs::read_to_string(path)?;
    parse_integers(&content)
}

/// Parse whitespace-separated integers from a string.
pub fn parse_integers(content: &str) -> io::Result<Vec<i32>> {
    content
        .split_whitespace()
        .map(|token| {
            token.parse::<i32>().map_err(|e| {
                io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!("invalid integer '{}': {}", token, e),
                )
            })
        })
        .collect()
}
