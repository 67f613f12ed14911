//! Sorting Algorithm Timing Harness
//!
//! Reads an unsorted array of integers from a file, times each of the four
//! sorting algorithms on its own copy of the array, then appends the results
//! to the same file: the sorted sequence on one line followed by one line per
//! algorithm with its elapsed time in microseconds. An external driver can
//! write an input file, invoke this binary, and read the timings back.
//!
//! Usage:
//!   timeit <file>

use std::env;
use std::process;
use std::time::Instant;

use sort_lab::report::TimingReport;
use sort_lab::{input, is_sorted, merge_sort, Algorithm};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <file>", args[0]);
        eprintln!();
        eprintln!("Times each sorting algorithm on the integers in <file> and");
        eprintln!("appends the sorted array plus per-algorithm times (us) to it.");
        process::exit(1);
    }

    let path = &args[1];

    let base_array = match input::read_integers(path) {
        Ok(array) => array,
        Err(e) => {
            eprintln!("File could not be read, exiting... ({})", e);
            process::exit(1);
        }
    };

    // Every algorithm runs on the same input, and radix sort rejects
    // negative values, so rule them out before timing anything
    if base_array.iter().any(|&v| v < 0) {
        eprintln!("Input contains negative values; radix sort requires non-negative input.");
        process::exit(1);
    }

    println!("Sorting Algorithm Timing Harness");
    println!("================================\n");
    println!("Input: {} ({} elements)", path, base_array.len());

    let mut report = TimingReport::new();

    for algorithm in Algorithm::ALL {
        let mut data = base_array.clone();

        let start = Instant::now();
        algorithm.sort(&mut data);
        let elapsed = start.elapsed();

        if !is_sorted(&data) {
            eprintln!("ERROR: {} failed verification!", algorithm.name());
            process::exit(1);
        }

        println!(
            "{:<15} {:>10} us (verified: OK)",
            algorithm.name(),
            elapsed.as_micros()
        );
        report.add_timing(algorithm, elapsed.as_micros());
    }

    // The sorted line in the report comes from an actual sort of the base
    // array, same as the timed runs
    let mut sorted = base_array;
    merge_sort::sort(&mut sorted);
    report.sorted = sorted;

    if let Err(e) = report.append_to(path) {
        eprintln!("Error writing results to {}: {}", path, e);
        process::exit(1);
    }

    println!("\nResults appended to: {}", path);
}
