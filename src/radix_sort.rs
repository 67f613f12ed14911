//! Radix Sort Implementation
//!
//! LSD (Least Significant Digit) radix sort in base 10. Each pass buckets
//! every element into one of ten containers keyed by the current decimal
//! digit, then concatenates the containers in ascending key order back into
//! the slice. The number of passes equals the decimal digit count of the
//! maximum element.
//!
//! Complexity: O(n * d) where d is the digit count of the maximum element.
//! Only non-negative input is supported; negative elements are rejected.

use crate::observer::{NoopObserver, SortObserver};

/// Number of buckets, one per decimal digit.
const NUM_BUCKETS: usize = 10;

/// Sort a slice in-place using LSD base-10 radix sort.
///
/// # Panics
/// Panics if any element is negative.
#[inline]
pub fn sort(data: &mut [i32]) {
    sort_observed(data, &mut NoopObserver);
}

/// Sort a slice in-place using radix sort, reporting each digit pass.
///
/// The observer fires once per digit pass, after the buckets have been
/// concatenated back into the slice. Empty and single-element slices return
/// immediately.
///
/// # Arguments
/// * `data` - The slice to sort in-place, all elements non-negative
/// * `observer` - Receives a snapshot after each digit pass
///
/// # Panics
/// Panics if any element is negative.
pub fn sort_observed<O: SortObserver>(data: &mut [i32], observer: &mut O) {
    if data.len() <= 1 {
        return;
    }

    assert!(
        data.iter().all(|&v| v >= 0),
        "Radix sort requires non-negative input"
    );

    let max = data.iter().copied().fold(0, i32::max);
    let passes = digit_count(max);

    let mut divisor: i32 = 1;
    for _ in 0..passes {
        let mut buckets: Vec<Vec<i32>> = vec![Vec::new(); NUM_BUCKETS];

        for &value in data.iter() {
            let digit = ((value / divisor) % 10) as usize;
            buckets[digit].push(value);
        }

        // Concatenate buckets in ascending digit order
        let mut k = 0;
        for bucket in &buckets {
            for &value in bucket {
                data[k] = value;
                k += 1;
            }
        }

        observer.on_step(data);

        // The last pass can push the divisor past 10^9; saturate instead of
        // overflowing since it is never used again
        divisor = divisor.saturating_mul(10);
    }
}

/// Number of decimal digits in `value` (1 for 0..=9).
pub fn digit_count(value: i32) -> u32 {
    let mut digits = 1;
    let mut v = value / 10;
    while v > 0 {
        digits += 1;
        v /= 10;
    }
    digits
}
