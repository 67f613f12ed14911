//! Merge Sort Implementation
//!
//! Top-down merge sort: ranges are split at the midpoint until sub-ranges of
//! length <= 1 remain, then adjacent sorted sub-ranges are merged through an
//! auxiliary buffer sized to the merged range. Ties take from the left
//! sub-range first, so the sort is stable.
//!
//! Complexity: O(n log n) comparisons, O(n) auxiliary space per merge.

use crate::observer::{NoopObserver, SortObserver};

/// Sort a slice in-place using top-down merge sort.
#[inline]
pub fn sort(data: &mut [i32]) {
    sort_observed(data, &mut NoopObserver);
}

/// Sort a slice in-place using merge sort, reporting each merge step.
///
/// The observer fires once per merge, after the merged range has been written
/// back into the slice.
///
/// # Arguments
/// * `data` - The slice to sort in-place
/// * `observer` - Receives a snapshot after each completed merge
pub fn sort_observed<O: SortObserver>(data: &mut [i32], observer: &mut O) {
    if data.len() <= 1 {
        return;
    }
    let right = data.len() - 1;
    sort_range(data, 0, right, observer);
}

/// Recursively sort the inclusive range `[left, right]`.
fn sort_range<O: SortObserver>(data: &mut [i32], left: usize, right: usize, observer: &mut O) {
    if left < right {
        let mid = left + (right - left) / 2;
        sort_range(data, left, mid, observer);
        sort_range(data, mid + 1, right, observer);
        merge(data, left, mid, right, observer);
    }
}

/// Merge the sorted sub-ranges `[left, mid]` and `[mid + 1, right]`.
fn merge<O: SortObserver>(
    data: &mut [i32],
    left: usize,
    mid: usize,
    right: usize,
    observer: &mut O,
) {
    let mut temp: Vec<i32> = Vec::with_capacity(right - left + 1);
    let mut i = left;
    let mut j = mid + 1;

    // <= keeps the left element first on ties, which is what makes this stable
    while i <= mid && j <= right {
        if data[i] <= data[j] {
            temp.push(data[i]);
            i += 1;
        } else {
            temp.push(data[j]);
            j += 1;
        }
    }

    temp.extend_from_slice(&data[i..=mid]);
    temp.extend_from_slice(&data[j..=right]);

    data[left..=right].copy_from_slice(&temp);
    observer.on_step(data);
}
