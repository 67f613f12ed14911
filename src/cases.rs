//! Test-case array generators.
//!
//! The timing harness and benchmarks exercise the algorithms on a few input
//! families: already sorted, reverse sorted, partially sorted, and uniformly
//! random. All generators produce non-negative values so every algorithm,
//! radix sort included, accepts them.

use rand::Rng;

/// A sorted array `[0, n)`.
pub fn sorted_array(n: usize) -> Vec<i32> {
    (0..n as i32).collect()
}

/// A reverse-sorted array `(n, 0]`.
pub fn reverse_sorted_array(n: usize) -> Vec<i32> {
    (0..n as i32).rev().collect()
}

/// An array of length `n` whose first `k` elements are sorted, with the rest
/// uniformly random in `[0, bound)`.
pub fn partially_sorted_array(k: usize, n: usize, bound: i32) -> Vec<i32> {
    let mut rng = rand::thread_rng();
    (0..n)
        .map(|i| {
            if i < k {
                i as i32
            } else {
                rng.gen_range(0..bound)
            }
        })
        .collect()
}

/// An array of `n` uniformly random values in `[0, bound)`.
pub fn random_array(n: usize, bound: i32) -> Vec<i32> {
    let mut rng = rand::thread_rng();
    (0..n).map(|_| rng.gen_range(0..bound)).collect()
}
