//! Classic in-memory sorting algorithms with an instrumentation hook.
//!
//! This crate implements four textbook sorts (insertion, merge, quick, radix)
//! over `&mut [i32]`. Each algorithm comes in two flavors: a plain `sort`
//! and a `sort_observed` that reports a snapshot of the array after every
//! meaningful mutation through the [`SortObserver`] trait. The `timeit`
//! binary times the algorithms with a no-op observer; the `visualize` binary
//! feeds the snapshots to a bar-chart renderer.

pub mod cases;
pub mod input;
pub mod insertion_sort;
pub mod merge_sort;
pub mod observer;
pub mod quick_sort;
pub mod radix_sort;
pub mod report;

pub use observer::{NoopObserver, SortObserver};

/// The four sorting algorithms this crate implements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Insertion,
    Merge,
    Quick,
    Radix,
}

impl Algorithm {
    /// All algorithms, in the order the timing harness runs them.
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Insertion,
        Algorithm::Merge,
        Algorithm::Quick,
        Algorithm::Radix,
    ];

    /// Human-readable algorithm name.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Insertion => "insertion_sort",
            Algorithm::Merge => "merge_sort",
            Algorithm::Quick => "quick_sort",
            Algorithm::Radix => "radix_sort",
        }
    }

    /// Map the visualizer's mode selector to an algorithm
    /// (0=insertion, 1=merge, 2=quick, 3=radix).
    pub fn from_index(index: usize) -> Option<Algorithm> {
        match index {
            0 => Some(Algorithm::Insertion),
            1 => Some(Algorithm::Merge),
            2 => Some(Algorithm::Quick),
            3 => Some(Algorithm::Radix),
            _ => None,
        }
    }

    /// Sort `data` in-place with this algorithm and a no-op observer.
    #[inline]
    pub fn sort(self, data: &mut [i32]) {
        self.sort_observed(data, &mut NoopObserver);
    }

    /// Sort `data` in-place with this algorithm, reporting mutations to
    /// `observer`.
    pub fn sort_observed<O: SortObserver>(self, data: &mut [i32], observer: &mut O) {
        match self {
            Algorithm::Insertion => insertion_sort::sort_observed(data, observer),
            Algorithm::Merge => merge_sort::sort_observed(data, observer),
            Algorithm::Quick => quick_sort::sort_observed(data, observer),
            Algorithm::Radix => radix_sort::sort_observed(data, observer),
        }
    }
}

/// Check if a slice is sorted in ascending order.
#[inline]
pub fn is_sorted(data: &[i32]) -> bool {
    data.windows(2).all(|w| w[0] <= w[1])
}
