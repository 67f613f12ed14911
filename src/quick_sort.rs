//! Quicksort Implementation
//!
//! Randomized quicksort using Hoare's partition scheme. The input is shuffled
//! once up front (uniform random permutation) so that adversarial orderings
//! cannot force the O(n²) worst case; after the shuffle the first element of
//! each range serves as pivot.
//!
//! Complexity: O(n log n) expected comparisons. Not stable.

use rand::seq::SliceRandom;

use crate::observer::{NoopObserver, SortObserver};

/// Sort a slice in-place using randomized quicksort.
#[inline]
pub fn sort(data: &mut [i32]) {
    sort_observed(data, &mut NoopObserver);
}

/// Sort a slice in-place using randomized quicksort, reporting each mutation.
///
/// The observer fires after every partition swap and after the pivot is
/// swapped into its final position. Empty and single-element slices return
/// immediately without touching the observer.
///
/// # Arguments
/// * `data` - The slice to sort in-place
/// * `observer` - Receives a snapshot after each swap
pub fn sort_observed<O: SortObserver>(data: &mut [i32], observer: &mut O) {
    if data.len() <= 1 {
        return;
    }
    data.shuffle(&mut rand::thread_rng());
    let right = data.len() - 1;
    sort_range(data, 0, right, observer);
}

/// Recursively sort the inclusive range `[left, right]`.
fn sort_range<O: SortObserver>(data: &mut [i32], left: usize, right: usize, observer: &mut O) {
    if right <= left {
        return;
    }

    let pivot = partition(data, left, right, observer);

    if pivot > 0 {
        sort_range(data, left, pivot - 1, observer);
    }
    sort_range(data, pivot + 1, right, observer);
}

/// Hoare partition of `[left, right]` around `data[left]`.
///
/// Returns the pivot's final index; everything to its left is <= pivot and
/// everything to its right is >= pivot.
fn partition<O: SortObserver>(
    data: &mut [i32],
    left: usize,
    right: usize,
    observer: &mut O,
) -> usize {
    let mut i = left;
    let mut j = right + 1;

    loop {
        // Advance i past elements below the pivot
        i += 1;
        while data[i] < data[left] {
            if i == right {
                break;
            }
            i += 1;
        }

        // Retreat j past elements above the pivot
        j -= 1;
        while data[left] < data[j] {
            if j == left {
                break;
            }
            j -= 1;
        }

        // Indices crossed, partitioning is done
        if i >= j {
            break;
        }

        data.swap(i, j);
        observer.on_step(data);
    }

    // Pivot lands at j, the boundary between the two halves
    data.swap(left, j);
    observer.on_step(data);
    j
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::is_sorted;
    use rand::Rng;

    #[test]
    fn test_sort_empty() {
        let mut data: Vec<i32> = vec![];
        sort(&mut data);
        assert!(data.is_empty());
    }

    #[test]
    fn test_sort_single() {
        let mut data = vec![42];
        sort(&mut data);
        assert_eq!(data, vec![42]);
    }

    #[test]
    fn test_sort_pair() {
        let mut data = vec![2, 1];
        sort(&mut data);
        assert_eq!(data, vec![1, 2]);
    }

    #[test]
    fn test_sort_sorted() {
        let mut data: Vec<i32> = (0..100).collect();
        sort(&mut data);
        assert_eq!(data, (0..100).collect::<Vec<i32>>());
    }

    #[test]
    fn test_sort_reverse() {
        let mut data: Vec<i32> = (0..100).rev().collect();
        sort(&mut data);
        assert_eq!(data, (0..100).collect::<Vec<i32>>());
    }

    #[test]
    fn test_sort_duplicates() {
        let mut data = vec![5, 3, 5, 1, 3, 5, 1, 1];
        sort(&mut data);
        assert_eq!(data, vec![1, 1, 1, 3, 3, 5, 5, 5]);
    }

    #[test]
    fn test_sort_all_same() {
        let mut data = vec![7; 100];
        sort(&mut data);
        assert!(data.iter().all(|&x| x == 7));
        assert_eq!(data.len(), 100);
    }

    #[test]
    fn test_sort_negative() {
        let mut data = vec![3, -1, 0, -7, 2];
        sort(&mut data);
        assert_eq!(data, vec![-7, -1, 0, 2, 3]);
    }

    #[test]
    fn test_sort_random() {
        let mut rng = rand::thread_rng();
        let mut data: Vec<i32> = (0..1000).map(|_| rng.gen()).collect();
        let mut expected = data.clone();
        expected.sort();

        sort(&mut data);
        assert_eq!(data, expected);
    }

    #[test]
    fn test_observer_silent_on_trivial_input() {
        let mut steps = 0usize;

        let mut empty: Vec<i32> = vec![];
        sort_observed(&mut empty, &mut |_: &[i32]| steps += 1);

        let mut single = vec![9];
        sort_observed(&mut single, &mut |_: &[i32]| steps += 1);

        assert_eq!(steps, 0);
        assert_eq!(single, vec![9]);
    }

    #[test]
    fn test_observer_snapshots_are_permutations() {
        // Swaps never lose elements, so every snapshot is the input multiset
        let mut rng = rand::thread_rng();
        let mut data: Vec<i32> = (0..64).map(|_| rng.gen_range(0..100)).collect();

        let mut sorted_input = data.clone();
        sorted_input.sort();

        sort_observed(&mut data, &mut |snapshot: &[i32]| {
            let mut copy = snapshot.to_vec();
            copy.sort();
            assert_eq!(copy, sorted_input);
        });
        assert_eq!(data, sorted_input);
    }
}
