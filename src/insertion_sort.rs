//! Insertion Sort Implementation
//!
//! This module provides a textbook insertion sort: each element is shifted
//! left past all strictly-greater predecessors and then inserted. The sort is
//! stable and runs in O(n²) comparisons, O(n) on already-sorted input.

use crate::observer::{NoopObserver, SortObserver};

/// Sort a slice in-place using insertion sort.
#[inline]
pub fn sort(data: &mut [i32]) {
    sort_observed(data, &mut NoopObserver);
}

/// Sort a slice in-place using insertion sort, reporting each mutation.
///
/// The observer fires after every shift and after every insertion of a
/// displaced element. It never fires when the array did not change, so an
/// already-sorted input produces zero invocations.
///
/// # Arguments
/// * `data` - The slice to sort in-place
/// * `observer` - Receives a snapshot after each mutation
pub fn sort_observed<O: SortObserver>(data: &mut [i32], observer: &mut O) {
    for i in 1..data.len() {
        let value = data[i];
        let mut j = i;

        // Shift strictly-greater predecessors one slot to the right
        while j > 0 && value < data[j - 1] {
            data[j] = data[j - 1];
            j -= 1;
            observer.on_step(data);
        }

        // Drop the element into the gap, but only if it actually moved
        if j != i {
            data[j] = value;
            observer.on_step(data);
        }
    }
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
        assert!(is_sorted(&data));
    }

    #[test]
    fn test_sort_single() {
        let mut data = vec![42];
        sort(&mut data);
        assert_eq!(data, vec![42]);
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
    fn test_observer_silent_on_sorted_input() {
        let mut data: Vec<i32> = (0..50).collect();
        let mut steps = 0usize;
        sort_observed(&mut data, &mut |_: &[i32]| steps += 1);
        assert_eq!(steps, 0);
    }

    #[test]
    fn test_observer_step_count_bounded() {
        let mut rng = rand::thread_rng();
        let mut data: Vec<i32> = (0..64).map(|_| rng.gen_range(0..100)).collect();

        let mut sorted_input = data.clone();
        sorted_input.sort();

        let n = data.len();
        let mut steps = 0usize;
        sort_observed(&mut data, &mut |snapshot: &[i32]| {
            steps += 1;
            assert_eq!(snapshot.len(), n);
        });

        // Each shift and insertion fires at most once per inner-loop step
        assert!(steps <= n * n);
        assert_eq!(data, sorted_input);
    }

    #[test]
    fn test_observer_fires_on_reverse_pair() {
        let mut data = vec![2, 1];
        let mut frames: Vec<Vec<i32>> = Vec::new();
        sort_observed(&mut data, &mut |snapshot: &[i32]| {
            frames.push(snapshot.to_vec())
        });
        // One shift (duplicating the 2), then the insertion of the held-out 1
        assert_eq!(frames, vec![vec![2, 2], vec![1, 2]]);
    }
}
