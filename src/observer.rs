//! Instrumentation hook shared by every sorting algorithm.
//!
//! Each sort accepts an observer that receives a read-only snapshot of the
//! array after every meaningful mutation (element move, swap, bucket
//! redistribution). The same algorithm implementation then serves both the
//! timing harness (no-op observer) and the visualizer (rendering observer)
//! without being duplicated per consumer.
//!
//! Observers run synchronously on the sorting thread and must not assume the
//! snapshot outlives the call.

/// Receives the array state after each meaningful mutation of a running sort.
pub trait SortObserver {
    /// Called with the current contents of the sequence under sort.
    fn on_step(&mut self, snapshot: &[i32]);
}

/// Any `FnMut(&[i32])` closure is a valid observer.
impl<F: FnMut(&[i32])> SortObserver for F {
    fn on_step(&mut self, snapshot: &[i32]) {
        self(snapshot)
    }
}

/// Observer that does nothing, used by the plain `sort` entry points.
pub struct NoopObserver;

impl SortObserver for NoopObserver {
    fn on_step(&mut self, _snapshot: &[i32]) {}
}
