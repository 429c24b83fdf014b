use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Debug;

use num_traits::Float;
use ordered_float::OrderedFloat;

/// Min-priority queue of vertex indices keyed by tentative distance.
///
/// Entries with equal distance pop in ascending index order, which is the
/// graph's vertex insertion order. Stale entries are not removed on decrease;
/// callers skip them when popped.
#[derive(Debug)]
pub struct DistanceQueue<W>
where
    W: Float + Debug,
{
    heap: BinaryHeap<Reverse<(OrderedFloat<W>, usize)>>,
}

impl<W> DistanceQueue<W>
where
    W: Float + Debug,
{
    /// Creates an empty queue with room for `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        DistanceQueue {
            heap: BinaryHeap::with_capacity(capacity),
        }
    }

    /// Queues `vertex` with tentative distance `distance`
    pub fn push(&mut self, vertex: usize, distance: W) {
        self.heap.push(Reverse((OrderedFloat(distance), vertex)));
    }

    /// Removes the entry with the smallest distance
    pub fn pop(&mut self) -> Option<(usize, W)> {
        self.heap
            .pop()
            .map(|Reverse((distance, vertex))| (vertex, distance.into_inner()))
    }
}
