use std::cmp::Reverse;
use ordered_float::OrderedFloat;
use priority_queue::PriorityQueue;


/// Vertex frontier for the shortest-path relaxation: a min-queue of
/// vertices keyed by their tentative distance, one entry per vertex.
#[derive(Default)]
pub struct DistanceQueue {
    queue: PriorityQueue<usize, Reverse<OrderedFloat<f64>>>,
}

impl DistanceQueue {
    pub fn new() -> Self {
        Self::default()
    }
    /// Queues the vertex, or re-keys it when already queued.
    pub fn relax(&mut self, vertex: usize, distance: f64) {
        let priority = Reverse(OrderedFloat(distance));
        if self.queue.change_priority(&vertex, priority).is_none() {
            self.queue.push(vertex, priority);
        }
    }
    pub fn pop(&mut self) -> Option<(usize, f64)> {
        self.queue.pop()
            .map(|(vertex, Reverse(distance))| (vertex, distance.into_inner()))
    }
}
