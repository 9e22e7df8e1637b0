use std::cmp::Ordering;
use std::collections::BinaryHeap;
use ordered_float::OrderedFloat;


/// Discrete events of one simulation run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    Request { source: usize },
    Sample { connection: usize },
    Teardown { connection: usize },
}

struct ScheduledEvent {
    at: OrderedFloat<f64>,
    seq: u64,
    event: Event,
}

// BinaryHeap is a max-heap; reverse so the earliest event pops first,
// with the insertion sequence breaking ties.
impl Ord for ScheduledEvent {
    fn cmp(&self, other: &Self) -> Ordering {
        self.at.cmp(&other.at)
            .then(self.seq.cmp(&other.seq))
            .reverse()
    }
}
impl PartialOrd for ScheduledEvent {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl PartialEq for ScheduledEvent {
    fn eq(&self, other: &Self) -> bool {
        self.at == other.at && self.seq == other.seq
    }
}
impl Eq for ScheduledEvent {}


/// Time-ordered event queue; popped times are monotone non-decreasing.
#[derive(Default)]
pub struct EventQueue {
    heap: BinaryHeap<ScheduledEvent>,
    next_seq: u64,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn schedule(&mut self, at: f64, event: Event) {
        let seq = self.next_seq;
        self.next_seq = self.next_seq.wrapping_add(1);
        self.heap.push(ScheduledEvent { at: OrderedFloat(at), seq, event });
    }
    pub fn pop(&mut self) -> Option<(f64, Event)> {
        self.heap.pop()
            .map(|scheduled| (scheduled.at.into_inner(), scheduled.event))
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn it_pops_in_time_order() {
        let mut queue = EventQueue::new();
        queue.schedule(5.0, Event::Teardown { connection: 1 });
        queue.schedule(1.0, Event::Request { source: 0 });
        queue.schedule(3.0, Event::Sample { connection: 1 });
        let times: Vec<f64> = std::iter::from_fn(|| queue.pop())
            .map(|(at, _)| at)
            .collect();
        assert_eq!(times, vec![1.0, 3.0, 5.0]);
    }
    #[test]
    fn it_breaks_time_ties_by_insertion_order() {
        let mut queue = EventQueue::new();
        queue.schedule(2.0, Event::Request { source: 7 });
        queue.schedule(2.0, Event::Request { source: 9 });
        assert_eq!(queue.pop().unwrap().1, Event::Request { source: 7 });
        assert_eq!(queue.pop().unwrap().1, Event::Request { source: 9 });
    }
}
