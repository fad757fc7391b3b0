//! Score-ordered record queue.

use crate::model::record::Record;
use crate::queue::RecordQueue;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Max-heap of records keyed by `score`.
///
/// Records with equal scores are served in unspecified order.
#[derive(Debug, Default)]
pub struct PriorityQueue {
    heap: BinaryHeap<ByScore>,
}

impl PriorityQueue {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecordQueue for PriorityQueue {
    fn enqueue(&mut self, record: Record) {
        self.heap.push(ByScore(record));
    }

    fn dequeue(&mut self) -> Option<Record> {
        self.heap.pop().map(|entry| entry.0)
    }

    fn peek(&self) -> Option<&Record> {
        self.heap.peek().map(|entry| &entry.0)
    }

    fn size(&self) -> usize {
        self.heap.len()
    }

    /// Waiting records, highest score first.
    fn records(&self) -> Vec<Record> {
        let mut records: Vec<Record> = self.heap.iter().map(|entry| entry.0.clone()).collect();
        records.sort_by(|a, b| b.score().total_cmp(&a.score()));
        records
    }
}

/// Heap entry ordered by score alone.
#[derive(Debug, Clone)]
struct ByScore(Record);

impl PartialEq for ByScore {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ByScore {}

impl PartialOrd for ByScore {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ByScore {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.score().total_cmp(&other.0.score())
    }
}

#[cfg(test)]
mod tests {
    use super::PriorityQueue;
    use crate::model::record::Record;
    use crate::queue::RecordQueue;

    #[test]
    fn serves_highest_score_first() {
        let mut queue = PriorityQueue::new();
        queue.enqueue(Record::new(1, "Amit", 85.5));
        queue.enqueue(Record::new(2, "Neha", 90.0));
        queue.enqueue(Record::new(3, "Raj", 78.0));

        assert_eq!(queue.peek().map(Record::id), Some(2));
        let order: Vec<_> = std::iter::from_fn(|| queue.dequeue())
            .map(|r| r.id())
            .collect();
        assert_eq!(order, vec![2, 1, 3]);
        assert!(queue.is_empty());
        assert!(queue.dequeue().is_none());
    }

    #[test]
    fn records_snapshot_is_descending_and_non_destructive() {
        let mut queue = PriorityQueue::new();
        queue.enqueue(Record::new(1, "low", 1.0));
        queue.enqueue(Record::new(2, "high", 3.0));
        queue.enqueue(Record::new(3, "mid", 2.0));

        let ids: Vec<_> = queue.records().iter().map(Record::id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
        assert_eq!(queue.size(), 3);
    }

    #[test]
    fn negative_scores_order_below_zero() {
        let mut queue = PriorityQueue::new();
        queue.enqueue(Record::new(1, "neg", -5.0));
        queue.enqueue(Record::new(2, "zero", 0.0));
        assert_eq!(queue.dequeue().map(|r| r.id()), Some(2));
    }
}
