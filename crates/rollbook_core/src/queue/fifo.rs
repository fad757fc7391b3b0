//! First-in first-out record queues.

use crate::model::record::Record;
use crate::queue::RecordQueue;
use std::collections::{LinkedList, VecDeque};

/// Ring-buffer FIFO queue.
#[derive(Debug, Default)]
pub struct FifoQueue {
    queue: VecDeque<Record>,
}

impl FifoQueue {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecordQueue for FifoQueue {
    fn enqueue(&mut self, record: Record) {
        self.queue.push_back(record);
    }

    fn dequeue(&mut self) -> Option<Record> {
        self.queue.pop_front()
    }

    fn peek(&self) -> Option<&Record> {
        self.queue.front()
    }

    fn size(&self) -> usize {
        self.queue.len()
    }

    fn records(&self) -> Vec<Record> {
        self.queue.iter().cloned().collect()
    }
}

/// Linked-list FIFO queue. Behaves exactly like `FifoQueue`.
#[derive(Debug, Default)]
pub struct LinkedFifoQueue {
    queue: LinkedList<Record>,
}

impl LinkedFifoQueue {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecordQueue for LinkedFifoQueue {
    fn enqueue(&mut self, record: Record) {
        self.queue.push_back(record);
    }

    fn dequeue(&mut self) -> Option<Record> {
        self.queue.pop_front()
    }

    fn peek(&self) -> Option<&Record> {
        self.queue.front()
    }

    fn size(&self) -> usize {
        self.queue.len()
    }

    fn records(&self) -> Vec<Record> {
        self.queue.iter().cloned().collect()
    }
}
