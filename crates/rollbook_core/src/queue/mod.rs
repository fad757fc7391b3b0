//! Restricted record stores that only release records in service order.
//!
//! # Responsibility
//! - Provide FIFO and score-priority queues over `Record`.
//! - Render queue contents for console output.
//!
//! # Invariants
//! - FIFO queues serve records in enqueue order.
//! - The priority queue always serves a maximum-score record; ties are
//!   served in unspecified order.

mod fifo;
mod priority;

pub use fifo::{FifoQueue, LinkedFifoQueue};
pub use priority::PriorityQueue;

use crate::model::record::Record;

/// Status line printed for a queue with no waiting records.
pub const EMPTY_QUEUE_MESSAGE: &str = "Queue is empty";

/// Queue interface shared by FIFO and priority variants.
pub trait RecordQueue: Send {
    fn enqueue(&mut self, record: Record);
    /// Removes and returns the next record to serve.
    fn dequeue(&mut self) -> Option<Record>;
    /// Returns the next record to serve without removing it.
    fn peek(&self) -> Option<&Record>;
    fn size(&self) -> usize;
    /// Snapshot of waiting records in service order.
    fn records(&self) -> Vec<Record>;

    fn is_empty(&self) -> bool {
        self.size() == 0
    }
}

/// Queue flavours available to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QueueKind {
    /// `VecDeque`-backed FIFO.
    #[default]
    Fifo,
    /// `LinkedList`-backed FIFO.
    LinkedFifo,
    /// Highest score first.
    Priority,
}

/// Builds an empty queue of the requested kind.
pub fn queue_for(kind: QueueKind) -> Box<dyn RecordQueue> {
    match kind {
        QueueKind::Fifo => Box::new(FifoQueue::new()),
        QueueKind::LinkedFifo => Box::new(LinkedFifoQueue::new()),
        QueueKind::Priority => Box::new(PriorityQueue::new()),
    }
}

/// Renders waiting records one per line, or the empty-queue status line.
pub fn render_queue(queue: &dyn RecordQueue) -> Vec<String> {
    if queue.is_empty() {
        return vec![EMPTY_QUEUE_MESSAGE.to_string()];
    }
    queue.records().iter().map(ToString::to_string).collect()
}
