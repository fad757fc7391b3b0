//! Domain model shared by the roster repository and queues.
//!
//! # Responsibility
//! - Define the canonical student record stored by every container.
//!
//! # Invariants
//! - `id` and `name` never change after a record is created.
//! - `score` changes only through `Record::set_score`.

pub mod record;
