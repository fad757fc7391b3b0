//! Record repository contracts and in-memory backing stores.
//!
//! # Responsibility
//! - Define the storage-agnostic record repository contract.
//! - Provide interchangeable backing strategies selected once at construction.
//!
//! # Invariants
//! - Every strategy produces identical observable results.
//! - An unknown strategy token is the only error this layer raises.

pub mod record_repo;
pub mod strategy;
