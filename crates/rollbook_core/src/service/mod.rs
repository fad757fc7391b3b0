//! Use-case services over the record repository.
//!
//! # Responsibility
//! - Orchestrate repository calls into roster-level APIs.
//! - Keep CLI callers decoupled from the chosen backing strategy.

pub mod roster_service;
