//! Core library for the rollbook exercises.
//! Owns the record model, repositories, queues and the console/vehicle demos.

pub mod console;
pub mod logging;
pub mod model;
pub mod queue;
pub mod repo;
pub mod service;
pub mod vehicle;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::record::{Record, RecordId};
pub use queue::{queue_for, render_queue, QueueKind, RecordQueue};
pub use repo::record_repo::{
    open_repository, repository_for, ArrayRecordRepository, LinkedRecordRepository,
    RecordRepository, SynchronizedRecordRepository,
};
pub use repo::strategy::{parse_strategy, ConfigError, StorageStrategy};
pub use service::roster_service::RosterService;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
