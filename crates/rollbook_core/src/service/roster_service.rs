//! Roster use-case service.
//!
//! # Responsibility
//! - Provide enroll/find/update/remove entry points for core callers.
//! - Emit metadata-only diagnostic events for every mutation.
//!
//! # Invariants
//! - Service APIs never bypass repository contracts.
//! - Not-found outcomes are reported through return values, never errors.

use crate::model::record::{Record, RecordId};
use crate::repo::record_repo::{open_repository, RecordRepository};
use crate::repo::strategy::{ConfigError, StorageStrategy};
use log::{debug, info, log_enabled, Level};

/// Use-case wrapper for roster operations.
pub struct RosterService<R: RecordRepository> {
    repo: R,
}

impl RosterService<Box<dyn RecordRepository>> {
    /// Builds a service over the repository selected by `token`.
    ///
    /// # Errors
    /// - Returns `ConfigError::InvalidConfiguration` for unknown tokens.
    pub fn open(token: &str) -> Result<Self, ConfigError> {
        let repo = open_repository(token)?;
        info!(
            "event=roster_open module=roster status=ok strategy={}",
            repo.strategy()
        );
        Ok(Self::new(repo))
    }
}

impl<R: RecordRepository> RosterService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn strategy(&self) -> StorageStrategy {
        self.repo.strategy()
    }

    /// Adds one record at the end of the roster.
    pub fn enroll(&mut self, id: RecordId, name: impl Into<String>, score: f64) {
        self.add(Record::new(id, name, score));
    }

    /// Adds an already-built record. Duplicate ids are accepted.
    pub fn add(&mut self, record: Record) {
        let id = record.id();
        if log_enabled!(Level::Debug) && self.repo.find_by_id(id).is_some() {
            debug!("event=roster_add module=roster status=duplicate id={id}");
        }
        self.repo.insert(record);
        debug!(
            "event=roster_add module=roster status=ok id={id} count={}",
            self.repo.count()
        );
    }

    pub fn find(&self, id: RecordId) -> Option<Record> {
        self.repo.find_by_id(id)
    }

    /// Updates the score of the first record with `id`.
    ///
    /// Returns `false` and leaves state untouched when `id` is absent.
    pub fn update_score(&mut self, id: RecordId, score: f64) -> bool {
        let updated = self.repo.update_score(id, score);
        debug!(
            "event=roster_update module=roster status={} id={id}",
            outcome(updated)
        );
        updated
    }

    /// Removes every record with `id`.
    pub fn remove(&mut self, id: RecordId) -> bool {
        let removed = self.repo.remove_by_id(id);
        debug!(
            "event=roster_remove module=roster status={} id={id} count={}",
            outcome(removed),
            self.repo.count()
        );
        removed
    }

    /// Snapshot of all records in insertion order.
    pub fn records(&self) -> Vec<Record> {
        self.repo.records()
    }

    pub fn count(&self) -> usize {
        self.repo.count()
    }

    /// One console line per record, in insertion order.
    pub fn render_lines(&self) -> Vec<String> {
        self.repo
            .records()
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    /// Consumes the service and returns the repository.
    pub fn into_inner(self) -> R {
        self.repo
    }
}

fn outcome(hit: bool) -> &'static str {
    if hit {
        "ok"
    } else {
        "miss"
    }
}

#[cfg(test)]
mod tests {
    use super::RosterService;
    use crate::model::record::Record;
    use crate::repo::record_repo::{ArrayRecordRepository, RecordRepository};
    use crate::repo::strategy::StorageStrategy;

    #[test]
    fn open_selects_strategy_from_token() {
        let service = RosterService::open("LINKED").expect("linked is supported");
        assert_eq!(service.strategy(), StorageStrategy::Linked);
    }

    #[test]
    fn open_rejects_unknown_token() {
        assert!(RosterService::open("tree").is_err());
    }

    #[test]
    fn render_lines_follow_insertion_order() {
        let mut service = RosterService::new(ArrayRecordRepository::new());
        service.enroll(1, "Vijay", 91.5);
        service.enroll(2, "Govind", 93.0);

        assert_eq!(
            service.render_lines(),
            vec!["1 - Vijay : 91.5".to_string(), "2 - Govind : 93.0".to_string()]
        );
    }

    #[test]
    fn misses_return_false_without_changes() {
        let mut service = RosterService::new(ArrayRecordRepository::new());
        service.enroll(1, "Bhanu", 88.0);

        assert!(!service.update_score(9, 10.0));
        assert!(!service.remove(9));
        assert_eq!(service.count(), 1);
        assert_eq!(service.find(1).map(|r| r.score()), Some(88.0));
    }

    #[test]
    fn duplicate_ids_are_kept_and_repository_is_returned() {
        let mut service = RosterService::new(ArrayRecordRepository::new());
        service.enroll(4, "Raj", 70.0);
        service.add(Record::new(4, "Raj again", 72.0));

        let repo = service.into_inner();
        assert_eq!(repo.count(), 2);
        assert_eq!(
            repo.records().iter().map(Record::name).collect::<Vec<_>>(),
            vec!["Raj", "Raj again"]
        );
    }
}
