//! Record repository contract and in-memory implementations.
//!
//! # Responsibility
//! - Provide insert/find/update/remove/enumerate/count over student records.
//! - Keep the choice of backing container invisible to callers.
//!
//! # Invariants
//! - Enumeration follows insertion order.
//! - Duplicate ids are accepted; lookup and update act on the first match,
//!   removal drops every match.
//! - `records()` and `find_by_id()` return owned snapshots that do not track
//!   later mutations.

use crate::model::record::{Record, RecordId};
use crate::repo::strategy::{parse_strategy, ConfigError, StorageStrategy};
use log::debug;
use std::collections::LinkedList;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Repository interface shared by every backing strategy.
pub trait RecordRepository: Send {
    fn strategy(&self) -> StorageStrategy;
    fn insert(&mut self, record: Record);
    fn find_by_id(&self, id: RecordId) -> Option<Record>;
    fn update_score(&mut self, id: RecordId, score: f64) -> bool;
    fn remove_by_id(&mut self, id: RecordId) -> bool;
    fn records(&self) -> Vec<Record>;
    fn count(&self) -> usize;
}

impl<R: RecordRepository + ?Sized> RecordRepository for Box<R> {
    fn strategy(&self) -> StorageStrategy {
        (**self).strategy()
    }

    fn insert(&mut self, record: Record) {
        (**self).insert(record)
    }

    fn find_by_id(&self, id: RecordId) -> Option<Record> {
        (**self).find_by_id(id)
    }

    fn update_score(&mut self, id: RecordId, score: f64) -> bool {
        (**self).update_score(id, score)
    }

    fn remove_by_id(&mut self, id: RecordId) -> bool {
        (**self).remove_by_id(id)
    }

    fn records(&self) -> Vec<Record> {
        (**self).records()
    }

    fn count(&self) -> usize {
        (**self).count()
    }
}

/// Builds an empty repository for one strategy.
pub fn repository_for(strategy: StorageStrategy) -> Box<dyn RecordRepository> {
    debug!(
        "event=repo_open module=repo status=ok strategy={}",
        strategy.as_str()
    );
    match strategy {
        StorageStrategy::Array => Box::new(ArrayRecordRepository::new()),
        StorageStrategy::Linked => Box::new(LinkedRecordRepository::new()),
        StorageStrategy::Vector => Box::new(SynchronizedRecordRepository::new()),
    }
}

/// Parses `token` and builds the matching repository.
///
/// # Errors
/// - Returns `ConfigError::InvalidConfiguration` for tokens outside
///   `array|linked|vector`. No repository is produced in that case.
pub fn open_repository(token: &str) -> Result<Box<dyn RecordRepository>, ConfigError> {
    let strategy = parse_strategy(token)?;
    Ok(repository_for(strategy))
}

/// `Vec`-backed repository.
#[derive(Debug, Default)]
pub struct ArrayRecordRepository {
    records: Vec<Record>,
}

impl ArrayRecordRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecordRepository for ArrayRecordRepository {
    fn strategy(&self) -> StorageStrategy {
        StorageStrategy::Array
    }

    fn insert(&mut self, record: Record) {
        self.records.push(record);
    }

    fn find_by_id(&self, id: RecordId) -> Option<Record> {
        self.records.iter().find(|record| record.id() == id).cloned()
    }

    fn update_score(&mut self, id: RecordId, score: f64) -> bool {
        set_first_score(self.records.iter_mut(), id, score)
    }

    fn remove_by_id(&mut self, id: RecordId) -> bool {
        remove_all_from_vec(&mut self.records, id)
    }

    fn records(&self) -> Vec<Record> {
        self.records.clone()
    }

    fn count(&self) -> usize {
        self.records.len()
    }
}

/// `LinkedList`-backed repository.
#[derive(Debug, Default)]
pub struct LinkedRecordRepository {
    records: LinkedList<Record>,
}

impl LinkedRecordRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecordRepository for LinkedRecordRepository {
    fn strategy(&self) -> StorageStrategy {
        StorageStrategy::Linked
    }

    fn insert(&mut self, record: Record) {
        self.records.push_back(record);
    }

    fn find_by_id(&self, id: RecordId) -> Option<Record> {
        self.records.iter().find(|record| record.id() == id).cloned()
    }

    fn update_score(&mut self, id: RecordId, score: f64) -> bool {
        set_first_score(self.records.iter_mut(), id, score)
    }

    fn remove_by_id(&mut self, id: RecordId) -> bool {
        let before = self.records.len();
        // LinkedList has no stable retain; rebuild without the matches.
        self.records = std::mem::take(&mut self.records)
            .into_iter()
            .filter(|record| record.id() != id)
            .collect();
        self.records.len() != before
    }

    fn records(&self) -> Vec<Record> {
        self.records.iter().cloned().collect()
    }

    fn count(&self) -> usize {
        self.records.len()
    }
}

/// `Mutex<Vec>`-backed repository.
///
/// Every operation, reads included, holds the same lock for its whole
/// duration. The inherent `&self` methods allow sharing one instance across
/// threads behind `Arc`; the trait methods delegate to them.
#[derive(Debug, Default)]
pub struct SynchronizedRecordRepository {
    records: Mutex<Vec<Record>>,
}

impl SynchronizedRecordRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, record: Record) {
        self.lock().push(record);
    }

    pub fn find_by_id(&self, id: RecordId) -> Option<Record> {
        self.lock().iter().find(|record| record.id() == id).cloned()
    }

    pub fn update_score(&self, id: RecordId, score: f64) -> bool {
        set_first_score(self.lock().iter_mut(), id, score)
    }

    pub fn remove_by_id(&self, id: RecordId) -> bool {
        remove_all_from_vec(&mut self.lock(), id)
    }

    pub fn records(&self) -> Vec<Record> {
        self.lock().clone()
    }

    pub fn count(&self) -> usize {
        self.lock().len()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Record>> {
        // Records are plain values and every mutation is a single container
        // call, so a poisoned guard still holds consistent data.
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl RecordRepository for SynchronizedRecordRepository {
    fn strategy(&self) -> StorageStrategy {
        StorageStrategy::Vector
    }

    fn insert(&mut self, record: Record) {
        SynchronizedRecordRepository::insert(self, record)
    }

    fn find_by_id(&self, id: RecordId) -> Option<Record> {
        SynchronizedRecordRepository::find_by_id(self, id)
    }

    fn update_score(&mut self, id: RecordId, score: f64) -> bool {
        SynchronizedRecordRepository::update_score(self, id, score)
    }

    fn remove_by_id(&mut self, id: RecordId) -> bool {
        SynchronizedRecordRepository::remove_by_id(self, id)
    }

    fn records(&self) -> Vec<Record> {
        SynchronizedRecordRepository::records(self)
    }

    fn count(&self) -> usize {
        SynchronizedRecordRepository::count(self)
    }
}

fn set_first_score<'a>(
    mut records: impl Iterator<Item = &'a mut Record>,
    id: RecordId,
    score: f64,
) -> bool {
    match records.find(|record| record.id() == id) {
        Some(record) => {
            record.set_score(score);
            true
        }
        None => false,
    }
}

fn remove_all_from_vec(records: &mut Vec<Record>, id: RecordId) -> bool {
    let before = records.len();
    records.retain(|record| record.id() != id);
    records.len() != before
}
