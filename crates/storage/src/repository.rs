use async_trait::async_trait;
use chrono::{DateTime, Utc};
use quiz_core::Clock;
use quiz_core::model::{ProgressId, ProgressRecord};
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Input for a new progress record; id and timestamp are assigned on insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProgress {
    pub user: String,
    pub sentence_index: i64,
    pub correct: bool,
}

impl NewProgress {
    #[must_use]
    pub fn new(user: impl Into<String>, sentence_index: i64, correct: bool) -> Self {
        Self {
            user: user.into(),
            sentence_index,
            correct,
        }
    }
}

/// Repository contract for answer submissions.
///
/// Records are append-only: there are no update or delete operations.
#[async_trait]
pub trait ProgressRepository: Send + Sync {
    /// Persist a submission, stamping it with the repository clock.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the record cannot be stored; nothing is written
    /// in that case.
    async fn insert(&self, entry: NewProgress) -> Result<ProgressRecord, StorageError>;

    /// Total number of records for `user`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the query fails.
    async fn count_by_user(&self, user: &str) -> Result<u64, StorageError>;

    /// Number of records for `user` with `timestamp >= since`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the query fails.
    async fn count_by_user_since(
        &self,
        user: &str,
        since: DateTime<Utc>,
    ) -> Result<u64, StorageError>;

    /// The record with the smallest timestamp for `user`, if any.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the query fails.
    async fn earliest_record(&self, user: &str) -> Result<Option<ProgressRecord>, StorageError>;
}

/// Simple in-memory repository implementation for testing and prototyping.
///
/// Clones share the same records, so a clone with a different clock can be
/// used to insert records at other points in time.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    records: Arc<Mutex<Vec<ProgressRecord>>>,
    clock: Clock,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self {
            records: Arc::new(Mutex::new(Vec::new())),
            clock: Clock::default(),
        }
    }

    /// Override the clock used to stamp new records.
    #[must_use]
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Vec<ProgressRecord>>, StorageError> {
        self.records
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))
    }
}

#[async_trait]
impl ProgressRepository for InMemoryRepository {
    async fn insert(&self, entry: NewProgress) -> Result<ProgressRecord, StorageError> {
        let mut guard = self.lock()?;
        let next = u64::try_from(guard.len())
            .map_err(|_| StorageError::Serialization("id overflow".into()))?
            + 1;
        let record = ProgressRecord {
            id: ProgressId::new(next),
            user: entry.user,
            sentence_index: entry.sentence_index,
            correct: entry.correct,
            timestamp: self.clock.now(),
        };
        guard.push(record.clone());
        Ok(record)
    }

    async fn count_by_user(&self, user: &str) -> Result<u64, StorageError> {
        let guard = self.lock()?;
        Ok(guard.iter().filter(|r| r.user == user).count() as u64)
    }

    async fn count_by_user_since(
        &self,
        user: &str,
        since: DateTime<Utc>,
    ) -> Result<u64, StorageError> {
        let guard = self.lock()?;
        Ok(guard
            .iter()
            .filter(|r| r.user == user && r.timestamp >= since)
            .count() as u64)
    }

    async fn earliest_record(&self, user: &str) -> Result<Option<ProgressRecord>, StorageError> {
        let guard = self.lock()?;
        Ok(guard
            .iter()
            .filter(|r| r.user == user)
            .min_by_key(|r| (r.timestamp, r.id))
            .cloned())
    }
}

/// Aggregates repositories behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub progress: Arc<dyn ProgressRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        Self::in_memory_with_clock(Clock::default())
    }

    #[must_use]
    pub fn in_memory_with_clock(clock: Clock) -> Self {
        let progress: Arc<dyn ProgressRepository> =
            Arc::new(InMemoryRepository::new().with_clock(clock));
        Self { progress }
    }
}
