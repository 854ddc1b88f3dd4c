use chrono::{DateTime, Utc};
use quiz_core::model::ProgressRecord;

use super::{
    SqliteRepository,
    mapping::{conn, count_from_row, map_progress_row, progress_id_from_i64},
};
use crate::repository::{NewProgress, ProgressRepository, StorageError};

#[async_trait::async_trait]
impl ProgressRepository for SqliteRepository {
    async fn insert(&self, entry: NewProgress) -> Result<ProgressRecord, StorageError> {
        let timestamp = self.clock.now();

        let res = sqlx::query(
            r"
                INSERT INTO progress (user, sentence_index, correct, timestamp)
                VALUES (?1, ?2, ?3, ?4)
            ",
        )
        .bind(entry.user.as_str())
        .bind(entry.sentence_index)
        .bind(entry.correct)
        .bind(timestamp)
        .execute(&self.pool)
        .await
        .map_err(conn)?;

        Ok(ProgressRecord {
            id: progress_id_from_i64(res.last_insert_rowid())?,
            user: entry.user,
            sentence_index: entry.sentence_index,
            correct: entry.correct,
            timestamp,
        })
    }

    async fn count_by_user(&self, user: &str) -> Result<u64, StorageError> {
        let row = sqlx::query("SELECT COUNT(*) AS count FROM progress WHERE user = ?1")
            .bind(user)
            .fetch_one(&self.pool)
            .await
            .map_err(conn)?;

        count_from_row(&row)
    }

    async fn count_by_user_since(
        &self,
        user: &str,
        since: DateTime<Utc>,
    ) -> Result<u64, StorageError> {
        let row = sqlx::query(
            r"
                SELECT COUNT(*) AS count
                FROM progress
                WHERE user = ?1 AND timestamp >= ?2
            ",
        )
        .bind(user)
        .bind(since)
        .fetch_one(&self.pool)
        .await
        .map_err(conn)?;

        count_from_row(&row)
    }

    async fn earliest_record(&self, user: &str) -> Result<Option<ProgressRecord>, StorageError> {
        let row = sqlx::query(
            r"
                SELECT id, user, sentence_index, correct, timestamp
                FROM progress
                WHERE user = ?1
                ORDER BY timestamp ASC, id ASC
                LIMIT 1
            ",
        )
        .bind(user)
        .fetch_optional(&self.pool)
        .await
        .map_err(conn)?;

        row.as_ref().map(map_progress_row).transpose()
    }
}
