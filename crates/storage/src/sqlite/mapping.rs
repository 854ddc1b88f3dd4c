use quiz_core::model::{ProgressId, ProgressRecord};
use sqlx::Row;

use crate::repository::StorageError;

pub(crate) fn ser<E: core::fmt::Display>(e: E) -> StorageError {
    StorageError::Serialization(e.to_string())
}

pub(crate) fn conn<E: core::fmt::Display>(e: E) -> StorageError {
    StorageError::Connection(e.to_string())
}

fn i64_to_u64(field: &'static str, v: i64) -> Result<u64, StorageError> {
    u64::try_from(v).map_err(|_| StorageError::Serialization(format!("{field} sign overflow")))
}

pub(crate) fn progress_id_from_i64(v: i64) -> Result<ProgressId, StorageError> {
    Ok(ProgressId::new(i64_to_u64("id", v)?))
}

/// `COUNT(*)` comes back as a signed integer.
pub(crate) fn count_from_row(row: &sqlx::sqlite::SqliteRow) -> Result<u64, StorageError> {
    i64_to_u64("count", row.try_get::<i64, _>("count").map_err(ser)?)
}

pub(crate) fn map_progress_row(
    row: &sqlx::sqlite::SqliteRow,
) -> Result<ProgressRecord, StorageError> {
    Ok(ProgressRecord {
        id: progress_id_from_i64(row.try_get::<i64, _>("id").map_err(ser)?)?,
        user: row.try_get("user").map_err(ser)?,
        sentence_index: row.try_get("sentence_index").map_err(ser)?,
        correct: row.try_get("correct").map_err(ser)?,
        timestamp: row.try_get("timestamp").map_err(ser)?,
    })
}
