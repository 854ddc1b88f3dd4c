use chrono::{DateTime, Utc};

use crate::model::ids::ProgressId;

/// Record of a single answer submission.
///
/// Created once by the progress repository and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressRecord {
    pub id: ProgressId,
    pub user: String,
    pub sentence_index: i64,
    pub correct: bool,
    pub timestamp: DateTime<Utc>,
}
