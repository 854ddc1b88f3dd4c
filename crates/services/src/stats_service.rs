use std::sync::Arc;

use quiz_core::stats::{ProgressStats, StatsWindow, average_per_day};
use storage::repository::ProgressRepository;

use crate::Clock;
use crate::error::StatsError;

/// Computes per-user progress statistics from the repository.
///
/// Read-only: evaluating stats never writes.
#[derive(Clone)]
pub struct StatsService {
    clock: Clock,
    progress: Arc<dyn ProgressRepository>,
}

impl StatsService {
    #[must_use]
    pub fn new(clock: Clock, progress: Arc<dyn ProgressRepository>) -> Self {
        Self { clock, progress }
    }

    /// Totals, today/week counts and average per day for `user`, as of the
    /// service clock's "now".
    ///
    /// Unknown users get all-zero stats.
    ///
    /// # Errors
    ///
    /// Returns `StatsError::Storage` if any repository query fails.
    pub async fn stats_for(&self, user: &str) -> Result<ProgressStats, StatsError> {
        let window = StatsWindow::at(self.clock.now());

        let total = self.progress.count_by_user(user).await?;
        if total == 0 {
            return Ok(ProgressStats::empty());
        }

        let today = self
            .progress
            .count_by_user_since(user, window.today_start)
            .await?;
        let week = self
            .progress
            .count_by_user_since(user, window.week_start)
            .await?;
        let first = self
            .progress
            .earliest_record(user)
            .await?
            .map(|record| record.timestamp);

        Ok(ProgressStats {
            total,
            today,
            week,
            average_per_day: average_per_day(total, first, window.now),
        })
    }
}
