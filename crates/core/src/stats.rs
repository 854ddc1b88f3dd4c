use chrono::{DateTime, Duration, Utc};

use crate::time::utc_day_start;

/// Length of the rolling window behind the `week` count.
pub const WEEK_WINDOW_DAYS: i64 = 7;

//
// ─── WINDOW ────────────────────────────────────────────────────────────────────
//

/// Day boundaries used by the statistics queries, evaluated at `now`.
///
/// `week_start` is seven days before `today_start`, a rolling window rather
/// than a calendar week.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatsWindow {
    pub now: DateTime<Utc>,
    pub today_start: DateTime<Utc>,
    pub week_start: DateTime<Utc>,
}

impl StatsWindow {
    #[must_use]
    pub fn at(now: DateTime<Utc>) -> Self {
        let today_start = utc_day_start(now);
        Self {
            now,
            today_start,
            week_start: today_start - Duration::days(WEEK_WINDOW_DAYS),
        }
    }
}

//
// ─── STATS ─────────────────────────────────────────────────────────────────────
//

/// Per-user submission counts and daily average.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressStats {
    pub total: u64,
    pub today: u64,
    pub week: u64,
    pub average_per_day: f64,
}

impl ProgressStats {
    /// Stats for a user without any records.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            total: 0,
            today: 0,
            week: 0,
            average_per_day: 0.0,
        }
    }
}

/// Whole days between the first record and `now`, never less than one.
#[must_use]
pub fn elapsed_days(first: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    now.signed_duration_since(first).num_days().max(1)
}

/// Average submissions per day since the first record, rounded to two decimals.
///
/// Returns `0.0` when there are no records (`first` is `None` or `total` is 0).
#[must_use]
pub fn average_per_day(total: u64, first: Option<DateTime<Utc>>, now: DateTime<Utc>) -> f64 {
    let Some(first) = first else {
        return 0.0;
    };
    if total == 0 {
        return 0.0;
    }

    // Counts and day spans stay far below 2^52.
    #[allow(clippy::cast_precision_loss)]
    let average = total as f64 / elapsed_days(first, now) as f64;

    // Ties go to the even hundredth: 1/8 reports 0.12.
    (average * 100.0).round_ties_even() / 100.0
}
