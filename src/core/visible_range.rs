use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::core::{Clock, SystemClock, TimelineColumn};
use crate::core::dates::datetime_to_ms;

/// Continuous time span covered by a column sequence.
///
/// Defines the unit coordinate system: unit 0 is `start_ms`, unit
/// `total_units` is `end_exclusive_ms`, linear in between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisibleRange {
    pub start_ms: i64,
    pub end_exclusive_ms: i64,
    pub duration_ms: i64,
    pub total_units: usize,
}

impl VisibleRange {
    /// Degenerate one-millisecond, one-unit range starting at `now_ms`.
    #[must_use]
    pub fn degenerate(now_ms: i64) -> Self {
        Self {
            start_ms: now_ms,
            end_exclusive_ms: now_ms.saturating_add(1),
            duration_ms: 1,
            total_units: 1,
        }
    }

    /// Maps an instant to a unit coordinate. Not clamped to the range.
    #[must_use]
    pub fn ms_to_unit(self, ms: i64) -> f64 {
        (ms - self.start_ms) as f64 * self.total_units as f64 / self.duration_ms as f64
    }

    /// Maps a unit coordinate back to an instant. Not clamped to the range.
    #[must_use]
    pub fn unit_to_ms(self, unit: f64) -> f64 {
        self.start_ms as f64 + unit * self.duration_ms as f64 / self.total_units as f64
    }

    /// Half-open intersection test against `[start_ms, end_exclusive_ms)`.
    #[must_use]
    pub fn intersects(self, start_ms: i64, end_exclusive_ms: i64) -> bool {
        start_ms < self.end_exclusive_ms && end_exclusive_ms > self.start_ms
    }
}

/// Collapses `columns` into one range; falls back to a degenerate range at
/// the system clock's current time when there are no columns.
#[must_use]
pub fn build_visible_range(columns: &[TimelineColumn]) -> VisibleRange {
    build_visible_range_at(columns, SystemClock.now())
}

/// Same as `build_visible_range`, with the fallback anchored at `now`.
#[must_use]
pub fn build_visible_range_at(columns: &[TimelineColumn], now: NaiveDateTime) -> VisibleRange {
    let (Some(first), Some(last)) = (columns.first(), columns.last()) else {
        return VisibleRange::degenerate(datetime_to_ms(now));
    };

    VisibleRange {
        start_ms: first.start_ms,
        end_exclusive_ms: last.end_exclusive_ms,
        duration_ms: (last.end_exclusive_ms - first.start_ms).max(1),
        total_units: columns.len(),
    }
}
