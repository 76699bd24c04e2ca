use chrono::{Datelike, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::core::dates::{add_days, add_scale_units, date_to_ms, datetime_to_ms, get_scale_start};
use crate::core::{TimelineScale, Viewport};

/// One discrete calendar period of the timeline grid.
///
/// Columns are contiguous: `end_exclusive_ms` of column `i` equals
/// `start_ms` of column `i + 1`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineColumn {
    pub index: usize,
    pub label: String,
    pub start_ms: i64,
    pub end_exclusive_ms: i64,
    pub is_current: bool,
}

impl TimelineColumn {
    #[must_use]
    pub fn contains_ms(&self, ms: i64) -> bool {
        ms >= self.start_ms && ms < self.end_exclusive_ms
    }
}

/// Builds `back_units + forward_units + 1` columns around the period that
/// contains `viewport.anchor_date`.
#[must_use]
pub fn build_columns(
    scale: TimelineScale,
    viewport: &Viewport,
    today: NaiveDateTime,
) -> Vec<TimelineColumn> {
    let back_units = i64::from(viewport.back_units);
    let forward_units = i64::from(viewport.forward_units);
    let anchor = get_scale_start(viewport.anchor_date, scale);
    let today_ms = datetime_to_ms(today);

    (-back_units..=forward_units)
        .map(|offset| {
            let start = add_scale_units(anchor, scale, offset);
            let end_exclusive = add_scale_units(anchor, scale, offset + 1);
            let start_ms = date_to_ms(start);
            let end_exclusive_ms = date_to_ms(end_exclusive);
            TimelineColumn {
                index: usize::try_from(offset + back_units).unwrap_or(usize::MAX),
                label: format_column_label(scale, start, end_exclusive),
                start_ms,
                end_exclusive_ms,
                is_current: today_ms >= start_ms && today_ms < end_exclusive_ms,
            }
        })
        .collect()
}

/// Index of the first column containing "today".
#[must_use]
pub fn current_column_index(columns: &[TimelineColumn]) -> Option<usize> {
    columns.iter().position(|column| column.is_current)
}

/// English, locale-independent column label.
///
/// `Feb 20` for days, `Feb 16-22` or `Jan 26-Feb 1` for weeks, `Feb 2026`
/// for months.
#[must_use]
pub fn format_column_label(
    scale: TimelineScale,
    start: NaiveDate,
    end_exclusive: NaiveDate,
) -> String {
    match scale {
        TimelineScale::Day => start.format("%b %-d").to_string(),
        TimelineScale::Week => {
            let inclusive_end = add_days(end_exclusive, -1);
            let start_label = start.format("%b %-d");
            if start.month() == inclusive_end.month() {
                format!("{start_label}-{}", inclusive_end.day())
            } else {
                format!("{start_label}-{}", inclusive_end.format("%b %-d"))
            }
        }
        TimelineScale::Month => start.format("%b %Y").to_string(),
    }
}
