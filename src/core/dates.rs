//! Calendar-local date helpers.
//!
//! Instants are wall-clock milliseconds: a `NaiveDateTime` read as if it were
//! UTC. Local midnight therefore always lands on a multiple of one day and
//! daylight-saving transitions never shift a column boundary.

use chrono::{DateTime, Datelike, Days, Months, NaiveDate, NaiveDateTime, NaiveTime};

use crate::core::TimelineScale;
use crate::error::{TimelineError, TimelineResult};

pub const MS_PER_DAY: i64 = 86_400_000;

const LOCAL_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a zero-padded `YYYY-MM-DD` calendar date.
pub fn parse_local_date(input: &str) -> TimelineResult<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), LOCAL_DATE_FORMAT)
        .map_err(|e| TimelineError::InvalidDate(format!("`{input}`: {e}")))
}

#[must_use]
pub fn format_local_date(date: NaiveDate) -> String {
    date.format(LOCAL_DATE_FORMAT).to_string()
}

/// Midnight of `date` as wall-clock milliseconds.
#[must_use]
pub fn date_to_ms(date: NaiveDate) -> i64 {
    datetime_to_ms(date.and_time(NaiveTime::MIN))
}

#[must_use]
pub fn datetime_to_ms(time: NaiveDateTime) -> i64 {
    time.and_utc().timestamp_millis()
}

/// Calendar date containing the instant `ms`, i.e. its start of day.
///
/// Instants outside chrono's representable range saturate to the nearest
/// representable date.
#[must_use]
pub fn ms_to_date(ms: i64) -> NaiveDate {
    match DateTime::from_timestamp_millis(ms) {
        Some(time) => time.date_naive(),
        None if ms < 0 => NaiveDate::MIN,
        None => NaiveDate::MAX,
    }
}

/// First day of the period of `scale` that contains `date`.
///
/// Weeks start on Monday; a Sunday belongs to the week of the preceding Monday.
#[must_use]
pub fn get_scale_start(date: NaiveDate, scale: TimelineScale) -> NaiveDate {
    match scale {
        TimelineScale::Day => date,
        TimelineScale::Week => {
            let offset = u64::from(date.weekday().num_days_from_monday());
            date.checked_sub_days(Days::new(offset)).unwrap_or(NaiveDate::MIN)
        }
        TimelineScale::Month => date.with_day(1).unwrap_or(date),
    }
}

/// Moves `date` by `units` whole periods of `scale`.
///
/// Months use calendar arithmetic (the day of month is clamped to the target
/// month's length). Results outside chrono's date range saturate.
#[must_use]
pub fn add_scale_units(date: NaiveDate, scale: TimelineScale, units: i64) -> NaiveDate {
    let shifted = match scale {
        TimelineScale::Day => shift_days(date, Some(units)),
        TimelineScale::Week => shift_days(date, units.checked_mul(7)),
        TimelineScale::Month => shift_months(date, units),
    };

    shifted.unwrap_or(if units < 0 {
        NaiveDate::MIN
    } else {
        NaiveDate::MAX
    })
}

/// Adds a signed number of calendar days, saturating at the date range.
#[must_use]
pub fn add_days(date: NaiveDate, days: i64) -> NaiveDate {
    add_scale_units(date, TimelineScale::Day, days)
}

fn shift_days(date: NaiveDate, days: Option<i64>) -> Option<NaiveDate> {
    let days = days?;
    let delta = Days::new(days.unsigned_abs());
    if days >= 0 {
        date.checked_add_days(delta)
    } else {
        date.checked_sub_days(delta)
    }
}

fn shift_months(date: NaiveDate, months: i64) -> Option<NaiveDate> {
    let delta = Months::new(u32::try_from(months.unsigned_abs()).ok()?);
    if months >= 0 {
        date.checked_add_months(delta)
    } else {
        date.checked_sub_months(delta)
    }
}
