use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::dates::{add_days, format_local_date, ms_to_date};
use crate::core::rows::find_row;
use crate::core::{TimelineRow, VisibleRange};

/// Span proposed for a new work order, regardless of scale.
pub const DEFAULT_CREATION_SPAN_DAYS: u32 = 7;

/// Pointer position over the board.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HoverState {
    pub work_center_id: Option<String>,
    pub pointer_unit: Option<f64>,
    pub is_over_menu: bool,
}

impl HoverState {
    #[must_use]
    pub fn new(work_center_id: impl Into<String>, pointer_unit: f64, is_over_menu: bool) -> Self {
        Self {
            work_center_id: Some(work_center_id.into()),
            pointer_unit: Some(pointer_unit),
            is_over_menu,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.work_center_id.is_none() && self.pointer_unit.is_none() && !self.is_over_menu
    }
}

/// One-unit creation affordance under the pointer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoverOverlay {
    pub work_center_id: String,
    pub start_unit: f64,
    pub span_units: f64,
    pub can_create: bool,
}

/// Calendar range proposed for a new work order, as `YYYY-MM-DD` strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreationRange {
    pub start_date: String,
    pub end_date: String,
}

impl CreationRange {
    fn spanning(start: NaiveDate, span_days: u32) -> Self {
        Self {
            start_date: format_local_date(start),
            end_date: format_local_date(add_days(start, i64::from(span_days))),
        }
    }
}

/// Derives the hover overlay for the hovered lane.
///
/// Returns `None` without a hovered lane or finite pointer, while a menu is
/// open under the pointer, or when the lane is not among `rows`. The overlay
/// is centered on the pointer and clamped inside the range; `can_create` is
/// false when the clamped pointer lies within any work order of the lane.
#[must_use]
pub fn build_hover_overlay(
    hover: &HoverState,
    rows: &[TimelineRow],
    range: VisibleRange,
) -> Option<HoverOverlay> {
    if hover.is_over_menu {
        return None;
    }
    let work_center_id = hover.work_center_id.as_deref()?;
    let pointer_unit = hover.pointer_unit.filter(|unit| unit.is_finite())?;
    let row = find_row(rows, work_center_id)?;

    let total_units = range.total_units as f64;
    let pointer_unit = clamp_unit(pointer_unit, 0.0, total_units);
    let start_unit = clamp_unit(pointer_unit - 0.5, 0.0, (total_units - 1.0).max(0.0));
    let end_unit = start_unit + 1.0;
    let occupied = row
        .work_orders
        .iter()
        .any(|work_order| work_order.covers_unit(pointer_unit));

    Some(HoverOverlay {
        work_center_id: work_center_id.to_owned(),
        start_unit,
        span_units: end_unit - start_unit,
        can_create: !occupied,
    })
}

/// Maps a pointer unit to a creation range starting on the day under it.
#[must_use]
pub fn get_creation_range_for_pointer(pointer_unit: f64, range: VisibleRange) -> CreationRange {
    creation_range_for_pointer_with_span(pointer_unit, range, DEFAULT_CREATION_SPAN_DAYS)
}

#[must_use]
pub fn creation_range_for_pointer_with_span(
    pointer_unit: f64,
    range: VisibleRange,
    span_days: u32,
) -> CreationRange {
    let pointer_unit = clamp_unit(pointer_unit, 0.0, range.total_units as f64);
    let target_ms = range.unit_to_ms(pointer_unit).floor() as i64;
    CreationRange::spanning(ms_to_date(target_ms), span_days)
}

/// Creation range used without pointer context, starting today.
#[must_use]
pub fn get_default_creation_range(today: NaiveDate) -> CreationRange {
    default_creation_range_with_span(today, DEFAULT_CREATION_SPAN_DAYS)
}

#[must_use]
pub fn default_creation_range_with_span(today: NaiveDate, span_days: u32) -> CreationRange {
    CreationRange::spanning(today, span_days)
}

/// Clamps into `[min, max]`; `NaN` maps to `min`.
fn clamp_unit(value: f64, min: f64, max: f64) -> f64 {
    if value.is_nan() || value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}
