use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::dates::{MS_PER_DAY, date_to_ms, parse_local_date};
use crate::core::{VisibleRange, WorkCenter, WorkOrder};
use crate::error::TimelineResult;

/// Half-open millisecond interval occupied by a work order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkOrderInterval {
    pub start_ms: i64,
    pub end_exclusive_ms: i64,
}

impl WorkOrderInterval {
    /// `[start_date 00:00, end_date 00:00 + 1 day)`: the end date is inclusive
    /// of the whole day.
    pub fn from_work_order(work_order: &WorkOrder) -> TimelineResult<Self> {
        let start = parse_local_date(&work_order.data.start_date)?;
        let end = parse_local_date(&work_order.data.end_date)?;
        Ok(Self {
            start_ms: date_to_ms(start),
            end_exclusive_ms: date_to_ms(end) + MS_PER_DAY,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionedWorkOrder {
    pub work_order: WorkOrder,
    pub start_unit: f64,
    pub end_unit: f64,
}

impl PositionedWorkOrder {
    /// Inclusive on both ends.
    #[must_use]
    pub fn covers_unit(&self, unit: f64) -> bool {
        unit >= self.start_unit && unit <= self.end_unit
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineRow {
    pub work_center: WorkCenter,
    pub work_orders: Vec<PositionedWorkOrder>,
}

/// Assigns work orders to their lanes and positions them in unit coordinates.
///
/// Rows follow the order of `work_centers`. Within a row, work orders that
/// intersect `range` are kept and sorted by `start_unit`. Coordinates are
/// not clamped, so orders reaching past either edge get negative or
/// overflowing units. Orders with unparsable dates are skipped.
#[must_use]
pub fn build_rows(
    work_centers: &[WorkCenter],
    work_orders: &[WorkOrder],
    range: VisibleRange,
) -> Vec<TimelineRow> {
    work_centers
        .iter()
        .map(|work_center| {
            let mut positioned: Vec<PositionedWorkOrder> = work_orders
                .iter()
                .filter(|work_order| work_order.data.work_center_id == work_center.doc_id)
                .filter_map(|work_order| position_work_order(work_order, range))
                .collect();
            positioned.sort_by(|a, b| a.start_unit.total_cmp(&b.start_unit));

            TimelineRow {
                work_center: work_center.clone(),
                work_orders: positioned,
            }
        })
        .collect()
}

fn position_work_order(work_order: &WorkOrder, range: VisibleRange) -> Option<PositionedWorkOrder> {
    let interval = match WorkOrderInterval::from_work_order(work_order) {
        Ok(interval) => interval,
        Err(err) => {
            warn!(
                work_order_id = %work_order.doc_id,
                error = %err,
                "skipping work order with unparsable dates"
            );
            return None;
        }
    };

    if !range.intersects(interval.start_ms, interval.end_exclusive_ms) {
        return None;
    }

    Some(PositionedWorkOrder {
        work_order: work_order.clone(),
        start_unit: range.ms_to_unit(interval.start_ms),
        end_unit: range.ms_to_unit(interval.end_exclusive_ms),
    })
}

#[must_use]
pub fn find_row<'a>(rows: &'a [TimelineRow], work_center_id: &str) -> Option<&'a TimelineRow> {
    rows.iter().find(|row| row.work_center.doc_id == work_center_id)
}
