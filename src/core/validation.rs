use chrono::NaiveDate;

use crate::core::dates::parse_local_date;
use crate::core::{WorkOrder, WorkOrderData};
use crate::error::{TimelineError, TimelineResult};

/// Validates a work-order draft against the orders already scheduled.
///
/// `editing_id` names the order being edited, which never conflicts with
/// itself. A draft conflicts when its start or end date falls inside
/// (inclusive) another order of the same work center.
pub fn validate_work_order(
    data: &WorkOrderData,
    existing: &[WorkOrder],
    editing_id: Option<&str>,
) -> TimelineResult<()> {
    if data.name.trim().is_empty() {
        return Err(TimelineError::InvalidWorkOrder("name must not be empty".to_owned()));
    }
    if data.work_center_id.trim().is_empty() {
        return Err(TimelineError::InvalidWorkOrder("work center must be set".to_owned()));
    }

    let start = parse_local_date(&data.start_date)?;
    let end = parse_local_date(&data.end_date)?;
    if start >= end {
        return Err(TimelineError::InvalidWorkOrder(
            "start date must be before end date".to_owned(),
        ));
    }

    let conflict = existing
        .iter()
        .filter(|other| other.data.work_center_id == data.work_center_id)
        .filter(|other| editing_id != Some(other.doc_id.as_str()))
        .find(|other| contains_date(other, start) || contains_date(other, end));

    match conflict {
        Some(other) => Err(TimelineError::DateOverlap {
            work_order_name: other.data.name.clone(),
        }),
        None => Ok(()),
    }
}

/// Whether `date` lies within the order's inclusive calendar range.
///
/// Orders with unparsable dates contain nothing.
#[must_use]
pub fn contains_date(work_order: &WorkOrder, date: NaiveDate) -> bool {
    match (
        parse_local_date(&work_order.data.start_date),
        parse_local_date(&work_order.data.end_date),
    ) {
        (Ok(start), Ok(end)) => date >= start && date <= end,
        _ => false,
    }
}
