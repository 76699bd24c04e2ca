use chrono::NaiveDate;
use indexmap::IndexMap;
use tracing::debug;
use uuid::Uuid;

use crate::core::dates::parse_local_date;
use crate::core::validation::contains_date;
use crate::core::{WorkCenter, WorkOrder, WorkOrderData};
use crate::error::{TimelineError, TimelineResult};

use super::{WorkCenterRepository, WorkOrderRepository};

/// Fixed list of work centers held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryWorkCenterRepository {
    work_centers: Vec<WorkCenter>,
}

impl InMemoryWorkCenterRepository {
    #[must_use]
    pub fn new(work_centers: Vec<WorkCenter>) -> Self {
        Self { work_centers }
    }
}

impl WorkCenterRepository for InMemoryWorkCenterRepository {
    fn load(&mut self) -> TimelineResult<()> {
        debug!(count = self.work_centers.len(), "work centers loaded");
        Ok(())
    }

    fn list(&self) -> Vec<WorkCenter> {
        self.work_centers.clone()
    }
}

/// Work orders keyed by document id, kept in insertion order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryWorkOrderRepository {
    work_orders: IndexMap<String, WorkOrder>,
}

impl InMemoryWorkOrderRepository {
    /// Seeds the store; a later order with a duplicate id replaces the earlier one.
    #[must_use]
    pub fn new(work_orders: Vec<WorkOrder>) -> Self {
        Self {
            work_orders: work_orders
                .into_iter()
                .map(|work_order| (work_order.doc_id.clone(), work_order))
                .collect(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.work_orders.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.work_orders.is_empty()
    }

    #[must_use]
    pub fn find_by_id(&self, id: &str) -> Option<&WorkOrder> {
        self.work_orders.get(id)
    }

    /// Orders of `work_center_id` whose start is before `range_end` and whose
    /// end is after `range_start`.
    #[must_use]
    pub fn find_by_work_center_and_date_range(
        &self,
        work_center_id: &str,
        range_start: NaiveDate,
        range_end: NaiveDate,
    ) -> Vec<&WorkOrder> {
        self.work_orders
            .values()
            .filter(|work_order| work_order.data.work_center_id == work_center_id)
            .filter(|work_order| {
                match (
                    parse_local_date(&work_order.data.start_date),
                    parse_local_date(&work_order.data.end_date),
                ) {
                    (Ok(start), Ok(end)) => start < range_end && end > range_start,
                    _ => false,
                }
            })
            .collect()
    }

    /// First order of `work_center_id` whose inclusive date range contains `date`.
    #[must_use]
    pub fn find_by_work_center_containing_date(
        &self,
        work_center_id: &str,
        date: NaiveDate,
    ) -> Option<&WorkOrder> {
        self.work_orders.values().find(|work_order| {
            work_order.data.work_center_id == work_center_id && contains_date(work_order, date)
        })
    }
}

impl WorkOrderRepository for InMemoryWorkOrderRepository {
    fn load(&mut self) -> TimelineResult<()> {
        debug!(count = self.work_orders.len(), "work orders loaded");
        Ok(())
    }

    fn list(&self) -> Vec<WorkOrder> {
        self.work_orders.values().cloned().collect()
    }

    fn create(&mut self, data: WorkOrderData) -> TimelineResult<WorkOrder> {
        let work_order = WorkOrder::new(Uuid::new_v4().to_string(), data);
        debug!(work_order_id = %work_order.doc_id, "work order created");
        self.work_orders.insert(work_order.doc_id.clone(), work_order.clone());
        Ok(work_order)
    }

    fn update(&mut self, id: &str, data: WorkOrderData) -> TimelineResult<()> {
        let work_order = self
            .work_orders
            .get_mut(id)
            .ok_or_else(|| TimelineError::NotFound(format!("work order `{id}`")))?;
        work_order.data = data;
        debug!(work_order_id = id, "work order updated");
        Ok(())
    }

    fn delete(&mut self, id: &str) -> TimelineResult<()> {
        self.work_orders
            .shift_remove(id)
            .ok_or_else(|| TimelineError::NotFound(format!("work order `{id}`")))?;
        debug!(work_order_id = id, "work order deleted");
        Ok(())
    }
}
