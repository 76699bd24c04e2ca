//! Collaborator contracts for the work-center and work-order stores.
//!
//! The controller only reads snapshots through `list` and forwards mutations;
//! it never edits lanes or orders in place.

mod in_memory;

pub use in_memory::{InMemoryWorkCenterRepository, InMemoryWorkOrderRepository};

use crate::core::{WorkCenter, WorkOrder, WorkOrderData};
use crate::error::TimelineResult;

pub trait WorkCenterRepository {
    /// Populates the store. Called once by `TimelineController::init`.
    fn load(&mut self) -> TimelineResult<()>;

    /// Current snapshot, in display order.
    fn list(&self) -> Vec<WorkCenter>;
}

pub trait WorkOrderRepository {
    fn load(&mut self) -> TimelineResult<()>;

    fn list(&self) -> Vec<WorkOrder>;

    fn create(&mut self, data: WorkOrderData) -> TimelineResult<WorkOrder>;

    fn update(&mut self, id: &str, data: WorkOrderData) -> TimelineResult<()>;

    fn delete(&mut self, id: &str) -> TimelineResult<()>;
}
