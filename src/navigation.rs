use serde::{Deserialize, Serialize};

/// Opens detail views for the host application.
///
/// Calls are fire-and-forget; the controller never inspects their outcome.
pub trait TimelineNavigation {
    fn open_work_order_details(&mut self, work_center_id: &str, work_order_id: &str);

    fn open_create_work_order(&mut self, work_center_id: &str, start_date: &str, end_date: &str);
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavigationRequest {
    WorkOrderDetails {
        work_center_id: String,
        work_order_id: String,
    },
    CreateWorkOrder {
        work_center_id: String,
        start_date: String,
        end_date: String,
    },
}

/// Navigation sink that records requests, for headless hosts and tests.
#[derive(Debug, Clone, Default)]
pub struct RecordingNavigation {
    pub requests: Vec<NavigationRequest>,
}

impl RecordingNavigation {
    #[must_use]
    pub fn last(&self) -> Option<&NavigationRequest> {
        self.requests.last()
    }
}

impl TimelineNavigation for RecordingNavigation {
    fn open_work_order_details(&mut self, work_center_id: &str, work_order_id: &str) {
        self.requests.push(NavigationRequest::WorkOrderDetails {
            work_center_id: work_center_id.to_owned(),
            work_order_id: work_order_id.to_owned(),
        });
    }

    fn open_create_work_order(&mut self, work_center_id: &str, start_date: &str, end_date: &str) {
        self.requests.push(NavigationRequest::CreateWorkOrder {
            work_center_id: work_center_id.to_owned(),
            start_date: start_date.to_owned(),
            end_date: end_date.to_owned(),
        });
    }
}
