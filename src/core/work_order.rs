use serde::{Deserialize, Serialize};

/// Resource lane a work order is scheduled on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkCenter {
    pub doc_id: String,
    pub name: String,
}

impl WorkCenter {
    #[must_use]
    pub fn new(doc_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            doc_id: doc_id.into(),
            name: name.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WorkOrderStatus {
    Open,
    InProgress,
    Complete,
    Blocked,
}

impl WorkOrderStatus {
    pub const ALL: [WorkOrderStatus; 4] =
        [Self::Open, Self::InProgress, Self::Complete, Self::Blocked];

    /// Wire value, matching the serde representation.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::InProgress => "in-progress",
            Self::Complete => "complete",
            Self::Blocked => "blocked",
        }
    }

    #[must_use]
    pub fn display_label(self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::InProgress => "In progress",
            Self::Complete => "Completed",
            Self::Blocked => "Blocked",
        }
    }
}

/// Editable payload of a work order.
///
/// Dates are `YYYY-MM-DD` calendar strings and both ends are inclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkOrderData {
    pub name: String,
    pub work_center_id: String,
    pub status: WorkOrderStatus,
    pub start_date: String,
    pub end_date: String,
}

impl WorkOrderData {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        work_center_id: impl Into<String>,
        status: WorkOrderStatus,
        start_date: impl Into<String>,
        end_date: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            work_center_id: work_center_id.into(),
            status,
            start_date: start_date.into(),
            end_date: end_date.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkOrder {
    pub doc_id: String,
    pub data: WorkOrderData,
}

impl WorkOrder {
    #[must_use]
    pub fn new(doc_id: impl Into<String>, data: WorkOrderData) -> Self {
        Self {
            doc_id: doc_id.into(),
            data,
        }
    }
}
