use thiserror::Error;

pub type TimelineResult<T> = Result<T, TimelineError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimelineError {
    #[error("invalid calendar date: {0}")]
    InvalidDate(String),

    #[error("invalid timeline config: {0}")]
    InvalidConfig(String),

    #[error("invalid work order: {0}")]
    InvalidWorkOrder(String),

    #[error("dates overlap existing work order `{work_order_name}`")]
    DateOverlap { work_order_name: String },

    #[error("not found: {0}")]
    NotFound(String),

    #[error("failed to load: {0}")]
    Load(String),

    #[error("serialization failed: {0}")]
    Serialization(String),
}
