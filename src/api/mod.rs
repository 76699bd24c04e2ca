mod controller;
mod interaction_controller;
mod timeline_config;
mod timeline_snapshot;
mod viewport_controller;

pub use controller::{LOAD_ERROR_MESSAGE, TimelineController, TimelineLayout};
pub use timeline_config::{PerScale, ScaleWindow, TimelineConfig};
pub use timeline_snapshot::{
    TIMELINE_SNAPSHOT_JSON_SCHEMA_V1, TimelineSnapshot, TimelineSnapshotJsonContractV1,
};
