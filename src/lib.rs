//! schedule-board: timeline layout engine for work-order scheduling boards.
//!
//! `core` holds the pure layout math (calendar columns, the unit coordinate
//! system, row positioning and hover hit-testing). `api` wraps it in a
//! stateful controller that hosts drive with pointer and scroll commands.
//! Rendering stays with the host.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod navigation;
pub mod repository;
pub mod telemetry;

pub use api::{TimelineConfig, TimelineController};
pub use error::{TimelineError, TimelineResult};
