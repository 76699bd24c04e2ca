use serde::{Deserialize, Serialize};

use crate::core::dates::{format_local_date, ms_to_date};
use crate::core::{
    HoverOverlay, TimelineColumn, TimelineRow, TimelineScale, UnitScale, Viewport, VisibleRange,
};
use crate::error::{TimelineError, TimelineResult};
use crate::navigation::TimelineNavigation;
use crate::repository::{WorkCenterRepository, WorkOrderRepository};

use super::TimelineController;

pub const TIMELINE_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

const STATUS_COLUMN_WIDTH: usize = 11;
const PX_COLUMN_WIDTH: usize = 6;

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineSnapshot {
    pub scale: TimelineScale,
    pub viewport: Viewport,
    pub column_width_px: f64,
    pub min_bar_width_px: f64,
    pub range: VisibleRange,
    pub columns: Vec<TimelineColumn>,
    pub rows: Vec<TimelineRow>,
    pub hover_overlay: Option<HoverOverlay>,
    pub current_column_index: Option<usize>,
}

/// Versioned envelope for persisted snapshots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: TimelineSnapshot,
}

impl<C, O, N> TimelineController<C, O, N>
where
    C: WorkCenterRepository,
    O: WorkOrderRepository,
    N: TimelineNavigation,
{
    #[must_use]
    pub fn snapshot(&self) -> TimelineSnapshot {
        let layout = self.layout();
        TimelineSnapshot {
            scale: self.scale,
            viewport: self.viewport,
            column_width_px: self.unit_scale.column_width_px(),
            min_bar_width_px: self.config.min_bar_width_px,
            range: layout.range,
            columns: layout.columns,
            rows: layout.rows,
            hover_overlay: layout.hover_overlay,
            current_column_index: layout.current_column_index,
        }
    }
}

impl TimelineSnapshot {
    /// Plain-text board dump: the visible dates, then every lane with its
    /// positioned work orders and their pixel geometry.
    ///
    /// ```text
    /// Timeline: 2026-02-19 to 2026-02-21
    ///
    /// Center 1
    ///     wo-1  |  open         |  2026-02-19 to 2026-02-19  |  left:0px     |  width:113px
    /// ```
    pub fn render_text(&self) -> TimelineResult<String> {
        let scale = UnitScale::new(self.column_width_px)?;
        let name_width = self
            .rows
            .iter()
            .flat_map(|row| &row.work_orders)
            .map(|positioned| positioned.work_order.data.name.chars().count())
            .max()
            .unwrap_or(0);

        let rows: Vec<String> = self
            .rows
            .iter()
            .map(|row| {
                let work_orders: Vec<String> = row
                    .work_orders
                    .iter()
                    .map(|positioned| {
                        let data = &positioned.work_order.data;
                        let bar = scale.bar_geometry(
                            positioned.start_unit,
                            positioned.end_unit,
                            self.min_bar_width_px,
                        );
                        format!(
                            "{:<name_width$}  |  {:<STATUS_COLUMN_WIDTH$}  |  {} to {}  |  left:{:<PX_COLUMN_WIDTH$}  |  width:{:<PX_COLUMN_WIDTH$}",
                            data.name,
                            data.status.as_str(),
                            data.start_date,
                            data.end_date,
                            whole_px(bar.left_px),
                            whole_px(bar.width_px),
                        )
                    })
                    .collect();
                format!("{}\n\t{}", row.work_center.name, work_orders.join("\n\t"))
            })
            .collect();

        let last_visible_day = ms_to_date(self.range.end_exclusive_ms - 1);
        Ok(format!(
            "Timeline: {} to {}\n\n{}",
            format_local_date(ms_to_date(self.range.start_ms)),
            format_local_date(last_visible_day),
            rows.join("\n")
        ))
    }
}

impl TimelineSnapshot {
    pub fn to_json_contract_v1_pretty(&self) -> TimelineResult<String> {
        let envelope = TimelineSnapshotJsonContractV1 {
            schema_version: TIMELINE_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&envelope)
            .map_err(|e| TimelineError::Serialization(format!("timeline snapshot: {e}")))
    }

    /// Parses a versioned envelope, or a bare snapshot written without one.
    pub fn from_json_compat_str(input: &str) -> TimelineResult<Self> {
        if let Ok(snapshot) = serde_json::from_str::<Self>(input) {
            return Ok(snapshot);
        }
        let envelope: TimelineSnapshotJsonContractV1 = serde_json::from_str(input)
            .map_err(|e| TimelineError::Serialization(format!("timeline snapshot: {e}")))?;
        match envelope.schema_version {
            TIMELINE_SNAPSHOT_JSON_SCHEMA_V1 => Ok(envelope.snapshot),
            other => Err(TimelineError::Serialization(format!(
                "unsupported snapshot schema version: {other}"
            ))),
        }
    }
}

/// Whole-pixel label with halves rounded up, so `2.5` and `-2.5` become
/// `3px` and `-2px`.
fn whole_px(px: f64) -> String {
    format!("{}px", (px + 0.5).floor())
}
