use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::{
    BarGeometry, Clock, HoverOverlay, HoverState, PositionedWorkOrder, SystemClock,
    TimelineColumn, TimelineRow, TimelineScale, UnitScale, Viewport, VisibleRange,
    build_columns, build_hover_overlay, build_rows, build_visible_range_at, current_column_index,
};
use crate::error::TimelineResult;
use crate::interaction::InteractionState;
use crate::navigation::TimelineNavigation;
use crate::repository::{WorkCenterRepository, WorkOrderRepository};

use super::TimelineConfig;

pub const LOAD_ERROR_MESSAGE: &str = "Failed to load timeline data.";

/// Every derived value of the board, computed together from one state read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineLayout {
    pub columns: Vec<TimelineColumn>,
    pub range: VisibleRange,
    pub rows: Vec<TimelineRow>,
    pub hover_overlay: Option<HoverOverlay>,
    pub current_column_index: Option<usize>,
}

/// Scheduling-board state holder consumed by host applications.
///
/// Owns the scale, viewport and hover state. Columns, range, rows and the
/// hover overlay are never cached: each read recomputes them from the
/// current state and the repositories' latest snapshots.
pub struct TimelineController<C, O, N>
where
    C: WorkCenterRepository,
    O: WorkOrderRepository,
    N: TimelineNavigation,
{
    pub(super) work_centers: C,
    pub(super) work_orders: O,
    pub(super) navigation: N,
    pub(super) clock: Box<dyn Clock>,
    pub(super) config: TimelineConfig,
    pub(super) unit_scale: UnitScale,
    pub(super) scale: TimelineScale,
    pub(super) viewport: Viewport,
    pub(super) interaction: InteractionState,
    pub(super) loading: bool,
    pub(super) error: Option<String>,
}

impl<C, O, N> TimelineController<C, O, N>
where
    C: WorkCenterRepository,
    O: WorkOrderRepository,
    N: TimelineNavigation,
{
    pub fn new(
        work_centers: C,
        work_orders: O,
        navigation: N,
        config: TimelineConfig,
    ) -> TimelineResult<Self> {
        let config = config.validate()?;
        let unit_scale = UnitScale::new(config.column_width_px)?;
        let clock: Box<dyn Clock> = Box::new(SystemClock);
        let scale = config.initial_scale;
        let viewport = default_viewport(&config, scale, clock.now());

        Ok(Self {
            work_centers,
            work_orders,
            navigation,
            clock,
            config,
            unit_scale,
            scale,
            viewport,
            interaction: InteractionState::default(),
            loading: true,
            error: None,
        })
    }

    /// Replaces the clock and re-anchors the viewport on its "today".
    #[must_use]
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self.viewport = self.default_viewport(self.scale);
        self
    }

    /// Loads lanes, then work orders.
    ///
    /// A failure is reported through `error()`; `loading()` is cleared
    /// whatever the outcome.
    pub fn init(&mut self) {
        self.loading = true;
        self.error = None;

        let result = self.work_centers.load().and_then(|()| self.work_orders.load());
        if let Err(err) = result {
            warn!(error = %err, "timeline data load failed");
            self.error = Some(LOAD_ERROR_MESSAGE.to_owned());
        } else {
            debug!("timeline data loaded");
        }

        self.loading = false;
    }

    #[must_use]
    pub fn config(&self) -> TimelineConfig {
        self.config
    }

    #[must_use]
    pub fn scale(&self) -> TimelineScale {
        self.scale
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn hover(&self) -> &HoverState {
        self.interaction.hover()
    }

    #[must_use]
    pub fn loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    #[must_use]
    pub fn now(&self) -> NaiveDateTime {
        self.clock.now()
    }

    #[must_use]
    pub fn columns(&self) -> Vec<TimelineColumn> {
        build_columns(self.scale, &self.viewport, self.clock.now())
    }

    #[must_use]
    pub fn visible_range(&self) -> VisibleRange {
        build_visible_range_at(&self.columns(), self.clock.now())
    }

    #[must_use]
    pub fn rows(&self) -> Vec<TimelineRow> {
        self.rows_in(self.visible_range())
    }

    #[must_use]
    pub fn hover_overlay(&self) -> Option<HoverOverlay> {
        let range = self.visible_range();
        build_hover_overlay(self.interaction.hover(), &self.rows_in(range), range)
    }

    #[must_use]
    pub fn current_column_index(&self) -> Option<usize> {
        current_column_index(&self.columns())
    }

    /// Page size for infinite-scroll extension at the current scale.
    #[must_use]
    pub fn extend_by(&self) -> u32 {
        self.config.extend_by.get(self.scale)
    }

    /// Computes columns, range, rows, overlay and current column in one pass.
    #[must_use]
    pub fn layout(&self) -> TimelineLayout {
        let columns = self.columns();
        let range = build_visible_range_at(&columns, self.clock.now());
        let rows = self.rows_in(range);
        let hover_overlay = build_hover_overlay(self.interaction.hover(), &rows, range);
        let current_column_index = current_column_index(&columns);

        TimelineLayout {
            columns,
            range,
            rows,
            hover_overlay,
            current_column_index,
        }
    }

    #[must_use]
    pub fn column_width_px(&self) -> f64 {
        self.unit_scale.column_width_px()
    }

    #[must_use]
    pub fn total_width_px(&self) -> f64 {
        self.unit_scale.total_width_px(self.visible_range().total_units)
    }

    #[must_use]
    pub fn bar_geometry(&self, work_order: &PositionedWorkOrder) -> BarGeometry {
        self.unit_scale.bar_geometry(
            work_order.start_unit,
            work_order.end_unit,
            self.config.min_bar_width_px,
        )
    }

    /// Horizontal center of the current column, for scrolling it into view.
    #[must_use]
    pub fn current_column_center_px(&self) -> Option<f64> {
        self.current_column_index().map(|index| self.unit_scale.unit_to_px(index as f64 + 0.5))
    }

    #[must_use]
    pub fn work_center_repository(&self) -> &C {
        &self.work_centers
    }

    #[must_use]
    pub fn work_order_repository(&self) -> &O {
        &self.work_orders
    }

    pub fn work_order_repository_mut(&mut self) -> &mut O {
        &mut self.work_orders
    }

    #[must_use]
    pub fn navigation(&self) -> &N {
        &self.navigation
    }

    pub(super) fn rows_in(&self, range: VisibleRange) -> Vec<TimelineRow> {
        build_rows(&self.work_centers.list(), &self.work_orders.list(), range)
    }

    pub(super) fn default_viewport(&self, scale: TimelineScale) -> Viewport {
        default_viewport(&self.config, scale, self.clock.now())
    }
}

fn default_viewport(
    config: &TimelineConfig,
    scale: TimelineScale,
    now: NaiveDateTime,
) -> Viewport {
    let window = config.default_windows.get(scale);
    Viewport::new(now.date(), window.back_units, window.forward_units)
}
