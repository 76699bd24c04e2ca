use tracing::debug;

use crate::core::{TimelineScale, Viewport, normalize_units};
use crate::navigation::TimelineNavigation;
use crate::repository::{WorkCenterRepository, WorkOrderRepository};

use super::TimelineController;

impl<C, O, N> TimelineController<C, O, N>
where
    C: WorkCenterRepository,
    O: WorkOrderRepository,
    N: TimelineNavigation,
{
    /// Switches scale and reopens the default window around today.
    ///
    /// Hover is cleared in the same step so an overlay computed against the
    /// old columns is never shown against the new ones. No-op when `scale`
    /// is already active.
    pub fn set_scale(&mut self, scale: TimelineScale) {
        if self.scale == scale {
            return;
        }
        self.scale = scale;
        self.viewport = self.default_viewport(scale);
        self.interaction.reset();
        debug!(?scale, viewport = ?self.viewport, "timeline scale changed");
    }

    pub fn jump_to_today(&mut self) {
        self.viewport = self.default_viewport(self.scale);
        self.interaction.reset();
        debug!(viewport = ?self.viewport, "timeline jumped to today");
    }

    /// Replaces the viewport as-is, keeping the current hover.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Grows the window backwards by `units` periods (truncated, floored at 0).
    pub fn scroll_extend_start(&mut self, units: f64) {
        self.extend_back(normalize_units(units));
    }

    /// Grows the window forwards by `units` periods (truncated, floored at 0).
    pub fn scroll_extend_end(&mut self, units: f64) {
        self.extend_forward(normalize_units(units));
    }

    /// Prepends one page of `extend_by()` periods.
    ///
    /// Returns the scroll offset, in pixels, the host must add to keep the
    /// same dates under the viewport after the prepend.
    pub fn extend_start_page(&mut self) -> f64 {
        let units = self.extend_by();
        self.extend_back(units);
        self.unit_scale.unit_to_px(f64::from(units))
    }

    /// Appends one page of `extend_by()` periods.
    pub fn extend_end_page(&mut self) {
        self.extend_forward(self.extend_by());
    }

    /// Feeds the leading sentinel's visibility; extends on each appearance.
    ///
    /// Returns the scroll compensation when a page was prepended.
    pub fn on_start_anchor_visibility(&mut self, is_intersecting: bool) -> Option<f64> {
        self.interaction
            .observe_start_anchor(is_intersecting)
            .then(|| self.extend_start_page())
    }

    /// Feeds the trailing sentinel's visibility; returns `true` when a page
    /// was appended.
    pub fn on_end_anchor_visibility(&mut self, is_intersecting: bool) -> bool {
        let fired = self.interaction.observe_end_anchor(is_intersecting);
        if fired {
            self.extend_end_page();
        }
        fired
    }

    fn extend_back(&mut self, units: u32) {
        self.viewport = self.viewport.extended_back(units);
        debug!(units, back_units = self.viewport.back_units, "timeline extended at start");
    }

    fn extend_forward(&mut self, units: u32) {
        self.viewport = self.viewport.extended_forward(units);
        debug!(units, forward_units = self.viewport.forward_units, "timeline extended at end");
    }
}
