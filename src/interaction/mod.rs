use serde::{Deserialize, Serialize};

use crate::core::HoverState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkOrderAction {
    Edit,
    Delete,
}

/// Where a create request originated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CreateWorkOrderSource {
    /// Click on an empty slot of a row; requires a matching hover overlay.
    Pointer,
    /// A lane's "add" button; always proposes the default range.
    Button,
}

/// Edge trigger for an infinite-scroll sentinel.
///
/// Fires once each time the sentinel becomes visible, not on every
/// visibility report while it stays visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollAnchor {
    is_intersecting: bool,
}

impl ScrollAnchor {
    /// Records the latest visibility report and returns `true` on a
    /// hidden -> visible transition.
    pub fn observe(&mut self, is_intersecting: bool) -> bool {
        let fired = is_intersecting && !self.is_intersecting;
        self.is_intersecting = is_intersecting;
        fired
    }

    #[must_use]
    pub fn is_intersecting(self) -> bool {
        self.is_intersecting
    }

    pub fn reset(&mut self) {
        self.is_intersecting = false;
    }
}

/// Transient pointer and scroll state owned by the controller.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InteractionState {
    hover: HoverState,
    start_anchor: ScrollAnchor,
    end_anchor: ScrollAnchor,
}

impl InteractionState {
    #[must_use]
    pub fn hover(&self) -> &HoverState {
        &self.hover
    }

    pub fn on_pointer_move(&mut self, work_center_id: &str, pointer_unit: f64, is_over_menu: bool) {
        self.hover = HoverState::new(work_center_id, pointer_unit, is_over_menu);
    }

    pub fn on_pointer_leave(&mut self) {
        self.hover = HoverState::default();
    }

    pub fn observe_start_anchor(&mut self, is_intersecting: bool) -> bool {
        self.start_anchor.observe(is_intersecting)
    }

    pub fn observe_end_anchor(&mut self, is_intersecting: bool) -> bool {
        self.end_anchor.observe(is_intersecting)
    }

    /// Clears hover and re-arms both scroll anchors after the grid is rebuilt.
    pub fn reset(&mut self) {
        self.on_pointer_leave();
        self.start_anchor.reset();
        self.end_anchor.reset();
    }
}
