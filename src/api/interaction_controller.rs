use tracing::{debug, trace, warn};

use crate::core::{
    WorkOrderData, creation_range_for_pointer_with_span, default_creation_range_with_span,
    validate_work_order,
};
use crate::error::TimelineResult;
use crate::interaction::{CreateWorkOrderSource, WorkOrderAction};
use crate::navigation::TimelineNavigation;
use crate::repository::{WorkCenterRepository, WorkOrderRepository};

use super::TimelineController;

impl<C, O, N> TimelineController<C, O, N>
where
    C: WorkCenterRepository,
    O: WorkOrderRepository,
    N: TimelineNavigation,
{
    /// Records the pointer over a lane, in unit coordinates, verbatim.
    pub fn pointer_move(&mut self, work_center_id: &str, pointer_unit: f64, is_over_menu: bool) {
        trace!(work_center_id, pointer_unit, is_over_menu, "pointer move");
        self.interaction.on_pointer_move(work_center_id, pointer_unit, is_over_menu);
    }

    /// Same as `pointer_move` with the pointer given in pixels from the
    /// row's left edge.
    pub fn pointer_move_px(
        &mut self,
        work_center_id: &str,
        pointer_x_px: f64,
        is_over_menu: bool,
    ) {
        let pointer_unit = self.unit_scale.px_to_unit(pointer_x_px);
        self.pointer_move(work_center_id, pointer_unit, is_over_menu);
    }

    pub fn pointer_leave(&mut self) {
        self.interaction.on_pointer_leave();
    }

    /// Routes a work-order menu action to its collaborator.
    ///
    /// Delete failures are logged and otherwise ignored.
    pub fn on_work_order_action(
        &mut self,
        action: WorkOrderAction,
        work_center_id: &str,
        work_order_id: &str,
    ) {
        match action {
            WorkOrderAction::Edit => {
                self.navigation.open_work_order_details(work_center_id, work_order_id);
            }
            WorkOrderAction::Delete => {
                if let Err(err) = self.work_orders.delete(work_order_id) {
                    warn!(work_order_id, error = %err, "work order delete failed");
                }
            }
        }
    }

    /// Opens the create view for `work_center_id`.
    ///
    /// From the pointer, creation is only offered when the hover targets this
    /// lane and its overlay sits on a free slot; otherwise nothing happens.
    /// From a button, the default range starting today is proposed.
    pub fn create_work_order(&mut self, work_center_id: &str, source: CreateWorkOrderSource) {
        let span_days = self.config.creation_span_days;
        let range = match source {
            CreateWorkOrderSource::Pointer => {
                let hover = self.interaction.hover();
                let Some(pointer_unit) = hover.pointer_unit else {
                    return;
                };
                if hover.work_center_id.as_deref() != Some(work_center_id) {
                    return;
                }
                let layout = self.layout();
                let offered = layout.hover_overlay.is_some_and(|overlay| {
                    overlay.can_create && overlay.work_center_id == work_center_id
                });
                if !offered {
                    trace!(work_center_id, pointer_unit, "pointer slot not offered for creation");
                    return;
                }
                creation_range_for_pointer_with_span(pointer_unit, layout.range, span_days)
            }
            CreateWorkOrderSource::Button => {
                default_creation_range_with_span(self.clock.now().date(), span_days)
            }
        };

        debug!(
            work_center_id,
            start_date = %range.start_date,
            end_date = %range.end_date,
            "opening work order creation"
        );
        self.navigation.open_create_work_order(work_center_id, &range.start_date, &range.end_date);
    }

    /// Validates a draft against the scheduled orders, then creates it or,
    /// with `editing_id`, updates that order.
    pub fn save_work_order(
        &mut self,
        editing_id: Option<&str>,
        data: WorkOrderData,
    ) -> TimelineResult<()> {
        validate_work_order(&data, &self.work_orders.list(), editing_id)?;
        match editing_id {
            Some(id) => self.work_orders.update(id, data),
            None => self.work_orders.create(data).map(|_| ()),
        }
    }
}
