pub mod clock;
pub mod columns;
pub mod dates;
pub mod hover;
pub mod rows;
pub mod scale;
pub mod types;
pub mod validation;
pub mod visible_range;
pub mod work_order;

pub use clock::{Clock, FixedClock, SystemClock};
pub use columns::{TimelineColumn, build_columns, current_column_index, format_column_label};
pub use dates::{add_scale_units, format_local_date, get_scale_start, parse_local_date};
pub use hover::{
    CreationRange, DEFAULT_CREATION_SPAN_DAYS, HoverOverlay, HoverState, build_hover_overlay,
    creation_range_for_pointer_with_span, default_creation_range_with_span,
    get_creation_range_for_pointer, get_default_creation_range,
};
pub use rows::{PositionedWorkOrder, TimelineRow, WorkOrderInterval, build_rows};
pub use scale::{BarGeometry, UnitScale};
pub use types::{TimelineScale, Viewport, normalize_units};
pub use validation::validate_work_order;
pub use visible_range::{VisibleRange, build_visible_range, build_visible_range_at};
pub use work_order::{WorkCenter, WorkOrder, WorkOrderData, WorkOrderStatus};
