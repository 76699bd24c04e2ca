use approx::assert_abs_diff_eq;
use chrono::NaiveDate;
use schedule_board::core::{
    CreationRange, HoverState, TimelineRow, TimelineScale, Viewport, VisibleRange, WorkCenter,
    WorkOrder, WorkOrderData, WorkOrderStatus, build_columns, build_hover_overlay, build_rows,
    build_visible_range, get_creation_range_for_pointer, get_default_creation_range,
    parse_local_date,
};

fn date(input: &str) -> NaiveDate {
    parse_local_date(input).expect("valid date")
}

fn day_range() -> VisibleRange {
    let viewport = Viewport::new(date("2026-02-20"), 1, 1);
    let today = date("2026-02-20").and_hms_opt(0, 0, 0).expect("valid time");
    build_visible_range(&build_columns(TimelineScale::Day, &viewport, today))
}

fn rows_with(orders: &[(&str, &str)]) -> Vec<TimelineRow> {
    let work_orders: Vec<WorkOrder> = orders
        .iter()
        .enumerate()
        .map(|(i, (start, end))| {
            WorkOrder::new(
                format!("wo-{i}"),
                WorkOrderData::new("order", "wc-1", WorkOrderStatus::Open, *start, *end),
            )
        })
        .collect();
    build_rows(
        &[
            WorkCenter::new("wc-1", "Center 1"),
            WorkCenter::new("wc-2", "Center 2"),
        ],
        &work_orders,
        day_range(),
    )
}

fn range(start: &str, end: &str) -> CreationRange {
    CreationRange {
        start_date: start.to_owned(),
        end_date: end.to_owned(),
    }
}

#[test]
fn overlay_is_hidden_while_over_a_menu() {
    let hover = HoverState::new("wc-1", 1.0, true);
    assert_eq!(build_hover_overlay(&hover, &rows_with(&[]), day_range()), None);
}

#[test]
fn overlay_requires_a_lane_and_a_finite_pointer() {
    let rows = rows_with(&[]);
    assert_eq!(
        build_hover_overlay(&HoverState::default(), &rows, day_range()),
        None
    );

    let no_pointer = HoverState {
        work_center_id: Some("wc-1".to_owned()),
        pointer_unit: None,
        is_over_menu: false,
    };
    assert_eq!(build_hover_overlay(&no_pointer, &rows, day_range()), None);

    let nan = HoverState::new("wc-1", f64::NAN, false);
    assert_eq!(build_hover_overlay(&nan, &rows, day_range()), None);

    let unknown_lane = HoverState::new("wc-9", 1.0, false);
    assert_eq!(build_hover_overlay(&unknown_lane, &rows, day_range()), None);
}

#[test]
fn overlay_is_one_unit_centered_on_the_pointer() {
    let overlay = build_hover_overlay(
        &HoverState::new("wc-2", 1.2, false),
        &rows_with(&[]),
        day_range(),
    )
    .expect("overlay");

    assert_eq!(overlay.work_center_id, "wc-2");
    assert_abs_diff_eq!(overlay.start_unit, 0.7, epsilon = 1e-9);
    assert_abs_diff_eq!(overlay.span_units, 1.0, epsilon = 1e-9);
    assert!(overlay.can_create);
}

#[test]
fn overlay_is_clamped_inside_the_range() {
    let rows = rows_with(&[]);
    let left = build_hover_overlay(&HoverState::new("wc-1", -5.0, false), &rows, day_range())
        .expect("overlay");
    assert_eq!(left.start_unit, 0.0);
    assert_eq!(left.span_units, 1.0);

    let right = build_hover_overlay(&HoverState::new("wc-1", 10.0, false), &rows, day_range())
        .expect("overlay");
    assert_eq!(right.start_unit, 2.0);
    assert_eq!(right.span_units, 1.0);
}

#[test]
fn overlay_over_an_existing_order_cannot_create() {
    // Occupies units [1, 3].
    let rows = rows_with(&[("2026-02-20", "2026-02-21")]);
    let visible = day_range();

    for pointer in [1.0, 2.0, 3.0, 7.5] {
        let overlay = build_hover_overlay(&HoverState::new("wc-1", pointer, false), &rows, visible)
            .expect("overlay");
        assert!(!overlay.can_create, "pointer {pointer} should be occupied");
    }

    let free = build_hover_overlay(&HoverState::new("wc-1", 0.99, false), &rows, visible)
        .expect("overlay");
    assert!(free.can_create);

    let other_lane = build_hover_overlay(&HoverState::new("wc-2", 2.0, false), &rows, visible)
        .expect("overlay");
    assert!(other_lane.can_create);
}

#[test]
fn pointer_units_map_to_creation_date_ranges() {
    let range_3d = day_range();
    assert_eq!(
        get_creation_range_for_pointer(1.0, range_3d),
        range("2026-02-20", "2026-02-27")
    );
    assert_eq!(
        get_creation_range_for_pointer(2.5, range_3d),
        range("2026-02-21", "2026-02-28")
    );
}

#[test]
fn out_of_range_pointers_clamp_to_the_range_edges() {
    let range_3d = day_range();
    assert_eq!(
        get_creation_range_for_pointer(-10.0, range_3d),
        range("2026-02-19", "2026-02-26")
    );
    assert_eq!(
        get_creation_range_for_pointer(f64::NAN, range_3d),
        range("2026-02-19", "2026-02-26")
    );
    assert_eq!(
        get_creation_range_for_pointer(42.0, range_3d),
        range("2026-02-22", "2026-03-01")
    );
}

#[test]
fn month_scale_creation_uses_uniform_units_and_seven_days() {
    let viewport = Viewport::new(date("2026-02-20"), 1, 1);
    let today = date("2026-02-20").and_hms_opt(0, 0, 0).expect("valid time");
    let visible = build_visible_range(&build_columns(TimelineScale::Month, &viewport, today));

    // Three months spanning 90 days map uniformly: unit 1 is 30 days in.
    assert_eq!(
        get_creation_range_for_pointer(1.0, visible),
        range("2026-01-31", "2026-02-07")
    );
}

#[test]
fn default_creation_range_starts_today() {
    assert_eq!(
        get_default_creation_range(date("2026-12-28")),
        range("2026-12-28", "2027-01-04")
    );
}
