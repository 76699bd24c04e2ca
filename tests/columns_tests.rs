use chrono::{NaiveDate, NaiveDateTime};
use schedule_board::core::dates::ms_to_date;
use schedule_board::core::{
    TimelineColumn, TimelineScale, Viewport, build_columns, build_visible_range,
    build_visible_range_at, current_column_index, format_local_date, parse_local_date,
};

fn date(input: &str) -> NaiveDate {
    parse_local_date(input).expect("valid date")
}

fn at_midnight(input: &str) -> NaiveDateTime {
    date(input).and_hms_opt(0, 0, 0).expect("valid time")
}

fn fixture_viewport() -> Viewport {
    Viewport::new(date("2026-02-20"), 1, 1)
}

fn start_dates(columns: &[TimelineColumn]) -> Vec<String> {
    columns
        .iter()
        .map(|column| format_local_date(ms_to_date(column.start_ms)))
        .collect()
}

#[test]
fn builds_columns_anchored_around_the_selected_period() {
    let today = at_midnight("2026-02-20");
    let cases = [
        (TimelineScale::Day, ["2026-02-19", "2026-02-20", "2026-02-21"]),
        (TimelineScale::Week, ["2026-02-09", "2026-02-16", "2026-02-23"]),
        (TimelineScale::Month, ["2026-01-01", "2026-02-01", "2026-03-01"]),
    ];

    for (scale, expected) in cases {
        let columns = build_columns(scale, &fixture_viewport(), today);
        assert_eq!(columns.len(), 3, "{scale:?}");
        assert_eq!(start_dates(&columns), expected, "{scale:?}");
        let current: Vec<bool> = columns.iter().map(|column| column.is_current).collect();
        assert_eq!(current, [false, true, false], "{scale:?}");
    }
}

#[test]
fn columns_are_contiguous_and_indexed_from_zero() {
    let viewport = Viewport::new(date("2026-02-20"), 14, 20);
    let columns = build_columns(TimelineScale::Month, &viewport, at_midnight("2026-02-20"));

    assert_eq!(columns.len(), 35);
    for (position, column) in columns.iter().enumerate() {
        assert_eq!(column.index, position);
        assert!(column.start_ms < column.end_exclusive_ms);
    }
    for pair in columns.windows(2) {
        assert_eq!(pair[0].end_exclusive_ms, pair[1].start_ms);
    }
}

#[test]
fn today_inside_the_last_millisecond_of_a_column_is_current() {
    let today = date("2026-02-20")
        .and_hms_milli_opt(23, 59, 59, 999)
        .expect("valid time");
    let columns = build_columns(TimelineScale::Day, &fixture_viewport(), today);
    assert_eq!(current_column_index(&columns), Some(1));
}

#[test]
fn today_outside_the_window_marks_no_column() {
    let columns = build_columns(
        TimelineScale::Day,
        &fixture_viewport(),
        at_midnight("2026-02-22"),
    );
    assert!(columns.iter().all(|column| !column.is_current));
    assert_eq!(current_column_index(&columns), None);
}

#[test]
fn raw_unit_counts_are_truncated_and_floored() {
    let viewport = Viewport::from_raw(date("2026-02-20"), -3.7, 2.9);
    assert_eq!(viewport.back_units, 0);
    assert_eq!(viewport.forward_units, 2);

    let columns = build_columns(TimelineScale::Day, &viewport, at_midnight("2026-02-20"));
    assert_eq!(
        start_dates(&columns),
        ["2026-02-20", "2026-02-21", "2026-02-22"]
    );

    let nan = Viewport::from_raw(date("2026-02-20"), f64::NAN, f64::NEG_INFINITY);
    assert_eq!(nan.total_units(), 1);
}

#[test]
fn day_and_month_labels_are_english_and_stable() {
    let today = at_midnight("2026-02-20");
    let days = build_columns(TimelineScale::Day, &fixture_viewport(), today);
    let labels: Vec<&str> = days.iter().map(|column| column.label.as_str()).collect();
    assert_eq!(labels, ["Feb 19", "Feb 20", "Feb 21"]);

    let months = build_columns(TimelineScale::Month, &fixture_viewport(), today);
    let labels: Vec<&str> = months.iter().map(|column| column.label.as_str()).collect();
    assert_eq!(labels, ["Jan 2026", "Feb 2026", "Mar 2026"]);
}

#[test]
fn week_labels_name_the_second_month_only_when_it_changes() {
    let columns = build_columns(
        TimelineScale::Week,
        &fixture_viewport(),
        at_midnight("2026-02-20"),
    );
    let labels: Vec<&str> = columns.iter().map(|column| column.label.as_str()).collect();
    assert_eq!(labels, ["Feb 9-15", "Feb 16-22", "Feb 23-Mar 1"]);
}

#[test]
fn visible_range_spans_all_columns() {
    let columns = build_columns(
        TimelineScale::Day,
        &fixture_viewport(),
        at_midnight("2026-02-20"),
    );
    let range = build_visible_range(&columns);

    assert_eq!(range.start_ms, columns[0].start_ms);
    assert_eq!(range.end_exclusive_ms, columns[2].end_exclusive_ms);
    assert_eq!(range.total_units, 3);
    assert_eq!(
        range.duration_ms,
        columns[2].end_exclusive_ms - columns[0].start_ms
    );
}

#[test]
fn empty_columns_fall_back_to_a_degenerate_range() {
    let range = build_visible_range(&[]);
    assert_eq!(range.total_units, 1);
    assert_eq!(range.duration_ms, 1);
    assert_eq!(range.end_exclusive_ms - range.start_ms, 1);
}

#[test]
fn empty_columns_fall_back_at_the_given_instant() {
    let now = date("2026-02-20").and_hms_opt(9, 15, 0).expect("valid time");

    let range = build_visible_range_at(&[], now);

    assert_eq!(range.start_ms, now.and_utc().timestamp_millis());
    assert_eq!(range.end_exclusive_ms, range.start_ms + 1);
    assert_eq!(range.total_units, 1);
    assert_eq!(range.unit_to_ms(1.0), range.end_exclusive_ms as f64);
}

#[test]
fn month_columns_have_calendar_lengths() {
    let viewport = Viewport::new(date("2024-02-10"), 0, 1);
    let columns = build_columns(TimelineScale::Month, &viewport, at_midnight("2024-02-10"));
    let days: Vec<i64> = columns
        .iter()
        .map(|column| (column.end_exclusive_ms - column.start_ms) / 86_400_000)
        .collect();
    assert_eq!(days, [29, 31]);
}
