use chrono::NaiveDate;
use proptest::prelude::*;
use schedule_board::core::{FixedClock, TimelineScale, Viewport, WorkCenter};
use schedule_board::navigation::RecordingNavigation;
use schedule_board::repository::{InMemoryWorkCenterRepository, InMemoryWorkOrderRepository};
use schedule_board::{TimelineConfig, TimelineController};

type Controller = TimelineController<
    InMemoryWorkCenterRepository,
    InMemoryWorkOrderRepository,
    RecordingNavigation,
>;

fn controller() -> Controller {
    let today = NaiveDate::from_ymd_opt(2026, 2, 20)
        .and_then(|date| date.and_hms_opt(9, 0, 0))
        .expect("valid time");
    TimelineController::new(
        InMemoryWorkCenterRepository::new(vec![WorkCenter::new("wc-1", "Center 1")]),
        InMemoryWorkOrderRepository::default(),
        RecordingNavigation::default(),
        TimelineConfig::default(),
    )
    .expect("controller init")
    .with_clock(FixedClock(today))
}

fn scale_strategy() -> impl Strategy<Value = TimelineScale> {
    prop_oneof![
        Just(TimelineScale::Day),
        Just(TimelineScale::Week),
        Just(TimelineScale::Month),
    ]
}

proptest! {
    #[test]
    fn scroll_extension_accumulates_normalized_units(
        starts in prop::collection::vec(-50.0f64..50.0, 0..10),
        ends in prop::collection::vec(-50.0f64..50.0, 0..10)
    ) {
        let mut controller = controller();
        let initial = controller.viewport();

        for units in &starts {
            controller.scroll_extend_start(*units);
        }
        for units in &ends {
            controller.scroll_extend_end(*units);
        }

        let added = |values: &[f64]| -> u32 {
            values.iter().map(|value| value.max(0.0).trunc() as u32).sum()
        };
        let viewport = controller.viewport();
        prop_assert_eq!(viewport.back_units, initial.back_units + added(starts.as_slice()));
        prop_assert_eq!(viewport.forward_units, initial.forward_units + added(ends.as_slice()));
        prop_assert_eq!(viewport.anchor_date, initial.anchor_date);
        prop_assert_eq!(controller.current_column_index(), Some(viewport.back_units as usize));
    }

    #[test]
    fn scale_changes_always_land_on_the_default_window(
        scales in prop::collection::vec(scale_strategy(), 1..12),
        pointer in 0.0f64..20.0
    ) {
        let mut controller = controller();
        let config = controller.config();

        for scale in scales {
            controller.pointer_move("wc-1", pointer, false);
            let changed = controller.scale() != scale;
            controller.set_scale(scale);

            let window = config.default_windows.get(scale);
            if changed {
                prop_assert_eq!(
                    controller.viewport(),
                    Viewport::new(controller.now().date(), window.back_units, window.forward_units)
                );
                prop_assert!(controller.hover().is_empty());
            }
            prop_assert_eq!(controller.scale(), scale);
            prop_assert_eq!(controller.extend_by(), config.extend_by.get(scale));
        }
    }

    #[test]
    fn anchors_fire_once_per_rising_edge(
        reports in prop::collection::vec(any::<bool>(), 0..40)
    ) {
        let mut controller = controller();
        let initial = controller.viewport();

        let mut previous = false;
        let mut rising_edges = 0u32;
        for visible in &reports {
            if *visible && !previous {
                rising_edges += 1;
            }
            previous = *visible;
            controller.on_start_anchor_visibility(*visible);
            controller.on_end_anchor_visibility(*visible);
        }

        let page = controller.extend_by();
        prop_assert_eq!(controller.viewport().back_units, initial.back_units + rising_edges * page);
        prop_assert_eq!(
            controller.viewport().forward_units,
            initial.forward_units + rising_edges * page
        );
    }
}
