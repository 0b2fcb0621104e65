//! Carousel state machine integration tests
//!
//! Drives a mounted [`Carousel`] through navigation, scrubbing, autoplay,
//! gestures, view modes, image failures and the full-screen viewer.

mod common;

use std::time::Duration;

use common::{RecordingViewer, carousel, entry, titles};
use memoir_carousel::capabilities::ViewerCommand;
use memoir_carousel::carousel::{
    AutoplayMode, AutoplayPhase, Direction, Key, ScrubState, SwipeDirection,
};
use memoir_carousel::preload::PreloadReport;
use memoir_carousel::{Carousel, CarouselMessage, ViewMode};
use memoir_model::{EntryId, RemediationOutcome};

#[test]
fn entries_are_shown_in_chronological_order() {
    let carousel = carousel();
    assert_eq!(
        titles(&carousel),
        vec![
            "Memory 2", "Memory 3", "Memory 1", "Memory 4", "Memory 5",
            "Memory 6"
        ]
    );
    assert_eq!(carousel.current_index(), 0);
    assert!(carousel.autoplay_enabled());
    assert_eq!(carousel.phase(), AutoplayPhase::Autoplay);
}

#[test]
fn same_year_entries_keep_input_order_without_month_tokens() {
    let carousel = Carousel::new(vec![
        entry(1, "2006", 2006, "/a.jpg"),
        entry(2, "2008", 2008, "/b.jpg"),
        entry(3, "Summer 2008", 2008, "/c.jpg"),
    ])
    .expect("valid carousel");
    assert_eq!(titles(&carousel), vec!["Memory 1", "Memory 2", "Memory 3"]);

    let carousel = Carousel::new(vec![
        entry(1, "2006", 2006, "/a.jpg"),
        entry(2, "Aug 2008", 2008, "/b.jpg"),
        entry(3, "Mar 2008", 2008, "/c.jpg"),
    ])
    .expect("valid carousel");
    assert_eq!(titles(&carousel), vec!["Memory 1", "Memory 3", "Memory 2"]);
}

#[test]
fn next_and_previous_wrap_around() {
    let mut carousel = carousel();
    carousel.previous();
    assert_eq!(carousel.current_index(), 5);
    assert_eq!(carousel.direction(), Direction::Backward);

    carousel.next();
    assert_eq!(carousel.current_index(), 0);
    assert_eq!(carousel.direction(), Direction::Forward);
}

#[test]
fn autoplay_ticks_advance_without_disabling_autoplay() {
    let mut carousel = carousel();
    assert!(carousel.autoplay_tick());
    assert_eq!(carousel.current_index(), 1);
    assert!(carousel.autoplay_enabled());

    assert_eq!(carousel.advance_clock(Duration::from_millis(4_999)), 0);
    assert_eq!(carousel.advance_clock(Duration::from_millis(1)), 1);
    assert_eq!(carousel.current_index(), 2);
}

#[test]
fn every_manual_navigation_disables_autoplay_for_good() {
    let manual: Vec<fn(&mut Carousel)> = vec![
        |c| c.next(),
        |c| c.previous(),
        |c| {
            c.jump_to_year(2012);
        },
        |c| {
            c.go_to(3);
        },
        |c| {
            c.begin_scrub(40.0);
            c.end_scrub();
        },
    ];

    for navigate in manual {
        let mut carousel = carousel();
        navigate(&mut carousel);
        let index = carousel.current_index();

        assert_eq!(carousel.autoplay_mode(), AutoplayMode::Manual);
        assert!(!carousel.autoplay_tick());
        assert_eq!(carousel.advance_clock(Duration::from_secs(60)), 0);
        assert_eq!(carousel.current_index(), index);
    }
}

#[test]
fn hover_pauses_the_countdown_without_resetting_it() {
    let mut carousel = carousel();
    carousel.advance_clock(Duration::from_secs(3));

    carousel.pointer_enter();
    assert_eq!(
        carousel.phase(),
        AutoplayPhase::Suspended {
            resume_to: AutoplayMode::Autoplay
        }
    );
    assert_eq!(carousel.advance_clock(Duration::from_secs(30)), 0);
    assert_eq!(carousel.current_index(), 0);

    carousel.pointer_leave();
    assert_eq!(carousel.advance_clock(Duration::from_millis(1_900)), 0);
    assert_eq!(carousel.advance_clock(Duration::from_millis(100)), 1);
    assert_eq!(carousel.current_index(), 1);
}

#[test]
fn jump_to_year_picks_the_first_entry_of_that_year() {
    let mut carousel = carousel();
    assert!(carousel.jump_to_year(2012));
    assert_eq!(carousel.current_index(), 3);
    assert_eq!(carousel.direction(), Direction::Forward);

    assert!(carousel.jump_to_year(2006));
    assert_eq!(carousel.current_index(), 0);
    assert_eq!(carousel.direction(), Direction::Backward);
}

#[test]
fn jump_to_missing_year_changes_nothing() {
    let mut carousel = carousel();
    assert!(!carousel.jump_to_year(1999));
    assert_eq!(carousel.current_index(), 0);
    assert!(carousel.autoplay_enabled());
}

#[test]
fn scrubbing_derives_the_index_from_the_position() {
    let mut carousel = carousel();

    // 2006..=2018: the middle of the axis is 2012.
    carousel.begin_scrub(50.0);
    assert_eq!(carousel.scrub_state(), ScrubState::Dragging { position: 50.0 });
    assert_eq!(carousel.current_index(), 3);
    assert_eq!(carousel.scrub_position(), 50.0);
    assert!(matches!(carousel.phase(), AutoplayPhase::Suspended { .. }));
    assert!(carousel.autoplay_enabled());

    assert!(carousel.scrub(100.0));
    assert_eq!(carousel.current_index(), 5);

    // 20% of twelve years rounds to 2008.
    assert!(carousel.scrub(20.0));
    assert_eq!(carousel.current_index(), 1);
    assert_eq!(carousel.direction(), Direction::Backward);

    assert!(carousel.end_scrub());
    assert_eq!(carousel.scrub_state(), ScrubState::Settled);
    assert_eq!(carousel.scrub_position(), carousel.position_for_index(1));
    assert_eq!(carousel.phase(), AutoplayPhase::Manual);
}

#[test]
fn scrub_moves_without_a_drag_are_ignored() {
    let mut carousel = carousel();
    assert!(!carousel.scrub(80.0));
    assert!(!carousel.end_scrub());
    assert_eq!(carousel.current_index(), 0);
    assert!(carousel.autoplay_enabled());
}

#[test]
fn position_round_trip_returns_first_index_of_each_year() {
    let carousel = carousel();
    let mapped: Vec<usize> = (0..carousel.len())
        .map(|i| carousel.index_for_position(carousel.position_for_index(i)))
        .collect();
    assert_eq!(mapped, vec![0, 1, 1, 3, 3, 5]);
}

#[test]
fn settled_scrub_position_follows_the_index() {
    let mut carousel = carousel();
    assert_eq!(carousel.scrub_position(), 0.0);
    carousel.go_to(5);
    assert_eq!(carousel.scrub_position(), 100.0);
    carousel.go_to(3);
    assert_eq!(carousel.scrub_position(), 50.0);
}

#[test]
fn single_year_collection_has_a_fixed_scrub_position() {
    let mut carousel =
        Carousel::new(vec![entry(1, "Jun 2020", 2020, "/only.jpg")])
            .expect("valid carousel");
    assert_eq!(carousel.scrub_position(), 0.0);

    carousel.begin_scrub(80.0);
    carousel.end_scrub();
    assert_eq!(carousel.current_index(), 0);
    assert!(carousel.scrub_position().is_finite());
    assert_eq!(carousel.scrub_position(), 0.0);

    carousel.next();
    assert_eq!(carousel.current_index(), 0);
}

#[test]
fn swipes_navigate_on_narrow_viewports() {
    let mut carousel = carousel();
    carousel.resize(375.0);

    carousel.touch_start(200.0);
    carousel.touch_move(140.0);
    assert_eq!(carousel.touch_end(), Some(SwipeDirection::Forward));
    assert_eq!(carousel.current_index(), 1);
    assert!(!carousel.autoplay_enabled());

    carousel.touch_start(200.0);
    carousel.touch_move(170.0);
    assert_eq!(carousel.touch_end(), None);
    assert_eq!(carousel.current_index(), 1);

    carousel.touch_start(100.0);
    carousel.touch_move(180.0);
    assert_eq!(carousel.touch_end(), Some(SwipeDirection::Backward));
    assert_eq!(carousel.current_index(), 0);
}

#[test]
fn swipes_are_ignored_on_wide_viewports_and_overviews() {
    let mut carousel = carousel();
    carousel.resize(1280.0);
    carousel.touch_start(200.0);
    carousel.touch_move(100.0);
    assert_eq!(carousel.touch_end(), None);

    carousel.resize(375.0);
    carousel.set_view_mode(ViewMode::Grid);
    carousel.touch_start(200.0);
    carousel.touch_move(100.0);
    assert_eq!(carousel.touch_end(), None);

    assert_eq!(carousel.current_index(), 0);
    assert!(carousel.autoplay_enabled());
}

#[test]
fn selecting_from_grid_returns_to_the_card() {
    let mut carousel = carousel();
    carousel.resize(375.0);
    assert!(carousel.set_view_mode(ViewMode::Grid));
    assert_eq!(carousel.presentation(), ViewMode::Grid);

    assert!(carousel.select_from_overview(4));
    assert_eq!(carousel.current_index(), 4);
    assert_eq!(carousel.view_mode(), ViewMode::Carousel);
    assert_eq!(carousel.direction(), Direction::Forward);
    assert!(!carousel.autoplay_enabled());

    assert!(!carousel.select_from_overview(42));
    assert_eq!(carousel.current_index(), 4);
}

#[test]
fn view_mode_survives_breakpoint_crossings_and_navigation() {
    let mut carousel = carousel();
    carousel.resize(375.0);
    carousel.set_view_mode(ViewMode::List);

    carousel.resize(1024.0);
    assert!(!carousel.is_mobile());
    assert_eq!(carousel.view_mode(), ViewMode::List);
    assert_eq!(carousel.presentation(), ViewMode::Carousel);

    carousel.next();
    carousel.resize(600.0);
    assert_eq!(carousel.presentation(), ViewMode::List);
}

#[test]
fn failed_image_is_rewritten_once_by_id() {
    let mut carousel = carousel();
    let images = |carousel: &Carousel| -> Vec<String> {
        carousel
            .collection()
            .iter()
            .map(|e| e.image.to_string())
            .collect()
    };
    let before = images(&carousel);

    assert_eq!(
        carousel.image_failed(EntryId(1)),
        Some(RemediationOutcome::Rewritten {
            from: "/img/1.jpg".into(),
            to: "/img/1.JPG".into(),
        })
    );

    // Entry 1 sits at sorted index 2; nothing else moved.
    let mut expected = before.clone();
    expected[2] = "/img/1.JPG".to_string();
    assert_eq!(images(&carousel), expected);

    assert_eq!(
        carousel.image_failed(EntryId(1)),
        Some(RemediationOutcome::AlreadyAttempted)
    );
    assert_eq!(
        carousel.collection().by_id(EntryId(1)).map(|e| e.image.as_str()),
        Some("/img/1.JPG")
    );
    assert_eq!(carousel.image_failed(EntryId(99)), None);
}

#[test]
fn preload_settles_the_overlay_and_remediates_failures() {
    let mut carousel = carousel();
    assert!(carousel.is_loading());

    carousel.preload_finished(&PreloadReport {
        loaded: vec![EntryId(1), EntryId(2), EntryId(4), EntryId(5)],
        failed: vec![EntryId(3), EntryId(6)],
    });

    assert!(!carousel.is_loading());
    let image = |id| {
        carousel
            .collection()
            .by_id(EntryId(id))
            .map(|e| e.image.to_string())
    };
    assert_eq!(image(3).as_deref(), Some("/img/3.jpg"));
    assert_eq!(image(6).as_deref(), Some("/img/6.webp"));
    assert_eq!(image(4).as_deref(), Some("/img/4.jpeg"));
}

#[test]
fn viewer_walks_the_sorted_sequence_independently() {
    let mut carousel = carousel();
    let mut viewer = RecordingViewer::default();

    assert!(carousel.open_full_view(&mut viewer));
    assert_eq!(viewer.last_title(), Some("Memory 2"));

    carousel.viewer_next(&mut viewer);
    carousel.viewer_next(&mut viewer);
    assert_eq!(viewer.last_title(), Some("Memory 1"));
    assert_eq!(carousel.full_view().map(|e| e.id), Some(EntryId(1)));
    assert_eq!(carousel.current_index(), 0);
    assert!(carousel.autoplay_enabled());
    assert_eq!(viewer.closed, 0);

    carousel.close_full_view(&mut viewer);
    assert_eq!(viewer.closed, 1);
    assert!(!carousel.is_full_view_open());
    assert_eq!(carousel.current_index(), 0);
}

#[test]
fn viewer_previous_wraps_to_the_last_entry() {
    let mut carousel = carousel();
    let mut viewer = RecordingViewer::default();
    carousel.open_full_view(&mut viewer);
    carousel.viewer_previous(&mut viewer);
    assert_eq!(viewer.last_title(), Some("Memory 6"));
}

#[test]
fn viewer_only_opens_from_the_card() {
    let mut carousel = carousel();
    let mut viewer = RecordingViewer::default();
    carousel.resize(375.0);
    carousel.set_view_mode(ViewMode::List);
    assert!(!carousel.open_full_view(&mut viewer));
    assert!(viewer.opened.is_empty());
}

#[test]
fn keyboard_targets_the_viewer_while_it_is_open() {
    let mut carousel = carousel();
    let mut viewer = RecordingViewer::default();

    carousel.key(Key::ArrowRight, &mut viewer);
    assert_eq!(carousel.current_index(), 1);
    carousel.key(Key::End, &mut viewer);
    assert_eq!(carousel.current_index(), 5);
    carousel.key(Key::Home, &mut viewer);
    assert_eq!(carousel.current_index(), 0);

    carousel.open_full_view(&mut viewer);
    carousel.key(Key::ArrowLeft, &mut viewer);
    assert_eq!(viewer.last_title(), Some("Memory 6"));
    assert_eq!(carousel.current_index(), 0);

    carousel.key(Key::Escape, &mut viewer);
    assert!(!carousel.is_full_view_open());
    assert_eq!(viewer.closed, 1);
}

#[test]
fn update_reports_whether_anything_changed() {
    let mut carousel = carousel();
    let mut viewer = RecordingViewer::default();

    assert!(carousel.update(CarouselMessage::Next, &mut viewer));
    assert!(!carousel.update(CarouselMessage::JumpToYear(1999), &mut viewer));
    assert!(!carousel.update(CarouselMessage::ScrubMoved(20.0), &mut viewer));
    assert!(carousel.update(CarouselMessage::OpenFullView, &mut viewer));
    assert!(carousel.update(
        CarouselMessage::Viewer(ViewerCommand::Next),
        &mut viewer
    ));
    assert!(carousel.update(
        CarouselMessage::Viewer(ViewerCommand::Close),
        &mut viewer
    ));
    assert!(!carousel.update(CarouselMessage::AutoplayTick, &mut viewer));
}

#[test]
fn latest_navigation_replaces_the_in_flight_transition() {
    let mut carousel = carousel();
    carousel.next();
    carousel.next();
    let active = carousel.transition().active().copied();
    assert_eq!(active.map(|t| (t.from, t.to)), Some((1, 2)));
}

#[test]
fn empty_and_duplicate_collections_are_rejected() {
    assert!(Carousel::new(Vec::new()).is_err());
    assert!(
        Carousel::new(vec![
            entry(1, "2001", 2001, "/a.jpg"),
            entry(1, "2002", 2002, "/b.jpg"),
        ])
        .is_err()
    );
}

#[test]
fn a_month_on_one_side_only_leaves_id_order() {
    let carousel = Carousel::new(vec![
        entry(1, "Aug 2010", 2010, "/a.jpg"),
        entry(2, "2010", 2010, "/b.jpg"),
    ])
    .expect("valid carousel");
    assert_eq!(titles(&carousel), vec!["Memory 1", "Memory 2"]);

    let carousel = Carousel::new(vec![
        entry(2, "Aug 2010", 2010, "/b.jpg"),
        entry(1, "2010", 2010, "/a.jpg"),
    ])
    .expect("valid carousel");
    assert_eq!(titles(&carousel), vec!["Memory 1", "Memory 2"]);
}

#[test]
fn blank_titles_and_images_do_not_block_mounting() {
    let mut untitled = entry(1, "2001", 2001, "/a.jpg");
    untitled.title.clear();
    let imageless = entry(2, "2002", 2002, "");

    let mut carousel =
        Carousel::new(vec![untitled, imageless]).expect("mounts anyway");
    assert_eq!(carousel.len(), 2);

    carousel.next();
    assert_eq!(carousel.current_index(), 1);
    assert_eq!(
        carousel.image_failed(EntryId(2)),
        Some(RemediationOutcome::NoRule)
    );
}

#[test]
fn extreme_years_mount_and_scrub() {
    let mut carousel = Carousel::new(vec![
        entry(1, "ancient", i32::MIN, "/a.jpg"),
        entry(2, "now", 2024, "/b.jpg"),
        entry(3, "far future", i32::MAX, "/c.jpg"),
    ])
    .expect("valid carousel");

    assert_eq!(carousel.position_for_index(0), 0.0);
    assert_eq!(carousel.position_for_index(2), 100.0);

    carousel.begin_scrub(100.0);
    assert_eq!(carousel.current_index(), 2);
    carousel.scrub(0.0);
    assert_eq!(carousel.current_index(), 0);
    carousel.scrub(50.0);
    assert_eq!(carousel.current_index(), 1);
    assert!(carousel.end_scrub());
    assert_eq!(carousel.ticks().len(), 3);
}
