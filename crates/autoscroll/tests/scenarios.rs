//! End-to-end interaction scenarios: press, drag past an edge, tick, release.

#[path = "support/helpers.rs"]
#[allow(dead_code)]
mod helpers;

use autoscroll::testing::{ManualTicker, SourceCall, deliver, run_ticks};
use autoscroll::{
    AutoScrollConfig, AutoScroller, Direction, PointerEventKind, ScrollOffset, ScrollState,
    TickOutcome,
};
use helpers::*;

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn test_scenario_a_left_edge_at_origin_does_nothing() {
    let (mut scroller, ticker) = enabled_scroller(0.0, 0.0);

    deliver(&mut scroller, press_at(50.0, 50.0));
    deliver(&mut scroller, move_to(-5.0, 50.0));

    assert!(!scroller.active_directions().contains(Direction::Left));
    assert_eq!(ticker.started_count(), 0);
    assert!(scroller.viewport().requests.is_empty());
}

#[test]
fn test_scenario_b_left_edge_scrolls_one_step() {
    let (mut scroller, ticker) = enabled_scroller(100.0, 0.0);

    deliver(&mut scroller, press_at(50.0, 50.0));
    deliver(&mut scroller, move_to(-5.0, 50.0));
    assert!(scroller.active_directions().contains(Direction::Left));

    let outcome = scroller.on_tick(ticker.current().expect("ticker running"));

    assert_eq!(outcome, TickOutcome::Scrolled(ScrollOffset::new(80.0, 0.0)));
    assert_eq!(scroller.viewport().state.offset_x, 80.0);
}

#[test]
fn test_scenario_c_reaching_zero_stops_left_without_moving() {
    let (mut scroller, ticker) = enabled_scroller(40.0, 0.0);
    deliver(&mut scroller, press_at(50.0, 50.0));
    deliver(&mut scroller, move_to(-5.0, 50.0));

    let outcomes = run_ticks(&mut scroller, &ticker, 10);

    assert_eq!(
        outcomes,
        vec![
            TickOutcome::Scrolled(ScrollOffset::new(20.0, 0.0)),
            TickOutcome::Scrolled(ScrollOffset::new(0.0, 0.0)),
            TickOutcome::Idle,
        ]
    );
    assert!(scroller.active_directions().is_empty());
    assert_eq!(ticker.live_count(), 0);
    assert!(scroller.viewport().requests.iter().all(|(o, _)| o.horizontal >= 0.0));
    // The session itself is still open; only the direction stopped.
    assert!(scroller.is_session_open());
}

#[test]
fn test_scenario_d_release_with_two_directions() {
    let (mut scroller, ticker) = enabled_scroller(100.0, 100.0);
    deliver(&mut scroller, press_at(50.0, 50.0));
    deliver(&mut scroller, move_to(250.0, 250.0));
    assert_eq!(scroller.active_directions().len(), 2);
    assert_eq!(ticker.live_count(), 1);

    assert!(deliver(&mut scroller, release_at(250.0, 250.0)));

    assert!(scroller.active_directions().is_empty());
    assert_eq!(ticker.live_count(), 0);
    assert!(!scroller.is_session_open());

    let source = scroller.pointer_source();
    assert!(source.is_subscribed(PointerEventKind::Pressed));
    assert_eq!(source.active_count(), 1);
    // The press handler comes back last, after the session handlers are gone.
    assert!(matches!(
        source.calls().last(),
        Some(SourceCall::Subscribe(PointerEventKind::Pressed, _))
    ));

    // And the next press is accepted.
    assert!(deliver(&mut scroller, press_at(10.0, 10.0)));
}

#[test]
fn test_scenario_e_disable_during_session() {
    let (mut scroller, ticker) = enabled_scroller(100.0, 0.0);
    deliver(&mut scroller, press_at(50.0, 50.0));
    deliver(&mut scroller, move_to(-5.0, 50.0));
    assert_eq!(ticker.live_count(), 1);

    scroller.set_enabled(false);

    assert!(!scroller.is_session_open());
    assert!(!scroller.is_listening_for_press());
    assert_eq!(ticker.live_count(), 0);
    assert_eq!(scroller.pointer_source().active_count(), 0);
    assert!(!deliver(&mut scroller, move_to(-10.0, 50.0)));
}

// =============================================================================
// Properties
// =============================================================================

#[test]
fn test_cancel_ends_session_like_release() {
    let (mut scroller, ticker) = enabled_scroller(100.0, 100.0);
    deliver(&mut scroller, press_at(50.0, 50.0));
    deliver(&mut scroller, move_to(50.0, -5.0));
    assert!(scroller.active_directions().contains(Direction::Up));

    assert!(deliver(&mut scroller, cancel_at(50.0, -5.0)));

    assert!(scroller.active_directions().is_empty());
    assert_eq!(ticker.live_count(), 0);
    assert!(scroller.pointer_source().is_subscribed(PointerEventKind::Pressed));
    assert_eq!(scroller.pointer_source().active_count(), 1);
}

#[test]
fn test_no_direction_without_session() {
    let (mut scroller, ticker) = enabled_scroller(100.0, 100.0);

    // Not delivered by the host, and ignored if forced through.
    assert!(!deliver(&mut scroller, move_to(-5.0, -5.0)));
    assert!(!scroller.dispatch(&move_to(-5.0, -5.0)));

    assert!(scroller.active_directions().is_empty());
    assert_eq!(ticker.started_count(), 0);
}

#[test]
fn test_tick_queued_before_release_does_not_scroll() {
    let (mut scroller, ticker) = enabled_scroller(100.0, 0.0);
    deliver(&mut scroller, press_at(50.0, 50.0));
    deliver(&mut scroller, move_to(-5.0, 50.0));
    let pending = ticker.current().expect("ticker running");

    deliver(&mut scroller, release_at(-5.0, 50.0));

    assert_eq!(scroller.on_tick(pending), TickOutcome::Stale);
    assert_eq!(scroller.viewport().state.offset_x, 100.0);
}

#[test]
fn test_one_request_per_tick_with_zoom_preserved() {
    let (mut scroller, ticker) = enabled_scroller(100.0, 100.0);
    scroller.viewport_mut().state.zoom = 2.0;
    deliver(&mut scroller, press_at(50.0, 50.0));
    deliver(&mut scroller, move_to(-5.0, 250.0));

    run_ticks(&mut scroller, &ticker, 3);

    assert_eq!(
        scroller.viewport().requests,
        vec![
            (ScrollOffset::new(80.0, 120.0), 2.0),
            (ScrollOffset::new(60.0, 140.0), 2.0),
            (ScrollOffset::new(40.0, 160.0), 2.0),
        ]
    );
}

#[test]
fn test_right_edge_stops_at_extent() {
    let (mut scroller, ticker) = enabled_scroller(470.0, 0.0);
    deliver(&mut scroller, press_at(50.0, 50.0));
    deliver(&mut scroller, move_to(205.0, 50.0));

    let outcomes = run_ticks(&mut scroller, &ticker, 5);

    assert_eq!(
        outcomes,
        vec![
            TickOutcome::Scrolled(ScrollOffset::new(490.0, 0.0)),
            TickOutcome::Scrolled(ScrollOffset::new(500.0, 0.0)),
            TickOutcome::Idle,
        ]
    );
    assert!(!scroller.is_scrolling());
}

#[test]
fn test_offsets_changed_by_someone_else_are_picked_up() {
    let (mut scroller, ticker) = enabled_scroller(100.0, 0.0);
    deliver(&mut scroller, press_at(50.0, 50.0));
    deliver(&mut scroller, move_to(-5.0, 50.0));

    scroller.viewport_mut().state.offset_x = 300.0;
    scroller.on_tick(ticker.current().expect("ticker running"));

    assert_eq!(scroller.viewport().state.offset_x, 280.0);
}

#[test]
fn test_ticker_restarts_on_new_drag() {
    let (mut scroller, ticker) = enabled_scroller(100.0, 100.0);
    for _ in 0..2 {
        deliver(&mut scroller, press_at(50.0, 50.0));
        deliver(&mut scroller, move_to(250.0, 50.0));
        deliver(&mut scroller, move_to(250.0, 250.0));
        assert_eq!(ticker.live_count(), 1);
        deliver(&mut scroller, release_at(250.0, 250.0));
    }
    assert_eq!(ticker.started_count(), 2);
    assert_eq!(ticker.live_count(), 0);
}

#[test]
fn test_reenable_after_disable_accepts_presses() {
    let (mut scroller, _ticker) = enabled_scroller(0.0, 0.0);
    scroller.set_enabled(false);
    scroller.set_enabled(true);

    assert!(deliver(&mut scroller, press_at(1.0, 1.0)));
    assert!(scroller.is_session_open());
}

#[test]
fn test_disable_releases_capture() {
    let ticker = ManualTicker::new();
    let mut scroller = AutoScroller::new(
        viewport_at(0.0, 0.0),
        autoscroll::testing::RecordingPointerSource::new(),
        ticker,
        AutoScrollConfig::default()
            .with_enabled(true)
            .with_capture_pointer_on_press(true),
    )
    .expect("valid config");
    deliver(&mut scroller, press_at(1.0, 1.0));
    assert_eq!(scroller.pointer_source().captured(), Some(MOUSE));

    scroller.set_enabled(false);

    assert_eq!(scroller.pointer_source().captured(), None);
}

#[test]
fn test_refused_capture_is_not_released() {
    let mut scroller = AutoScroller::new(
        viewport_at(0.0, 0.0),
        autoscroll::testing::RecordingPointerSource::refusing_capture(),
        ManualTicker::new(),
        AutoScrollConfig::default()
            .with_enabled(true)
            .with_capture_pointer_on_press(true),
    )
    .expect("valid config");
    deliver(&mut scroller, press_at(1.0, 1.0));
    deliver(&mut scroller, release_at(1.0, 1.0));

    let calls = scroller.pointer_source().calls();
    assert!(calls.contains(&SourceCall::Capture(MOUSE)));
    assert!(!calls.contains(&SourceCall::ReleaseCapture(MOUSE)));
}

#[test]
fn test_drop_removes_every_subscription() {
    let source = SharedSource::default();
    let ticker = ManualTicker::new();
    {
        let mut scroller = AutoScroller::new(
            ScrollState::new(700.0, 700.0, 200.0, 200.0).with_offset(100.0, 0.0),
            source.clone(),
            ticker.clone(),
            AutoScrollConfig::default().with_enabled(true),
        )
        .expect("valid config");
        scroller.dispatch(&press_at(50.0, 50.0));
        scroller.dispatch(&move_to(-5.0, 50.0));
        assert!(source.is_subscribed(PointerEventKind::Moved));
        assert_eq!(ticker.live_count(), 1);
    }
    assert_eq!(source.active_count(), 0);
    assert_eq!(ticker.live_count(), 0);
}
