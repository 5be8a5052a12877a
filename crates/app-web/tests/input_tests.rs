// Host-side tests for the pointer tracker.
// The crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use app_core::constants::CLICK_DRAG_THRESHOLD_PX;
use glam::Vec2;
use input::*;

#[test]
fn hover_motion_reports_no_delta() {
    let mut tracker = PointerTracker::default();
    assert_eq!(tracker.motion(Vec2::new(40.0, 60.0)), None);
    assert_eq!(tracker.motion(Vec2::new(42.0, 58.0)), None);
    assert!(!tracker.is_down());
    assert!(!tracker.is_dragging());
    assert_eq!(tracker.position(), Vec2::new(42.0, 58.0));
}

#[test]
fn release_without_press_is_not_a_click() {
    let mut tracker = PointerTracker::default();
    assert!(!tracker.release(Vec2::new(10.0, 10.0)));
}

#[test]
fn click_within_dead_zone_stays_a_click() {
    let mut tracker = PointerTracker::default();
    tracker.press(Vec2::new(100.0, 100.0));
    assert!(tracker.is_down());

    // small wobble under the threshold
    assert_eq!(tracker.motion(Vec2::new(101.0, 101.0)), None);
    assert_eq!(tracker.motion(Vec2::new(99.0, 100.5)), None);
    assert!(!tracker.is_dragging());

    assert!(tracker.release(Vec2::new(99.0, 100.5)));
    assert!(!tracker.is_down());
}

#[test]
fn dead_zone_boundary_is_inclusive() {
    let mut tracker = PointerTracker::default();
    tracker.press(Vec2::ZERO);

    // a 3-4-5 triangle lands exactly on the threshold
    assert_eq!(CLICK_DRAG_THRESHOLD_PX, 5.0);
    assert_eq!(tracker.motion(Vec2::new(3.0, 4.0)), None);
    assert!(!tracker.is_dragging());

    // one more step past it commits the drag; the delta is measured
    // from the last tracked position, not the press origin
    let delta = tracker.motion(Vec2::new(6.0, 8.0));
    assert_eq!(delta, Some(Vec2::new(3.0, 4.0)));
    assert!(tracker.is_dragging());
}

#[test]
fn drag_reports_per_move_deltas() {
    let mut tracker = PointerTracker::default();
    tracker.press(Vec2::ZERO);
    assert_eq!(tracker.motion(Vec2::new(10.0, 0.0)), Some(Vec2::new(10.0, 0.0)));
    assert_eq!(tracker.motion(Vec2::new(10.0, 5.0)), Some(Vec2::new(0.0, 5.0)));
    assert_eq!(tracker.motion(Vec2::new(4.0, 5.0)), Some(Vec2::new(-6.0, 0.0)));
}

#[test]
fn committed_drag_never_turns_back_into_a_click() {
    let mut tracker = PointerTracker::default();
    tracker.press(Vec2::ZERO);
    assert!(tracker.motion(Vec2::new(20.0, 0.0)).is_some());

    // returning to the press origin does not undo the drag
    assert_eq!(tracker.motion(Vec2::ZERO), Some(Vec2::new(-20.0, 0.0)));
    assert!(tracker.is_dragging());
    assert!(!tracker.release(Vec2::ZERO));
}

#[test]
fn tracker_resets_cleanly_between_presses() {
    let mut tracker = PointerTracker::default();
    tracker.press(Vec2::ZERO);
    let _ = tracker.motion(Vec2::new(30.0, 30.0));
    assert!(!tracker.release(Vec2::new(30.0, 30.0)));

    // next press starts a fresh dead zone
    tracker.press(Vec2::new(30.0, 30.0));
    assert!(!tracker.is_dragging());
    assert!(tracker.release(Vec2::new(31.0, 30.0)));
}
