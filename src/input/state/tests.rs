use super::*;
use crate::draw::color::WHITE;
use crate::draw::{OverlayCanvas, Point};

fn create_test_input_state() -> InputState {
    InputState::with_defaults(5.0, 20.0)
}

fn sized_canvas(width: u32, height: u32) -> OverlayCanvas {
    let mut canvas = OverlayCanvas::new(WHITE);
    canvas.resize(width, height);
    canvas
}

#[test]
fn begin_seeds_window_without_drawing() {
    let mut state = create_test_input_state();
    let mut canvas = sized_canvas(50, 50);

    state.on_stroke_begin(10.0, 10.0);

    assert_eq!(state.state, StrokeState::Stroking);
    assert_eq!(state.points.as_slice(), &[Point::new(10.0, 10.0)]);
    // A pure tap leaves the overlay untouched.
    state.on_stroke_end();
    assert!(canvas.snapshot().unwrap().is_transparent());
}

#[test]
fn full_gesture_cycle_draws_and_clears_window() {
    let mut state = create_test_input_state();
    let mut canvas = sized_canvas(100, 100);

    state.on_stroke_begin(20.0, 50.0);
    state.on_stroke_update(&mut canvas, 50.0, 50.0);
    state.on_stroke_update(&mut canvas, 80.0, 50.0);
    state.on_stroke_end();

    assert_eq!(state.state, StrokeState::Idle);
    assert!(state.points.is_empty());
    assert!(!canvas.snapshot().unwrap().is_transparent());
}

#[test]
fn events_while_idle_are_ignored() {
    let mut state = create_test_input_state();
    let mut canvas = sized_canvas(50, 50);

    state.on_stroke_update(&mut canvas, 10.0, 10.0);
    state.on_stroke_end();

    assert_eq!(state.state, StrokeState::Idle);
    assert!(state.points.is_empty());
    assert!(canvas.snapshot().unwrap().is_transparent());
}

#[test]
fn begin_while_stroking_is_ignored() {
    let mut state = create_test_input_state();

    state.on_stroke_begin(1.0, 1.0);
    state.on_stroke_begin(9.0, 9.0);

    // The window still holds the original seed sample.
    assert_eq!(state.points.as_slice(), &[Point::new(1.0, 1.0)]);
}

#[test]
fn window_stays_bounded_during_long_strokes() {
    let mut state = create_test_input_state();
    let mut canvas = sized_canvas(200, 200);

    state.on_stroke_begin(0.0, 0.0);
    for i in 1..50 {
        state.on_stroke_update(&mut canvas, i as f64 * 4.0, 100.0);
        assert!(state.points.len() <= 4);
    }
}

#[test]
fn mode_selects_stroke_width() {
    let mut state = create_test_input_state();
    assert_eq!(state.mode(), DrawMode::Draw);
    assert_eq!(state.stroke_width(), 5.0);

    state.set_mode(DrawMode::Erase);
    assert_eq!(state.mode(), DrawMode::Erase);
    assert_eq!(state.stroke_width(), 20.0);
}

#[test]
fn erase_stroke_restores_painted_region() {
    let mut state = create_test_input_state();
    let mut canvas = sized_canvas(100, 100);

    state.on_stroke_begin(20.0, 50.0);
    state.on_stroke_update(&mut canvas, 50.0, 50.0);
    state.on_stroke_update(&mut canvas, 80.0, 50.0);
    state.on_stroke_end();
    assert_eq!(canvas.snapshot().unwrap().alpha_at(50, 50), Some(0xff));

    state.set_mode(DrawMode::Erase);
    state.on_stroke_begin(20.0, 50.0);
    state.on_stroke_update(&mut canvas, 50.0, 50.0);
    state.on_stroke_update(&mut canvas, 80.0, 50.0);
    state.on_stroke_end();
    assert_eq!(canvas.snapshot().unwrap().alpha_at(50, 50), Some(0));
}

#[test]
fn updates_before_sizing_do_not_panic() {
    let mut state = create_test_input_state();
    let mut canvas = OverlayCanvas::new(WHITE);

    // Gesture events may arrive before the first sizing event.
    state.on_stroke_begin(5.0, 5.0);
    state.on_stroke_update(&mut canvas, 10.0, 10.0);
    state.on_stroke_end();

    assert!(canvas.snapshot().is_none());
}

#[test]
fn resize_mid_stroke_retargets_new_surface() {
    let mut state = create_test_input_state();
    let mut canvas = sized_canvas(300, 200);

    state.on_stroke_begin(50.0, 50.0);
    state.on_stroke_update(&mut canvas, 80.0, 50.0);
    assert!(!canvas.snapshot().unwrap().is_transparent());

    // Layout change mid-stroke: old partial stroke content is lost.
    canvas.resize(400, 250);
    state.on_stroke_update(&mut canvas, 110.0, 50.0);
    state.on_stroke_update(&mut canvas, 140.0, 50.0);
    state.on_stroke_end();

    let snapshot = canvas.snapshot().unwrap();
    assert_eq!((snapshot.width(), snapshot.height()), (400, 250));
    assert!(!snapshot.is_transparent());
}
