use egui::{pos2, vec2, Pos2, Rect};
use geomprob::geometry::UnitPoint;
use geomprob::interaction::{hit_test, DragController, MARKER_RADIUS};
use geomprob::state::{PointRole, VizState};
use geomprob::transform::CanvasTransform;

fn default_transform() -> CanvasTransform {
    CanvasTransform::new(Rect::from_min_size(Pos2::ZERO, vec2(400.0, 400.0)), 40.0)
}

#[test]
fn pointer_down_on_a_marker_starts_a_drag() {
    let state = VizState::new();
    let tf = default_transform();
    let mut drag = DragController::new();

    drag.pointer_down(tf.to_screen(state.blue()), &state, &tf);
    assert_eq!(drag.active(), Some(PointRole::Blue));
}

#[test]
fn pointer_down_elsewhere_stays_idle() {
    let state = VizState::new();
    let tf = default_transform();
    let mut drag = DragController::new();

    // The square's center is far from both default markers.
    drag.pointer_down(pos2(200.0, 200.0), &state, &tf);
    assert_eq!(drag.active(), None);
}

#[test]
fn hit_radius_matches_the_marker_radius() {
    let state = VizState::new();
    let tf = default_transform();
    let center = tf.to_screen(state.red());

    assert_eq!(
        hit_test(center + vec2(MARKER_RADIUS - 0.5, 0.0), &state, &tf),
        Some(PointRole::Red)
    );
    assert_eq!(hit_test(center + vec2(MARKER_RADIUS + 0.5, 0.0), &state, &tf), None);
}

#[test]
fn red_wins_when_markers_overlap() {
    let mut state = VizState::new();
    state.set_point(PointRole::Red, state.blue());
    let tf = default_transform();

    let pos = tf.to_screen(state.blue());
    assert_eq!(hit_test(pos, &state, &tf), Some(PointRole::Red));
}

#[test]
fn dragging_writes_clamped_coordinates() {
    let mut state = VizState::new();
    let tf = default_transform();
    let mut drag = DragController::new();

    drag.pointer_down(tf.to_screen(state.blue()), &state, &tf);
    assert_eq!(drag.active(), Some(PointRole::Blue));

    // Far left of the canvas: x clamps to exactly 0, y stays in range.
    drag.pointer_move(pos2(0.0, 200.0), &mut state, &tf);
    assert_eq!(state.blue().x, 0.0);
    assert_eq!(state.blue().y, 0.5);

    // Below the canvas: y clamps to exactly 0.
    drag.pointer_move(pos2(200.0, 500.0), &mut state, &tf);
    assert_eq!(state.blue().y, 0.0);

    // Past the top-right corner: both clamp to exactly 1.
    drag.pointer_move(pos2(450.0, -20.0), &mut state, &tf);
    assert_eq!(state.blue().x, 1.0);
    assert_eq!(state.blue().y, 1.0);
}

#[test]
fn pointer_up_returns_to_idle_from_anywhere() {
    let mut state = VizState::new();
    let tf = default_transform();
    let mut drag = DragController::new();

    drag.pointer_down(tf.to_screen(state.red()), &state, &tf);
    assert_eq!(drag.active(), Some(PointRole::Red));
    drag.pointer_up();
    assert_eq!(drag.active(), None);

    // Idempotent when already idle.
    drag.pointer_up();
    assert_eq!(drag.active(), None);
}

#[test]
fn moves_while_idle_are_ignored() {
    let mut state = VizState::new();
    let before = state.clone();
    let tf = default_transform();
    let mut drag = DragController::new();

    drag.pointer_move(pos2(10.0, 10.0), &mut state, &tf);
    assert_eq!(state, before);
}

#[test]
fn only_one_point_moves_during_a_drag() {
    let mut state = VizState::new();
    let red_before = state.red();
    let tf = default_transform();
    let mut drag = DragController::new();

    drag.pointer_down(tf.to_screen(state.blue()), &state, &tf);
    drag.pointer_move(pos2(120.0, 120.0), &mut state, &tf);
    assert_eq!(state.red(), red_before);
    assert_ne!(state.blue(), UnitPoint::new(0.3, 0.4));
}
