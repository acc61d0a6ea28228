use approx::assert_abs_diff_eq;
use geomprob::geometry::{Side, UnitPoint};
use geomprob::state::{parse_coordinate, Axis, PointRole, VizState};

#[test]
fn default_state_matches_the_starting_construction() {
    let state = VizState::new();
    assert_eq!(state.blue(), UnitPoint::new(0.3, 0.4));
    assert_eq!(state.red(), UnitPoint::new(0.7, 0.6));
    assert!(state.show_distance_circle);
    assert!(state.show_inscribed);

    let derived = state.derived();
    assert_eq!(derived.nearest, Side::Left);
    assert!(!derived.intersects);
    assert_abs_diff_eq!(derived.distance, 0.2_f64.sqrt(), epsilon = 1e-12);
}

#[test]
fn garbage_text_input_is_a_noop() {
    let mut state = VizState::new();
    let accepted = state.apply_coordinate_text(PointRole::Blue, Axis::X, "abc");
    assert!(!accepted);
    assert_eq!(state.blue().x, 0.3);
}

#[test]
fn out_of_range_text_input_is_clamped() {
    let mut state = VizState::new();
    let accepted = state.apply_coordinate_text(PointRole::Red, Axis::Y, "1.5");
    assert!(accepted);
    assert_eq!(state.red().y, 1.0);

    let accepted = state.apply_coordinate_text(PointRole::Red, Axis::X, "-0.25");
    assert!(accepted);
    assert_eq!(state.red().x, 0.0);
}

#[test]
fn non_finite_text_input_is_rejected() {
    let mut state = VizState::new();
    for text in ["NaN", "inf", "-inf"] {
        assert!(!state.apply_coordinate_text(PointRole::Blue, Axis::Y, text));
        assert_eq!(state.blue().y, 0.4);
    }
}

#[test]
fn parse_coordinate_trims_and_clamps() {
    assert_eq!(parse_coordinate("0.25"), Some(0.25));
    assert_eq!(parse_coordinate(" 0.5 "), Some(0.5));
    assert_eq!(parse_coordinate("-2"), Some(0.0));
    assert_eq!(parse_coordinate("17"), Some(1.0));
    assert_eq!(parse_coordinate(""), None);
    assert_eq!(parse_coordinate("1.2.3"), None);
}

#[test]
fn set_point_clamps_and_recomputes() {
    let mut state = VizState::new();
    state.set_point(PointRole::Blue, UnitPoint::new(-0.5, 2.0));
    assert_eq!(state.blue(), UnitPoint::new(0.0, 1.0));
    // Blue now sits in the top-left corner; top ties are resolved after
    // left in the enumeration order.
    assert_eq!(state.derived().nearest, Side::Left);
}

#[test]
fn derived_geometry_follows_every_mutation() {
    let mut state = VizState::new();
    assert!(!state.derived().intersects);

    // Pull red close to blue; the bisector now crosses the left side.
    state.set_point(PointRole::Red, UnitPoint::new(0.4, 0.7));
    assert!(state.derived().intersects);

    state.set_coordinate(PointRole::Blue, Axis::X, 0.9);
    assert_eq!(state.derived().nearest, Side::Right);
}

#[test]
fn coincident_points_do_not_panic() {
    let mut state = VizState::new();
    state.set_point(PointRole::Red, state.blue());
    let derived = state.derived();
    assert_eq!(derived.distance, 0.0);
    assert!(derived.bisector.is_degenerate());
    assert!(!derived.intersects);
}
