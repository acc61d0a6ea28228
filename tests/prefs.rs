use geomprob::color_scheme::ColorScheme;
use geomprob::persistence::{
    load_prefs_from_path, prefs_from_json, prefs_to_json, save_prefs_to_path, VizPrefsSerde,
};
use geomprob::state::VizState;

#[test]
fn json_round_trip_restores_scheme_and_toggles() {
    let mut state = VizState::new();
    state.show_distance_circle = false;
    state.show_inscribed = false;
    let prefs = VizPrefsSerde::capture(&ColorScheme::Dark, &state);

    let json = prefs_to_json(&prefs).expect("serialize");
    let restored = prefs_from_json(&json).expect("parse");

    let mut scheme = ColorScheme::Light;
    let mut fresh = VizState::new();
    restored.apply_to(&mut scheme, &mut fresh);
    assert_eq!(scheme, ColorScheme::Dark);
    assert!(!fresh.show_distance_circle);
    assert!(!fresh.show_inscribed);
}

#[test]
fn unknown_scheme_labels_leave_the_scheme_untouched() {
    // A custom scheme cannot be reconstructed from its label alone.
    let prefs = VizPrefsSerde {
        color_scheme: "Gruvbox".to_string(),
        show_distance_circle: false,
        show_inscribed: true,
    };

    let mut scheme = ColorScheme::Light;
    let mut state = VizState::new();
    prefs.apply_to(&mut scheme, &mut state);
    assert_eq!(scheme, ColorScheme::Light);
    assert!(!state.show_distance_circle);
    assert!(state.show_inscribed);
}

#[test]
fn file_round_trip() {
    let path = std::env::temp_dir().join(format!("geomprob_prefs_test_{}.json", std::process::id()));

    let state = VizState::new();
    let prefs = VizPrefsSerde::capture(&ColorScheme::Dark, &state);
    save_prefs_to_path(&prefs, &path).expect("save");

    let loaded = load_prefs_from_path(&path).expect("load");
    assert_eq!(loaded.color_scheme, "Dark");
    assert!(loaded.show_distance_circle);

    let _ = std::fs::remove_file(&path);
}

#[test]
fn loading_a_missing_file_fails_gracefully() {
    let path = std::env::temp_dir().join("geomprob_prefs_does_not_exist.json");
    assert!(load_prefs_from_path(&path).is_err());
}

#[test]
fn malformed_json_is_an_error_not_a_panic() {
    assert!(prefs_from_json("{not json").is_err());
    assert!(prefs_from_json("{}").is_err());
}
