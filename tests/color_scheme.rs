use egui::Color32;
use geomprob::color_scheme::{current_palette, ColorScheme, CustomColorScheme};

fn custom(dark: bool) -> ColorScheme {
    ColorScheme::Custom(CustomColorScheme {
        visuals: None,
        palette: ColorScheme::Dark.palette(),
        label: Some("Test".to_string()),
        dark,
    })
}

#[test]
fn toggle_flips_between_the_builtins() {
    assert_eq!(ColorScheme::Light.toggled(), ColorScheme::Dark);
    assert_eq!(ColorScheme::Dark.toggled(), ColorScheme::Light);
}

#[test]
fn custom_schemes_toggle_to_the_opposite_builtin() {
    assert_eq!(custom(true).toggled(), ColorScheme::Light);
    assert_eq!(custom(false).toggled(), ColorScheme::Dark);
}

#[test]
fn labels_identify_the_schemes() {
    assert_eq!(ColorScheme::Light.label(), "Light");
    assert_eq!(ColorScheme::Dark.label(), "Dark");
    assert_eq!(custom(true).label(), "Test");
}

#[test]
fn light_and_dark_palettes_differ() {
    let light = ColorScheme::Light.palette();
    let dark = ColorScheme::Dark.palette();
    assert_ne!(light.base, dark.base);
    assert_ne!(light.text, dark.text);
    // Rosé Pine Dawn base.
    assert_eq!(light.base, Color32::from_rgb(250, 244, 237));
}

#[test]
fn applying_a_scheme_refreshes_the_global_palette() {
    // Both applications live in one test: the global palette is shared
    // process state and tests run concurrently.
    let ctx = egui::Context::default();

    ColorScheme::Dark.apply(&ctx);
    assert_eq!(current_palette(), ColorScheme::Dark.palette());

    ColorScheme::Light.apply(&ctx);
    assert_eq!(current_palette(), ColorScheme::Light.palette());
}
