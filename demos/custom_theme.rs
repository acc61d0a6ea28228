//! Example: Custom color scheme
//!
//! What it demonstrates
//! - Starting with the dark built-in scheme via `VizConfig`.
//! - Defining a `CustomColorScheme` with its own palette (a Gruvbox-flavored
//!   variation) and switching to it programmatically.
//!
//! How to run
//! ```bash
//! cargo run --example custom_theme
//! ```

use eframe::egui::Color32;
use geomprob::{
    run_geomprob, ColorScheme, CustomColorScheme, Palette, VizConfig,
};

fn main() -> eframe::Result<()> {
    env_logger::init();

    let palette = Palette {
        base: Color32::from_rgb(40, 40, 40),
        surface: Color32::from_rgb(60, 56, 54),
        text: Color32::from_rgb(235, 219, 178),
        subtle: Color32::from_rgb(168, 153, 132),
        muted: Color32::from_rgb(124, 111, 100),
        iris: Color32::from_rgb(211, 134, 155),
        pine: Color32::from_rgb(131, 165, 152),
        rose: Color32::from_rgb(254, 128, 25),
        love: Color32::from_rgb(251, 73, 52),
        gold: Color32::from_rgb(250, 189, 47),
        border: Color32::from_rgb(80, 73, 69),
    };

    let cfg = VizConfig {
        title: "Geometric Probability (custom theme)".to_string(),
        color_scheme: ColorScheme::Custom(CustomColorScheme {
            visuals: None,
            palette,
            label: Some("Gruvbox".to_string()),
            dark: true,
        }),
        ..VizConfig::default()
    };
    run_geomprob(cfg)
}
