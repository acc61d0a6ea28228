//! Configuration types for the visualization UI.

use std::path::PathBuf;

use crate::geometry::UnitPoint;

// ─────────────────────────────────────────────────────────────────────────────
// Color scheme
// ─────────────────────────────────────────────────────────────────────────────

pub use crate::color_scheme::{ColorScheme, CustomColorScheme, Palette};

// ─────────────────────────────────────────────────────────────────────────────
// Feature flags
// ─────────────────────────────────────────────────────────────────────────────

/// Toggle individual UI features on or off.
///
/// All features default to `true` (enabled). Disable features to create a
/// minimal, canvas-only widget for embedded use.
#[derive(Clone, Debug)]
pub struct FeatureFlags {
    /// Show the x/y text inputs for both points.
    pub coordinate_inputs: bool,
    /// Show the distance readout below the inputs.
    pub distance_readout: bool,
    /// Show the Show/Hide buttons for the two circles.
    pub toggle_buttons: bool,
    /// Show the light/dark theme toggle.
    pub theme_toggle: bool,
    /// Show the intersection status line.
    pub status_line: bool,
    /// Show the explanatory caption under the status line.
    pub caption: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            coordinate_inputs: true,
            distance_readout: true,
            toggle_buttons: true,
            theme_toggle: true,
            status_line: true,
            caption: true,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// VizConfig
// ─────────────────────────────────────────────────────────────────────────────

/// Top-level configuration for the visualization.
///
/// | Field            | Purpose |
/// |------------------|---------|
/// | `features`       | Toggle individual UI features on/off |
/// | `color_scheme`   | Initial visual theme |
/// | `prefs_path`     | Optional JSON file for view preferences |
#[derive(Clone)]
pub struct VizConfig {
    // ── Canvas geometry ──────────────────────────────────────────────────────
    /// Side length of the square canvas widget, in pixels.
    pub canvas_size: f32,
    /// Margin between the canvas edge and the unit square, in pixels.
    pub canvas_padding: f32,

    // ── Initial model ────────────────────────────────────────────────────────
    /// Starting position of the blue point (clamped to the unit square).
    pub initial_blue: UnitPoint,
    /// Starting position of the red point (clamped to the unit square).
    pub initial_red: UnitPoint,

    // ── Window / chrome ──────────────────────────────────────────────────────
    /// Native window title.
    pub title: String,
    /// Optional eframe native-window options.
    pub native_options: Option<eframe::NativeOptions>,

    // ── Feature flags ────────────────────────────────────────────────────────
    /// Toggle individual UI features on/off.
    pub features: FeatureFlags,

    // ── Appearance ───────────────────────────────────────────────────────────
    /// Initial color scheme / visual theme.
    pub color_scheme: ColorScheme,

    // ── Preferences ──────────────────────────────────────────────────────────
    /// Where to persist view preferences (theme and circle visibility,
    /// never point positions). `None` disables persistence.
    pub prefs_path: Option<PathBuf>,
}

impl Default for VizConfig {
    fn default() -> Self {
        Self {
            canvas_size: 400.0,
            canvas_padding: 40.0,

            initial_blue: UnitPoint::new(0.3, 0.4),
            initial_red: UnitPoint::new(0.7, 0.6),

            title: "Geometric Probability".to_string(),
            native_options: None,

            features: FeatureFlags::default(),
            color_scheme: ColorScheme::default(),

            prefs_path: None,
        }
    }
}
