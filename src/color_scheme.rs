//! Color scheme definitions for the visualization.
//!
//! This module contains the ColorScheme enum, CustomColorScheme struct, the
//! Rosé Pine palettes used by the light and dark themes, and related methods.

use eframe::egui::{Color32, Context, Visuals};
use once_cell::sync::Lazy;
use std::sync::Mutex;

// Global palette consulted by the canvas and controls when painting.  This
// is updated whenever a color scheme is applied.  The value is copied out so
// callers never hold the lock across a frame.
static GLOBAL_PALETTE: Lazy<Mutex<Palette>> =
    Lazy::new(|| Mutex::new(ColorScheme::Light.palette()));

/// Get a copy of the palette of the most recently applied scheme.
pub fn current_palette() -> Palette {
    *GLOBAL_PALETTE.lock().unwrap()
}

/// Update the global palette.  Called automatically when a [`ColorScheme`]
/// is applied, but user code (or tests) may call it directly.
pub(crate) fn set_global_palette(new: Palette) {
    let mut guard = GLOBAL_PALETTE.lock().unwrap();
    *guard = new;
}

/// Named colors shared by the canvas and the controls column.
///
/// The role names follow the Rosé Pine convention: `iris` is the primary
/// accent (the blue point), `love` the highlight (the red point), `pine`
/// the secondary accent (nearest side, intersecting bisector).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    /// Base background behind everything.
    pub base: Color32,
    /// Surface background (canvas, inputs).
    pub surface: Color32,
    /// Primary text.
    pub text: Color32,
    /// Subtle text (captions, readouts).
    pub subtle: Color32,
    /// Muted elements (inscribed circle, non-intersecting bisector).
    pub muted: Color32,
    /// Primary accent: the blue point and its distance circle.
    pub iris: Color32,
    /// Secondary accent: nearest-side highlight, intersection success.
    pub pine: Color32,
    /// Tertiary accent: the circle-toggle button.
    pub rose: Color32,
    /// Highlight: the red point, intersection failure.
    pub love: Color32,
    /// Warning/special: the theme toggle in dark mode.
    pub gold: Color32,
    /// Borders.
    pub border: Color32,
}

/// Visual theme for the visualization, including user-defined custom schemes.
#[derive(Clone, Debug, PartialEq)]
pub enum ColorScheme {
    /// Rosé Pine Dawn.
    Light,
    /// Rosé Pine.
    Dark,
    /// User-defined custom color scheme.
    Custom(CustomColorScheme),
}

/// User-defined custom color scheme.
#[derive(Clone, Debug, PartialEq)]
pub struct CustomColorScheme {
    /// Visuals for egui context (optional, fallback to dark/light).
    pub visuals: Option<Visuals>,
    /// Drawing palette.
    pub palette: Palette,
    /// Optional label for UI display.
    pub label: Option<String>,
    /// Whether the scheme counts as dark (controls the toggle icon and
    /// which built-in scheme the toggle switches to).
    pub dark: bool,
}

impl Default for ColorScheme {
    fn default() -> Self {
        ColorScheme::Light
    }
}

impl ColorScheme {
    /// All built-in schemes (useful for combo-box UIs and preference
    /// restoration).
    pub fn all() -> &'static [ColorScheme] {
        &[ColorScheme::Light, ColorScheme::Dark]
    }

    /// Human-readable label.
    pub fn label(&self) -> String {
        match self {
            ColorScheme::Light => "Light".to_string(),
            ColorScheme::Dark => "Dark".to_string(),
            ColorScheme::Custom(custom) => {
                custom.label.clone().unwrap_or_else(|| "Custom".to_string())
            }
        }
    }

    /// Whether this scheme uses a dark background.
    pub fn is_dark(&self) -> bool {
        match self {
            ColorScheme::Light => false,
            ColorScheme::Dark => true,
            ColorScheme::Custom(custom) => custom.dark,
        }
    }

    /// The scheme the light/dark toggle switches to.
    ///
    /// Custom schemes toggle to the built-in of the opposite polarity.
    pub fn toggled(&self) -> ColorScheme {
        if self.is_dark() {
            ColorScheme::Light
        } else {
            ColorScheme::Dark
        }
    }

    /// Apply this scheme's visuals to an egui context.
    pub fn apply(&self, ctx: &Context) {
        let palette = self.palette();
        match self {
            ColorScheme::Light => {
                let mut v = Visuals::light();
                style_visuals(&mut v, &palette);
                ctx.set_visuals(v);
            }
            ColorScheme::Dark => {
                let mut v = Visuals::dark();
                style_visuals(&mut v, &palette);
                ctx.set_visuals(v);
            }
            ColorScheme::Custom(custom) => {
                if let Some(visuals) = &custom.visuals {
                    ctx.set_visuals(visuals.clone());
                } else {
                    let mut v = if custom.dark {
                        Visuals::dark()
                    } else {
                        Visuals::light()
                    };
                    style_visuals(&mut v, &palette);
                    ctx.set_visuals(v);
                }
            }
        }

        // Refresh the global palette so all painting code picks up the
        // colours of the newly-applied scheme on the next frame.
        set_global_palette(palette);
    }

    /// Drawing palette for this scheme.
    pub fn palette(&self) -> Palette {
        match self {
            // Rosé Pine Dawn
            ColorScheme::Light => Palette {
                base: Color32::from_rgb(250, 244, 237),
                surface: Color32::from_rgb(255, 250, 243),
                text: Color32::from_rgb(87, 82, 121),
                subtle: Color32::from_rgb(110, 106, 134),
                muted: Color32::from_rgb(152, 147, 165),
                iris: Color32::from_rgb(144, 122, 169),
                pine: Color32::from_rgb(40, 105, 131),
                rose: Color32::from_rgb(215, 130, 126),
                love: Color32::from_rgb(180, 99, 122),
                gold: Color32::from_rgb(234, 157, 52),
                border: Color32::from_rgb(223, 218, 217),
            },
            // Rosé Pine
            ColorScheme::Dark => Palette {
                base: Color32::from_rgb(25, 23, 36),
                surface: Color32::from_rgb(31, 29, 46),
                text: Color32::from_rgb(224, 222, 244),
                subtle: Color32::from_rgb(144, 140, 170),
                muted: Color32::from_rgb(110, 106, 134),
                iris: Color32::from_rgb(196, 167, 231),
                pine: Color32::from_rgb(49, 116, 143),
                rose: Color32::from_rgb(235, 188, 186),
                love: Color32::from_rgb(235, 111, 146),
                gold: Color32::from_rgb(246, 193, 119),
                border: Color32::from_rgb(38, 35, 58),
            },
            ColorScheme::Custom(custom) => custom.palette,
        }
    }
}

/// Map a palette onto egui visuals: backgrounds, text and widget fills.
fn style_visuals(v: &mut Visuals, palette: &Palette) {
    v.panel_fill = palette.base;
    v.window_fill = palette.surface;
    v.extreme_bg_color = palette.surface;
    v.faint_bg_color = palette.surface;
    v.override_text_color = Some(palette.text);
    v.widgets.noninteractive.bg_fill = palette.surface;
    v.widgets.noninteractive.bg_stroke.color = palette.border;
    v.widgets.noninteractive.fg_stroke.color = palette.text;
    v.widgets.inactive.bg_fill = palette.surface;
    v.widgets.inactive.bg_stroke.color = palette.border;
    v.widgets.inactive.fg_stroke.color = palette.subtle;
    v.widgets.hovered.bg_fill = palette.border;
    v.widgets.hovered.fg_stroke.color = palette.text;
    v.widgets.active.bg_fill = palette.border;
    v.widgets.active.fg_stroke.color = palette.text;
}
