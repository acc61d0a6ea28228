//! Embeddable visualization widget.
//!
//! [`VizPanel`] owns the model state, the drag controller and the view
//! preferences, and renders the whole visualization into any egui `Ui`.
//! It is split into focused sub-modules:
//!
//! | Sub-module   | Responsibility |
//! | ------------ | -------------- |
//! | [`canvas`]   | The painter canvas: square, circles, bisector, markers, pointer handling |
//! | [`controls`] | Coordinate inputs, distance readout, toggle buttons, status text |
//!
//! In standalone mode the panel is driven by
//! [`GeomProbApp`](crate::app::GeomProbApp); in embedded mode the host
//! application calls [`VizPanel::ui`] directly each frame.

mod canvas;
mod controls;

use eframe::egui;

use crate::color_scheme::ColorScheme;
use crate::config::{FeatureFlags, VizConfig};
use crate::interaction::DragController;
use crate::persistence::{self, VizPrefsSerde};
use crate::state::{PointRole, VizState};

/// The complete visualization widget: canvas plus controls column.
pub struct VizPanel {
    /// Owned model state, mutated by the drag controller and the inputs.
    state: VizState,
    drag: DragController,

    scheme: ColorScheme,
    /// Flag so the scheme is applied to the egui context exactly once
    /// (and again after a config change).
    scheme_applied: bool,

    features: FeatureFlags,
    canvas_size: f32,
    canvas_padding: f32,

    /// Text-edit buffers for the four coordinate inputs, indexed by
    /// [`controls::field_index`].
    coord_buffers: [String; 4],

    prefs_path: Option<std::path::PathBuf>,
    prefs_dirty: bool,
}

impl Default for VizPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl VizPanel {
    /// Create a panel with default configuration.
    pub fn new() -> Self {
        let cfg = VizConfig::default();
        let mut panel = Self {
            state: VizState::new(),
            drag: DragController::new(),
            scheme: ColorScheme::default(),
            scheme_applied: false,
            features: FeatureFlags::default(),
            canvas_size: cfg.canvas_size,
            canvas_padding: cfg.canvas_padding,
            coord_buffers: Default::default(),
            prefs_path: None,
            prefs_dirty: false,
        };
        panel.refresh_coord_buffers();
        panel
    }

    /// Create a panel and apply `cfg`.
    pub fn with_config(cfg: &VizConfig) -> Self {
        let mut panel = Self::new();
        panel.apply_config(cfg);
        panel
    }

    /// Apply a configuration: canvas geometry, features, scheme, initial
    /// points, and stored preferences (if a prefs path is configured and
    /// readable, it overrides the configured scheme and toggles).
    pub fn apply_config(&mut self, cfg: &VizConfig) {
        self.canvas_size = cfg.canvas_size;
        self.canvas_padding = cfg.canvas_padding;
        self.features = cfg.features.clone();
        self.scheme = cfg.color_scheme.clone();
        self.scheme_applied = false;
        self.state.set_point(PointRole::Blue, cfg.initial_blue);
        self.state.set_point(PointRole::Red, cfg.initial_red);
        self.prefs_path = cfg.prefs_path.clone();

        if let Some(path) = &self.prefs_path {
            match persistence::load_prefs_from_path(path) {
                Ok(prefs) => {
                    prefs.apply_to(&mut self.scheme, &mut self.state);
                    log::debug!("restored view preferences from {}", path.display());
                }
                // A missing file is the normal first run; anything else is
                // still non-fatal.
                Err(err) => log::debug!("no stored view preferences ({err})"),
            }
        }
        self.refresh_coord_buffers();
    }

    /// Shared access to the model state.
    pub fn state(&self) -> &VizState {
        &self.state
    }

    /// Mutable access to the model state (for programmatic updates).
    pub fn state_mut(&mut self) -> &mut VizState {
        &mut self.state
    }

    /// The currently selected color scheme.
    pub fn scheme(&self) -> &ColorScheme {
        &self.scheme
    }

    /// Select a scheme; it is applied to the context on the next frame.
    pub fn set_scheme(&mut self, scheme: ColorScheme) {
        self.scheme = scheme;
        self.scheme_applied = false;
        self.prefs_dirty = true;
    }

    /// Render the whole widget. Call once per frame from any `Ui`.
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        if !self.scheme_applied {
            self.scheme.apply(ui.ctx());
            self.scheme_applied = true;
        }

        if self.features.theme_toggle {
            self.theme_toggle_ui(ui);
        }

        ui.horizontal_top(|ui| {
            self.canvas_ui(ui);
            ui.add_space(16.0);
            ui.vertical(|ui| self.controls_ui(ui));
        });

        self.flush_prefs();
    }

    /// The sun/moon button in the top-right corner.
    fn theme_toggle_ui(&mut self, ui: &mut egui::Ui) {
        let palette = crate::color_scheme::current_palette();
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
            let (icon, tint) = if self.scheme.is_dark() {
                (egui_phosphor::regular::SUN, palette.gold)
            } else {
                (egui_phosphor::regular::MOON, palette.pine)
            };
            let button = egui::Button::new(egui::RichText::new(icon).size(18.0).color(tint));
            if ui.add(button).on_hover_text("Toggle light/dark theme").clicked() {
                self.set_scheme(self.scheme.toggled());
            }
        });
    }

    /// Write preferences out if something changed this frame.
    fn flush_prefs(&mut self) {
        if !self.prefs_dirty {
            return;
        }
        self.prefs_dirty = false;
        if let Some(path) = &self.prefs_path {
            let prefs = VizPrefsSerde::capture(&self.scheme, &self.state);
            if let Err(err) = persistence::save_prefs_to_path(&prefs, path) {
                log::warn!("failed to save view preferences to {}: {err}", path.display());
            }
        }
    }

    fn refresh_coord_buffers(&mut self) {
        for (idx, buffer) in self.coord_buffers.iter_mut().enumerate() {
            *buffer = controls::format_coordinate(controls::field_value(&self.state, idx));
        }
    }
}
