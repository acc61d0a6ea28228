//! Application shell for the visualization.
//!
//! | Sub-module | Responsibility |
//! | ---------- | -------------- |
//! | [`run`]    | Top-level [`run_geomprob()`] entry point and icon loading |
//!
//! [`GeomProbApp`] wraps a [`VizPanel`](crate::panel::VizPanel) and
//! implements [`eframe::App`] so the visualization can run as a native
//! window. Hosts that embed the widget in their own eframe application
//! should use [`VizPanel`](crate::panel::VizPanel) directly instead.

mod run;

pub use run::run_geomprob;

use eframe::egui;

use crate::config::VizConfig;
use crate::panel::VizPanel;

/// Standalone application that implements [`eframe::App`].
pub struct GeomProbApp {
    /// The inner widget that owns all data and UI state.
    pub panel: VizPanel,
}

impl GeomProbApp {
    /// Create an app with default configuration.
    pub fn new() -> Self {
        Self {
            panel: VizPanel::new(),
        }
    }

    /// Create an app from a configuration.
    pub fn from_config(cfg: &VizConfig) -> Self {
        Self {
            panel: VizPanel::with_config(cfg),
        }
    }
}

impl Default for GeomProbApp {
    fn default() -> Self {
        Self::new()
    }
}

impl eframe::App for GeomProbApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            self.panel.ui(ui);
        });
    }
}
