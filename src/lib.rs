//! geomprob crate root: re-exports and module wiring.
//!
//! An interactive geometric probability visualization built on egui/eframe:
//! two draggable points inside the unit square, the perpendicular bisector
//! of their segment, and a test of whether that bisector crosses the square
//! side nearest to the blue point. Light/dark Rosé Pine theming included.
//!
//! The implementation is split into cohesive modules:
//! - `geometry`: pure unit-square math (distance, bisector, nearest side)
//! - `transform`: unit-square ↔ screen-pixel mapping
//! - `state`: the owned model (points, toggles, derived geometry)
//! - `interaction`: the pointer drag state machine
//! - `panel`: the embeddable egui widget
//! - `app`: standalone eframe shell and `run_geomprob` entry point
//! - `color_scheme`, `config`, `persistence`: theming, configuration and
//!   view-preference storage

pub mod app;
pub mod color_scheme;
pub mod config;
pub mod geometry;
pub mod interaction;
pub mod panel;
pub mod persistence;
pub mod state;
pub mod transform;

// Public re-exports for a compact external API
pub use app::{run_geomprob, GeomProbApp};
pub use color_scheme::{current_palette, ColorScheme, CustomColorScheme, Palette};
pub use config::{FeatureFlags, VizConfig};
pub use geometry::{
    clamp01, intersects_nearest_side, nearest_side, perp_bisector, PerpBisector, Side, UnitPoint,
};
pub use interaction::{hit_test, DragController, MARKER_RADIUS};
pub use panel::VizPanel;
pub use state::{parse_coordinate, Axis, Derived, PointRole, VizState};
pub use transform::CanvasTransform;
