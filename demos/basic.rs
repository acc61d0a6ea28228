//! Example: Default visualization window
//!
//! What it demonstrates
//! - Launching the visualization with `run_geomprob()` and a default config.
//! - Dragging the two points, editing coordinates, toggling the circles and
//!   the light/dark theme.
//!
//! How to run
//! ```bash
//! cargo run --example basic
//! ```
//! You should see the unit square with both points at their default
//! positions and the perpendicular bisector updating as you drag.

use geomprob::{run_geomprob, VizConfig};

fn main() -> eframe::Result<()> {
    env_logger::init();
    run_geomprob(VizConfig::default())
}
