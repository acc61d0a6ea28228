//! Example: Persistent view preferences
//!
//! What it demonstrates
//! - Pointing `VizConfig::prefs_path` at a JSON file so the theme and the
//!   circle-visibility toggles survive restarts. Point positions are never
//!   persisted.
//!
//! How to run
//! ```bash
//! cargo run --example saved_prefs
//! ```
//! Toggle the theme or hide a circle, close the window, and run again.

use geomprob::{run_geomprob, VizConfig};

fn main() -> eframe::Result<()> {
    env_logger::init();

    let cfg = VizConfig {
        prefs_path: Some(std::env::temp_dir().join("geomprob_prefs.json")),
        ..VizConfig::default()
    };
    run_geomprob(cfg)
}
