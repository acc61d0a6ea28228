//! View-preference persistence: save and load to/from JSON files.
//!
//! This module provides a serializable mirror type for the few pieces of
//! view state worth keeping across sessions: the color scheme and the two
//! circle-visibility toggles. Point positions are deliberately not
//! persisted.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::color_scheme::ColorScheme;
use crate::state::VizState;

// ---------- Serializable mirror type ----------

/// Serializable snapshot of the user-facing view preferences.
///
/// The color scheme is stored by label; only built-in schemes are restored
/// (a custom scheme cannot be reconstructed from its label, so loading one
/// leaves the current scheme untouched).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VizPrefsSerde {
    pub color_scheme: String,
    pub show_distance_circle: bool,
    pub show_inscribed: bool,
}

impl VizPrefsSerde {
    /// Snapshot the current preferences.
    pub fn capture(scheme: &ColorScheme, state: &VizState) -> Self {
        Self {
            color_scheme: scheme.label(),
            show_distance_circle: state.show_distance_circle,
            show_inscribed: state.show_inscribed,
        }
    }

    /// Apply stored preferences to the live scheme and state.
    pub fn apply_to(&self, scheme: &mut ColorScheme, state: &mut VizState) {
        if let Some(known) = ColorScheme::all()
            .iter()
            .find(|s| s.label() == self.color_scheme)
        {
            *scheme = known.clone();
        }
        state.show_distance_circle = self.show_distance_circle;
        state.show_inscribed = self.show_inscribed;
    }
}

// ---------- JSON round-trip ----------

/// Serialize preferences to pretty JSON.
pub fn prefs_to_json(prefs: &VizPrefsSerde) -> Result<String, String> {
    serde_json::to_string_pretty(prefs).map_err(|e| e.to_string())
}

/// Parse preferences from JSON.
pub fn prefs_from_json(txt: &str) -> Result<VizPrefsSerde, String> {
    serde_json::from_str(txt).map_err(|e| e.to_string())
}

/// Write preferences to a JSON file.
pub fn save_prefs_to_path(prefs: &VizPrefsSerde, path: &Path) -> Result<(), String> {
    let txt = prefs_to_json(prefs)?;
    std::fs::write(path, txt).map_err(|e| e.to_string())
}

/// Read preferences from a JSON file.
pub fn load_prefs_from_path(path: &Path) -> Result<VizPrefsSerde, String> {
    let txt = std::fs::read_to_string(path).map_err(|e| e.to_string())?;
    prefs_from_json(&txt)
}
