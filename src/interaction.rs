// src/interaction.rs
// Pointer drag state machine for the two markers.
// Kept free of widget code so the transitions can be tested headlessly.

use egui::Pos2;

use crate::state::{PointRole, VizState};
use crate::transform::CanvasTransform;

/// Radius of the rendered point markers, in pixels. Doubles as the hit
/// radius for starting a drag.
pub const MARKER_RADIUS: f32 = 8.0;

/// Which marker (if any) the pointer position lands on.
///
/// Red is drawn above blue, so it wins when the markers overlap.
pub fn hit_test(pos: Pos2, state: &VizState, transform: &CanvasTransform) -> Option<PointRole> {
    if transform.to_screen(state.red()).distance(pos) <= MARKER_RADIUS {
        return Some(PointRole::Red);
    }
    if transform.to_screen(state.blue()).distance(pos) <= MARKER_RADIUS {
        return Some(PointRole::Blue);
    }
    None
}

/// Three-state drag machine: idle, dragging blue, dragging red.
///
/// Transitions:
/// - idle → dragging X on pointer-down over X's marker
/// - dragging X → dragging X on pointer-move (writes clamped coordinates)
/// - dragging X → idle on pointer-up, anywhere
///
/// At most one point can be dragged at a time by construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DragController {
    active: Option<PointRole>,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    /// The point currently being dragged, if any.
    pub fn active(&self) -> Option<PointRole> {
        self.active
    }

    /// Pointer-down: enter dragging if the position hits a marker.
    pub fn pointer_down(&mut self, pos: Pos2, state: &VizState, transform: &CanvasTransform) {
        self.active = hit_test(pos, state, transform);
        if let Some(role) = self.active {
            log::debug!("drag start: {}", role.label());
        }
    }

    /// Pointer-move: while dragging, convert to unit space, clamp each
    /// coordinate independently, and write into the dragged point.
    pub fn pointer_move(&mut self, pos: Pos2, state: &mut VizState, transform: &CanvasTransform) {
        if let Some(role) = self.active {
            state.set_point(role, transform.to_unit(pos));
        }
    }

    /// Pointer-up: return to idle. Valid anywhere, not just over the marker.
    pub fn pointer_up(&mut self) {
        if let Some(role) = self.active.take() {
            log::debug!("drag end: {}", role.label());
        }
    }
}
