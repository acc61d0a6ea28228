//! Owned model state for the visualization.
//!
//! [`VizState`] holds the two named points, the display toggles, and the
//! derived geometry. All point mutations go through methods that clamp to
//! the unit square and then recompute the derived values, so the rest of
//! the crate only ever observes a consistent snapshot.

use crate::geometry::{
    self, nearest_side, perp_bisector, PerpBisector, Side, UnitPoint,
};

/// Which of the two fixed points is meant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointRole {
    Blue,
    Red,
}

impl PointRole {
    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            PointRole::Blue => "blue",
            PointRole::Red => "red",
        }
    }
}

/// A coordinate axis of a point, for text-entry updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
}

/// Geometry recomputed after every point mutation; never stored
/// independently of the points it was derived from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Derived {
    /// Euclidean distance between the two points.
    pub distance: f64,
    /// Side of the unit square nearest to the blue point.
    pub nearest: Side,
    /// Perpendicular bisector of the blue–red segment.
    pub bisector: PerpBisector,
    /// Whether the bisector crosses `nearest` within the square's bounds.
    pub intersects: bool,
}

impl Derived {
    fn compute(blue: UnitPoint, red: UnitPoint) -> Self {
        let bisector = perp_bisector(blue, red);
        let nearest = nearest_side(blue);
        Self {
            distance: blue.distance(red),
            nearest,
            intersects: bisector.intersects_side(nearest),
            bisector,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// VizState
// ─────────────────────────────────────────────────────────────────────────────

/// The complete mutable model: two points, display toggles, derived geometry.
///
/// Invariant: both points always lie inside [0,1]×[0,1].
#[derive(Debug, Clone, PartialEq)]
pub struct VizState {
    blue: UnitPoint,
    red: UnitPoint,
    /// Show the dashed circle around blue with radius = |blue - red|.
    pub show_distance_circle: bool,
    /// Show the circle inscribed in the square.
    pub show_inscribed: bool,
    derived: Derived,
}

impl Default for VizState {
    fn default() -> Self {
        Self::new()
    }
}

impl VizState {
    /// Default starting positions: blue (0.3, 0.4), red (0.7, 0.6).
    pub fn new() -> Self {
        let blue = UnitPoint::new(0.3, 0.4);
        let red = UnitPoint::new(0.7, 0.6);
        Self {
            blue,
            red,
            show_distance_circle: true,
            show_inscribed: true,
            derived: Derived::compute(blue, red),
        }
    }

    pub fn blue(&self) -> UnitPoint {
        self.blue
    }

    pub fn red(&self) -> UnitPoint {
        self.red
    }

    /// Current position of the point in `role`.
    pub fn point(&self, role: PointRole) -> UnitPoint {
        match role {
            PointRole::Blue => self.blue,
            PointRole::Red => self.red,
        }
    }

    /// The derived geometry matching the current point positions.
    pub fn derived(&self) -> &Derived {
        &self.derived
    }

    /// Move a point, clamping both coordinates to the unit square.
    pub fn set_point(&mut self, role: PointRole, p: UnitPoint) {
        let p = p.clamped();
        match role {
            PointRole::Blue => self.blue = p,
            PointRole::Red => self.red = p,
        }
        self.recompute();
    }

    /// Set a single coordinate, clamped to [0, 1].
    pub fn set_coordinate(&mut self, role: PointRole, axis: Axis, value: f64) {
        let mut p = self.point(role);
        match axis {
            Axis::X => p.x = value,
            Axis::Y => p.y = value,
        }
        self.set_point(role, p);
    }

    /// Apply a coordinate text entry.
    ///
    /// Parses a decimal string; non-parsable or non-finite input is
    /// rejected as a no-op (prior value retained). Parsed values are
    /// clamped to [0, 1]. Returns whether the input was accepted.
    pub fn apply_coordinate_text(&mut self, role: PointRole, axis: Axis, text: &str) -> bool {
        match parse_coordinate(text) {
            Some(value) => {
                self.set_coordinate(role, axis, value);
                true
            }
            None => false,
        }
    }

    fn recompute(&mut self) {
        self.derived = Derived::compute(self.blue, self.red);
    }
}

/// Parse a decimal coordinate string, clamped to [0, 1].
///
/// Returns `None` for anything that does not parse to a finite number.
pub fn parse_coordinate(text: &str) -> Option<f64> {
    let value: f64 = text.trim().parse().ok()?;
    if value.is_finite() {
        Some(geometry::clamp01(value))
    } else {
        None
    }
}
