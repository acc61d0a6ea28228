//! Mapping between the normalized unit square and screen pixels.
//!
//! [`CanvasTransform`] is built per frame from the canvas widget's allocated
//! rectangle. The square content is inset by a fixed padding; normalized y
//! increases upward while screen y increases downward, so the vertical axis
//! is flipped. `to_screen` and `to_unit` form an exact inverse pair and do
//! no clamping — out-of-range inputs map to out-of-range outputs, and the
//! interaction layer decides what to do with them.

use egui::{Pos2, Rect};

use crate::geometry::UnitPoint;

/// Pure conversion between unit-square coordinates and canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasTransform {
    rect: Rect,
    padding: f32,
}

impl CanvasTransform {
    /// Build a transform for a canvas occupying `rect` with the square
    /// content inset by `padding` pixels on every edge.
    pub fn new(rect: Rect, padding: f32) -> Self {
        Self { rect, padding }
    }

    /// Side length of the square content in pixels.
    pub fn content_scale(&self) -> f32 {
        self.rect.width().min(self.rect.height()) - 2.0 * self.padding
    }

    /// The square's bounding rectangle in screen space.
    pub fn square_rect(&self) -> Rect {
        Rect::from_min_max(
            self.to_screen(UnitPoint::new(0.0, 1.0)),
            self.to_screen(UnitPoint::new(1.0, 0.0)),
        )
    }

    /// Map a normalized point to screen pixels.
    pub fn to_screen(&self, p: UnitPoint) -> Pos2 {
        let scale = self.content_scale();
        Pos2::new(
            self.rect.min.x + self.padding + p.x as f32 * scale,
            self.rect.min.y + self.padding + (1.0 - p.y) as f32 * scale,
        )
    }

    /// Exact inverse of [`to_screen`](Self::to_screen).
    pub fn to_unit(&self, pos: Pos2) -> UnitPoint {
        let scale = self.content_scale();
        UnitPoint::new(
            f64::from((pos.x - self.rect.min.x - self.padding) / scale),
            1.0 - f64::from((pos.y - self.rect.min.y - self.padding) / scale),
        )
    }
}
