//! The painter canvas: geometry rendering and pointer handling.
//!
//! Drawing happens in screen space through a [`CanvasTransform`] built from
//! the allocated widget rectangle each frame. The canvas response feeds the
//! drag state machine; everything else is painting.

use eframe::egui::{self, Pos2, Stroke};

use crate::color_scheme::current_palette;
use crate::geometry::{Side, UnitPoint};
use crate::interaction::{self, MARKER_RADIUS};
use crate::state::PointRole;
use crate::transform::CanvasTransform;

use super::VizPanel;

/// Dash pattern used by the distance circle and the bisector.
const DASH_LENGTH: f32 = 4.0;
const GAP_LENGTH: f32 = 4.0;

impl VizPanel {
    /// Allocate the canvas, run the drag state machine, and paint.
    pub(super) fn canvas_ui(&mut self, ui: &mut egui::Ui) {
        let desired = egui::Vec2::splat(self.canvas_size);
        let (response, painter) = ui.allocate_painter(desired, egui::Sense::drag());
        let transform = CanvasTransform::new(response.rect, self.canvas_padding);

        // ── Pointer state machine ────────────────────────────────────────
        if response.drag_started() {
            // Hit-test against the position where the button went down, not
            // where the drag threshold was crossed.
            let pos = ui
                .input(|i| i.pointer.press_origin())
                .or_else(|| response.interact_pointer_pos());
            if let Some(pos) = pos {
                self.drag.pointer_down(pos, &self.state, &transform);
            }
        }
        if response.dragged() {
            if let Some(pos) = response.interact_pointer_pos() {
                self.drag.pointer_move(pos, &mut self.state, &transform);
            }
        }
        if response.drag_stopped() {
            self.drag.pointer_up();
        }

        let hovering_marker = response
            .hover_pos()
            .and_then(|pos| interaction::hit_test(pos, &self.state, &transform))
            .is_some();
        if self.drag.active().is_some() {
            ui.ctx().set_cursor_icon(egui::CursorIcon::Grabbing);
        } else if hovering_marker {
            ui.ctx().set_cursor_icon(egui::CursorIcon::Grab);
        }

        self.paint_canvas(&painter, &transform);
    }

    fn paint_canvas(&self, painter: &egui::Painter, transform: &CanvasTransform) {
        let palette = current_palette();
        let derived = *self.state.derived();
        let square = transform.square_rect();
        let scale = transform.content_scale();
        let center = transform.to_screen(UnitPoint::new(0.5, 0.5));

        // Canvas surface behind the construction.
        painter.rect_filled(
            square.expand(self.canvas_padding),
            egui::CornerRadius::same(8),
            palette.surface,
        );

        // Square border and center point.
        painter.rect_stroke(
            square,
            egui::CornerRadius::ZERO,
            Stroke::new(2.0, palette.text),
            egui::StrokeKind::Middle,
        );
        painter.circle_filled(center, 3.0, palette.text);

        // Inscribed circle.
        if self.state.show_inscribed {
            painter.circle_stroke(center, scale / 2.0, Stroke::new(1.0, palette.muted));
        }

        // Diagonals from the center to the two bottom corners.
        for corner in [UnitPoint::new(0.0, 0.0), UnitPoint::new(1.0, 0.0)] {
            painter.line_segment(
                [center, transform.to_screen(corner)],
                Stroke::new(1.5, palette.subtle),
            );
        }

        let blue_px = transform.to_screen(self.state.blue());
        let red_px = transform.to_screen(self.state.red());

        // Dashed distance circle around blue.
        if self.state.show_distance_circle {
            dashed_circle(
                painter,
                blue_px,
                (derived.distance * f64::from(scale)) as f32,
                Stroke::new(1.0, palette.iris),
            );
        }

        // Nearest-side highlight.
        let (a, b) = side_endpoints(derived.nearest);
        painter.line_segment(
            [transform.to_screen(a), transform.to_screen(b)],
            Stroke::new(3.0, palette.pine),
        );

        // Perpendicular bisector, clipped to the square, colored by the
        // intersection result. Skipped entirely when degenerate.
        if let Some([p1, p2]) = derived.bisector.span(2.0) {
            let color = if derived.intersects {
                palette.pine
            } else {
                palette.muted
            };
            let clipped = painter.with_clip_rect(square);
            clipped.extend(egui::Shape::dashed_line(
                &[transform.to_screen(p1), transform.to_screen(p2)],
                Stroke::new(1.0, color),
                DASH_LENGTH,
                GAP_LENGTH,
            ));
        }

        // Markers, blue below red so red wins visually (and in hit-testing).
        self.paint_marker(painter, blue_px, palette.iris, PointRole::Blue);
        self.paint_marker(painter, red_px, palette.love, PointRole::Red);
    }

    fn paint_marker(
        &self,
        painter: &egui::Painter,
        pos: Pos2,
        color: egui::Color32,
        role: PointRole,
    ) {
        painter.circle_filled(pos, MARKER_RADIUS, color);
        if self.drag.active() == Some(role) {
            let palette = current_palette();
            painter.circle_stroke(pos, MARKER_RADIUS + 2.0, Stroke::new(1.5, palette.text));
        }
    }
}

/// Endpoints of a square side in unit coordinates.
fn side_endpoints(side: Side) -> (UnitPoint, UnitPoint) {
    match side {
        Side::Left => (UnitPoint::new(0.0, 0.0), UnitPoint::new(0.0, 1.0)),
        Side::Right => (UnitPoint::new(1.0, 0.0), UnitPoint::new(1.0, 1.0)),
        Side::Bottom => (UnitPoint::new(0.0, 0.0), UnitPoint::new(1.0, 0.0)),
        Side::Top => (UnitPoint::new(0.0, 1.0), UnitPoint::new(1.0, 1.0)),
    }
}

/// Approximate a dashed circle with a dashed closed polyline.
///
/// egui has no dashed-circle primitive; 72 segments are indistinguishable
/// from a true circle at the radii used here.
fn dashed_circle(painter: &egui::Painter, center: Pos2, radius: f32, stroke: Stroke) {
    const SEGMENTS: usize = 72;
    if radius <= 0.0 {
        return;
    }
    let mut points = Vec::with_capacity(SEGMENTS + 1);
    for i in 0..=SEGMENTS {
        let angle = i as f32 / SEGMENTS as f32 * std::f32::consts::TAU;
        points.push(center + radius * egui::Vec2::angled(angle));
    }
    painter.extend(egui::Shape::dashed_line(
        &points,
        stroke,
        DASH_LENGTH,
        GAP_LENGTH,
    ));
}
