//! The controls column: coordinate inputs, distance readout, toggle
//! buttons and status text.

use eframe::egui::{self, RichText};

use crate::color_scheme::current_palette;
use crate::state::{Axis, PointRole, VizState};

use super::VizPanel;

/// Buffer index for a (role, axis) coordinate field.
pub(super) fn field_index(role: PointRole, axis: Axis) -> usize {
    let point = match role {
        PointRole::Blue => 0,
        PointRole::Red => 1,
    };
    let coord = match axis {
        Axis::X => 0,
        Axis::Y => 1,
    };
    point * 2 + coord
}

/// Current model value behind a buffer index.
pub(super) fn field_value(state: &VizState, index: usize) -> f64 {
    let point = if index < 2 { state.blue() } else { state.red() };
    if index % 2 == 0 {
        point.x
    } else {
        point.y
    }
}

/// Coordinates are displayed with three decimals, matching the input step.
pub(super) fn format_coordinate(value: f64) -> String {
    format!("{value:.3}")
}

impl VizPanel {
    pub(super) fn controls_ui(&mut self, ui: &mut egui::Ui) {
        let palette = current_palette();
        ui.spacing_mut().item_spacing.y = 8.0;

        // ── Coordinates ──────────────────────────────────────────────────
        if self.features.coordinate_inputs {
            self.coordinate_row(ui, PointRole::Blue);
            self.coordinate_row(ui, PointRole::Red);
        }

        if self.features.distance_readout {
            let distance = self.state.derived().distance;
            ui.label(
                RichText::new(format!("Distance: {}", format_coordinate(distance)))
                    .color(palette.subtle)
                    .size(13.0),
            );
        }

        // ── Visibility toggles ───────────────────────────────────────────
        if self.features.toggle_buttons {
            ui.add_space(8.0);
            let text_on_accent = if self.scheme.is_dark() {
                palette.base
            } else {
                palette.surface
            };

            let show = self.state.show_distance_circle;
            let label = if show { "Hide Circle" } else { "Show Circle" };
            let button = egui::Button::new(RichText::new(label).color(text_on_accent))
                .fill(palette.rose);
            if ui.add(button).clicked() {
                self.state.show_distance_circle = !show;
                self.prefs_dirty = true;
            }

            let show = self.state.show_inscribed;
            let label = if show {
                "Hide Inscribed Circle"
            } else {
                "Show Inscribed Circle"
            };
            let button = egui::Button::new(RichText::new(label).color(text_on_accent))
                .fill(palette.pine);
            if ui.add(button).clicked() {
                self.state.show_inscribed = !show;
                self.prefs_dirty = true;
            }
        }

        // ── Status ───────────────────────────────────────────────────────
        if self.features.status_line {
            ui.add_space(8.0);
            let intersects = self.state.derived().intersects;
            let (message, color) = if intersects {
                (
                    "The perpendicular bisector intersects the closest side! \u{2713}",
                    palette.pine,
                )
            } else {
                (
                    "The perpendicular bisector does not intersect the closest side \u{2717}",
                    palette.love,
                )
            };
            ui.label(RichText::new(message).color(color).size(13.0));
        }

        if self.features.caption {
            ui.label(
                RichText::new(
                    "The circle shows all possible positions of the red point \
                     that would create the same perpendicular bisector angle",
                )
                .color(palette.subtle)
                .size(11.0),
            );
        }
    }

    /// One row per point: color swatch plus x/y inputs.
    fn coordinate_row(&mut self, ui: &mut egui::Ui, role: PointRole) {
        let palette = current_palette();
        let swatch_color = match role {
            PointRole::Blue => palette.iris,
            PointRole::Red => palette.love,
        };

        ui.horizontal(|ui| {
            let (rect, _) =
                ui.allocate_exact_size(egui::vec2(14.0, 14.0), egui::Sense::hover());
            ui.painter().circle_filled(rect.center(), 7.0, swatch_color);

            self.coordinate_edit(ui, role, Axis::X, "x:");
            self.coordinate_edit(ui, role, Axis::Y, "y:");
        });
    }

    /// A single labelled coordinate input, committed on Enter or focus
    /// loss. Rejected input snaps back to the current model value.
    fn coordinate_edit(&mut self, ui: &mut egui::Ui, role: PointRole, axis: Axis, label: &str) {
        ui.label(label);
        let index = field_index(role, axis);
        let response = ui.add(
            egui::TextEdit::singleline(&mut self.coord_buffers[index]).desired_width(56.0),
        );
        if response.lost_focus() {
            let text = self.coord_buffers[index].clone();
            self.state.apply_coordinate_text(role, axis, &text);
            self.coord_buffers[index] = format_coordinate(field_value(&self.state, index));
        } else if !response.has_focus() {
            // Keep the display in sync while the field is not being edited
            // (e.g. while the point is dragged).
            self.coord_buffers[index] = format_coordinate(field_value(&self.state, index));
        }
    }
}
