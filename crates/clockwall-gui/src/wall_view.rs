use clockwall_lib::clock_wall::ClockWall;
use clockwall_lib::clock_widget::{ClockWidget, MIN_CLOCK_SIZE};
use eframe::egui;
use egui::{Color32, RichText};

use crate::clockface::clock_view;

const CELL_SPACING: f32 = 5.0;
const FONT_SIZE: f32 = 18.0;
const WALL_COLOR: Color32 = Color32::LIGHT_GRAY;

/// One cell of the wall. Returns whether its remove button was clicked.
fn show_clock_cell(ui: &mut egui::Ui, widget: &ClockWidget, width: f32) -> bool {
    ui.vertical(|ui| {
        ui.set_width(width);
        clock_view(ui, widget.clock()).on_hover_text(widget.zone().name());
        ui.add(
            egui::Label::new(RichText::new(widget.zone_label()).size(FONT_SIZE).strong())
                .wrap(),
        );
        ui.label(RichText::new(widget.time_label()).size(FONT_SIZE));
        ui.button(RichText::new("Remove").size(FONT_SIZE)).clicked()
    })
    .inner
}

/// Lays the clocks out in rows of `wall.columns()` and applies the remove requests
/// once the grid is drawn. Returns whether a clock was removed.
pub fn show_clock_wall(ui: &mut egui::Ui, wall: &mut ClockWall) -> bool {
    if wall.is_empty() {
        ui.label("Add a time zone to put a clock on the wall.");
        return false;
    }

    let columns = wall.columns();
    let cell_width = ((ui.available_width() - CELL_SPACING * (columns - 1) as f32)
        / columns as f32)
        .max(MIN_CLOCK_SIZE);

    let mut requests = Vec::new();

    egui::Frame::new().fill(WALL_COLOR).show(ui, |ui| {
        egui::Grid::new("clock_wall")
            .spacing([CELL_SPACING, CELL_SPACING])
            .show(ui, |ui| {
                for (index, (id, widget)) in wall.widgets_mut().enumerate() {
                    if index > 0 && index % columns == 0 {
                        ui.end_row();
                    }
                    widget.on_resize(cell_width, cell_width);
                    if show_clock_cell(ui, widget, cell_width) {
                        requests.push((id.to_string(), widget.remove()));
                    }
                }
            });
    });

    for (id, signal) in requests {
        wall.signal(&id, signal);
    }
    wall.dispatch()
}
