use clockwall_lib::main_window::MainWindowState;
use eframe::egui;
use egui::{Align2, Color32, RichText};

use crate::timepicker::show_time_picker;
use crate::wall_view::show_clock_wall;
use crate::zone_picker::zone_picker;

pub const TITLE: &str = "Time Zone Clock Wall";

const SUBTITLE_SIZE: f32 = 20.0;

pub struct ClockWallApp {
    state: MainWindowState,
    main_search: String,
    new_search: String,
    error: Option<String>,
}

impl ClockWallApp {
    pub fn new(state: MainWindowState) -> Self {
        Self {
            state,
            main_search: String::new(),
            new_search: String::new(),
            error: None,
        }
    }

    fn report(&mut self, error: impl std::fmt::Display) {
        let message = error.to_string();
        log::warn!("{message}");
        self.error = Some(message);
    }

    fn show_selection(&mut self, ui: &mut egui::Ui) {
        let mut add_clicked = false;

        egui::Grid::new("zone_selection")
            .num_columns(3)
            .spacing([5.0, 5.0])
            .show(ui, |ui| {
                ui.label(RichText::new("Select main time zone:").size(SUBTITLE_SIZE));
                if let Some(zone) = zone_picker(
                    ui,
                    "main_zone",
                    &self.state.zones,
                    self.state.main_zone(),
                    &mut self.main_search,
                ) {
                    self.state.change_main_zone(zone);
                }
                if ui
                    .button(RichText::new("Click to select time").size(SUBTITLE_SIZE))
                    .clicked()
                {
                    self.state.open_picker();
                }
                ui.end_row();

                ui.label(RichText::new("Select new time zone:").size(SUBTITLE_SIZE));
                if let Some(zone) = zone_picker(
                    ui,
                    "new_zone",
                    &self.state.zones,
                    self.state.new_zone(),
                    &mut self.new_search,
                ) {
                    self.state.set_new_zone(zone);
                }
                add_clicked = ui
                    .button(RichText::new("Add to Clock Wall").size(SUBTITLE_SIZE))
                    .clicked();
                ui.end_row();
            });

        if add_clicked {
            match self.state.add_clock() {
                // The grid picks the new clock up on the next frame
                Ok(true) => ui.ctx().request_repaint(),
                Ok(false) => {}
                Err(e) => self.report(e),
            }
        }
    }

    fn show_error(&mut self, ctx: &egui::Context) {
        let Some(message) = &self.error else {
            return;
        };
        let mut dismissed = false;
        egui::Window::new("ERROR")
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.colored_label(Color32::RED, message);
                if ui.button("OK").clicked() {
                    dismissed = true;
                }
            });
        if dismissed {
            self.error = None;
        }
    }
}

impl eframe::App for ClockWallApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.add_space(5.0);
            ui.label(RichText::new(TITLE).size(26.0).strong());
            ui.add_space(5.0);
            self.show_selection(ui);
            ui.add_space(5.0);
            ui.label(RichText::new(self.state.main_label()).size(16.0).strong());
            ui.add_space(5.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    if show_clock_wall(ui, &mut self.state.wall) {
                        ui.ctx().request_repaint();
                    }
                });
        });

        if let Some(outcome) = show_time_picker(ctx, &mut self.state.picker) {
            let today = self.state.today();
            if let Err(e) = self.state.on_picker_closed(outcome, today) {
                self.report(e);
            }
        }

        self.show_error(ctx);
    }
}
