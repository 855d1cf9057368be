use clockwall_lib::time_picker::{PickerOutcome, TimePicker};
use eframe::egui;
use egui::{Align, Key, Layout, RichText};

use crate::clockface::ClockFace;

const FONT_SIZE: f32 = 14.0;

/// Shows the picker window while it is open. Returns the outcome on the frame it closes.
pub fn show_time_picker(ctx: &egui::Context, picker: &mut TimePicker) -> Option<PickerOutcome> {
    if !picker.is_open() {
        return None;
    }

    let mut outcome = None;

    egui::Window::new("Select a time")
        .collapsible(false)
        .resizable(false)
        .show(ctx, |ui| {
            ui.label(RichText::new("Use the clock to select a time.").size(FONT_SIZE));

            ui.add(ClockFace::new(picker.clock_mut()));

            // Rebuilt every frame, so it follows each drag and each toggle
            ui.label(RichText::new(picker.preview()).size(FONT_SIZE));

            let mut pm = picker.is_pm();
            if ui
                .checkbox(&mut pm, RichText::new("PM").size(FONT_SIZE))
                .changed()
            {
                picker.set_pm(pm);
            }

            ui.horizontal(|ui| {
                if ui
                    .button(RichText::new("Submit").size(FONT_SIZE))
                    .clicked()
                {
                    outcome = Some(picker.submit());
                }

                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    if ui
                        .button(RichText::new("Cancel").size(FONT_SIZE))
                        .clicked()
                    {
                        outcome = Some(picker.cancel());
                    }
                });
            });
        });

    if outcome.is_none() && ctx.input(|i| i.key_pressed(Key::Escape)) {
        outcome = Some(picker.cancel());
    }

    if let Some(outcome) = &outcome {
        log::debug!("Time picker closed: {outcome:?}");
    }

    outcome
}
