use chrono_tz::Tz;
use clockwall_lib::zones::{display_name, ZoneDirectory};
use eframe::{egui, egui::PopupCloseBehavior};

/// Drop-down list of every zone with a search field on top.
///
/// Returns the zone the user clicked, if any. `search` keeps the filter between frames.
pub fn zone_picker(
    ui: &mut egui::Ui,
    id_salt: &str,
    zones: &ZoneDirectory,
    selected: Tz,
    search: &mut String,
) -> Option<Tz> {
    let mut picked = None;

    egui::ComboBox::from_id_salt(id_salt)
        .selected_text(egui::RichText::new(display_name(selected)).size(18.0))
        .width(320.0)
        .close_behavior(PopupCloseBehavior::CloseOnClickOutside)
        .show_ui(ui, |ui| {
            ui.set_max_width(360.0);

            let edit_id = ui.make_persistent_id(format!("{id_salt}_search"));
            ui.add(
                egui::TextEdit::singleline(&mut *search)
                    .hint_text("Search...")
                    .id(edit_id),
            );

            // Focus the search field when the list opens
            if ui.memory(|m| m.focused().is_none()) {
                ui.memory_mut(|m| m.request_focus(edit_id));
            }

            ui.separator();

            for entry in zones.search(search.as_str()) {
                if ui
                    .selectable_label(entry.zone == selected, &entry.display_name)
                    .clicked()
                {
                    picked = Some(entry.zone);
                    ui.close();
                }
            }
        });

    if let Some(zone) = picked {
        log::debug!("Picked {} in {id_salt}", zone.name());
        search.clear();
    }

    picked
}
