// src/gui/components/filter_panel.rs
//
// Left sidebar: search box plus the three exact-match selectors.
// Any change rebuilds the view immediately.

use eframe::egui;
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Filters");
    ui.add_space(4.0);

    let mut changed = false;

    ui.label("Search");
    let search = egui::TextEdit::singleline(&mut app.state.filters.search)
        .hint_text("title, company or location");
    changed |= ui.add(search).changed();

    ui.add_space(6.0);
    changed |= selector(ui, "Company", &mut app.state.filters.company, &app.companies);
    changed |= selector(ui, "Location", &mut app.state.filters.location, &app.locations);
    changed |= selector(ui, "Category", &mut app.state.filters.category, &app.categories);

    ui.add_space(6.0);
    if ui.button("Clear filters").clicked() {
        app.state.filters = Default::default();
        changed = true;
    }

    if changed {
        app.rebuild_view();
        logd!("UI: Filters changed → {:?}", app.state.filters);
    }
}

fn selector(ui: &mut egui::Ui, label: &str, value: &mut String, options: &[String]) -> bool {
    let before = value.clone();
    ui.label(label);
    egui::ComboBox::from_id_salt(label)
        .width(ui.available_width())
        .selected_text(value.as_str())
        .show_ui(ui, |ui| {
            for opt in options {
                ui.selectable_value(value, opt.clone(), opt.as_str());
            }
        });
    *value != before
}
