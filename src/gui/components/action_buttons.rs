// src/gui/components/action_buttons.rs
use eframe::egui;
use crate::gui::{actions, app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        if ui.button("Refresh Data").clicked() {
            actions::refresh(app);
        }

        let has_rows = !app.row_ix.is_empty();
        if ui.add_enabled(has_rows, egui::Button::new("Copy CSV")).clicked() {
            actions::copy(app, ui.ctx());
        }

        if let Some(path) = app.loaded_path.as_ref() {
            ui.separator();
            ui.weak(path.display().to_string());
        }
    });
}
