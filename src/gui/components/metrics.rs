// src/gui/components/metrics.rs
use eframe::egui::{self, RichText};
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &App) {
    let s = app.summary;
    ui.columns(4, |cols| {
        metric(&mut cols[0], "Total Positions", s.total);
        metric(&mut cols[1], "Companies", s.companies);
        metric(&mut cols[2], "Locations", s.locations);
        metric(&mut cols[3], "Categories", s.categories);
    });
}

fn metric(ui: &mut egui::Ui, label: &str, n: usize) {
    ui.vertical(|ui| {
        ui.label(RichText::new(label).weak());
        ui.label(RichText::new(n.to_string()).heading().strong());
    });
}
