// src/gui/components/data_table.rs
//
// Draws the filtered listings. Purely a view over `app.row_ix`.

use eframe::egui::{self, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::{config::consts::ROW_HEIGHT, gui::app::App, records::ListingRecord};

const HEADERS: [&str; 6] = ["Title", "Company", "Location", "Category", "Posted", "Apply"];
const WIDTHS: [f32; 6] = [300.0, 180.0, 180.0, 140.0, 90.0, 60.0];

pub fn draw(ui: &mut egui::Ui, app: &App) {
    let Some(table) = app.table.as_ref() else { return };

    if app.row_ix.is_empty() {
        ui.label("No positions found matching the selected filters.");
        return;
    }

    {
        let s = &mut ui.style_mut().spacing.scroll;
        s.floating = false;
        s.bar_width = 10.0;
        s.handle_min_length = 48.0;
    }

    let mut builder = TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .min_scrolled_height(0.0);
    for (i, w) in WIDTHS.iter().enumerate() {
        let col = Column::initial(*w).at_least(40.0).clip(true);
        builder = builder.column(if i + 1 == WIDTHS.len() { col.resizable(false) } else { col });
    }

    builder
        .header(24.0, |mut header| {
            for h in HEADERS {
                header.col(|ui| {
                    ui.label(RichText::new(h).strong());
                });
            }
        })
        .body(|body| {
            body.rows(ROW_HEIGHT, app.row_ix.len(), |mut row| {
                let Some(r) = app.row_ix.get(row.index()).and_then(|&ix| table.rows.get(ix)) else {
                    return;
                };
                for ci in 0..HEADERS.len() {
                    row.col(|ui| cell(ui, r, ci));
                }
            });
        });
}

fn cell(ui: &mut egui::Ui, r: &ListingRecord, ci: usize) {
    ui.style_mut().wrap_mode = Some(TextWrapMode::Truncate);
    match ci {
        0 => { ui.label(r.title.as_str()).on_hover_text(r.title.as_str()); }
        1 => { ui.label(r.company.as_str()); }
        2 => { ui.label(r.location.as_str()); }
        3 => { ui.label(r.category.as_str()); }
        4 => { ui.label(r.date_posted.as_str()); }
        _ => {
            if !r.application_url.is_empty() {
                ui.hyperlink_to("Apply", &r.application_url);
            }
        }
    }
}
