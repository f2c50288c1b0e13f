// src/gui/actions/copy.rs
use eframe::egui;
use crate::{gui::app::App, records::ListingRecord, store};

pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    if app.row_ix.is_empty() {
        app.status("Nothing to copy");
        logd!("Copy: Clicked, but there's nothing to copy");
        return;
    }

    let txt = {
        let Some(table) = app.table.as_ref() else {
            app.status("Nothing to copy (no data loaded)");
            return;
        };

        // Clipboard path: small clone of just the visible rows, in display order.
        let rows: Vec<ListingRecord> = app
            .row_ix
            .iter()
            .filter_map(|&ix| table.rows.get(ix).cloned())
            .collect();

        match store::to_csv_string(&rows) {
            Ok(t) => t,
            Err(e) => {
                loge!("Copy: {}", e);
                app.status(format!("Copy failed: {}", e));
                return;
            }
        }
    };

    logf!("Copy: {} rows", app.row_ix.len());
    ui_ctx.copy_text(txt);
    app.status(format!("Copied {} rows to clipboard", app.row_ix.len()));
}
