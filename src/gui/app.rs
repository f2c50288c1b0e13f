// src/gui/app.rs
use std::{error::Error, path::PathBuf};

use eframe::egui;

use crate::{
    config::{consts::APP_TITLE, state::ViewerState},
    data::{choices, ListingView, Summary},
    records::ListingTable,
    store,
};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(|_cc| Ok(Box::new(App::new(ViewerState::default())))),
    )?;
    Ok(())
}

pub struct App {
    pub state: ViewerState,

    // loaded full-record file; None until a load succeeds
    pub table: Option<ListingTable>,
    pub loaded_path: Option<PathBuf>,
    pub load_error: Option<String>,

    // current projection of `table` under `state.filters`
    pub row_ix: Vec<usize>,
    pub summary: Summary,

    // selector options, rebuilt on load
    pub companies: Vec<String>,
    pub locations: Vec<String>,
    pub categories: Vec<String>,

    pub status: String,
}

impl App {
    pub fn new(state: ViewerState) -> Self {
        let mut app = Self {
            state,
            table: None,
            loaded_path: None,
            load_error: None,
            row_ix: Vec::new(),
            summary: Summary::default(),
            companies: Vec::new(),
            locations: Vec::new(),
            categories: Vec::new(),
            status: s!("Idle"),
        };
        app.reload();
        app
    }

    /// (Re)read the newest full-record file and rebuild everything derived from it.
    pub fn reload(&mut self) {
        match store::load_latest(&self.state.data_dir) {
            Ok((path, table)) => {
                logf!("Load: {} rows from {}", table.len(), path.display());
                self.companies = choices(&table, |r| &r.company);
                self.locations = choices(&table, |r| &r.location);
                self.categories = choices(&table, |r| &r.category);
                self.state.filters.retain_valid(&table);

                self.status = format!("Loaded {}", file_label(&path));
                self.table = Some(table);
                self.loaded_path = Some(path);
                self.load_error = None;
            }
            Err(e) => {
                loge!("Load: {}", e);
                self.table = None;
                self.loaded_path = None;
                self.companies.clear();
                self.locations.clear();
                self.categories.clear();
                self.status = s!("No data");
                self.load_error = Some(e.to_string());
            }
        }
        self.rebuild_view();
    }

    /// Recompute the filtered rows and the counts shown above the table.
    pub fn rebuild_view(&mut self) {
        match self.table.as_ref() {
            Some(table) => {
                let view = ListingView::new(table, &self.state.filters);
                self.summary = view.summary();
                self.row_ix = view.row_ix;
            }
            None => {
                self.summary = Summary::default();
                self.row_ix.clear();
            }
        }
        logd!("View: {} row(s) after filters {:?}", self.row_ix.len(), self.state.filters);
    }

    #[inline]
    pub fn status<T: Into<String>>(&mut self, msg: T) {
        self.status = msg.into();
    }
}

fn file_label(path: &std::path::Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("filters")
            .resizable(false)
            .min_width(220.0)
            .show(ctx, |ui| {
                crate::gui::components::filter_panel::draw(ui, self);
            });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.label(self.status.as_str());
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(APP_TITLE);

            crate::gui::components::action_buttons::draw(ui, self);

            ui.separator();

            if let Some(err) = self.load_error.as_deref() {
                ui.colored_label(
                    ui.visuals().warn_fg_color,
                    "No data available. Please run the harvester first to collect job listings.",
                );
                ui.label("Run `harvest` in this directory, then press Refresh.");
                ui.small(err);
                return;
            }

            crate::gui::components::metrics::draw(ui, self);

            ui.separator();

            crate::gui::components::data_table::draw(ui, self);
        });
    }
}
