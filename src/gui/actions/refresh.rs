// src/gui/actions/refresh.rs
use crate::gui::app::App;

/// Re-scan the data directory; picks up a newer file if the harvester ran since.
pub fn refresh(app: &mut App) {
    let before = app.loaded_path.clone();
    app.reload();
    if app.table.is_some() && app.loaded_path == before {
        app.status("Refreshed (no newer file)");
    }
}
