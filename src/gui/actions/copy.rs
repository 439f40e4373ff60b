// src/gui/actions/copy.rs
use eframe::egui;

use crate::{csv::rows_to_string, gui::app::App};

/// Copy the visible result table (tab-separated, with headers) to the clipboard.
pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    let (headers, rows) = app.current_table();
    if rows.is_empty() {
        app.status("Nothing to copy");
        logd!("Copy: Clicked, but there's nothing to copy");
        return;
    }

    logf!("Copy: tab={:?}, rows={}", app.tab, rows.len());
    let txt = rows_to_string(Some(headers.as_slice()), &rows, '\t');
    ui_ctx.copy_text(txt);
    app.status("Copied to clipboard");
}
