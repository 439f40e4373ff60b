// src/gui/components/data_table.rs
//
// Read-only view of the selected result partition.

use eframe::egui::{self, RichText};
use egui_extras::{Column, TableBuilder};
use crate::gui::app::App;

const ROW_H: f32 = 20.0;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let (headers, rows) = app.current_table();
    if rows.is_empty() {
        ui.label(RichText::new("No rows yet").weak());
        return;
    }

    let cols = headers.len();
    let mut table = TableBuilder::new(ui)
        .striped(true)
        .min_scrolled_height(0.0)
        .id_salt(("results", app.tab as u8));
    for ci in 0..cols {
        let col = if ci + 1 == cols {
            Column::remainder().clip(true)
        } else {
            Column::initial(if ci == 0 { 200.0 } else { 110.0 }).resizable(true).clip(true)
        };
        table = table.column(col);
    }

    table
        .header(ROW_H, |mut header| {
            for h in &headers {
                header.col(|ui| {
                    ui.strong(h);
                });
            }
        })
        .body(|body| {
            body.rows(ROW_H, rows.len(), |mut row| {
                let Some(r) = rows.get(row.index()) else { return };
                for cell in r {
                    row.col(|ui| {
                        ui.label(cell);
                    });
                }
            });
        });
}
