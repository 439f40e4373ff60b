// src/gui/components/log_panel.rs

use eframe::egui;
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let lines = app.shared.lock().map(|s| s.log.clone()).unwrap_or_default();
    egui::ScrollArea::vertical()
        .id_salt("log_scroll")
        .stick_to_bottom(true)
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for line in &lines {
                ui.label(egui::RichText::new(line).monospace());
            }
        });
}
