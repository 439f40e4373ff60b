// src/gui/components/status_bar.rs

use eframe::egui;
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let (status, fraction, running) = app
        .shared
        .lock()
        .map(|s| (s.status.clone(), s.fraction, s.running))
        .unwrap_or_else(|_| (s!("Status unavailable"), 0.0, false));

    ui.horizontal(|ui| {
        ui.label(status);
        if running || fraction > 0.0 {
            ui.add(egui::ProgressBar::new(fraction).show_percentage().desired_width(220.0));
        }
    });
}
