// src/gui/components/tabs.rs
//
// Result tabs. Counts come from the last finished run.

use eframe::egui;
use crate::gui::app::{App, ResultTab};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        let tabs = [
            (ResultTab::Filed, format!("Filed ({})", app.results.filed.len())),
            (ResultTab::Unfiled, format!("No case filed ({})", app.results.unfiled.len())),
            (ResultTab::Log, s!("Log")),
        ];

        for (tab, title) in tabs {
            let selected = app.tab == tab;
            if ui.selectable_label(selected, title).clicked() && !selected {
                logd!("UI: Tab switch {:?} → {:?}", app.tab, tab);
                app.tab = tab;
            }
        }
    });
}
