// src/gui/components/run_form.rs

use eframe::egui;
use crate::{
    config::options::ExportFormat,
    gui::{actions, app::App},
    portal::County,
};

#[derive(Clone, Copy, PartialEq, Eq)]
enum UiFormat { Csv, Tsv }

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let running = app.is_running();

    egui::Grid::new("run_form").num_columns(2).spacing([8.0, 6.0]).show(ui, |ui| {
        ui.label("Input:");
        ui.add(egui::TextEdit::singleline(&mut app.input_text)
            .hint_text("people.xlsx / .csv / .tsv")
            .desired_width(360.0)
            .font(egui::TextStyle::Monospace));
        ui.end_row();

        ui.label("County:");
        let before = app.opts.county;
        egui::ComboBox::from_id_salt("county")
            .selected_text(app.opts.county.name())
            .show_ui(ui, |ui| {
                for c in County::ALL {
                    ui.selectable_value(&mut app.opts.county, c, c.name());
                }
            });
        if app.opts.county != before {
            logf!("UI: County → {}", app.opts.county);
        }
        ui.end_row();

        ui.label("Output:");
        if ui
            .add(egui::TextEdit::singleline(&mut app.out_dir_text)
                .desired_width(360.0)
                .font(egui::TextStyle::Monospace))
            .changed()
        {
            logd!("UI: out_dir_text changed → {}", app.out_dir_text);
        }
        ui.end_row();
    });

    let export = &mut app.opts.export;

    // --- Format + Include headers + headed browser ---
    let prev_fmt = match export.format {
        ExportFormat::Csv => UiFormat::Csv,
        ExportFormat::Tsv => UiFormat::Tsv,
    };
    let mut fmt = prev_fmt;

    ui.horizontal(|ui| {
        ui.label("Format:");
        ui.selectable_value(&mut fmt, UiFormat::Csv, "CSV");
        ui.selectable_value(&mut fmt, UiFormat::Tsv, "TSV");

        let before_headers = export.include_headers;
        ui.checkbox(&mut export.include_headers, "Include headers");
        if export.include_headers != before_headers {
            logf!("UI: Include_headers → {}", export.include_headers);
        }

        let mut show_browser = !app.opts.browser.headless;
        if ui.checkbox(&mut show_browser, "Show browser").changed() {
            app.opts.browser.headless = !show_browser;
            logf!("UI: headless → {}", app.opts.browser.headless);
        }
    });

    if fmt != prev_fmt {
        app.opts.export.format = match fmt {
            UiFormat::Csv => ExportFormat::Csv,
            UiFormat::Tsv => ExportFormat::Tsv,
        };
        logf!("UI: Export format → {:?}", app.opts.export.format);
    }

    // --- Actions ---
    ui.horizontal(|ui| {
        let run = ui.add_enabled(!running, egui::Button::new("Run"));
        if run.clicked() {
            actions::run(app, ui.ctx());
        }
        if ui.button("Copy").clicked() {
            let ctx = ui.ctx().clone();
            actions::copy(app, &ctx);
        }
        if running {
            ui.add(egui::Spinner::new());
        }
    });
}
