// src/gui/app.rs
use std::{
    error::Error,
    sync::{Arc, Mutex},
};

use eframe::egui;

use crate::{
    config::options::RunOptions,
    report::{Partitions, FILED_HEADERS, UNFILED_HEADERS},
};

use super::progress::{RunState, SharedState};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "County Case Scraper",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(RunOptions::default())))),
    )?;
    Ok(())
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResultTab {
    Filed,
    Unfiled,
    Log,
}

pub struct App {
    // single source of truth for the next run (UI thread only)
    pub opts: RunOptions,

    // text fields we map into `opts` when a run starts
    pub input_text: String,
    pub out_dir_text: String,

    pub tab: ResultTab,

    // last finished run, as table rows
    pub results: Partitions,

    // worker writes here
    pub shared: SharedState,
}

impl App {
    pub fn new(opts: RunOptions) -> Self {
        let out_dir_text = opts.export.out_dir.to_string_lossy().into_owned();
        let shared = Arc::new(Mutex::new(RunState { status: s!("Idle"), ..RunState::default() }));
        logf!("Init: county={}, out={}", opts.county, out_dir_text);

        Self {
            opts,
            input_text: s!(),
            out_dir_text,
            tab: ResultTab::Filed,
            results: Partitions::default(),
            shared,
        }
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.shared.lock() {
            s.status = msg.into();
        }
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.shared.lock().map(|s| s.running).unwrap_or(false)
    }

    /// Move a finished run's partitions out of the shared state.
    fn take_result(&mut self) {
        let done = self.shared.lock().ok().and_then(|mut s| s.result.take());
        if let Some(parts) = done {
            logf!("UI: results in, filed={} unfiled={}", parts.filed.len(), parts.unfiled.len());
            self.results = parts;
            self.tab = ResultTab::Filed;
        }
    }

    /// Headers and rows for the selected result tab. The log tab has one
    /// column of lines.
    pub fn current_table(&self) -> (Vec<String>, Vec<Vec<String>>) {
        let hdr = |hs: &[&str]| hs.iter().map(|h| s!(*h)).collect::<Vec<_>>();
        match self.tab {
            ResultTab::Filed => (hdr(&FILED_HEADERS), self.results.filed_rows()),
            ResultTab::Unfiled => (hdr(&UNFILED_HEADERS), self.results.unfiled_rows()),
            ResultTab::Log => {
                let lines: Vec<Vec<String>> = self
                    .shared
                    .lock()
                    .map(|s| s.log.iter().map(|l| vec![l.clone()]).collect())
                    .unwrap_or_default();
                (vec![s!("Log")], lines)
            }
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.take_result();

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            super::components::status_bar::draw(ui, self);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            super::components::run_form::draw(ui, self);

            ui.separator();

            super::components::tabs::draw(ui, self);

            ui.separator();

            match self.tab {
                ResultTab::Log => super::components::log_panel::draw(ui, self),
                _ => super::components::data_table::draw(ui, self),
            }
        });
    }
}
