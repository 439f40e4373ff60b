// src/gui/actions/run.rs
use std::{path::PathBuf, thread};

use eframe::egui;

use crate::{
    gui::{app::App, progress::GuiProgress},
    runner,
};

/// Start a batch on a worker thread. The worker owns the browser; the UI
/// thread only reads the shared state.
pub fn run(app: &mut App, ctx: &egui::Context) {
    if app.is_running() {
        return;
    }

    let input = app.input_text.trim();
    if input.is_empty() {
        app.status("Choose an input spreadsheet first");
        return;
    }
    app.opts.input = PathBuf::from(input);
    app.opts.export.set_dir(&app.out_dir_text);

    if let Ok(mut s) = app.shared.lock() {
        s.running = true;
        s.fraction = 0.0;
        s.log.clear();
        s.result = None;
        s.status = s!("Starting browser...");
    }

    let opts = app.opts.clone();
    let shared = app.shared.clone();
    let repaint = ctx.clone();
    let mut prog = GuiProgress::new(shared.clone(), ctx.clone());

    logf!("Run: Begin county={} input={}", opts.county, opts.input.display());

    thread::spawn(move || {
        let res = runner::run(&opts, &mut prog);
        if let Ok(mut s) = shared.lock() {
            s.running = false;
            match res {
                Ok(summary) => {
                    s.status = format!(
                        "Done: {} filed, {} no case filed",
                        summary.partitions.filed.len(),
                        summary.partitions.unfiled.len()
                    );
                    s.result = Some(summary.partitions);
                }
                Err(e) => {
                    loge!("Run: Error: {e}");
                    s.log.push(format!("Error: {e}"));
                    s.status = format!("Error: {e}");
                }
            }
        }
        repaint.request_repaint();
    });
}
