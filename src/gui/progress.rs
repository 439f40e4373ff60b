// src/gui/progress.rs
use std::sync::{Arc, Mutex};

use eframe::egui;

use crate::progress::{fraction, Progress};
use crate::report::Partitions;

/// Everything the worker thread reports back to the UI thread.
#[derive(Default)]
pub struct RunState {
    pub status: String,
    pub fraction: f32,
    pub log: Vec<String>,
    pub running: bool,
    /// Set once per finished run; taken by the UI.
    pub result: Option<Partitions>,
}

pub type SharedState = Arc<Mutex<RunState>>;

pub struct GuiProgress {
    state: SharedState,
    ctx: egui::Context,
}

impl GuiProgress {
    pub fn new(state: SharedState, ctx: egui::Context) -> Self {
        Self { state, ctx }
    }

    fn update(&self, f: impl FnOnce(&mut RunState)) {
        if let Ok(mut s) = self.state.lock() {
            f(&mut s);
        }
        self.ctx.request_repaint();
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self, total: usize) {
        self.update(|s| {
            s.fraction = 0.0;
            s.status = format!("Searching 0/{total}");
        });
    }
    fn log(&mut self, msg: &str) {
        self.update(|s| s.log.push(s!(msg)));
    }
    fn item_done(&mut self, done: usize, total: usize) {
        self.update(|s| {
            s.fraction = fraction(done, total);
            s.status = format!("Searching {done}/{total}");
        });
    }
    fn finish(&mut self) {
        self.update(|s| s.fraction = 1.0);
    }
}
