// src/progress.rs
/// Progress and log sink for a batch run.
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of queries.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called once per query after it fully resolves; `done` is 1-based.
    fn item_done(&mut self, _done: usize, _total: usize) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// Completed share of the batch in `0.0..=1.0`.
pub fn fraction(done: usize, total: usize) -> f32 {
    if total == 0 { 1.0 } else { (done as f32 / total as f32).min(1.0) }
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Plain console sink: log lines to stdout, percentage to stderr.
pub struct ConsoleProgress {
    pub quiet: bool,
}

impl Progress for ConsoleProgress {
    fn begin(&mut self, total: usize) {
        if !self.quiet {
            eprintln!("Searching {total} name(s)...");
        }
    }

    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }

    fn item_done(&mut self, done: usize, total: usize) {
        if !self.quiet {
            eprintln!("[{:>3.0}%] {done}/{total}", fraction(done, total) * 100.0);
        }
    }
}

/// Collects log lines; handy when the caller wants them afterwards.
#[derive(Default)]
pub struct VecProgress {
    pub lines: Vec<String>,
    pub fractions: Vec<f32>,
    pub total: Option<usize>,
    pub finished: bool,
}

impl Progress for VecProgress {
    fn begin(&mut self, total: usize) {
        self.total = Some(total);
    }
    fn log(&mut self, msg: &str) {
        self.lines.push(s!(msg));
    }
    fn item_done(&mut self, done: usize, total: usize) {
        self.fractions.push(fraction(done, total));
    }
    fn finish(&mut self) {
        self.finished = true;
    }
}
