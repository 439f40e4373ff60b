// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.
// Submodules stay private; consumers only see actions::{copy,run}.

mod copy;   // src/gui/actions/copy.rs
mod run;    // src/gui/actions/run.rs

pub use copy::copy;
pub use run::run;
