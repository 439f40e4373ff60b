// src/gui/components/mod.rs
pub mod data_table;
pub mod log_panel;
pub mod run_form;
pub mod status_bar;
pub mod tabs;
