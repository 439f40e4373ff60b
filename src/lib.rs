// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod core;
pub mod error;

pub mod csv;
pub mod file;
pub mod input;
pub mod names;

pub mod browser;
pub mod portal;
pub mod retry;

pub mod extract;
pub mod session;

pub mod progress;
pub mod report;
pub mod runner;

pub mod cli;
pub mod gui;
