//! Core library surface for the banner manager.
//!
//! The modules exposed here are shared between the CLI subcommands and the
//! interactive carousel UI: one SQLite-backed store, one record model, and
//! thin handlers on top.

pub mod ascii;
pub mod cli;
pub mod commands;
pub mod db;
pub mod error;
pub mod logging;
pub mod models;
pub mod source;
pub mod ui;

/// The persistence layer entry point used by `main.rs` and the UI.
pub use db::BannerStore;

/// The primary domain types that other layers manipulate.
pub use models::{Banner, WorkingCopy};

/// The interactive application entry point and state container.
pub use ui::{run_app, App};
