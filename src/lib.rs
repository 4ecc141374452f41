//! EOQ calculation logic lives in the library so the CLI and the GUI share it.

pub mod app;
pub mod config;
pub mod export;
pub mod inventory;
pub mod logging;
pub mod report;
pub mod ui_cli;
