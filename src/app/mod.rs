mod app;
mod commands;
mod eframe_impl;
mod help;
mod slot_picker;
pub mod theme;
mod wizard_window;

pub use app::CloudSaveApp;
