//! CLI commands module for errnotify.

pub mod app;
pub mod commands;

pub use app::{ClassifyArgs, Cli, Commands, ConfigAction, Origin, ThemeAction};
