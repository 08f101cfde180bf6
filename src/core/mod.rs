//! Core module - application infrastructure
//!
//! # Module Organization
//!
//! - `settings` - [`EngineSettings`] and their JSON persistence
//! - `logging` - tracing subscriber setup

pub mod logging;
pub mod settings;

pub use logging::{init_logging, init_logging_with};
pub use settings::{
    load_settings, load_settings_from, save_settings, save_settings_to, settings_path,
    EngineSettings,
};
