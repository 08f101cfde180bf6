//! Engine settings and their persistence
//!
//! Saves and loads [`EngineSettings`] to/from a JSON file so search depth,
//! variant and evaluation weights survive between sessions.
//!
//! # File Location
//!
//! Settings are stored in `settings.json` in the platform configuration
//! directory (via [`ProjectDirs`]), or in the working directory when no
//! configuration directory can be determined.
//!
//! # Error Handling
//!
//! [`load_settings`] and [`save_settings`] never fail: problems are logged and
//! defaults are used (or the save is skipped). [`load_settings_from`] and
//! [`save_settings_to`] return errors with context for callers that care.

use anyhow::{Context, Result};
use chessball_engine::evaluation::EvalWeights;
use chessball_engine::search::SearchOptions;
use chessball_engine::Variant;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{error, info, warn};

/// Settings filename
const SETTINGS_FILENAME: &str = "settings.json";

/// Everything the AI needs to pick a move
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    /// Board variant new matches are played on
    pub variant: Variant,
    /// Search depth in plies
    pub depth: u32,
    /// Alpha-beta pruning on or off
    pub alpha_beta: bool,
    /// Optional per-move time budget in milliseconds
    pub time_budget_ms: Option<u64>,
    /// Evaluation weight overrides and bias
    pub weights: EvalWeights,
}

impl Default for EngineSettings {
    fn default() -> Self {
        let search = SearchOptions::default();
        Self {
            variant: Variant::default(),
            depth: search.depth,
            alpha_beta: search.alpha_beta,
            time_budget_ms: None,
            weights: EvalWeights::default(),
        }
    }
}

impl EngineSettings {
    /// Search options derived from these settings
    pub fn search_options(&self) -> SearchOptions {
        SearchOptions {
            depth: self.depth,
            alpha_beta: self.alpha_beta,
            time_budget: self.time_budget_ms.map(Duration::from_millis),
        }
    }
}

/// Path of `settings.json`
///
/// E.g. `~/.config/chessball/settings.json` on Linux. Falls back to a local
/// `settings.json` if the system config dir cannot be found.
pub fn settings_path() -> PathBuf {
    if let Some(proj_dirs) = ProjectDirs::from("com", "trilltino", "ChessBall") {
        proj_dirs.config_dir().join(SETTINGS_FILENAME)
    } else {
        PathBuf::from(SETTINGS_FILENAME)
    }
}

/// Read settings from `path`
pub fn load_settings_from(path: &Path) -> Result<EngineSettings> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read settings file {}", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("failed to parse settings file {}", path.display()))
}

/// Write settings to `path`, creating parent directories as needed
pub fn save_settings_to(path: &Path, settings: &EngineSettings) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).with_context(|| {
                format!("failed to create settings directory {}", parent.display())
            })?;
        }
    }
    let json = serde_json::to_string_pretty(settings).context("failed to serialize settings")?;
    fs::write(path, json)
        .with_context(|| format!("failed to write settings file {}", path.display()))
}

/// Load settings on startup
///
/// Uses default settings if the file doesn't exist or is invalid.
pub fn load_settings() -> EngineSettings {
    let path = settings_path();

    if !path.exists() {
        info!("[SETTINGS] No settings file found at {:?}. Using defaults.", path);
        return EngineSettings::default();
    }

    match load_settings_from(&path) {
        Ok(settings) => {
            info!("[SETTINGS] Loaded settings from {:?}", path);
            settings
        }
        Err(e) => {
            warn!("[SETTINGS] {:#}. Using defaults.", e);
            EngineSettings::default()
        }
    }
}

/// Save settings to the configuration directory, logging any failure
pub fn save_settings(settings: &EngineSettings) {
    let path = settings_path();
    match save_settings_to(&path, settings) {
        Ok(()) => info!("[SETTINGS] Saved settings to {:?}", path),
        Err(e) => error!("[SETTINGS] {:#}", e),
    }
}
