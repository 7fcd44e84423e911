//! Settings loading and validation
//!
//! Settings live in a JSON file. `IEP_SCHEDULER_CONFIG` overrides the
//! default location under the platform config directory. A missing file
//! means defaults.

use std::env;
use std::fs;
use std::path::PathBuf;

use log::info;

use crate::error::{AppError, AppResult};
use crate::models::SchedulerSettings;

pub const CONFIG_ENV_VAR: &str = "IEP_SCHEDULER_CONFIG";

pub fn config_path() -> Option<PathBuf> {
    if let Ok(path) = env::var(CONFIG_ENV_VAR) {
        if !path.trim().is_empty() {
            return Some(PathBuf::from(path));
        }
    }
    dirs::config_dir().map(|dir| dir.join("iep-scheduler").join("settings.json"))
}

pub fn load_settings() -> AppResult<SchedulerSettings> {
    let path = match config_path() {
        Some(path) if path.exists() => path,
        _ => {
            info!("No settings file found, using defaults");
            return Ok(SchedulerSettings::default());
        }
    };

    let raw = fs::read_to_string(&path)?;
    let settings: SchedulerSettings = serde_json::from_str(&raw)
        .map_err(|e| AppError::config(format!("{}: {}", path.display(), e)))?;
    validate_settings(&settings)?;

    info!("Loaded settings from {}", path.display());
    Ok(settings)
}

pub fn validate_settings(settings: &SchedulerSettings) -> AppResult<()> {
    if settings.upcoming_limit == 0 {
        return Err(AppError::config("upcoming_limit must be at least 1"));
    }
    if settings.max_events_per_day == 0 {
        return Err(AppError::config("max_events_per_day must be at least 1"));
    }
    if settings.pre_meeting_lead_days < 0 || settings.triennial_lead_days < 0 {
        return Err(AppError::config("lead days cannot be negative"));
    }
    Ok(())
}
