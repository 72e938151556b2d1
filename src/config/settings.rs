//! LinkHarvest - Settings module
//!
//! Settings come from defaults, an optional JSON file named by
//! `LINKHARVEST_CONFIG`, and environment overrides, in that order.

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Path of an optional JSON settings file
pub const CONFIG_PATH_VAR: &str = "LINKHARVEST_CONFIG";
pub const POLL_INTERVAL_VAR: &str = "LINKHARVEST_POLL_INTERVAL_MS";
pub const IGNORE_PREEXISTING_VAR: &str = "LINKHARVEST_IGNORE_PREEXISTING";
pub const OUTPUT_VAR: &str = "LINKHARVEST_OUTPUT";

const POLL_INTERVAL_DEFAULT_MS: u64 = 500;
const POLL_INTERVAL_MIN_MS: u64 = 50;
const POLL_INTERVAL_MAX_MS: u64 = 60_000;

/// Console output format
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human readable lines
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

impl OutputFormat {
    /// Create from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

/// User settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Clipboard polling interval (milliseconds)
    pub poll_interval_ms: u64,
    /// Skip content already on the clipboard at startup
    pub ignore_preexisting_clipboard: bool,
    /// Console output format
    pub output: OutputFormat,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            poll_interval_ms: POLL_INTERVAL_DEFAULT_MS,
            ignore_preexisting_clipboard: true,
            output: OutputFormat::Text,
        }
    }
}

impl Settings {
    /// Load settings from the process environment
    pub fn load() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load settings using `lookup` to resolve environment variables
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = match lookup(CONFIG_PATH_VAR) {
            Some(path) => Self::from_file(Path::new(&path))?,
            None => Settings::default(),
        };

        if let Some(value) = lookup(POLL_INTERVAL_VAR) {
            settings.poll_interval_ms = value.trim().parse().map_err(|_| {
                AppError::Config(format!("{} must be a number of milliseconds, got {:?}", POLL_INTERVAL_VAR, value))
            })?;
        }

        if let Some(value) = lookup(IGNORE_PREEXISTING_VAR) {
            settings.ignore_preexisting_clipboard = parse_bool(&value).ok_or_else(|| {
                AppError::Config(format!("{} must be true or false, got {:?}", IGNORE_PREEXISTING_VAR, value))
            })?;
        }

        if let Some(value) = lookup(OUTPUT_VAR) {
            settings.output = OutputFormat::from_str(&value).ok_or_else(|| {
                AppError::Config(format!("{} must be text or json, got {:?}", OUTPUT_VAR, value))
            })?;
        }

        settings.poll_interval_ms = normalize_poll_interval_ms(settings.poll_interval_ms);
        Ok(settings)
    }

    /// Read settings from a JSON file; missing fields take their defaults
    pub fn from_file(path: &Path) -> Result<Self, AppError> {
        let raw = fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("cannot read settings file {:?}: {}", path, e))
        })?;
        let settings: Settings = serde_json::from_str(&raw)?;
        log::debug!("Settings loaded from {:?}", path);
        Ok(settings)
    }

    /// Polling interval as a `Duration`
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}

fn normalize_poll_interval_ms(value_ms: u64) -> u64 {
    value_ms.clamp(POLL_INTERVAL_MIN_MS, POLL_INTERVAL_MAX_MS)
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
