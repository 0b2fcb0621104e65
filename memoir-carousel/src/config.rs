use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::carousel::Easing;
use crate::constants;
use crate::error::{CarouselError, Result};

const APP_DIR: &str = "memoir";
const CONFIG_FILE: &str = "carousel.json";

const ENV_AUTOPLAY_INTERVAL_MS: &str = "MEMOIR_AUTOPLAY_INTERVAL_MS";
const ENV_TRANSITION_MS: &str = "MEMOIR_TRANSITION_MS";
const ENV_MOBILE_BREAKPOINT: &str = "MEMOIR_MOBILE_BREAKPOINT";

/// Tunables for a carousel instance. The swipe threshold is fixed and not
/// part of the configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    pub autoplay_interval_ms: u64,
    pub autoplay_resolution_ms: u64,
    pub transition_ms: u64,
    pub transition_easing: Easing,
    pub mobile_breakpoint: f32,
    pub preload_timeout_ms: u64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            autoplay_interval_ms: constants::autoplay::INTERVAL_MS,
            autoplay_resolution_ms: constants::autoplay::RESOLUTION_MS,
            transition_ms: constants::transition::DURATION_MS,
            transition_easing: Easing::default(),
            mobile_breakpoint: constants::layout::MOBILE_BREAKPOINT,
            preload_timeout_ms: constants::preload::TIMEOUT_MS,
        }
    }
}

impl CarouselConfig {
    /// Defaults, then the user config file when present, then environment
    /// overrides. Problems with the file are logged and skipped.
    pub fn load() -> Self {
        let mut config = match Self::default_path() {
            Some(path) if path.exists() => match Self::load_from(&path) {
                Ok(config) => {
                    log::info!("Loaded carousel config from {}", path.display());
                    config
                }
                Err(err) => {
                    log::warn!(
                        "Ignoring carousel config at {}: {err}",
                        path.display()
                    );
                    Self::default()
                }
            },
            _ => Self::default(),
        };

        config.apply_env_overrides(|key| std::env::var(key).ok());
        config
    }

    /// Strictly load a JSON config file; missing fields take defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content).map_err(|err| {
            CarouselError::Config(format!("{}: {err}", path.display()))
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)
            .map_err(|err| CarouselError::Config(err.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
    }

    pub fn validate(&self) -> Result<()> {
        if self.autoplay_interval_ms == 0 {
            return Err(CarouselError::Config(
                "autoplay_interval_ms must be positive".to_string(),
            ));
        }
        if self.autoplay_resolution_ms == 0 {
            return Err(CarouselError::Config(
                "autoplay_resolution_ms must be positive".to_string(),
            ));
        }
        if !self.mobile_breakpoint.is_finite() || self.mobile_breakpoint <= 0.0 {
            return Err(CarouselError::Config(format!(
                "mobile_breakpoint must be a positive width, got {}",
                self.mobile_breakpoint
            )));
        }
        Ok(())
    }

    /// Applies environment overrides read through `lookup`. Unparseable
    /// values are logged and left at their previous setting.
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(ENV_AUTOPLAY_INTERVAL_MS) {
            match value.trim().parse::<u64>() {
                Ok(ms) if ms > 0 => self.autoplay_interval_ms = ms,
                _ => log::warn!("Ignoring {ENV_AUTOPLAY_INTERVAL_MS}={value}"),
            }
        }
        if let Some(value) = lookup(ENV_TRANSITION_MS) {
            match value.trim().parse::<u64>() {
                Ok(ms) => self.transition_ms = ms,
                Err(_) => log::warn!("Ignoring {ENV_TRANSITION_MS}={value}"),
            }
        }
        if let Some(value) = lookup(ENV_MOBILE_BREAKPOINT) {
            match value.trim().parse::<f32>() {
                Ok(px) if px.is_finite() && px > 0.0 => {
                    self.mobile_breakpoint = px
                }
                _ => log::warn!("Ignoring {ENV_MOBILE_BREAKPOINT}={value}"),
            }
        }
    }

    pub fn autoplay_interval(&self) -> Duration {
        Duration::from_millis(self.autoplay_interval_ms)
    }

    pub fn autoplay_resolution(&self) -> Duration {
        Duration::from_millis(self.autoplay_resolution_ms)
    }

    pub fn transition_duration(&self) -> Duration {
        Duration::from_millis(self.transition_ms)
    }

    pub fn preload_timeout(&self) -> Duration {
        Duration::from_millis(self.preload_timeout_ms)
    }
}
