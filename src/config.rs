use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::{wlog_debug, Error, Result};

/// Default poll interval for the wall clock, in milliseconds.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 2500;
/// Default delay between animated keystrokes, in milliseconds.
pub const DEFAULT_KEYSTROKE_DELAY_MS: u64 = 60;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// How often the clock is polled and the phrase regenerated.
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,
    /// Delay between individual character mutations during a retype.
    #[serde(default = "default_keystroke_delay_ms")]
    pub keystroke_delay_ms: u64,
}

fn default_tick_interval_ms() -> u64 {
    DEFAULT_TICK_INTERVAL_MS
}

fn default_keystroke_delay_ms() -> u64 {
    DEFAULT_KEYSTROKE_DELAY_MS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            keystroke_delay_ms: DEFAULT_KEYSTROKE_DELAY_MS,
        }
    }
}

impl Config {
    pub fn woord_dir() -> Result<PathBuf> {
        Ok(dirs::home_dir().ok_or(Error::NoHomeDir)?.join(".woord"))
    }

    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::woord_dir()?.join("woord.toml"))
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    pub fn keystroke_delay(&self) -> Duration {
        Duration::from_millis(self.keystroke_delay_ms)
    }

    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        wlog_debug!("Config::load path={}", path.display());
        if !path.exists() {
            wlog_debug!("Config file not found, using defaults");
            return Ok(Self::default());
        }
        let config: Self = toml::from_str(&fs::read_to_string(&path)?)?;
        wlog_debug!(
            "Config loaded: tick_interval_ms={}, keystroke_delay_ms={}",
            config.tick_interval_ms,
            config.keystroke_delay_ms
        );
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let woord_dir = Self::woord_dir()?;
        wlog_debug!("Config::save woord_dir={}", woord_dir.display());
        if !woord_dir.exists() {
            fs::create_dir_all(&woord_dir)?;
        }
        let path = Self::config_path()?;
        fs::write(&path, toml::to_string_pretty(self)?)?;
        wlog_debug!("Config saved to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.tick_interval(), Duration::from_millis(2500));
        assert_eq!(config.keystroke_delay(), Duration::from_millis(60));
    }

    #[test]
    fn test_config_roundtrip() {
        let config = Config {
            tick_interval_ms: 1000,
            keystroke_delay_ms: 30,
        };
        let toml = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.tick_interval_ms, 1000);
        assert_eq!(parsed.keystroke_delay_ms, 30);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let parsed: Config = toml::from_str("keystroke_delay_ms = 10").unwrap();
        assert_eq!(parsed.tick_interval_ms, DEFAULT_TICK_INTERVAL_MS);
        assert_eq!(parsed.keystroke_delay_ms, 10);
    }
}
