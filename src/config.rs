//! Resize engine configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::consts::{DEFAULT_HISTORY_LIMIT, HANDLE_RADIUS_PX};

pub const HISTORY_LIMIT_VAR: &str = "RESIZE_HISTORY_LIMIT";
pub const HANDLE_RADIUS_VAR: &str = "RESIZE_HANDLE_RADIUS_PX";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {var}: {value:?} ({reason})")]
    Invalid { var: &'static str, value: String, reason: &'static str },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeConfig {
    /// Snapshots kept by the in-memory history store.
    pub history_limit: usize,
    /// Screen-space grab radius around each handle.
    pub handle_radius_px: f64,
}

impl Default for ResizeConfig {
    fn default() -> Self {
        Self { history_limit: DEFAULT_HISTORY_LIMIT, handle_radius_px: HANDLE_RADIUS_PX }
    }
}

impl ResizeConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `RESIZE_HISTORY_LIMIT`: default 100, must be at least 1
    /// - `RESIZE_HANDLE_RADIUS_PX`: default 8.0, must be finite and positive
    ///
    /// # Errors
    ///
    /// Returns `Invalid` when a variable is set but does not parse or is out of range.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Self::from_env`] with an explicit key lookup.
    ///
    /// # Errors
    ///
    /// See [`Self::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();

        if let Some(raw) = lookup(HISTORY_LIMIT_VAR) {
            cfg.history_limit = match raw.trim().parse::<usize>() {
                Ok(n) if n >= 1 => n,
                Ok(_) => return Err(invalid(HISTORY_LIMIT_VAR, raw, "must be at least 1")),
                Err(_) => return Err(invalid(HISTORY_LIMIT_VAR, raw, "not an integer")),
            };
        }

        if let Some(raw) = lookup(HANDLE_RADIUS_VAR) {
            cfg.handle_radius_px = match raw.trim().parse::<f64>() {
                Ok(r) if r.is_finite() && r > 0.0 => r,
                Ok(_) => return Err(invalid(HANDLE_RADIUS_VAR, raw, "must be finite and positive")),
                Err(_) => return Err(invalid(HANDLE_RADIUS_VAR, raw, "not a number")),
            };
        }

        Ok(cfg)
    }
}

fn invalid(var: &'static str, value: String, reason: &'static str) -> ConfigError {
    ConfigError::Invalid { var, value, reason }
}
