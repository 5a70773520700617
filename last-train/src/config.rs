//! Process configuration read from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use crate::confirm::ConfirmConfig;
use crate::resolve::ResolverConfig;

/// Path of the timing data file.
pub const DATA_PATH_VAR: &str = "LAST_TRAIN_DATA";

/// Address the HTTP adapter listens on.
pub const ADDR_VAR: &str = "LAST_TRAIN_ADDR";

/// Seconds an unanswered confirmation stays valid.
pub const CONFIRM_TTL_VAR: &str = "LAST_TRAIN_CONFIRM_TTL_SECS";

const DEFAULT_DATA_PATH: &str = "train-timing.json";
const DEFAULT_ADDR: &str = "127.0.0.1:3000";

/// Error returned when an environment variable holds an unusable value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid value {value:?} for {var}: {reason}")]
pub struct ConfigError {
    var: &'static str,
    value: String,
    reason: &'static str,
}

/// Everything the binary needs to start.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub data_path: PathBuf,
    pub addr: SocketAddr,
    pub resolver: ResolverConfig,
    pub confirm: ConfirmConfig,
}

impl AppConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read configuration through `lookup`, using defaults for unset
    /// variables.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let data_path = lookup(DATA_PATH_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_PATH));

        let addr_value = lookup(ADDR_VAR).unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr: SocketAddr = addr_value.parse().map_err(|_| ConfigError {
            var: ADDR_VAR,
            value: addr_value.clone(),
            reason: "expected host:port",
        })?;

        let mut confirm = ConfirmConfig::default();
        if let Some(value) = lookup(CONFIRM_TTL_VAR) {
            let secs: u64 = value.parse().map_err(|_| ConfigError {
                var: CONFIRM_TTL_VAR,
                value: value.clone(),
                reason: "expected a whole number of seconds",
            })?;
            if secs == 0 {
                return Err(ConfigError {
                    var: CONFIRM_TTL_VAR,
                    value,
                    reason: "must be positive",
                });
            }
            confirm = confirm.with_idle_ttl(Duration::from_secs(secs));
        }

        Ok(Self {
            data_path,
            addr,
            resolver: ResolverConfig::default(),
            confirm,
        })
    }
}
