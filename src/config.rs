//! Runtime settings for [`RegistrySystem`](crate::lifecycle::RegistrySystem).

use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use thiserror::Error;

/// Environment variable overriding [`RegistryConfig::channel_capacity`].
pub const CHANNEL_CAPACITY_VAR: &str = "REVIEW_REGISTRY_CHANNEL_CAPACITY";

const DEFAULT_CHANNEL_CAPACITY: NonZeroUsize = match NonZeroUsize::new(32) {
    Some(n) => n,
    None => panic!("default channel capacity must be positive"),
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{var} must be a positive integer, got {value:?}")]
    InvalidChannelCapacity { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Requests that may wait in the actor's mailbox before senders block.
    /// A mailbox always holds at least one request.
    pub channel_capacity: NonZeroUsize,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
        }
    }
}

impl RegistryConfig {
    /// Defaults, overridden by the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(value) = lookup(CHANNEL_CAPACITY_VAR) {
            config.channel_capacity = value.trim().parse::<NonZeroUsize>().map_err(|_| {
                ConfigError::InvalidChannelCapacity {
                    var: CHANNEL_CAPACITY_VAR,
                    value: value.clone(),
                }
            })?;
        }
        Ok(config)
    }
}
