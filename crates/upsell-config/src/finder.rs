//! Upsell finder tuning: batching, timeouts, concurrency.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Default number of distinct person ids sent per lookup call.
const fn default_chunk_size() -> usize {
    100
}

const fn default_lookup_timeout_secs() -> u64 {
    30
}

const fn default_max_concurrent_lookups() -> usize {
    1
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct FinderConfig {
    /// Maximum distinct person ids per ownership lookup call.
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,

    /// Per-call lookup timeout in seconds. `0` disables the timeout.
    #[serde(default = "default_lookup_timeout_secs")]
    pub lookup_timeout_secs: u64,

    /// Chunk lookups allowed in flight at once. `1` runs them sequentially.
    #[serde(default = "default_max_concurrent_lookups")]
    pub max_concurrent_lookups: usize,
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            chunk_size: default_chunk_size(),
            lookup_timeout_secs: default_lookup_timeout_secs(),
            max_concurrent_lookups: default_max_concurrent_lookups(),
        }
    }
}

impl FinderConfig {
    /// Timeout applied to each lookup call, if any.
    #[must_use]
    pub const fn lookup_timeout(&self) -> Option<Duration> {
        if self.lookup_timeout_secs == 0 {
            None
        } else {
            Some(Duration::from_secs(self.lookup_timeout_secs))
        }
    }

    /// Reject values the finder cannot run with.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when `chunk_size` or
    /// `max_concurrent_lookups` is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.chunk_size == 0 {
            return Err(ConfigError::InvalidValue {
                field: "finder.chunk_size".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        if self.max_concurrent_lookups == 0 {
            return Err(ConfigError::InvalidValue {
                field: "finder.max_concurrent_lookups".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}
