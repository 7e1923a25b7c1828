//! Job store and pagination configuration.

use serde::{Deserialize, Serialize};

/// In-memory job store settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Load the reference job postings at start-up.
    #[serde(default = "default_true")]
    pub seed: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self { seed: true }
    }
}

/// Defaults and bounds for paginated list endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginationConfig {
    /// Page size used when `limit` is absent or invalid.
    #[serde(default = "default_limit")]
    pub default_limit: u64,
    /// Largest accepted page size; bigger requests are clamped.
    #[serde(default = "default_max_limit")]
    pub max_limit: u64,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            max_limit: default_max_limit(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_limit() -> u64 {
    10
}

fn default_max_limit() -> u64 {
    100
}
