use serde::{Deserialize, Serialize};

use super::defaults;

/// Default freshness parameters for queries that do not carry their own.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FreshnessConfig {
    pub enabled: bool,
    pub half_life_days: f64,
    pub weight: f64,
}

impl Default for FreshnessConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            half_life_days: defaults::DEFAULT_HALF_LIFE_DAYS,
            weight: defaults::DEFAULT_FRESHNESS_WEIGHT,
        }
    }
}
