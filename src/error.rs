//! Configuration errors
//!
//! Gameplay itself never fails; only loading a config can.

use crate::sim::EnemyCategory;

/// Error produced while parsing or validating a [`crate::GameConfig`]
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// Config JSON could not be parsed
    #[error("Config parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Spawn interval must be a positive number of milliseconds
    #[error("Invalid spawn interval: {0} ms")]
    SpawnInterval(f32),

    /// Player speed must be finite and non-negative
    #[error("Invalid player speed: {0}")]
    PlayerSpeed(f32),

    /// A size-like value that must be positive was not
    #[error("{what} must be positive, got {value}")]
    NonPositiveSize { what: &'static str, value: f32 },

    /// Category threshold outside [0, 1]
    #[error("Threshold {threshold} for {category:?} is outside [0, 1]")]
    Threshold {
        category: EnemyCategory,
        threshold: f32,
    },

    /// Category thresholds must be listed rarest (smallest) first
    #[error("Category thresholds must be ascending, rarest first")]
    ThresholdOrder,
}
