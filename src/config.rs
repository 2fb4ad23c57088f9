//! Game variants and tuning
//!
//! Every variant of the game is the same loop with different numbers:
//! spawn interval, population cap, player speed and the category table.
//! Persisted in LocalStorage so a tweaked config survives reloads.

use serde::{Deserialize, Serialize};

use crate::consts::{JOYSTICK_MAX_RADIUS, KEY_STEP_MULTIPLIER, PLAYER_SIZE};
use crate::error::ConfigError;
use crate::sim::{CategoryTable, InputMode};

/// Where [`GameConfig::select`] found the config
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    UrlOverride,
    Stored,
    Default,
}

/// Preset game variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Variant {
    /// Slow trickle of enemies, small cap
    #[default]
    Classic,
    /// Denser field, faster player, tap to remove
    Swarm,
    /// Spawns four times a second
    Frenzy,
}

impl Variant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Classic => "Classic",
            Variant::Swarm => "Swarm",
            Variant::Frenzy => "Frenzy",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "classic" => Some(Variant::Classic),
            "swarm" => Some(Variant::Swarm),
            "frenzy" => Some(Variant::Frenzy),
            _ => None,
        }
    }

    /// Milliseconds between spawn attempts
    pub fn spawn_interval_ms(&self) -> f32 {
        match self {
            Variant::Classic => 1200.0,
            Variant::Swarm => 500.0,
            Variant::Frenzy => 250.0,
        }
    }

    /// Population cap
    pub fn max_enemies(&self) -> usize {
        match self {
            Variant::Classic => 15,
            Variant::Swarm => 50,
            Variant::Frenzy => 50,
        }
    }

    /// Pixels per frame at full joystick deflection
    pub fn player_speed(&self) -> f32 {
        match self {
            Variant::Classic => 2.0,
            Variant::Swarm => 4.0,
            Variant::Frenzy => 4.0,
        }
    }

    /// Whether tapping an enemy removes it
    pub fn tap_to_remove(&self) -> bool {
        !matches!(self, Variant::Classic)
    }
}

/// How the input mode is chosen at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum InputPreference {
    /// Decide from the device's pointer type
    #[default]
    Auto,
    Joystick,
    Keyboard,
}

impl InputPreference {
    /// Resolve to a concrete mode; `coarse_pointer` is only consulted for `Auto`
    pub fn resolve(&self, coarse_pointer: bool) -> InputMode {
        match self {
            InputPreference::Auto => InputMode::detect(coarse_pointer),
            InputPreference::Joystick => InputMode::Joystick,
            InputPreference::Keyboard => InputMode::Keyboard,
        }
    }
}

/// Full game tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Preset these values started from
    pub variant: Variant,
    pub spawn_interval_ms: f32,
    pub max_enemies: usize,
    /// Pixels per frame at full joystick deflection
    pub player_speed: f32,
    pub player_size: f32,
    pub joystick_max_radius: f32,
    /// Key presses move `player_speed * key_step_multiplier`
    pub key_step_multiplier: f32,
    pub tap_to_remove: bool,
    pub input: InputPreference,
    pub categories: CategoryTable,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::from_variant(Variant::default())
    }
}

impl GameConfig {
    /// Create a config from a variant preset
    pub fn from_variant(variant: Variant) -> Self {
        Self {
            variant,
            spawn_interval_ms: variant.spawn_interval_ms(),
            max_enemies: variant.max_enemies(),
            player_speed: variant.player_speed(),
            player_size: PLAYER_SIZE,
            joystick_max_radius: JOYSTICK_MAX_RADIUS,
            key_step_multiplier: KEY_STEP_MULTIPLIER,
            tap_to_remove: variant.tap_to_remove(),
            input: InputPreference::Auto,
            categories: CategoryTable::default(),
        }
    }

    /// Distance a single key press moves the player
    pub fn key_step_distance(&self) -> f32 {
        self.player_speed * self.key_step_multiplier
    }

    /// Check that every value is usable
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.spawn_interval_ms.is_finite() && self.spawn_interval_ms > 0.0) {
            return Err(ConfigError::SpawnInterval(self.spawn_interval_ms));
        }
        if !(self.player_speed.is_finite() && self.player_speed >= 0.0) {
            return Err(ConfigError::PlayerSpeed(self.player_speed));
        }
        positive("player_size", self.player_size)?;
        positive("joystick_max_radius", self.joystick_max_radius)?;
        if !(self.key_step_multiplier.is_finite() && self.key_step_multiplier >= 0.0) {
            return Err(ConfigError::NonPositiveSize {
                what: "key_step_multiplier",
                value: self.key_step_multiplier,
            });
        }

        let mut last = 0.0f32;
        for tier in &self.categories.tiers {
            if !(0.0..=1.0).contains(&tier.threshold) {
                return Err(ConfigError::Threshold {
                    category: tier.category,
                    threshold: tier.threshold,
                });
            }
            if tier.threshold < last {
                return Err(ConfigError::ThresholdOrder);
            }
            last = tier.threshold;
            positive("category size", tier.size)?;
        }
        positive("baseline size", self.categories.baseline.size)?;
        Ok(())
    }

    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Pick the config from a `?variant=` value and a stored JSON blob.
    ///
    /// A recognized variant wins and is reported as an override so the
    /// caller can persist it. A stored blob that fails to parse or validate
    /// is ignored.
    pub fn select(variant_param: Option<&str>, stored: Option<&str>) -> (Self, ConfigSource) {
        if let Some(variant) = variant_param.and_then(Variant::from_str) {
            return (Self::from_variant(variant), ConfigSource::UrlOverride);
        }
        if let Some(json) = stored {
            match Self::from_json(json) {
                Ok(config) => return (config, ConfigSource::Stored),
                Err(e) => log::warn!("Ignoring stored config: {}", e),
            }
        }
        (Self::default(), ConfigSource::Default)
    }

    /// LocalStorage key
    #[cfg(target_arch = "wasm32")]
    const STORAGE_KEY: &'static str = "arena_chase_config";

    /// Load config (WASM only): `?variant=` query wins, then LocalStorage,
    /// then defaults. A URL override is saved so it sticks across reloads.
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();
        let stored = storage
            .as_ref()
            .and_then(|s| s.get_item(Self::STORAGE_KEY).ok())
            .flatten();
        let variant_param = crate::platform::query_param("variant");

        let (config, source) = Self::select(variant_param.as_deref(), stored.as_deref());
        match source {
            ConfigSource::UrlOverride => {
                log::info!("Using {} variant from URL", config.variant.as_str());
                config.save();
            }
            ConfigSource::Stored => {
                log::info!("Loaded {} config from LocalStorage", config.variant.as_str())
            }
            ConfigSource::Default => log::info!("Using default config"),
        }
        config
    }

    /// Save config to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Config saved");
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {}
}

fn positive(what: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositiveSize { what, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{CategoryTier, EnemyCategory};

    #[test]
    fn test_presets_are_valid() {
        for variant in [Variant::Classic, Variant::Swarm, Variant::Frenzy] {
            let config = GameConfig::from_variant(variant);
            assert!(config.validate().is_ok(), "{} invalid", variant.as_str());
        }
    }

    #[test]
    fn test_variant_from_str() {
        assert_eq!(Variant::from_str("FRENZY"), Some(Variant::Frenzy));
        assert_eq!(Variant::from_str("classic"), Some(Variant::Classic));
        assert_eq!(Variant::from_str("chaos"), None);
    }

    #[test]
    fn test_key_step_distance() {
        let config = GameConfig::from_variant(Variant::Swarm);
        assert_eq!(config.key_step_distance(), 20.0);
    }

    #[test]
    fn test_input_preference_override() {
        assert_eq!(InputPreference::Auto.resolve(true), InputMode::Joystick);
        assert_eq!(InputPreference::Keyboard.resolve(true), InputMode::Keyboard);
        assert_eq!(InputPreference::Joystick.resolve(false), InputMode::Joystick);
    }

    #[test]
    fn test_json_roundtrip_with_partial_fields() {
        let config = GameConfig::from_json(r#"{"max_enemies": 3, "player_speed": 6.0}"#).unwrap();
        assert_eq!(config.max_enemies, 3);
        assert_eq!(config.player_speed, 6.0);
        assert_eq!(config.spawn_interval_ms, 1200.0);
        assert_eq!(config.categories, CategoryTable::default());
    }

    #[test]
    fn test_url_variant_beats_stored_config() {
        let stored = serde_json::to_string(&GameConfig::from_variant(Variant::Swarm)).unwrap();

        let (config, source) = GameConfig::select(Some("frenzy"), Some(&stored));
        assert_eq!(source, ConfigSource::UrlOverride);
        assert_eq!(config, GameConfig::from_variant(Variant::Frenzy));

        // Unknown variant falls through to what was saved
        let (config, source) = GameConfig::select(Some("chaos"), Some(&stored));
        assert_eq!(source, ConfigSource::Stored);
        assert_eq!(config, GameConfig::from_variant(Variant::Swarm));
    }

    #[test]
    fn test_saved_override_loads_back() {
        let (config, _) = GameConfig::select(Some("swarm"), None);
        // What save writes is what the next load reads
        let json = serde_json::to_string(&config).unwrap();
        let (reloaded, source) = GameConfig::select(None, Some(&json));
        assert_eq!(source, ConfigSource::Stored);
        assert_eq!(reloaded, config);
    }

    #[test]
    fn test_bad_stored_config_uses_default() {
        let (config, source) = GameConfig::select(None, Some(r#"{"max_enemies": "many"}"#));
        assert_eq!(source, ConfigSource::Default);
        assert_eq!(config, GameConfig::default());

        let (_, source) = GameConfig::select(None, None);
        assert_eq!(source, ConfigSource::Default);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(matches!(
            GameConfig::from_json(r#"{"spawn_interval_ms": 0.0}"#),
            Err(ConfigError::SpawnInterval(_))
        ));
        assert!(matches!(
            GameConfig::from_json("not json"),
            Err(ConfigError::Json(_))
        ));

        let mut config = GameConfig::default();
        config.player_size = -1.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositiveSize { what: "player_size", .. })
        ));
    }

    #[test]
    fn test_rejects_bad_table() {
        let mut config = GameConfig::default();
        config.categories.tiers = vec![
            CategoryTier::new(EnemyCategory::Rare, 0.5, 60.0, 10),
            CategoryTier::new(EnemyCategory::Epic, 0.1, 80.0, 80),
        ];
        assert!(matches!(config.validate(), Err(ConfigError::ThresholdOrder)));

        config.categories.tiers = vec![CategoryTier::new(EnemyCategory::Epic, 1.5, 80.0, 80)];
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Threshold {
                category: EnemyCategory::Epic,
                ..
            })
        ));
    }
}
