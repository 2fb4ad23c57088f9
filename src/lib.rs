//! Arena Chase - steer a square around a bounded arena and catch what spawns
//!
//! Core modules:
//! - `sim`: Simulation (input, arena clamping, spawning, collisions, game state)
//! - `game`: The game loop tying the simulation together for a host
//! - `config`: Variant presets and the enemy category table
//! - `renderer`: Projection of entities to positioned rectangles
//! - `platform`: Browser capability checks

pub mod config;
pub mod error;
pub mod game;
pub mod platform;
pub mod renderer;
pub mod sim;

pub use config::{ConfigSource, GameConfig, InputPreference, Variant};
pub use error::ConfigError;
pub use game::Game;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Joystick stick travel (pixels) that maps to full deflection
    pub const JOYSTICK_MAX_RADIUS: f32 = 50.0;
    /// Keyboard presses move this many times further than one frame of joystick travel
    pub const KEY_STEP_MULTIPLIER: f32 = 5.0;

    /// Player square edge length
    pub const PLAYER_SIZE: f32 = 40.0;

    /// Nominal frame time used by the native demo (60 Hz)
    pub const FRAME_MS: f32 = 1000.0 / 60.0;
    /// Longest frame delta fed to the spawn timer (backgrounded tabs)
    pub const MAX_FRAME_MS: f32 = 250.0;
    /// Maximum spawn attempts per frame to prevent bursts after a stall
    pub const MAX_SPAWN_CATCHUP: u32 = 4;
}

/// Top-left position that centers a box of `size` inside `bounds`
#[inline]
pub fn centered_in(bounds: Vec2, size: Vec2) -> Vec2 {
    ((bounds - size) * 0.5).max(Vec2::ZERO)
}
