//! Per-frame simulation tick
//!
//! Runs once per animation frame while the game is running:
//! sample direction, integrate, clamp, resolve collisions.

use glam::Vec2;

use super::arena::Arena;
use super::collision::resolve_collisions;
use super::state::GameState;

/// Input sampled for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Joystick direction, radial magnitude <= 1 (zero in keyboard mode)
    pub direction: Vec2,
}

/// Advance the game state by one frame.
///
/// Movement is per frame, not per second: `player_speed` is the distance
/// covered in one frame at full deflection. Returns the number of enemies
/// caught this tick.
pub fn tick(state: &mut GameState, input: &TickInput, arena: Arena, player_speed: f32) -> u32 {
    if !state.is_running() {
        return 0;
    }
    state.time_ticks += 1;

    // No layout this frame: hold position
    if !arena.is_degenerate() {
        state.move_player(input.direction * player_speed, arena);
    }

    resolve_collisions(state)
}
