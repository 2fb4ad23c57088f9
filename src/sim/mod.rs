//! Simulation module
//!
//! All gameplay logic lives here. No rendering or platform dependencies:
//! - Randomness comes from a caller-supplied RNG
//! - Time comes from the caller as frame deltas
//! - Every mutation happens inside one call at a time

pub mod arena;
pub mod collision;
pub mod entity;
pub mod input;
pub mod spawn;
pub mod state;
pub mod tick;

pub use arena::Arena;
pub use collision::{aabb_overlap, enemy_at, resolve_collisions, tap_enemy};
pub use entity::{EnemyCategory, Entity, EntityKind};
pub use input::{InputMode, Joystick, key_step};
pub use spawn::{CategoryTable, CategoryTier, SpawnScheduler, try_spawn};
pub use state::{GameEvent, GamePhase, GameState};
pub use tick::{TickInput, tick};
