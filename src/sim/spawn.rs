//! Timed enemy spawning
//!
//! A fixed-interval timer accumulates frame time and yields spawn attempts.
//! Each attempt picks a category from a cumulative threshold table and drops
//! the enemy at a uniform random spot. Attempts at the population cap are
//! discarded, not queued.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::arena::Arena;
use super::entity::{EnemyCategory, Entity};
use super::state::{GameEvent, GameState};
use crate::consts::MAX_SPAWN_CATCHUP;

/// One row of the category table
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryTier {
    pub category: EnemyCategory,
    /// Cumulative upper bound: a roll below this picks the tier
    pub threshold: f32,
    /// Square edge length
    pub size: f32,
    pub points: u32,
}

impl CategoryTier {
    pub const fn new(category: EnemyCategory, threshold: f32, size: f32, points: u32) -> Self {
        Self {
            category,
            threshold,
            size,
            points,
        }
    }
}

/// Category distribution, rarest tier first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTable {
    pub tiers: Vec<CategoryTier>,
    /// Taken when no tier threshold matches
    pub baseline: CategoryTier,
}

impl Default for CategoryTable {
    fn default() -> Self {
        Self {
            tiers: vec![
                CategoryTier::new(EnemyCategory::Epic, 1.0 / 30.0, 80.0, 80),
                CategoryTier::new(EnemyCategory::Rare, 1.0 / 15.0, 65.0, 30),
                CategoryTier::new(EnemyCategory::Uncommon, 1.0 / 4.0, 50.0, 8),
            ],
            baseline: CategoryTier::new(EnemyCategory::Baseline, 1.0, 40.0, 1),
        }
    }
}

impl CategoryTable {
    /// Resolve a roll in [0, 1) to a tier
    pub fn pick(&self, roll: f32) -> &CategoryTier {
        self.tiers
            .iter()
            .find(|tier| roll < tier.threshold)
            .unwrap_or(&self.baseline)
    }

    /// Look up the tier for a category
    pub fn tier(&self, category: EnemyCategory) -> Option<&CategoryTier> {
        self.tiers
            .iter()
            .chain(std::iter::once(&self.baseline))
            .find(|tier| tier.category == category)
    }
}

/// Wall-clock spawn timer
#[derive(Debug, Clone)]
pub struct SpawnScheduler {
    interval_ms: f32,
    elapsed_ms: f32,
}

impl SpawnScheduler {
    pub fn new(interval_ms: f32) -> Self {
        Self {
            interval_ms: interval_ms.max(1.0),
            elapsed_ms: 0.0,
        }
    }

    pub fn interval_ms(&self) -> f32 {
        self.interval_ms
    }

    /// Advance the timer and return how many spawn attempts are due.
    /// Backlog beyond [`MAX_SPAWN_CATCHUP`] is dropped.
    pub fn advance(&mut self, dt_ms: f32) -> u32 {
        if !dt_ms.is_finite() || dt_ms <= 0.0 {
            return 0;
        }
        self.elapsed_ms += dt_ms;

        let mut due = 0;
        while self.elapsed_ms >= self.interval_ms {
            self.elapsed_ms -= self.interval_ms;
            due += 1;
            if due == MAX_SPAWN_CATCHUP {
                self.elapsed_ms %= self.interval_ms;
                break;
            }
        }
        due
    }

    pub fn reset(&mut self) {
        self.elapsed_ms = 0.0;
    }
}

/// Try to add one enemy. Returns the new entity ID, or `None` when the game
/// isn't running, the arena has no area, or the population cap is reached.
pub fn try_spawn<R: Rng>(
    state: &mut GameState,
    arena: Arena,
    table: &CategoryTable,
    max_enemies: usize,
    rng: &mut R,
) -> Option<u32> {
    if !state.is_running() || arena.is_degenerate() || state.live_count() >= max_enemies {
        return None;
    }

    let tier = *table.pick(rng.random::<f32>());
    let max = arena.max_pos(Vec2::splat(tier.size));
    let pos = Vec2::new(rng.random::<f32>() * max.x, rng.random::<f32>() * max.y);

    let id = state.next_entity_id();
    state
        .enemies
        .push(Entity::enemy(id, tier.category, pos, tier.size, tier.points));
    state.events.push(GameEvent::EnemySpawned {
        id,
        category: tier.category,
    });
    log::debug!(
        "Spawned {} #{} at ({:.0}, {:.0}), live {}",
        tier.category.as_str(),
        id,
        pos.x,
        pos.y,
        state.live_count()
    );
    Some(id)
}
