//! Collision detection and removal
//!
//! Player vs. enemy is a plain axis-aligned box test. Open intervals:
//! boxes that only share an edge do not collide.

use glam::Vec2;

use super::state::{GameEvent, GameState};

/// Strict AABB overlap between two top-left/size boxes
#[inline]
pub fn aabb_overlap(a_pos: Vec2, a_size: Vec2, b_pos: Vec2, b_size: Vec2) -> bool {
    let a_max = a_pos + a_size;
    let b_max = b_pos + b_size;
    a_pos.x < b_max.x && a_max.x > b_pos.x && a_pos.y < b_max.y && a_max.y > b_pos.y
}

/// Remove every enemy overlapping the player and credit its points.
///
/// Each enemy is tested once against the player's current box. Returns the
/// number of enemies caught.
pub fn resolve_collisions(state: &mut GameState) -> u32 {
    let player_pos = state.player.pos;
    let player_size = state.player.size;

    let mut caught = 0u32;
    let mut points = 0u64;
    let events = &mut state.events;
    state.enemies.retain(|enemy| {
        if !aabb_overlap(player_pos, player_size, enemy.pos, enemy.size) {
            return true;
        }
        if let Some(category) = enemy.category() {
            events.push(GameEvent::EnemyCaught {
                id: enemy.id,
                category,
                points: enemy.points,
            });
            log::debug!("Caught {} #{} (+{})", category.as_str(), enemy.id, enemy.points);
        }
        caught += 1;
        points += u64::from(enemy.points);
        false
    });

    state.add_score(points);
    caught
}

/// Topmost (most recently spawned) enemy under `point`
pub fn enemy_at(state: &GameState, point: Vec2) -> Option<u32> {
    state
        .enemies
        .iter()
        .filter(|e| e.contains(point))
        .max_by_key(|e| e.id)
        .map(|e| e.id)
}

/// Remove a tapped enemy and credit its points regardless of player distance.
///
/// Returns the points credited, or `None` when `id` is not a live enemy
/// (for instance, it was already caught this frame).
pub fn tap_enemy(state: &mut GameState, id: u32) -> Option<u32> {
    if !state.is_running() {
        return None;
    }
    let enemy = state.remove_enemy(id)?;
    let category = enemy.category()?;
    state.events.push(GameEvent::EnemyTapped {
        id,
        category,
        points: enemy.points,
    });
    state.add_score(u64::from(enemy.points));
    log::debug!("Tapped {} #{} (+{})", category.as_str(), id, enemy.points);
    Some(enemy.points)
}
