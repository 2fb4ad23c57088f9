//! Rendering module
//!
//! Everything on screen is an absolutely positioned rectangle. This module
//! projects simulation entities to [`Sprite`]s; the DOM writer applies them.

#[cfg(target_arch = "wasm32")]
pub mod dom;

#[cfg(target_arch = "wasm32")]
pub use dom::DomRenderer;

use crate::sim::{Entity, EntityKind, GameState};

/// A positioned rectangle, in arena pixels
#[derive(Debug, Clone, PartialEq)]
pub struct Sprite {
    pub id: u32,
    /// CSS class list
    pub class: &'static str,
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Sprite {
    pub fn from_entity(entity: &Entity) -> Self {
        Self {
            id: entity.id,
            class: class_for(entity.kind),
            left: entity.pos.x,
            top: entity.pos.y,
            width: entity.size.x,
            height: entity.size.y,
        }
    }
}

/// CSS classes per entity kind
pub fn class_for(kind: EntityKind) -> &'static str {
    use crate::sim::EnemyCategory::*;
    match kind {
        EntityKind::Player => "player",
        EntityKind::Enemy(Baseline) => "enemy baseline",
        EntityKind::Enemy(Uncommon) => "enemy uncommon",
        EntityKind::Enemy(Rare) => "enemy rare",
        EntityKind::Enemy(Epic) => "enemy epic",
    }
}

/// Player first, then enemies in spawn order
pub fn sprites(state: &GameState) -> Vec<Sprite> {
    let mut enemies: Vec<&Entity> = state.enemies.iter().collect();
    enemies.sort_by_key(|e| e.id);

    std::iter::once(&state.player)
        .chain(enemies)
        .map(Sprite::from_entity)
        .collect()
}
