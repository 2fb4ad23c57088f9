//! Player and enemy records

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Enemy rarity tiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyCategory {
    Baseline,
    Uncommon,
    Rare,
    Epic,
}

impl EnemyCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            EnemyCategory::Baseline => "baseline",
            EnemyCategory::Uncommon => "uncommon",
            EnemyCategory::Rare => "rare",
            EnemyCategory::Epic => "epic",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Player,
    Enemy(EnemyCategory),
}

/// An axis-aligned box in arena space
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    pub id: u32,
    pub kind: EntityKind,
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Score credited when this entity is caught (0 for the player)
    pub points: u32,
}

impl Entity {
    pub fn player(id: u32, pos: Vec2, size: f32) -> Self {
        Self {
            id,
            kind: EntityKind::Player,
            pos,
            size: Vec2::splat(size),
            points: 0,
        }
    }

    pub fn enemy(id: u32, category: EnemyCategory, pos: Vec2, size: f32, points: u32) -> Self {
        Self {
            id,
            kind: EntityKind::Enemy(category),
            pos,
            size: Vec2::splat(size),
            points,
        }
    }

    /// Enemy category, `None` for the player
    pub fn category(&self) -> Option<EnemyCategory> {
        match self.kind {
            EntityKind::Enemy(category) => Some(category),
            EntityKind::Player => None,
        }
    }

    /// Bottom-right corner
    pub fn max(&self) -> Vec2 {
        self.pos + self.size
    }

    /// Whether `point` lies inside this entity's box (edges inclusive)
    pub fn contains(&self, point: Vec2) -> bool {
        let max = self.max();
        point.x >= self.pos.x && point.x <= max.x && point.y >= self.pos.y && point.y <= max.y
    }
}
