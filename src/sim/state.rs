//! Game state and core simulation types
//!
//! Everything that changes during a session lives in [`GameState`] and is
//! only mutated from within a single host callback at a time.

use glam::Vec2;

use super::arena::Arena;
use super::entity::{EnemyCategory, Entity};

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Waiting for the start trigger
    Idle,
    /// Active gameplay
    Running,
}

/// Things the host may want to react to (score text, sprite cleanup)
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    Started,
    EnemySpawned {
        id: u32,
        category: EnemyCategory,
    },
    /// Removed by overlapping the player
    EnemyCaught {
        id: u32,
        category: EnemyCategory,
        points: u32,
    },
    /// Removed by a direct tap
    EnemyTapped {
        id: u32,
        category: EnemyCategory,
        points: u32,
    },
    ScoreChanged(u64),
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    pub phase: GamePhase,
    /// Only ever increases
    pub score: u64,
    pub player: Entity,
    /// Live enemies; `enemies.len()` is the live count
    pub enemies: Vec<Entity>,
    /// Events since the host last drained them
    pub events: Vec<GameEvent>,
    /// Frames simulated while running
    pub time_ticks: u64,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create an idle state with the player centered in `arena`
    pub fn new(arena: Arena, player_size: f32) -> Self {
        let size = Vec2::splat(player_size);
        let player = Entity::player(1, arena.center_for(size), player_size);
        Self {
            phase: GamePhase::Idle,
            score: 0,
            player,
            enemies: Vec::new(),
            events: Vec::new(),
            time_ticks: 0,
            next_id: 2,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    pub fn live_count(&self) -> usize {
        self.enemies.len()
    }

    /// Idle -> Running. Calling it again while running changes nothing.
    pub fn start(&mut self, arena: Arena) -> bool {
        if self.is_running() {
            return false;
        }
        // Layout may have settled since construction
        self.player.pos = arena.center_for(self.player.size);
        self.phase = GamePhase::Running;
        self.events.push(GameEvent::Started);
        true
    }

    /// Credit points and report the new total
    pub(crate) fn add_score(&mut self, points: u64) {
        if points == 0 {
            return;
        }
        self.score = self.score.saturating_add(points);
        self.events.push(GameEvent::ScoreChanged(self.score));
    }

    /// Remove an enemy by ID, returning it if it was live
    pub(crate) fn remove_enemy(&mut self, id: u32) -> Option<Entity> {
        let idx = self.enemies.iter().position(|e| e.id == id)?;
        Some(self.enemies.swap_remove(idx))
    }

    /// Move the player by `delta` and keep it inside `arena`
    pub fn move_player(&mut self, delta: Vec2, arena: Arena) {
        self.player.pos = arena.clamp(self.player.pos + delta, self.player.size);
    }
}
