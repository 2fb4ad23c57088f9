//! Game loop
//!
//! Owns the session: config, state, input source, spawn timer and RNG.
//! Hosts forward their callbacks (animation frame, pointer, key, tap,
//! start button) here one at a time and drain events afterwards.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::config::GameConfig;
use crate::consts::MAX_FRAME_MS;
use crate::sim::{
    Arena, GameEvent, GamePhase, GameState, InputMode, Joystick, SpawnScheduler, TickInput,
    enemy_at, key_step, tap_enemy, tick, try_spawn,
};

/// Game instance holding all session state
pub struct Game {
    config: GameConfig,
    state: GameState,
    mode: InputMode,
    joystick: Joystick,
    scheduler: SpawnScheduler,
    rng: Pcg32,
    seed: u64,
}

impl Game {
    /// Create an idle game. `mode` is fixed for the whole session.
    pub fn new(config: GameConfig, mode: InputMode, seed: u64) -> Self {
        let state = GameState::new(Arena::default(), config.player_size);
        let joystick = Joystick::new(config.joystick_max_radius);
        let scheduler = SpawnScheduler::new(config.spawn_interval_ms);
        log::info!(
            "{} game ready ({:?} input, seed {})",
            config.variant.as_str(),
            mode,
            seed
        );
        Self {
            config,
            state,
            mode,
            joystick,
            scheduler,
            rng: Pcg32::seed_from_u64(seed),
            seed,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn mode(&self) -> InputMode {
        self.mode
    }

    pub fn joystick(&self) -> &Joystick {
        &self.joystick
    }

    pub fn score(&self) -> u64 {
        self.state.score
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Start trigger. A second call while running is ignored.
    pub fn start(&mut self, arena: Arena) -> bool {
        let started = self.state.start(arena);
        if started {
            self.scheduler.reset();
            log::info!("Game started in {}x{} arena", arena.width(), arena.height());
        }
        started
    }

    /// Throw away the session and start a fresh one
    pub fn restart(&mut self, arena: Arena, seed: u64) {
        self.state = GameState::new(arena, self.config.player_size);
        self.joystick = Joystick::new(self.config.joystick_max_radius);
        self.scheduler = SpawnScheduler::new(self.config.spawn_interval_ms);
        self.rng = Pcg32::seed_from_u64(seed);
        self.seed = seed;
        self.start(arena);
        log::info!("Game restarted with seed: {}", seed);
    }

    /// One animation frame: move and collide, then run any spawns due.
    /// Returns the number of enemies caught.
    pub fn frame(&mut self, arena: Arena, dt_ms: f32) -> u32 {
        if !self.state.is_running() {
            return 0;
        }

        let input = TickInput {
            direction: match self.mode {
                InputMode::Joystick => self.joystick.output(),
                InputMode::Keyboard => Vec2::ZERO,
            },
        };
        let caught = tick(&mut self.state, &input, arena, self.config.player_speed);

        // Non-finite deltas advance nothing
        let dt_ms = if dt_ms.is_finite() { dt_ms.min(MAX_FRAME_MS) } else { 0.0 };
        let due = self.scheduler.advance(dt_ms);
        for _ in 0..due {
            try_spawn(
                &mut self.state,
                arena,
                &self.config.categories,
                self.config.max_enemies,
                &mut self.rng,
            );
        }
        caught
    }

    /// Pointer pressed on the joystick; `center` is the base's center now
    pub fn on_pointer_down(&mut self, pointer_id: i32, at: Vec2, center: Vec2) {
        if self.mode == InputMode::Joystick {
            self.joystick.pointer_down(pointer_id, at, center);
        }
    }

    pub fn on_pointer_move(&mut self, pointer_id: i32, at: Vec2) {
        if self.mode == InputMode::Joystick {
            self.joystick.pointer_move(pointer_id, at);
        }
    }

    pub fn on_pointer_up(&mut self, pointer_id: i32) {
        self.joystick.pointer_up(pointer_id);
    }

    pub fn on_pointer_cancel(&mut self, pointer_id: i32) {
        self.joystick.pointer_cancel(pointer_id);
    }

    /// Discrete keyboard step, applied immediately. Returns true if the key
    /// was a movement key.
    pub fn on_key_down(&mut self, key: &str, arena: Arena) -> bool {
        if self.mode != InputMode::Keyboard || !self.state.is_running() {
            return false;
        }
        let Some(step) = key_step(key) else {
            return false;
        };
        if !arena.is_degenerate() {
            let distance = self.config.key_step_distance();
            self.state.move_player(step * distance, arena);
        }
        true
    }

    /// Tap at an arena position. Removes the enemy under it when tap
    /// removal is enabled; returns the points credited.
    pub fn on_tap(&mut self, at: Vec2) -> Option<u32> {
        if !self.config.tap_to_remove {
            return None;
        }
        let id = enemy_at(&self.state, at)?;
        tap_enemy(&mut self.state, id)
    }

    /// Tap on a specific enemy (host already resolved the target)
    pub fn on_enemy_tapped(&mut self, id: u32) -> Option<u32> {
        if !self.config.tap_to_remove {
            return None;
        }
        tap_enemy(&mut self.state, id)
    }

    /// Take all events since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.state.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Variant;
    use crate::consts::FRAME_MS;
    use crate::sim::{EnemyCategory, Entity};

    fn arena() -> Arena {
        Arena::new(800.0, 600.0)
    }

    fn keyboard_game(variant: Variant) -> Game {
        let mut game = Game::new(GameConfig::from_variant(variant), InputMode::Keyboard, 1);
        game.start(arena());
        game
    }

    fn joystick_game(variant: Variant) -> Game {
        let mut game = Game::new(GameConfig::from_variant(variant), InputMode::Joystick, 1);
        game.start(arena());
        game
    }

    #[test]
    fn test_idle_until_started() {
        let mut game = Game::new(GameConfig::default(), InputMode::Joystick, 9);
        assert_eq!(game.phase(), GamePhase::Idle);
        assert_eq!(game.frame(arena(), 5000.0), 0);
        assert_eq!(game.state().live_count(), 0);

        assert!(game.start(arena()));
        assert!(!game.start(arena()));
        assert_eq!(game.phase(), GamePhase::Running);
        assert_eq!(game.state().player.pos, Vec2::new(380.0, 280.0));
    }

    #[test]
    fn test_arrow_right_moves_twenty() {
        let mut game = keyboard_game(Variant::Swarm);
        assert_eq!(game.config().player_speed, 4.0);
        assert!(game.on_key_down("ArrowRight", arena()));
        assert_eq!(game.state().player.pos, Vec2::new(400.0, 280.0));

        // Clamped at the wall
        for _ in 0..100 {
            game.on_key_down("d", arena());
        }
        assert_eq!(game.state().player.pos.x, 760.0);
    }

    #[test]
    fn test_keyboard_ignored_in_joystick_mode() {
        let mut game = joystick_game(Variant::Swarm);
        assert!(!game.on_key_down("ArrowRight", arena()));
        assert_eq!(game.state().player.pos, Vec2::new(380.0, 280.0));
        assert!(!keyboard_game(Variant::Classic).on_key_down("q", arena()));
    }

    #[test]
    fn test_keyboard_mode_does_not_drift_per_frame() {
        let mut game = keyboard_game(Variant::Classic);
        game.on_key_down("ArrowUp", arena());
        let pos = game.state().player.pos;
        for _ in 0..10 {
            game.frame(arena(), FRAME_MS);
        }
        assert_eq!(game.state().player.pos, pos);
    }

    #[test]
    fn test_joystick_drives_player() {
        let mut game = joystick_game(Variant::Classic);
        let center = Vec2::new(100.0, 500.0);
        game.on_pointer_down(1, center + Vec2::new(100.0, 0.0), center);
        game.frame(arena(), FRAME_MS);
        assert_eq!(game.state().player.pos, Vec2::new(382.0, 280.0));

        game.on_pointer_up(1);
        game.frame(arena(), FRAME_MS);
        assert_eq!(game.state().player.pos, Vec2::new(382.0, 280.0));
    }

    #[test]
    fn test_spawns_follow_interval_and_cap() {
        let mut game = joystick_game(Variant::Classic);
        // Two intervals of 1200 ms in 60 Hz frames
        let frames = (2400.0 / FRAME_MS).ceil() as usize + 1;
        for _ in 0..frames {
            game.frame(arena(), FRAME_MS);
        }
        let spawned = game
            .drain_events()
            .iter()
            .filter(|e| matches!(e, GameEvent::EnemySpawned { .. }))
            .count();
        // Any spawn under the centered player is caught immediately, so count events
        assert_eq!(spawned, 2);

        for _ in 0..10_000 {
            game.frame(arena(), 1200.0);
        }
        assert!(game.state().live_count() <= 15);
    }

    #[test]
    fn test_non_finite_frame_delta_does_not_spawn() {
        let mut game = joystick_game(Variant::Frenzy);
        game.drain_events();
        for dt in [f32::NAN, f32::INFINITY, f32::NEG_INFINITY, f32::NAN] {
            game.frame(arena(), dt);
        }
        assert!(
            !game
                .drain_events()
                .iter()
                .any(|e| matches!(e, GameEvent::EnemySpawned { .. }))
        );
        assert_eq!(game.state().live_count(), 0);

        // A bad delta does not poison the timer for later frames
        for _ in 0..4 {
            game.frame(arena(), 100.0);
        }
        assert!(
            game.drain_events()
                .iter()
                .any(|e| matches!(e, GameEvent::EnemySpawned { .. }))
        );
    }

    #[test]
    fn test_time_ticks_count_running_frames() {
        let mut game = Game::new(GameConfig::default(), InputMode::Keyboard, 3);
        game.frame(arena(), FRAME_MS);
        assert_eq!(game.state().time_ticks, 0);

        game.start(arena());
        for _ in 0..30 {
            game.frame(arena(), FRAME_MS);
        }
        assert_eq!(game.state().time_ticks, 30);

        game.restart(arena(), 4);
        assert_eq!(game.state().time_ticks, 0);
    }

    #[test]
    fn test_tap_requires_variant_support() {
        let mut classic = joystick_game(Variant::Classic);
        classic.state.enemies.push(Entity::enemy(
            99,
            EnemyCategory::Epic,
            Vec2::ZERO,
            80.0,
            80,
        ));
        assert_eq!(classic.on_tap(Vec2::new(10.0, 10.0)), None);
        assert_eq!(classic.state().live_count(), 1);

        let mut swarm = joystick_game(Variant::Swarm);
        swarm.state.enemies.push(Entity::enemy(
            99,
            EnemyCategory::Epic,
            Vec2::ZERO,
            80.0,
            80,
        ));
        assert_eq!(swarm.on_tap(Vec2::new(10.0, 10.0)), Some(80));
        assert_eq!(swarm.score(), 80);
        assert_eq!(swarm.on_enemy_tapped(99), None);
    }

    #[test]
    fn test_restart_resets_session() {
        let mut game = keyboard_game(Variant::Swarm);
        game.state.enemies.push(Entity::enemy(
            50,
            EnemyCategory::Baseline,
            Vec2::new(395.0, 285.0),
            40.0,
            1,
        ));
        game.on_key_down("ArrowRight", arena());
        game.frame(arena(), FRAME_MS);
        assert_eq!(game.score(), 1);

        game.restart(arena(), 77);
        assert_eq!(game.score(), 0);
        assert_eq!(game.seed(), 77);
        assert_eq!(game.phase(), GamePhase::Running);
        assert_eq!(game.state().live_count(), 0);
        assert_eq!(game.state().player.pos, Vec2::new(380.0, 280.0));
    }

    #[test]
    fn test_same_seed_same_spawns() {
        let run = |seed| {
            let mut game = Game::new(GameConfig::from_variant(Variant::Frenzy), InputMode::Keyboard, seed);
            game.start(arena());
            for _ in 0..120 {
                game.frame(arena(), FRAME_MS);
            }
            game.state()
                .enemies
                .iter()
                .map(|e| (e.id, e.pos))
                .collect::<Vec<_>>()
        };
        assert_eq!(run(5), run(5));
    }
}
