//! Game state and core simulation types

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::consts::*;

/// Current phase of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunPhase {
    /// Not running yet, no game-over shown
    #[default]
    Idle,
    /// Frame loop active
    Running,
    /// Run ended; terminal until an explicit restart
    GameOver,
}

/// What a falling item does to the run when it resolves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    Healthy,
    Junk,
}

/// The player character. Fixed 32x48 size; `pos` is the top-left corner.
#[derive(Debug, Clone)]
pub struct Player {
    pub pos: Vec2,
    pub vel: Vec2,
    pub on_ground: bool,
}

impl Player {
    /// Starting pose: horizontally centered, just above the ground
    pub fn spawn() -> Self {
        Self {
            pos: Vec2::new((WORLD_W - PLAYER_W) / 2.0, WORLD_H - 60.0),
            vel: Vec2::ZERO,
            on_ground: false,
        }
    }

    pub fn size() -> Vec2 {
        Vec2::new(PLAYER_W, PLAYER_H)
    }
}

/// A falling item. Fixed 28x28 size; `pos` is the top-left corner.
/// Only the vertical velocity evolves, so no full `Vec2` here.
#[derive(Debug, Clone)]
pub struct FallingItem {
    pub pos: Vec2,
    pub vy: f32,
    pub kind: ItemKind,
}

impl FallingItem {
    /// Y coordinate of the item's bottom edge
    pub fn bottom(&self) -> f32 {
        self.pos.y + ITEM_SIZE
    }
}

/// Complete game state, deterministic given the seed and input sequence.
///
/// Single owner of all mutable run state; every component function takes
/// it explicitly rather than reaching for ambient globals.
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// All random draws (item kind, spawn x, fall speed, tip choice) come
    /// from here so equal seeds evolve identically
    pub rng: Pcg32,
    pub phase: RunPhase,
    pub score: u32,
    pub lives: i32,
    /// Consecutive healthy resolutions since the last penalty
    pub streak: u32,
    /// Countdown to the next spawn; zero or below means spawn now
    pub spawn_timer: i32,
    pub player: Player,
    /// Insertion order = spawn order; the rules don't depend on it
    pub items: Vec<FallingItem>,
}

impl GameState {
    /// Create an idle game with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: RunPhase::Idle,
            score: 0,
            lives: STARTING_LIVES,
            streak: 0,
            spawn_timer: 0,
            player: Player::spawn(),
            items: Vec::new(),
        }
    }

    /// Start (or restart) a run: full reset of score, lives, streak,
    /// items and player, then enter `Running`. Valid from `Idle` and
    /// `GameOver`; calling it twice in a row yields the same reset state
    /// no matter how the previous run ended. The RNG stream keeps
    /// advancing across restarts.
    pub fn start(&mut self) {
        self.score = 0;
        self.lives = STARTING_LIVES;
        self.streak = 0;
        self.spawn_timer = 0;
        self.player = Player::spawn();
        self.items.clear();
        self.phase = RunPhase::Running;
    }

    pub fn running(&self) -> bool {
        self.phase == RunPhase::Running
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{TickInput, tick};

    #[test]
    fn new_state_is_idle() {
        let state = GameState::new(7);
        assert_eq!(state.phase, RunPhase::Idle);
        assert_eq!(state.lives, STARTING_LIVES);
        assert_eq!(state.score, 0);
        assert!(state.items.is_empty());
    }

    #[test]
    fn restart_resets_identically() {
        let mut state = GameState::new(42);
        state.start();

        // Wreck the run state, then end it
        state.score = 310;
        state.streak = 9;
        state.lives = 0;
        state.phase = RunPhase::GameOver;
        state.items.push(FallingItem {
            pos: Vec2::new(100.0, 100.0),
            vy: 3.0,
            kind: ItemKind::Junk,
        });
        state.player.pos.x = 5.0;

        state.start();
        assert_eq!(state.phase, RunPhase::Running);
        assert_eq!(state.score, 0);
        assert_eq!(state.lives, STARTING_LIVES);
        assert_eq!(state.streak, 0);
        assert_eq!(state.spawn_timer, 0);
        assert!(state.items.is_empty());
        assert_eq!(state.player.pos, Player::spawn().pos);
    }

    #[test]
    fn equal_seeds_evolve_identically() {
        let mut a = GameState::new(99_999);
        let mut b = GameState::new(99_999);
        a.start();
        b.start();

        let inputs = [
            TickInput {
                move_right: true,
                ..Default::default()
            },
            TickInput {
                move_right: true,
                jump: true,
                ..Default::default()
            },
            TickInput::default(),
            TickInput {
                move_left: true,
                ..Default::default()
            },
        ];

        for _ in 0..50 {
            for input in &inputs {
                tick(&mut a, input);
                tick(&mut b, input);
            }
        }

        assert_eq!(a.score, b.score);
        assert_eq!(a.items.len(), b.items.len());
        assert_eq!(a.player.pos, b.player.pos);
        assert_eq!(a.spawn_timer, b.spawn_timer);
    }
}
