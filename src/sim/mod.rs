//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per rendered frame, no wall-clock reads
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod physics;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{TickEvents, rects_overlap, resolve_items};
pub use physics::step_player;
pub use spawn::{run_spawner, spawn_interval};
pub use state::{FallingItem, GameState, ItemKind, Player, RunPhase};
pub use tick::{TickInput, streak_bonus, tick};
