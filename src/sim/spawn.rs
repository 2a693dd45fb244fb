//! Timed item spawning with a score-driven difficulty ramp

use glam::Vec2;
use rand::Rng;

use crate::consts::*;
use crate::sim::state::{FallingItem, GameState, ItemKind};

/// Ticks until the next spawn, given the current score.
///
/// The interval shrinks by one tick per 10 points and bottoms out at
/// `SPAWN_INTERVAL_MIN`.
pub fn spawn_interval(score: u32) -> i32 {
    (SPAWN_INTERVAL_BASE - (score / 10) as i32).max(SPAWN_INTERVAL_MIN)
}

/// Run the spawner for one tick.
///
/// Decrements the countdown; on expiry resets it from the current score
/// and appends one new item: Healthy with probability `HEALTHY_CHANCE`,
/// x uniform inside the spawn margins, starting just above the visible
/// playfield with a random initial fall speed.
pub fn run_spawner(state: &mut GameState) {
    state.spawn_timer -= 1;
    if state.spawn_timer > 0 {
        return;
    }
    state.spawn_timer = spawn_interval(state.score);

    let kind = if state.rng.random_bool(HEALTHY_CHANCE) {
        ItemKind::Healthy
    } else {
        ItemKind::Junk
    };
    let x = state.rng.random_range(SPAWN_MARGIN..WORLD_W - SPAWN_MARGIN);
    let vy = state.rng.random_range(ITEM_MIN_VY..ITEM_MAX_VY);

    state.items.push(FallingItem {
        pos: Vec2::new(x, ITEM_SPAWN_Y),
        vy,
        kind,
    });
}
