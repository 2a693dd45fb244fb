//! Per-frame simulation tick and the wall-clock streak bonus
//!
//! `tick` advances the run by one frame; `streak_bonus` is the action of
//! the independent 3-second timer. Both are pure state transitions on
//! [`GameState`] so they can be tested without a real clock, and they are
//! only ever interleaved, never concurrent: the platform layer runs both
//! on the one browser thread.

use crate::consts::*;
use crate::sim::collision::{TickEvents, resolve_items};
use crate::sim::physics::step_player;
use crate::sim::spawn::run_spawner;
use crate::sim::state::{GameState, RunPhase};
use crate::tips::pick_tip;

/// Input snapshot for a single tick.
///
/// The movement flags mirror the held keys/buttons; `jump` is a one-shot
/// request the platform clears after the tick that consumed it.
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub move_left: bool,
    pub move_right: bool,
    pub jump: bool,
}

/// Advance the run by one tick: player physics, spawner, item fall,
/// collision resolution. A no-op unless the run is `Running`; once the
/// resolver flips the phase to `GameOver`, score and lives are frozen
/// until the next `start`.
pub fn tick(state: &mut GameState, input: &TickInput) -> TickEvents {
    if state.phase != RunPhase::Running {
        return TickEvents::default();
    }

    step_player(&mut state.player, input);
    run_spawner(state);

    // Items accelerate independently of the player, with no terminal
    // velocity; y strictly increases until the item is removed
    for item in &mut state.items {
        item.pos.y += item.vy;
        item.vy += ITEM_GRAVITY;
    }

    resolve_items(state)
}

/// Action of the wall-clock bonus timer (fires every 3 seconds, on its
/// own schedule, never from the frame loop).
///
/// While the run is active and the streak sits on a multiple of 5, award
/// the bonus and hand back a tip to surface; in every other situation
/// this is a guarded no-op, which lets the platform keep the interval
/// ticking through Idle and GameOver.
pub fn streak_bonus(state: &mut GameState) -> Option<&'static str> {
    if state.phase != RunPhase::Running {
        return None;
    }
    if state.streak == 0 || !state.streak.is_multiple_of(STREAK_BONUS_EVERY) {
        return None;
    }

    state.score += STREAK_BONUS_SCORE;
    state.streak += 1;
    Some(pick_tip(&mut state.rng))
}
