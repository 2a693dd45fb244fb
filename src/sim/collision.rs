//! Ground and catch resolution, scoring, and the game-over transition
//!
//! The one ordering rule that matters: for any single item, the ground
//! check runs before the catch check. An item whose bottom has crossed
//! the ground line counts as a ground event even if its box also overlaps
//! the player that tick. Reordering changes observable scores.

use glam::Vec2;

use crate::consts::*;
use crate::sim::state::{GameState, ItemKind, Player, RunPhase};

/// What a tick did to externally visible state, so the platform layer
/// knows when to recompute the HUD and when to show the game-over screen.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickEvents {
    /// Score, lives or streak changed this tick
    pub hud_changed: bool,
    /// The run just transitioned to `GameOver`
    pub game_over: bool,
}

/// Axis-aligned box overlap with strict inequality on all four sides;
/// boxes that merely touch do not overlap.
pub fn rects_overlap(a_pos: Vec2, a_size: Vec2, b_pos: Vec2, b_size: Vec2) -> bool {
    a_pos.x < b_pos.x + b_size.x
        && a_pos.x + a_size.x > b_pos.x
        && a_pos.y < b_pos.y + b_size.y
        && a_pos.y + a_size.y > b_pos.y
}

/// Resolve every item against the ground line and the player, in that
/// order per item, removing each item that matches a rule.
///
/// Lives hitting zero flips the run to `GameOver` immediately, but the
/// remaining items of this same pass are still resolved; the tick guard
/// in [`crate::sim::tick::tick`] is what stops later ticks.
pub fn resolve_items(state: &mut GameState) -> TickEvents {
    let mut events = TickEvents::default();

    let mut i = state.items.len();
    while i > 0 {
        i -= 1;
        let item = &state.items[i];
        let kind = item.kind;
        let grounded = item.bottom() > GROUND_Y;
        let caught = !grounded
            && rects_overlap(
                item.pos,
                Vec2::splat(ITEM_SIZE),
                state.player.pos,
                Player::size(),
            );

        if grounded {
            match kind {
                ItemKind::Healthy => {
                    state.score += GROUND_SCORE;
                    state.streak += 1;
                }
                ItemKind::Junk => {
                    state.lives -= 1;
                    state.streak = 0;
                }
            }
        } else if caught {
            match kind {
                ItemKind::Healthy => {
                    state.score += CATCH_SCORE;
                    state.streak += 1;
                }
                ItemKind::Junk => {
                    state.score = state.score.saturating_sub(JUNK_CATCH_PENALTY);
                    state.lives -= 1;
                    state.streak = 0;
                }
            }
        } else {
            continue;
        }

        state.items.remove(i);
        events.hud_changed = true;

        if state.lives <= 0 && state.phase == RunPhase::Running {
            state.phase = RunPhase::GameOver;
            events.game_over = true;
        }
    }

    events
}
