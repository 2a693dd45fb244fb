//! Snack Dash - catch falling snacks, dodge the junk
//!
//! Core modules:
//! - `sim`: Deterministic game logic (physics, spawning, collisions, state)
//! - `render`: Canvas 2D render sink (wasm only)
//! - `tips`: Rotating motivational tip strings
//!
//! The sim never touches the DOM or the wall clock; the platform layer in
//! `main.rs` drives it once per animation frame and runs the independent
//! streak-bonus interval.

pub mod sim;
pub mod tips;

#[cfg(target_arch = "wasm32")]
pub mod render;

/// Game configuration constants
pub mod consts {
    /// Logical playfield size; physics and collision always run in these
    /// units regardless of display scale
    pub const WORLD_W: f32 = 360.0;
    pub const WORLD_H: f32 = 640.0;

    /// Height of the ground strip at the bottom of the playfield
    pub const GROUND_H: f32 = 48.0;
    /// Y coordinate of the ground line (top of the ground strip)
    pub const GROUND_Y: f32 = WORLD_H - GROUND_H;

    /// Player sprite size
    pub const PLAYER_W: f32 = 32.0;
    pub const PLAYER_H: f32 = 48.0;

    /// Player vertical acceleration per tick
    pub const GRAVITY: f32 = 0.8;
    /// Horizontal speed while a direction is held
    pub const MOVE_SPEED: f32 = 3.0;
    /// Per-tick velocity damping when no direction is held
    pub const FRICTION: f32 = 0.9;
    /// Vertical velocity applied by a grounded jump
    pub const JUMP_VELOCITY: f32 = -12.0;

    /// Falling items are square
    pub const ITEM_SIZE: f32 = 28.0;
    /// Items spawn above the visible playfield
    pub const ITEM_SPAWN_Y: f32 = -20.0;
    /// Per-tick acceleration of a falling item
    pub const ITEM_GRAVITY: f32 = 0.05;
    /// Initial fall speed range, uniform in [min, max)
    pub const ITEM_MIN_VY: f32 = 2.0;
    pub const ITEM_MAX_VY: f32 = 4.0;
    /// Spawn x is kept this far from either playfield edge
    pub const SPAWN_MARGIN: f32 = 18.0;

    /// Ticks between spawns at score 0
    pub const SPAWN_INTERVAL_BASE: i32 = 40;
    /// Difficulty ramp floor; the interval never drops below this
    pub const SPAWN_INTERVAL_MIN: i32 = 15;
    /// Probability that a spawned item is healthy
    pub const HEALTHY_CHANCE: f64 = 0.65;

    /// Lives at the start of a run
    pub const STARTING_LIVES: i32 = 3;

    /// Points for catching a healthy item mid-air
    pub const CATCH_SCORE: u32 = 20;
    /// Lesser reward when a healthy item reaches the ground uncaught
    pub const GROUND_SCORE: u32 = 10;
    /// Score penalty for catching junk (clamped at zero)
    pub const JUNK_CATCH_PENALTY: u32 = 15;

    /// Streak bonus fires at multiples of this streak length
    pub const STREAK_BONUS_EVERY: u32 = 5;
    /// Points awarded by the streak bonus
    pub const STREAK_BONUS_SCORE: u32 = 15;
    /// Wall-clock cadence of the bonus timer, independent of frame rate
    pub const BONUS_INTERVAL_MS: i32 = 3_000;
    /// How long a bonus tip stays on screen before reverting
    pub const TIP_DISPLAY_MS: i32 = 4_500;
}
