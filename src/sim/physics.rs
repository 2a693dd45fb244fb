//! Player movement integration
//!
//! One pure transform per tick: horizontal accelerate/damp, jump, gravity,
//! ground snap. Deterministic given the player state and input snapshot.

use crate::consts::*;
use crate::sim::state::Player;
use crate::sim::tick::TickInput;

/// Advance the player by one tick from the current input flags.
///
/// The jump request is edge-triggered: it only takes effect if the player
/// is grounded at this instant, and the platform layer clears the flag
/// after every tick so holding the key does not re-fire it.
pub fn step_player(player: &mut Player, input: &TickInput) {
    if input.move_left {
        player.vel.x = -MOVE_SPEED;
    } else if input.move_right {
        player.vel.x = MOVE_SPEED;
    } else {
        // Exponential decay toward zero, never exactly zero
        player.vel.x *= FRICTION;
    }
    player.pos.x = (player.pos.x + player.vel.x).clamp(0.0, WORLD_W - PLAYER_W);

    if input.jump && player.on_ground {
        player.vel.y = JUMP_VELOCITY;
        player.on_ground = false;
    }

    player.vel.y += GRAVITY;
    player.pos.y += player.vel.y;
    if player.pos.y + PLAYER_H >= GROUND_Y {
        // Rest the player's bottom exactly on the ground line
        player.pos.y = GROUND_Y - PLAYER_H;
        player.vel.y = 0.0;
        player.on_ground = true;
    } else {
        player.on_ground = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn grounded_player() -> Player {
        let mut player = Player::spawn();
        step_player(&mut player, &TickInput::default());
        assert!(player.on_ground);
        player
    }

    #[test]
    fn held_direction_sets_velocity() {
        let mut player = grounded_player();
        step_player(
            &mut player,
            &TickInput {
                move_left: true,
                ..Default::default()
            },
        );
        assert_eq!(player.vel.x, -MOVE_SPEED);

        step_player(
            &mut player,
            &TickInput {
                move_right: true,
                ..Default::default()
            },
        );
        assert_eq!(player.vel.x, MOVE_SPEED);
    }

    #[test]
    fn released_direction_decays_toward_zero() {
        let mut player = grounded_player();
        step_player(
            &mut player,
            &TickInput {
                move_right: true,
                ..Default::default()
            },
        );

        // Convergence, not exact equality: damping never reaches zero
        let mut prev = player.vel.x.abs();
        for _ in 0..60 {
            step_player(&mut player, &TickInput::default());
            let cur = player.vel.x.abs();
            assert!(cur < prev);
            assert!(cur > 0.0);
            prev = cur;
        }
        assert!(prev < 0.01);
    }

    #[test]
    fn position_clamped_to_playfield() {
        let mut player = grounded_player();
        player.pos.x = 1.0;
        for _ in 0..30 {
            step_player(
                &mut player,
                &TickInput {
                    move_left: true,
                    ..Default::default()
                },
            );
        }
        assert_eq!(player.pos.x, 0.0);

        for _ in 0..300 {
            step_player(
                &mut player,
                &TickInput {
                    move_right: true,
                    ..Default::default()
                },
            );
        }
        assert_eq!(player.pos.x, WORLD_W - PLAYER_W);
    }

    #[test]
    fn falls_and_snaps_to_ground() {
        let mut player = Player::spawn();
        player.pos.y = GROUND_Y - PLAYER_H - 100.0;
        assert!(!player.on_ground);

        for _ in 0..120 {
            step_player(&mut player, &TickInput::default());
        }
        assert!(player.on_ground);
        assert_eq!(player.pos.y, GROUND_Y - PLAYER_H);
        assert_eq!(player.vel.y, 0.0);
    }

    #[test]
    fn jump_only_when_grounded() {
        let jump = TickInput {
            jump: true,
            ..Default::default()
        };

        let mut player = grounded_player();
        step_player(&mut player, &jump);
        assert!(!player.on_ground);
        assert_eq!(player.vel.y, JUMP_VELOCITY + GRAVITY);
        assert!(player.pos.y < GROUND_Y - PLAYER_H);

        // Mid-air jump request is ignored
        let vy_before = player.vel.y;
        step_player(&mut player, &jump);
        assert_eq!(player.vel.y, vy_before + GRAVITY);
    }

    #[test]
    fn jump_arc_returns_to_ground() {
        let mut player = grounded_player();
        step_player(
            &mut player,
            &TickInput {
                jump: true,
                ..Default::default()
            },
        );

        let mut landed = false;
        for _ in 0..120 {
            step_player(&mut player, &TickInput::default());
            if player.on_ground {
                landed = true;
                break;
            }
        }
        assert!(landed);
        assert_eq!(player.pos.y, GROUND_Y - PLAYER_H);
    }

    proptest! {
        #[test]
        fn friction_never_flips_direction(vx in -50.0f32..50.0) {
            let mut player = grounded_player();
            player.vel.x = vx;
            for _ in 0..200 {
                let before = player.vel.x;
                step_player(&mut player, &TickInput::default());
                prop_assert!(player.vel.x.abs() <= before.abs());
                prop_assert!(player.vel.x.signum() == before.signum() || before == 0.0);
            }
        }

        #[test]
        fn x_stays_in_bounds(
            start in 0.0f32..(360.0 - 32.0),
            lefts in proptest::collection::vec(any::<bool>(), 0..100),
        ) {
            let mut player = grounded_player();
            player.pos.x = start;
            for left in lefts {
                let input = TickInput {
                    move_left: left,
                    move_right: !left,
                    ..Default::default()
                };
                step_player(&mut player, &input);
                prop_assert!(player.pos.x >= 0.0);
                prop_assert!(player.pos.x <= WORLD_W - PLAYER_W);
            }
        }
    }
}
