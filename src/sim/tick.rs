//! Per-tick simulation update and player intents
//!
//! `update` is the only place rider kinematics are integrated.

use std::ops::ControlFlow;

use super::collision::{Resolution, resolve};
use super::state::{ControlMode, GamePhase, GameState};
use crate::consts::*;

/// Discrete player intents (edge-triggered, applied immediately)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Set vertical velocity to the rise impulse
    Rise,
    /// Manual mode: slow down / go left
    MoveLeft,
    /// Manual mode: speed up
    MoveRight,
    /// Switch between Auto and Manual
    ToggleControlMode,
    /// Start a full boost
    StartBoost,
    /// Back to the spawn point
    Restart,
    /// Stop the game loop
    Quit,
}

/// Apply an intent to the session. Returns `Break` when the loop should stop.
pub fn apply_intent(state: &mut GameState, intent: Intent) -> ControlFlow<()> {
    match intent {
        Intent::Rise => state.jump(),
        Intent::MoveLeft => state.move_left(),
        Intent::MoveRight => state.move_right(),
        Intent::ToggleControlMode => {
            state.toggle_control_mode();
            log::info!("Control mode: {}", state.control_mode.as_str());
        }
        Intent::StartBoost => state.start_boost(),
        Intent::Restart => {
            state.restart();
            log::info!("Session restarted");
        }
        Intent::Quit => return ControlFlow::Break(()),
    }
    ControlFlow::Continue(())
}

/// Advance the session by `dt` seconds.
///
/// Position is integrated with the previous tick's velocity, then gravity,
/// horizontal control and boost update the velocity, then the rider is
/// resolved against the level. Does nothing once the session has ended.
/// Negative or non-finite `dt` is treated as zero.
pub fn update(state: &mut GameState, dt: f64) {
    if state.phase == GamePhase::Ended {
        return;
    }
    let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };

    state.time += dt;
    state.ticks += 1;

    let rider = &mut state.rider;
    rider.pos += rider.vel * dt;

    // Boost suspends gravity outright
    if !rider.is_boosting() {
        rider.vel.y -= GRAVITY * dt;
    }

    rider.vel.x = match state.control_mode {
        ControlMode::Auto => AUTO_BASE_SPEED + state.time,
        ControlMode::Manual => state.manual_dx,
    };

    if rider.is_boosting() {
        rider.vel.x *= BOOST_MULTIPLIER;
        rider.boost_remaining = (rider.boost_remaining - BOOST_DECAY_PER_TICK).max(0.0);
    }

    match resolve(state.rider.pos, state.level().platforms()) {
        Resolution::Clear => {}
        Resolution::Land { rest_y } => {
            state.rider.pos.y = rest_y;
            state.rider.vel.y = 0.0;
        }
        Resolution::Crash { index } => {
            state.phase = GamePhase::Ended;
            log::info!(
                "Crashed into platform {} at ({:.2}, {:.2}) after {:.2}s",
                index,
                state.rider.pos.x,
                state.rider.pos.y,
                state.time
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Level, Platform};
    use glam::DVec2;
    use proptest::prelude::*;

    const EPS: f64 = 1e-9;

    fn manual(platforms: Vec<Platform>) -> GameState {
        GameState::with_mode(Level::new(platforms), ControlMode::Manual)
    }

    #[test]
    fn test_position_uses_previous_velocity() {
        let mut state = manual(Vec::new());
        state.rider.vel.y = 4.0;

        update(&mut state, 0.5);
        // y moved with the old dy; gravity only reached the velocity
        assert!((state.rider.pos.y - (3.0 + 0.5 * 4.0)).abs() < EPS);
        assert!((state.rider.vel.y - (4.0 - GRAVITY * 0.5)).abs() < EPS);

        update(&mut state, 0.5);
        let expected = 5.0 + 0.5 * (4.0 - GRAVITY * 0.5);
        assert!((state.rider.pos.y - expected).abs() < EPS);
    }

    #[test]
    fn test_boost_suppresses_gravity() {
        let mut state = manual(Vec::new());
        state.rider.vel.y = -3.0;
        state.start_boost();

        update(&mut state, 0.1);
        assert_eq!(state.rider.vel.y, -3.0);
        assert!((state.rider.boost_remaining - (1.0 - BOOST_DECAY_PER_TICK)).abs() < EPS);
    }

    #[test]
    fn test_boost_decays_per_tick_and_clamps() {
        let mut state = manual(Vec::new());
        state.start_boost();
        for _ in 0..49 {
            update(&mut state, SIM_DT);
        }
        assert!(state.rider.is_boosting());
        for _ in 0..2 {
            update(&mut state, SIM_DT);
        }
        assert_eq!(state.rider.boost_remaining, 0.0);

        state.rider.boost_remaining = 0.01;
        update(&mut state, SIM_DT);
        assert_eq!(state.rider.boost_remaining, 0.0);
    }

    #[test]
    fn test_boost_doubles_speed_for_the_tick_only() {
        let mut state = manual(Vec::new());
        state.move_right();
        state.move_right();
        state.rider.boost_remaining = 0.03;

        update(&mut state, SIM_DT);
        assert_eq!(state.rider.vel.x, 8.0);
        update(&mut state, SIM_DT);
        assert_eq!(state.rider.vel.x, 8.0);
        // Boost ran out: back to the base speed, not compounding
        update(&mut state, SIM_DT);
        assert_eq!(state.rider.vel.x, 4.0);
    }

    #[test]
    fn test_auto_speed_tracks_elapsed_time() {
        let mut state = GameState::new(Level::default());
        state.rider.vel.x = 50.0;

        let mut elapsed = 0.0;
        for dt in [0.016, 0.033, 0.1, 0.0, 0.07] {
            elapsed += dt;
            update(&mut state, dt);
            assert_eq!(state.rider.vel.x, 2.0 + elapsed);
        }
        assert_eq!(state.time, elapsed);
    }

    #[test]
    fn test_auto_speed_ignores_manual_speed_after_toggle() {
        let mut state = manual(Vec::new());
        for _ in 0..3 {
            let _ = apply_intent(&mut state, Intent::MoveRight);
        }
        for _ in 0..3 {
            update(&mut state, 0.25);
        }
        assert_eq!(state.rider.vel.x, 6.0);

        let _ = apply_intent(&mut state, Intent::ToggleControlMode);
        assert_eq!(state.control_mode, ControlMode::Auto);
        // Auto speed depends on elapsed time alone
        state.manual_dx = 12.0;
        update(&mut state, 0.25);
        assert_eq!(state.time, 1.0);
        assert_eq!(state.rider.vel.x, 2.0 + state.time);
    }

    #[test]
    fn test_auto_speed_is_boosted() {
        let mut state = GameState::new(Level::default());
        state.start_boost();
        update(&mut state, 0.5);
        assert_eq!(state.rider.vel.x, 2.0 * (2.0 + 0.5));
    }

    #[test]
    fn test_landing_snaps_to_top() {
        let mut state = manual(vec![Platform::new(0.0, 1.0, 4.0, 1.0)]);
        state.rider.pos = DVec2::new(0.0, 2.0);
        state.rider.vel.y = -1.0;

        update(&mut state, 0.1);

        assert_eq!(state.rider.pos.y, 2.0);
        assert_eq!(state.rider.vel.y, 0.0);
        assert_eq!(state.phase, GamePhase::Running);
    }

    #[test]
    fn test_side_hit_is_fatal_and_leaves_position() {
        let mut state = manual(vec![Platform::new(0.0, 1.0, 4.0, 1.0)]);
        state.rider.pos = DVec2::new(-1.9, 1.0);

        update(&mut state, 0.01);

        assert!(state.is_ended());
        // Integration ran with dy = 0, collision did not move the rider
        assert_eq!(state.rider.pos, DVec2::new(-1.9, 1.0));
    }

    #[test]
    fn test_update_is_noop_once_ended() {
        let mut state = manual(Vec::new());
        state.rider.vel = DVec2::new(3.0, 3.0);
        state.phase = GamePhase::Ended;
        let before = state.clone();

        update(&mut state, 0.25);

        assert_eq!(state.rider, before.rider);
        assert_eq!(state.time, before.time);
        assert_eq!(state.ticks, before.ticks);
    }

    #[test]
    fn test_bad_timesteps_are_zero() {
        let mut state = manual(Vec::new());
        state.rider.vel = DVec2::new(1.0, 1.0);
        update(&mut state, -0.5);
        update(&mut state, f64::NAN);
        assert_eq!(state.rider.pos, GameState::spawn_point());
        assert_eq!(state.time, 0.0);
    }

    #[test]
    fn test_auto_run_on_flat_ground_survives() {
        let mut state = GameState::new(Level::new(vec![Platform::new(-2.0, 1.0, 1000.0, 1.0)]));
        for _ in 0..(5.0 / SIM_DT) as usize {
            update(&mut state, SIM_DT);
        }
        assert!(!state.is_ended());
        assert!((state.rider.pos.y - 2.0).abs() < EPS);
        assert!(state.rider.pos.x > 10.0);
    }

    #[test]
    fn test_auto_run_into_wall_ends() {
        let level = Level::new(vec![
            Platform::new(-2.0, 1.0, 1000.0, 1.0),
            Platform::new(10.0, 4.0, 2.0, 4.0),
        ]);
        let mut state = GameState::new(level);
        for _ in 0..(10.0 / SIM_DT) as usize {
            update(&mut state, SIM_DT);
            if state.is_ended() {
                break;
            }
        }
        assert!(state.is_ended());
        assert!(state.rider.pos.x < 10.0);
    }

    #[test]
    fn test_restart_after_crash_resumes() {
        let mut state = manual(vec![Platform::new(0.0, 1.0, 4.0, 1.0)]);
        state.rider.pos = DVec2::new(-1.9, 1.0);
        update(&mut state, 0.01);
        assert!(state.is_ended());

        assert_eq!(apply_intent(&mut state, Intent::Restart), ControlFlow::Continue(()));
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.time, 0.0);
        assert_eq!(state.rider.pos, GameState::spawn_point());

        update(&mut state, SIM_DT);
        assert!(state.time > 0.0);
    }

    #[test]
    fn test_intents_dispatch() {
        let mut state = GameState::new(Level::default());
        let _ = apply_intent(&mut state, Intent::ToggleControlMode);
        assert_eq!(state.control_mode, ControlMode::Manual);
        let _ = apply_intent(&mut state, Intent::MoveRight);
        assert_eq!(state.rider.vel.x, MOVE_STEP);
        let _ = apply_intent(&mut state, Intent::MoveLeft);
        let _ = apply_intent(&mut state, Intent::MoveLeft);
        assert_eq!(state.rider.vel.x, -MOVE_STEP);
        let _ = apply_intent(&mut state, Intent::Rise);
        assert_eq!(state.rider.vel.y, JUMP_VELOCITY);
        let _ = apply_intent(&mut state, Intent::StartBoost);
        assert_eq!(state.rider.boost_remaining, BOOST_DURATION);
        assert_eq!(apply_intent(&mut state, Intent::Quit), ControlFlow::Break(()));
    }

    proptest! {
        #[test]
        fn prop_free_fall_integration(t in 0.0f64..2.0, dy0 in -30.0f64..30.0) {
            let mut state = manual(Vec::new());
            state.rider.vel.y = dy0;
            update(&mut state, t);
            prop_assert!((state.rider.pos.y - (3.0 + t * dy0)).abs() < 1e-9);
            prop_assert!((state.rider.vel.y - (dy0 - GRAVITY * t)).abs() < 1e-9);
        }

        #[test]
        fn prop_boost_never_negative(start in 0.0f64..1.0, ticks in 0usize..200) {
            let mut state = manual(Vec::new());
            state.rider.boost_remaining = start;
            for _ in 0..ticks {
                update(&mut state, SIM_DT);
                prop_assert!(state.rider.boost_remaining >= 0.0);
            }
        }

        #[test]
        fn prop_restart_is_idempotent(
            x in -100.0f64..100.0,
            y in -100.0f64..100.0,
            dx in -50.0f64..50.0,
            dy in -50.0f64..50.0,
            time in 0.0f64..500.0,
            ended in any::<bool>(),
        ) {
            let mut state = manual(vec![Platform::new(0.0, 1.0, 4.0, 1.0)]);
            state.rider.pos = DVec2::new(x, y);
            state.rider.vel = DVec2::new(dx, dy);
            state.time = time;
            if ended {
                state.phase = GamePhase::Ended;
            }
            state.restart();
            let once = (state.rider, state.time, state.phase);
            state.restart();
            prop_assert_eq!(once, (state.rider, state.time, state.phase));
            prop_assert_eq!(state.rider.pos, GameState::spawn_point());
            prop_assert_eq!(state.rider.vel, DVec2::ZERO);
            prop_assert_eq!(state.time, 0.0);
            prop_assert_eq!(state.phase, GamePhase::Running);
        }
    }
}
