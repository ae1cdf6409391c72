//! Session state and rider kinematics
//!
//! Everything a play session mutates lives in [`GameState`].

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::level::Level;
use crate::consts::*;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GamePhase {
    /// Simulation advancing
    #[default]
    Running,
    /// Rider crashed; only a restart leaves this phase
    Ended,
}

/// Horizontal control policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ControlMode {
    /// Speed grows with elapsed time
    #[default]
    Auto,
    /// Speed accumulates from move intents
    Manual,
}

impl ControlMode {
    pub fn toggled(self) -> Self {
        match self {
            ControlMode::Auto => ControlMode::Manual,
            ControlMode::Manual => ControlMode::Auto,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ControlMode::Auto => "auto",
            ControlMode::Manual => "manual",
        }
    }
}

/// The player-controlled rider
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rider {
    /// Top-left corner of the logical box (world units)
    pub pos: DVec2,
    /// Velocity (units/s)
    pub vel: DVec2,
    /// Seconds of boost left (never negative)
    pub boost_remaining: f64,
}

impl Rider {
    pub fn new(pos: DVec2) -> Self {
        Self {
            pos,
            vel: DVec2::ZERO,
            boost_remaining: 0.0,
        }
    }

    pub fn is_boosting(&self) -> bool {
        self.boost_remaining > 0.0
    }

    /// Put the rider back at `pos`, at rest, without boost
    pub fn reset(&mut self, pos: DVec2) {
        self.pos = pos;
        self.vel = DVec2::ZERO;
        self.boost_remaining = 0.0;
    }
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    pub rider: Rider,
    level: Level,
    /// Elapsed simulation time (seconds)
    pub time: f64,
    pub phase: GamePhase,
    pub control_mode: ControlMode,
    /// Manual-mode base horizontal speed (before boost)
    pub manual_dx: f64,
    /// Simulation tick counter
    pub ticks: u64,
}

impl GameState {
    /// Start a session on `level` in the default control mode
    pub fn new(level: Level) -> Self {
        Self::with_mode(level, ControlMode::default())
    }

    pub fn with_mode(level: Level, control_mode: ControlMode) -> Self {
        Self {
            rider: Rider::new(Self::spawn_point()),
            level,
            time: 0.0,
            phase: GamePhase::Running,
            control_mode,
            manual_dx: 0.0,
            ticks: 0,
        }
    }

    /// Where the rider starts and restarts
    pub fn spawn_point() -> DVec2 {
        DVec2::new(SPAWN_X, SPAWN_Y)
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    pub fn is_ended(&self) -> bool {
        self.phase == GamePhase::Ended
    }

    /// Return to the spawn point and resume running (level is kept)
    pub fn restart(&mut self) {
        self.time = 0.0;
        self.ticks = 0;
        self.rider.reset(Self::spawn_point());
        self.manual_dx = 0.0;
        self.phase = GamePhase::Running;
    }

    /// Replace vertical velocity with the rise impulse
    pub fn jump(&mut self) {
        self.rider.vel.y = JUMP_VELOCITY;
    }

    /// Flip Auto/Manual and stop horizontal motion
    pub fn toggle_control_mode(&mut self) {
        self.control_mode = self.control_mode.toggled();
        self.manual_dx = 0.0;
        self.rider.vel.x = 0.0;
    }

    pub fn move_left(&mut self) {
        self.nudge(-MOVE_STEP);
    }

    pub fn move_right(&mut self) {
        self.nudge(MOVE_STEP);
    }

    /// Manual-mode horizontal speed change; ignored in Auto mode
    fn nudge(&mut self, delta: f64) {
        if self.control_mode != ControlMode::Manual {
            return;
        }
        self.manual_dx = (self.manual_dx + delta).clamp(-MAX_MANUAL_SPEED, MAX_MANUAL_SPEED);
        self.rider.vel.x = self.manual_dx;
    }

    /// Start (or restart) a boost
    pub fn start_boost(&mut self) {
        self.rider.boost_remaining = BOOST_DURATION;
    }
}
