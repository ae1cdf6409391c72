//! Diagnostic HUD line and frame-rate measurement

use std::fmt;

use crate::sim::{ControlMode, GameState};

/// Length of one fps sampling window (seconds)
const FPS_WINDOW: f64 = 0.5;

/// Frame-rate counter sampled over half-second windows
#[derive(Debug, Clone, Default)]
pub struct FpsCounter {
    frames: u32,
    timer: f64,
    fps: f64,
}

impl FpsCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one rendered frame that took `dt` seconds
    pub fn frame(&mut self, dt: f64) {
        self.timer += dt;
        if self.timer > FPS_WINDOW {
            self.fps = f64::from(self.frames) / FPS_WINDOW;
            self.frames = 0;
            self.timer -= FPS_WINDOW;
        }
        self.frames += 1;
    }

    /// Most recent measurement (0 until the first window closes)
    pub fn fps(&self) -> f64 {
        self.fps
    }
}

/// Snapshot of the values shown in the diagnostic line
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatusLine {
    pub x: f64,
    pub y: f64,
    pub dx: f64,
    pub dy: f64,
    pub boost: f64,
    pub fps: f64,
    pub mode: ControlMode,
    pub ended: bool,
}

impl StatusLine {
    pub fn capture(state: &GameState, fps: f64) -> Self {
        let rider = &state.rider;
        Self {
            x: rider.pos.x,
            y: rider.pos.y,
            dx: rider.vel.x,
            dy: rider.vel.y,
            boost: rider.boost_remaining,
            fps,
            mode: state.control_mode,
            ended: state.is_ended(),
        }
    }
}

impl fmt::Display for StatusLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "position({:.2}, {:.2}) speed({:.2}, {:.2}) dash: {:.2} fps: {:.0}",
            self.x, self.y, self.dx, self.dy, self.boost, self.fps
        )
    }
}
