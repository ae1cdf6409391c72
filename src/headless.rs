//! Headless runs: drive a session at the fixed timestep without a window
//!
//! Used by the native binary and by tests that play whole levels.

use crate::consts::SIM_DT;
use crate::hud::StatusLine;
use crate::sim::{GameState, update};

/// How a headless run finished
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunReport {
    /// Fixed steps simulated by this run
    pub ticks: u64,
    /// Simulated seconds
    pub elapsed: f64,
    /// False if the rider crashed before the time ran out
    pub survived: bool,
    /// Rider state at the end of the run
    pub status: StatusLine,
}

/// Simulate up to `seconds` of play with no input, stopping early on a crash.
///
/// Negative or non-finite durations run nothing.
pub fn run_for(state: &mut GameState, seconds: f64) -> RunReport {
    let steps = if seconds.is_finite() && seconds > 0.0 {
        (seconds / SIM_DT).round() as u64
    } else {
        0
    };
    let start = state.ticks;
    let mut next_report = state.time.floor() + 1.0;

    while state.ticks - start < steps && !state.is_ended() {
        update(state, SIM_DT);

        if state.time >= next_report {
            log::debug!("{}", StatusLine::capture(state, 1.0 / SIM_DT));
            next_report += 1.0;
        }
    }

    RunReport {
        ticks: state.ticks - start,
        elapsed: state.time,
        survived: !state.is_ended(),
        status: StatusLine::capture(state, 1.0 / SIM_DT),
    }
}
