//! Frame timing
//!
//! Wall-clock frame deltas are clamped and fed into an accumulator that
//! releases fixed `SIM_DT` steps, so the simulation sees the same timestep
//! whatever the display refresh rate.

use crate::consts::{MAX_FRAME_DT, MAX_SUBSTEPS, SIM_DT};

#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    /// Previous timestamp (milliseconds)
    last_ms: Option<f64>,
    accumulator: f64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a monotonic timestamp in milliseconds; returns the frame delta
    /// in seconds, clamped to `0..=MAX_FRAME_DT`. The first call yields `SIM_DT`.
    pub fn advance(&mut self, now_ms: f64) -> f64 {
        let dt = match self.last_ms {
            Some(last) => ((now_ms - last) / 1000.0).clamp(0.0, MAX_FRAME_DT),
            None => SIM_DT,
        };
        self.last_ms = Some(now_ms);
        dt
    }

    /// Add `frame_dt` to the accumulator and return how many fixed steps to run
    pub fn drain_steps(&mut self, frame_dt: f64) -> u32 {
        self.accumulator += frame_dt.min(MAX_FRAME_DT);

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            self.accumulator -= SIM_DT;
            substeps += 1;
        }
        substeps
    }

    /// Forget the accumulated remainder (after a restart or level swap)
    pub fn reset_accumulator(&mut self) {
        self.accumulator = 0.0;
    }
}
