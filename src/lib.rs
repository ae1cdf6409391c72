//! Unicorn Attack - A side-scrolling endless runner
//!
//! Core modules:
//! - `sim`: Simulation (rider kinematics, platform collisions, session state)
//! - `camera`: World-to-screen transform relative to the rider
//! - `hud`: Diagnostic status line and frame-rate counter
//! - `headless`: Fixed-step runs without a window
//! - `renderer`: WebGPU rendering pipeline
//! - `platform`: Timing and input glue shared by the entry points
//! - `settings`: Player preferences

pub mod camera;
pub mod headless;
pub mod hud;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use camera::{Camera, ScreenRect};
pub use headless::{RunReport, run_for};
pub use hud::{FpsCounter, StatusLine};
pub use settings::{Preference, Settings, SettingsError};

/// Game configuration constants
pub mod consts {
    /// Window dimensions in pixels
    pub const SCREEN_WIDTH: u32 = 640;
    pub const SCREEN_HEIGHT: u32 = 480;
    /// Pixels per standardized world unit
    pub const SCALE: f64 = 32.0;

    /// Rider logical size (world units)
    pub const RIDER_W: f64 = 2.0;
    pub const RIDER_H: f64 = 1.0;
    /// Where the rider (re)spawns
    pub const SPAWN_X: f64 = 0.0;
    pub const SPAWN_Y: f64 = 3.0;

    /// Downward acceleration (units/s²)
    pub const GRAVITY: f64 = 15.0;
    /// Vertical velocity set by a rise intent (units/s)
    pub const JUMP_VELOCITY: f64 = 10.0;
    /// Horizontal velocity change per manual move intent (units/s)
    pub const MOVE_STEP: f64 = 2.0;
    /// Manual horizontal speed limit (units/s)
    pub const MAX_MANUAL_SPEED: f64 = 20.0;
    /// Auto mode speed at time zero (units/s)
    pub const AUTO_BASE_SPEED: f64 = 2.0;

    /// Horizontal speed multiplier while boosting
    pub const BOOST_MULTIPLIER: f64 = 2.0;
    /// Boost timer value set by a boost intent
    pub const BOOST_DURATION: f64 = 1.0;
    /// Boost timer decrement per update call
    pub const BOOST_DECAY_PER_TICK: f64 = 0.02;

    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f64 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest frame delta the loop will feed the accumulator (seconds)
    pub const MAX_FRAME_DT: f64 = 0.1;
}
