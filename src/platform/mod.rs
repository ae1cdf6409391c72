//! Platform glue shared by the web and native entry points
//!
//! - `time`: frame deltas and the fixed-step accumulator
//! - `input`: keyboard keys to simulation intents and preference toggles

pub mod input;
pub mod time;

pub use input::{intent_for_key, preference_for_key};
pub use time::FrameClock;
