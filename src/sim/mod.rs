//! Simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - No rendering or platform dependencies
//! - Platforms are evaluated in level order
//! - Same inputs and timesteps always give the same state

pub mod collision;
pub mod level;
pub mod state;
pub mod tick;

pub use collision::{Contact, Resolution, classify, overlaps, resolve};
pub use level::{Level, LevelError, Platform, generate_level};
pub use state::{ControlMode, GamePhase, GameState, Rider};
pub use tick::{Intent, apply_intent, update};
