//! Rider vs platform collision
//!
//! Broad phase is a closed AABB overlap test between the rider's logical box
//! and each platform. Overlaps are then classified with a diagonal heuristic:
//! coming in over the platform's top-left diagonal counts as a landing,
//! anything else is a crash.

use glam::DVec2;

use super::level::Platform;
use crate::consts::{RIDER_H, RIDER_W};

/// Diagonal threshold: `(rider.y + rider.x) - (p.y + p.x)` at or above this lands
pub const LANDING_THRESHOLD: f64 = 1.0 - RIDER_W;

/// How an overlap with a single platform is classified
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contact {
    /// Rider came down onto the top surface
    Landing,
    /// Rider hit a side or underside
    Fatal,
}

/// Outcome of the collision pass for one tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Resolution {
    /// No platform overlaps the rider
    Clear,
    /// Snap the rider onto the highest overlapping top (rider y becomes `rest_y`)
    Land { rest_y: f64 },
    /// The platform at `index` ends the session
    Crash { index: usize },
}

/// Broad-phase overlap test (touching edges count as overlap)
#[inline]
pub fn overlaps(rider_pos: DVec2, p: &Platform) -> bool {
    !(p.x > rider_pos.x + RIDER_W
        || p.y < rider_pos.y - RIDER_H
        || p.right() < rider_pos.x
        || p.bottom() > rider_pos.y)
}

/// Classify an overlap. Only meaningful when [`overlaps`] is true.
#[inline]
pub fn classify(rider_pos: DVec2, p: &Platform) -> Contact {
    let s = (rider_pos.y + rider_pos.x) - (p.y + p.x);
    if s >= LANDING_THRESHOLD {
        Contact::Landing
    } else {
        Contact::Fatal
    }
}

/// Resolve the rider against every platform.
///
/// Any fatal overlap wins (the first fatal platform is reported); otherwise
/// the rider rests on the highest overlapping top.
pub fn resolve(rider_pos: DVec2, platforms: &[Platform]) -> Resolution {
    let mut landing: Option<f64> = None;

    for (index, p) in platforms.iter().enumerate() {
        if !overlaps(rider_pos, p) {
            continue;
        }
        match classify(rider_pos, p) {
            Contact::Fatal => return Resolution::Crash { index },
            Contact::Landing => {
                if landing.is_none_or(|top| p.y > top) {
                    landing = Some(p.y);
                }
            }
        }
    }

    match landing {
        Some(top) => Resolution::Land {
            rest_y: top + RIDER_H,
        },
        None => Resolution::Clear,
    }
}
