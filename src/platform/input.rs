//! Keyboard mapping
//!
//! Keys are matched on `KeyboardEvent.key` names so the same table serves
//! the browser and any native front end that reports the same names.

use crate::settings::Preference;
use crate::sim::Intent;

/// Map a key-down to an intent. Auto-repeat should be filtered by the caller.
pub fn intent_for_key(key: &str) -> Option<Intent> {
    let intent = match key {
        "ArrowUp" => Intent::Rise,
        "ArrowLeft" => Intent::MoveLeft,
        "ArrowRight" => Intent::MoveRight,
        "d" | "D" => Intent::ToggleControlMode,
        "x" | "X" => Intent::StartBoost,
        "n" | "N" => Intent::Restart,
        "Escape" => Intent::Quit,
        _ => return None,
    };
    Some(intent)
}

/// Map a key-down to a preference toggle
pub fn preference_for_key(key: &str) -> Option<Preference> {
    match key {
        "f" | "F" => Some(Preference::StatusLine),
        "c" | "C" => Some(Preference::HighContrast),
        _ => None,
    }
}
