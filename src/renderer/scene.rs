//! Per-frame scene assembly: rider marker, platforms, crash overlay

use super::shapes::{filled_rect, outlined_rect};
use super::vertex::{Palette, Vertex};
use crate::camera::{Camera, ScreenRect};
use crate::sim::GameState;

/// Build the triangle list for one frame in logical screen pixels
pub fn build_scene(state: &GameState, camera: &Camera, palette: &Palette) -> Vec<Vertex> {
    let rider = state.rider.pos;
    let mut vertices = Vec::with_capacity(12 * (state.level().platform_count().min(64) + 2));

    for rect in camera.visible_platforms(rider, state.level().platforms()) {
        outlined_rect(
            &mut vertices,
            rect,
            palette.platform_outline,
            palette.platform_fill,
        );
    }

    // Rider on top so it stays visible when clipping into a platform
    filled_rect(&mut vertices, camera.rider_anchor(), palette.rider);

    if state.is_ended() {
        let screen = ScreenRect::new(
            0.0,
            0.0,
            camera.viewport_width_px as f32,
            (camera.viewport_height_units * camera.scale) as f32,
        );
        filled_rect(&mut vertices, screen, palette.crash_overlay);
    }

    vertices
}
