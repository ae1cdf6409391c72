//! Rider-relative camera
//!
//! The rider is pinned to a fixed screen anchor and the world scrolls
//! beneath it. World y grows upward, screen y grows downward.

use glam::DVec2;

use crate::consts::{RIDER_H, RIDER_W, SCALE, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::sim::Platform;

/// Axis-aligned rectangle in screen pixels (top-left origin)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenRect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl ScreenRect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// True if any part of the rectangle lies inside a `width x height` screen
    pub fn intersects_screen(&self, width: f32, height: f32) -> bool {
        self.x < width && self.x + self.w > 0.0 && self.y < height && self.y + self.h > 0.0
    }
}

/// Stateless world-to-screen transform
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Pixels per world unit
    pub scale: f64,
    /// Viewport width in pixels
    pub viewport_width_px: f64,
    /// Viewport height in world units
    pub viewport_height_units: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(SCALE, SCREEN_WIDTH as f64, SCREEN_HEIGHT as f64)
    }
}

impl Camera {
    pub fn new(scale: f64, width_px: f64, height_px: f64) -> Self {
        Self {
            scale,
            viewport_width_px: width_px,
            viewport_height_units: height_px / scale,
        }
    }

    /// Map a world point to screen pixels, relative to the rider position
    #[inline]
    pub fn world_to_screen(&self, rider: DVec2, point: DVec2) -> DVec2 {
        let sx = point.x - rider.x + 1.0;
        let sy = rider.y + (self.viewport_height_units - RIDER_H) / 2.0 - point.y;
        DVec2::new(sx, sy) * self.scale
    }

    /// Screen rectangle of a platform
    pub fn project(&self, rider: DVec2, p: &Platform) -> ScreenRect {
        let corner = self.world_to_screen(rider, DVec2::new(p.x, p.y));
        ScreenRect::new(
            corner.x as f32,
            corner.y as f32,
            (p.w * self.scale) as f32,
            (p.h * self.scale) as f32,
        )
    }

    /// Where the rider marker is drawn; independent of the rider's position
    pub fn rider_anchor(&self) -> ScreenRect {
        let corner = self.world_to_screen(DVec2::ZERO, DVec2::ZERO);
        ScreenRect::new(
            corner.x as f32,
            corner.y as f32,
            (RIDER_W * self.scale) as f32,
            (RIDER_H * self.scale) as f32,
        )
    }

    /// Projected platforms that land at least partly on screen
    pub fn visible_platforms<'a>(
        &'a self,
        rider: DVec2,
        platforms: &'a [Platform],
    ) -> impl Iterator<Item = ScreenRect> + 'a {
        let width = self.viewport_width_px as f32;
        let height = (self.viewport_height_units * self.scale) as f32;
        platforms
            .iter()
            .map(move |p| self.project(rider, p))
            .filter(move |r| r.intersects_screen(width, height))
    }
}
