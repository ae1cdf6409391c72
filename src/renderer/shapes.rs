//! Shape generation for 2D primitives (logical screen pixels)

use super::vertex::Vertex;
use crate::camera::ScreenRect;

/// Outline thickness of platform rectangles (pixels)
pub const OUTLINE_PX: f32 = 1.0;

/// Append two triangles covering `rect`
pub fn filled_rect(out: &mut Vec<Vertex>, rect: ScreenRect, color: [f32; 4]) {
    if rect.w <= 0.0 || rect.h <= 0.0 {
        return;
    }
    let (x0, y0) = (rect.x, rect.y);
    let (x1, y1) = (rect.x + rect.w, rect.y + rect.h);

    out.push(Vertex::new(x0, y0, color));
    out.push(Vertex::new(x1, y0, color));
    out.push(Vertex::new(x0, y1, color));

    out.push(Vertex::new(x0, y1, color));
    out.push(Vertex::new(x1, y0, color));
    out.push(Vertex::new(x1, y1, color));
}

/// Append a rectangle with a one-pixel outline and a filled interior
pub fn outlined_rect(out: &mut Vec<Vertex>, rect: ScreenRect, outline: [f32; 4], fill: [f32; 4]) {
    filled_rect(out, rect, outline);
    let inner = ScreenRect::new(
        rect.x + OUTLINE_PX,
        rect.y + OUTLINE_PX,
        rect.w - 2.0 * OUTLINE_PX,
        rect.h - 2.0 * OUTLINE_PX,
    );
    filled_rect(out, inner, fill);
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
    const BLUE: [f32; 4] = [0.0, 0.0, 1.0, 1.0];

    #[test]
    fn test_filled_rect_covers_corners() {
        let mut out = Vec::new();
        filled_rect(&mut out, ScreenRect::new(10.0, 20.0, 30.0, 40.0), RED);
        assert_eq!(out.len(), 6);
        let xs: Vec<f32> = out.iter().map(|v| v.position[0]).collect();
        let ys: Vec<f32> = out.iter().map(|v| v.position[1]).collect();
        assert_eq!(xs.iter().cloned().fold(f32::MAX, f32::min), 10.0);
        assert_eq!(xs.iter().cloned().fold(f32::MIN, f32::max), 40.0);
        assert_eq!(ys.iter().cloned().fold(f32::MAX, f32::min), 20.0);
        assert_eq!(ys.iter().cloned().fold(f32::MIN, f32::max), 60.0);
    }

    #[test]
    fn test_degenerate_rect_is_skipped() {
        let mut out = Vec::new();
        filled_rect(&mut out, ScreenRect::new(0.0, 0.0, 0.0, 5.0), RED);
        assert!(out.is_empty());
    }

    #[test]
    fn test_outlined_rect_draws_fill_inside() {
        let mut out = Vec::new();
        outlined_rect(&mut out, ScreenRect::new(0.0, 0.0, 10.0, 10.0), RED, BLUE);
        assert_eq!(out.len(), 12);
        assert!(out[6..].iter().all(|v| v.color == BLUE));
        assert_eq!(out[6].position, [1.0, 1.0]);
        assert_eq!(out[11].position, [9.0, 9.0]);
    }

    #[test]
    fn test_thin_outlined_rect_has_no_fill() {
        let mut out = Vec::new();
        outlined_rect(&mut out, ScreenRect::new(0.0, 0.0, 2.0, 10.0), RED, BLUE);
        assert_eq!(out.len(), 6);
    }
}
