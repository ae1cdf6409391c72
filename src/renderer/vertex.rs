//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Convert 8-bit RGB to a linear-ish float color
const fn rgb(r: u8, g: u8, b: u8) -> [f32; 4] {
    [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0]
}

/// Colors for game elements
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub background: [f32; 4],
    pub rider: [f32; 4],
    pub platform_fill: [f32; 4],
    pub platform_outline: [f32; 4],
    /// Drawn over the whole screen once the rider has crashed
    pub crash_overlay: [f32; 4],
}

impl Palette {
    pub const STANDARD: Palette = Palette {
        background: rgb(255, 255, 255),
        rider: rgb(255, 0, 0),
        platform_fill: rgb(253, 185, 200),
        platform_outline: rgb(0, 0, 0),
        crash_overlay: [0.4, 0.0, 0.0, 0.35],
    };

    pub const HIGH_CONTRAST: Palette = Palette {
        background: rgb(0, 0, 0),
        rider: rgb(255, 255, 0),
        platform_fill: rgb(255, 255, 255),
        platform_outline: rgb(0, 160, 255),
        crash_overlay: [1.0, 0.0, 0.0, 0.45],
    };

    pub fn for_settings(high_contrast: bool) -> Self {
        if high_contrast {
            Self::HIGH_CONTRAST
        } else {
            Self::STANDARD
        }
    }

    pub fn clear_color(&self) -> wgpu::Color {
        let [r, g, b, a] = self.background;
        wgpu::Color {
            r: r as f64,
            g: g as f64,
            b: b as f64,
            a: a as f64,
        }
    }
}
