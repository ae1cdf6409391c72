//! WebGPU rendering module
//!
//! Everything is drawn as colored triangles in logical screen pixels
//! (640x480, top-left origin); the pipeline letterboxes that into the surface.

pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use scene::build_scene;
pub use vertex::{Palette, Vertex};
