//! WebGPU rendering module
//!
//! Everything on screen is a flat-colored quad.

pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use vertex::Vertex;
