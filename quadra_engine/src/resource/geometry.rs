//! Built-in geometry data.
//!
//! Provides the unit quad used by bring-up applications and tests: four
//! 2D corner positions and six indices forming two counter-clockwise
//! triangles, plus byte views suitable for direct GPU buffer upload.

use glam::Vec2;

use crate::renderer::{
    BufferFormat, VertexAttribute, VertexBinding, VertexInputRate, VertexLayout,
};

/// Quad corner positions, counter-clockwise starting at the bottom-left
pub static QUAD_VERTICES: [Vec2; 4] = [
    Vec2::new(-0.5, -0.5),
    Vec2::new(0.5, -0.5),
    Vec2::new(0.5, 0.5),
    Vec2::new(-0.5, 0.5),
];

/// Quad indices forming two triangles that share the 0-2 diagonal
pub static QUAD_INDICES: [u32; 6] = [0, 1, 2, 2, 3, 0];

/// Quad vertex positions as raw bytes for buffer upload
pub fn quad_vertex_data() -> &'static [u8] {
    bytemuck::cast_slice(&QUAD_VERTICES)
}

/// Quad indices as raw bytes for buffer upload
pub fn quad_index_data() -> &'static [u8] {
    bytemuck::cast_slice(&QUAD_INDICES)
}

/// Vertex layout matching [`QUAD_VERTICES`]: one tightly packed vec2
/// position attribute at location 0
pub fn quad_vertex_layout() -> VertexLayout {
    VertexLayout {
        bindings: vec![VertexBinding {
            binding: 0,
            stride: std::mem::size_of::<Vec2>() as u32,
            input_rate: VertexInputRate::Vertex,
        }],
        attributes: vec![VertexAttribute {
            location: 0,
            binding: 0,
            format: BufferFormat::R32G32_SFLOAT,
            offset: 0,
        }],
    }
}

#[cfg(test)]
#[path = "geometry_tests.rs"]
mod tests;
