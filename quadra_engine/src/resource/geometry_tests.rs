//! Unit tests for built-in quad geometry

use glam::Vec2;

use crate::renderer::{BufferFormat, VertexInputRate};
use crate::resource::geometry::{
    quad_index_data, quad_vertex_data, quad_vertex_layout, QUAD_INDICES, QUAD_VERTICES,
};

// ============================================================================
// VERTEX DATA
// ============================================================================

#[test]
fn test_quad_corner_positions() {
    assert_eq!(QUAD_VERTICES[0], Vec2::new(-0.5, -0.5));
    assert_eq!(QUAD_VERTICES[1], Vec2::new(0.5, -0.5));
    assert_eq!(QUAD_VERTICES[2], Vec2::new(0.5, 0.5));
    assert_eq!(QUAD_VERTICES[3], Vec2::new(-0.5, 0.5));
}

#[test]
fn test_quad_triangles_are_counter_clockwise() {
    // Signed area via 2D cross product, positive = counter-clockwise
    fn signed_area(a: Vec2, b: Vec2, c: Vec2) -> f32 {
        (b - a).perp_dot(c - a)
    }

    for triangle in QUAD_INDICES.chunks(3) {
        let a = QUAD_VERTICES[triangle[0] as usize];
        let b = QUAD_VERTICES[triangle[1] as usize];
        let c = QUAD_VERTICES[triangle[2] as usize];
        assert!(signed_area(a, b, c) > 0.0);
    }
}

// ============================================================================
// INDEX DATA
// ============================================================================

#[test]
fn test_quad_indices_reference_valid_vertices() {
    assert_eq!(QUAD_INDICES.len(), 6);
    for &index in &QUAD_INDICES {
        assert!((index as usize) < QUAD_VERTICES.len());
    }
}

#[test]
fn test_quad_triangles_share_diagonal() {
    let first: &[u32] = &QUAD_INDICES[0..3];
    let second: &[u32] = &QUAD_INDICES[3..6];

    let shared: Vec<u32> = first
        .iter()
        .filter(|i| second.contains(i))
        .copied()
        .collect();
    assert_eq!(shared, vec![0, 2]);
}

// ============================================================================
// BYTE VIEWS
// ============================================================================

#[test]
fn test_quad_vertex_data_byte_size() {
    // 4 vertices x 2 floats x 4 bytes
    assert_eq!(quad_vertex_data().len(), 32);
}

#[test]
fn test_quad_index_data_byte_size() {
    // 6 indices x 4 bytes
    assert_eq!(quad_index_data().len(), 24);
}

#[test]
fn test_quad_index_data_matches_indices() {
    let round_trip: &[u32] = bytemuck::cast_slice(quad_index_data());
    assert_eq!(round_trip, QUAD_INDICES);
}

// ============================================================================
// VERTEX LAYOUT
// ============================================================================

#[test]
fn test_quad_vertex_layout_shape() {
    let layout = quad_vertex_layout();

    assert_eq!(layout.bindings.len(), 1);
    assert_eq!(layout.attributes.len(), 1);

    let binding = layout.bindings[0];
    assert_eq!(binding.binding, 0);
    assert_eq!(binding.stride, 8);
    assert_eq!(binding.input_rate, VertexInputRate::Vertex);

    let attribute = layout.attributes[0];
    assert_eq!(attribute.location, 0);
    assert_eq!(attribute.binding, 0);
    assert_eq!(attribute.format, BufferFormat::R32G32_SFLOAT);
    assert_eq!(attribute.offset, 0);
}

#[test]
fn test_quad_layout_stride_covers_vertex_data() {
    let layout = quad_vertex_layout();
    let stride = layout.bindings[0].stride as usize;

    assert_eq!(quad_vertex_data().len() % stride, 0);
    assert_eq!(quad_vertex_data().len() / stride, QUAD_VERTICES.len());
}
