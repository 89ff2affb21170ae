//! Resource helpers shared by applications
//!
//! Provides shader source file splitting and built-in geometry data.

pub mod geometry;
pub mod shader_source;

pub use geometry::{
    quad_index_data, quad_vertex_data, quad_vertex_layout,
    QUAD_INDICES, QUAD_VERTICES,
};
pub use shader_source::{parse_shader_file, parse_shader_source, ShaderSources};
