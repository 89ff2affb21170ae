/// CommandList trait - for recording rendering commands

use std::sync::Arc;
use crate::error::Result;
use crate::renderer::{Buffer, IndexType, PrimitiveTopology, ShaderProgram, VertexLayout};
use bitflags::bitflags;

/// Command list for recording rendering commands
///
/// Commands are recorded and later replayed on the GPU via Renderer::submit()
pub trait CommandList: Send + Sync {
    /// Begin recording commands
    fn begin(&mut self) -> Result<()>;

    /// End recording commands
    fn end(&mut self) -> Result<()>;

    /// Clear the current framebuffer
    ///
    /// # Arguments
    ///
    /// * `flags` - Which aspects of the framebuffer to clear
    /// * `color` - Clear color (RGBA), used when `ClearFlags::COLOR` is set
    fn clear(&mut self, flags: ClearFlags, color: [f32; 4]) -> Result<()>;

    /// Set the viewport
    ///
    /// # Arguments
    ///
    /// * `viewport` - Viewport dimensions and depth range
    fn set_viewport(&mut self, viewport: Viewport) -> Result<()>;

    /// Bind a shader program
    ///
    /// # Arguments
    ///
    /// * `program` - Shader program to bind
    fn bind_shader_program(&mut self, program: &Arc<dyn ShaderProgram>) -> Result<()>;

    /// Bind a vertex buffer
    ///
    /// # Arguments
    ///
    /// * `buffer` - Buffer to bind
    /// * `layout` - Description of the attributes stored in the buffer
    fn bind_vertex_buffer(&mut self, buffer: &Arc<dyn Buffer>, layout: &VertexLayout) -> Result<()>;

    /// Bind an index buffer
    ///
    /// # Arguments
    ///
    /// * `buffer` - Buffer to bind
    /// * `index_type` - Type of indices (U16 or U32)
    fn bind_index_buffer(&mut self, buffer: &Arc<dyn Buffer>, index_type: IndexType) -> Result<()>;

    /// Draw indexed vertices
    ///
    /// # Arguments
    ///
    /// * `topology` - How vertices are assembled into primitives
    /// * `index_count` - Number of indices to draw
    /// * `first_index` - Index of first index
    fn draw_indexed(
        &mut self,
        topology: PrimitiveTopology,
        index_count: u32,
        first_index: u32,
    ) -> Result<()>;
}

/// Viewport dimensions and depth range
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub min_depth: f32,
    pub max_depth: f32,
}

bitflags! {
    /// Framebuffer aspects that can be cleared
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ClearFlags: u32 {
        const COLOR = 1;
        const DEPTH = 1 << 1;
        const STENCIL = 1 << 2;
    }
}
