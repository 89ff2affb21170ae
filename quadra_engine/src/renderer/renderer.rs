/// Renderer trait - main rendering factory interface

use std::sync::Arc;

use crate::error::Result;
use crate::renderer::{
    Buffer, ShaderProgram, CommandList,
    BufferDesc, ShaderProgramDesc,
};

/// Renderer configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Enable per-call error checking / debug layers
    pub enable_validation: bool,
    /// Application name
    pub app_name: String,
    /// Application version (major, minor, patch)
    pub app_version: (u32, u32, u32),
}

impl Default for Config {
    fn default() -> Self {
        Self {
            enable_validation: cfg!(debug_assertions),
            app_name: "Quadra Application".to_string(),
            app_version: (1, 0, 0),
        }
    }
}

/// Renderer statistics
#[derive(Debug, Clone, Copy, Default)]
pub struct RendererStats {
    /// Number of draw calls this frame
    pub draw_calls: u32,
    /// Number of triangles drawn this frame
    pub triangles: u32,
    /// GPU memory used (bytes)
    pub gpu_memory_used: u64,
}

// ============================================================================
// Renderer trait
// ============================================================================

/// Main renderer trait
///
/// This is the central factory interface for creating GPU resources and
/// submitting recorded command lists. Implemented by backend-specific
/// renderers (e.g., GlRenderer).
pub trait Renderer: Send + Sync {
    /// Create a buffer
    ///
    /// # Arguments
    ///
    /// * `desc` - Buffer descriptor
    ///
    /// # Returns
    ///
    /// A shared pointer to the created buffer
    fn create_buffer(&mut self, desc: BufferDesc) -> Result<Arc<dyn Buffer>>;

    /// Create a shader program from vertex and fragment sources
    ///
    /// Both stages are compiled and linked into one program. A stage that
    /// fails to compile aborts creation with
    /// [`Error::ShaderCompilationFailed`](crate::error::Error).
    ///
    /// # Arguments
    ///
    /// * `desc` - Shader program descriptor (per-stage source text)
    ///
    /// # Returns
    ///
    /// A shared pointer to the created program
    fn create_shader_program(&mut self, desc: ShaderProgramDesc) -> Result<Arc<dyn ShaderProgram>>;

    /// Create a command list for recording
    fn create_command_list(&self) -> Result<Box<dyn CommandList>>;

    /// Submit recorded command lists for execution
    ///
    /// # Arguments
    ///
    /// * `commands` - Slice of command lists to submit
    fn submit(&self, commands: &[&dyn CommandList]) -> Result<()>;

    /// Get statistics about the renderer
    fn stats(&self) -> RendererStats;

    /// Notify renderer that the window has been resized
    ///
    /// # Arguments
    ///
    /// * `width` - New window width
    /// * `height` - New window height
    fn resize(&mut self, width: u32, height: u32);
}
