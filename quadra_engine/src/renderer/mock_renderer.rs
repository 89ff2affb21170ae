/// Mock Renderer for unit tests (no GPU required)
///
/// This mock renderer allows testing the Engine singleton and command
/// recording without requiring a real GPU or graphics backend.

#[cfg(test)]
use std::sync::{Arc, Mutex};

#[cfg(test)]
use crate::renderer::{
    Renderer, Buffer, ShaderProgram, CommandList,
    BufferDesc, ShaderProgramDesc,
    Viewport, ClearFlags, IndexType, PrimitiveTopology, VertexLayout,
};
#[cfg(test)]
use crate::error::{Error, Result};
#[cfg(test)]
use crate::{engine_bail, engine_error};

// ============================================================================
// Mock Buffer
// ============================================================================

#[cfg(test)]
#[derive(Debug)]
pub struct MockBuffer {
    pub size: u64,
    pub name: String,
}

#[cfg(test)]
impl MockBuffer {
    pub fn new(size: u64, name: String) -> Self {
        Self { size, name }
    }
}

#[cfg(test)]
impl Buffer for MockBuffer {
    fn update(&self, offset: u64, data: &[u8]) -> Result<()> {
        if offset + data.len() as u64 > self.size {
            engine_bail!("quadra::mock",
                "update: write of {} bytes at offset {} exceeds buffer size {}",
                data.len(), offset, self.size);
        }
        Ok(())
    }
}

// ============================================================================
// Mock ShaderProgram
// ============================================================================

#[cfg(test)]
#[derive(Debug)]
pub struct MockShaderProgram {
    pub name: String,
}

#[cfg(test)]
impl MockShaderProgram {
    pub fn new(name: String) -> Self {
        Self { name }
    }
}

#[cfg(test)]
impl ShaderProgram for MockShaderProgram {}

// ============================================================================
// Mock CommandList
// ============================================================================

#[cfg(test)]
#[derive(Debug)]
pub struct MockCommandList {
    pub commands: Vec<String>,
}

#[cfg(test)]
impl MockCommandList {
    pub fn new() -> Self {
        Self { commands: Vec::new() }
    }
}

#[cfg(test)]
impl CommandList for MockCommandList {
    fn begin(&mut self) -> Result<()> {
        self.commands.push("begin".to_string());
        Ok(())
    }

    fn end(&mut self) -> Result<()> {
        self.commands.push("end".to_string());
        Ok(())
    }

    fn clear(&mut self, _flags: ClearFlags, _color: [f32; 4]) -> Result<()> {
        self.commands.push("clear".to_string());
        Ok(())
    }

    fn set_viewport(&mut self, _viewport: Viewport) -> Result<()> {
        self.commands.push("set_viewport".to_string());
        Ok(())
    }

    fn bind_shader_program(&mut self, _program: &Arc<dyn ShaderProgram>) -> Result<()> {
        self.commands.push("bind_shader_program".to_string());
        Ok(())
    }

    fn bind_vertex_buffer(&mut self, _buffer: &Arc<dyn Buffer>, _layout: &VertexLayout) -> Result<()> {
        self.commands.push("bind_vertex_buffer".to_string());
        Ok(())
    }

    fn bind_index_buffer(&mut self, _buffer: &Arc<dyn Buffer>, _index_type: IndexType) -> Result<()> {
        self.commands.push("bind_index_buffer".to_string());
        Ok(())
    }

    fn draw_indexed(
        &mut self,
        _topology: PrimitiveTopology,
        _index_count: u32,
        _first_index: u32,
    ) -> Result<()> {
        self.commands.push("draw_indexed".to_string());
        Ok(())
    }
}

// ============================================================================
// Mock Renderer
// ============================================================================

/// Mock Renderer that tracks created resources without GPU
#[cfg(test)]
#[derive(Debug)]
pub struct MockRenderer {
    /// Track created buffers
    pub created_buffers: Arc<Mutex<Vec<String>>>,
    /// Track created shader programs
    pub created_shader_programs: Arc<Mutex<Vec<String>>>,
}

#[cfg(test)]
impl MockRenderer {
    /// Create a new mock renderer
    pub fn new() -> Self {
        Self {
            created_buffers: Arc::new(Mutex::new(Vec::new())),
            created_shader_programs: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Get names of created buffers
    pub fn get_created_buffers(&self) -> Vec<String> {
        self.created_buffers.lock().unwrap().clone()
    }

    /// Get names of created shader programs
    pub fn get_created_shader_programs(&self) -> Vec<String> {
        self.created_shader_programs.lock().unwrap().clone()
    }
}

#[cfg(test)]
impl Renderer for MockRenderer {
    fn create_buffer(&mut self, desc: BufferDesc) -> Result<Arc<dyn Buffer>> {
        let name = format!("buffer_{}", desc.size);
        self.created_buffers.lock().unwrap().push(name.clone());
        Ok(Arc::new(MockBuffer::new(desc.size, name)))
    }

    fn create_shader_program(&mut self, desc: ShaderProgramDesc) -> Result<Arc<dyn ShaderProgram>> {
        if desc.vertex_source.is_empty() || desc.fragment_source.is_empty() {
            engine_error!("quadra::mock", "create_shader_program: empty shader source");
            return Err(Error::ShaderCompilationFailed(
                "empty shader source".to_string(),
            ));
        }
        let name = "shader_program".to_string();
        self.created_shader_programs.lock().unwrap().push(name.clone());
        Ok(Arc::new(MockShaderProgram::new(name)))
    }

    fn create_command_list(&self) -> Result<Box<dyn CommandList>> {
        Ok(Box::new(MockCommandList::new()))
    }

    fn submit(&self, _commands: &[&dyn CommandList]) -> Result<()> {
        Ok(())
    }

    fn stats(&self) -> crate::renderer::RendererStats {
        crate::renderer::RendererStats::default()
    }

    fn resize(&mut self, _width: u32, _height: u32) {
        // No-op for mock
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "mock_renderer_tests.rs"]
mod tests;
