/// CommandList - OpenGL implementation of RendererCommandList trait

use quadra_engine::quadra::render::{
    Buffer as RendererBuffer, ClearFlags, CommandList as RendererCommandList, IndexType,
    PrimitiveTopology, ShaderProgram as RendererShaderProgram, VertexLayout, Viewport,
};
use quadra_engine::quadra::{Error, Result};
use std::sync::Arc;

/// One recorded rendering command
///
/// Resource commands hold their `Arc` so the resource stays alive until the
/// list is replayed.
pub(crate) enum GlCommand {
    Clear {
        flags: ClearFlags,
        color: [f32; 4],
    },
    SetViewport {
        viewport: Viewport,
    },
    BindShaderProgram {
        program: Arc<dyn RendererShaderProgram>,
    },
    BindVertexBuffer {
        buffer: Arc<dyn RendererBuffer>,
        layout: VertexLayout,
    },
    BindIndexBuffer {
        buffer: Arc<dyn RendererBuffer>,
        index_type: IndexType,
    },
    DrawIndexed {
        topology: PrimitiveTopology,
        index_count: u32,
        first_index: u32,
    },
}

/// OpenGL command list implementation
///
/// Records rendering commands for later replay in `GlRenderer::submit`.
/// GL has no retained command buffer object, so the list is a plain vector
/// of commands replayed against the context at submit time.
pub struct CommandList {
    /// Recorded commands in submission order
    pub(crate) commands: Vec<GlCommand>,
    /// Whether the command list is currently recording
    is_recording: bool,
}

impl CommandList {
    /// Create a new empty command list
    pub(crate) fn new() -> Self {
        Self {
            commands: Vec::new(),
            is_recording: false,
        }
    }
}

impl RendererCommandList for CommandList {
    fn begin(&mut self) -> Result<()> {
        if self.is_recording {
            return Err(Error::BackendError(
                "Command list already recording".to_string(),
            ));
        }

        // Previous frame's commands are discarded on re-begin
        self.commands.clear();
        self.is_recording = true;

        Ok(())
    }

    fn end(&mut self) -> Result<()> {
        if !self.is_recording {
            return Err(Error::BackendError("Command list not recording".to_string()));
        }

        self.is_recording = false;

        Ok(())
    }

    fn clear(&mut self, flags: ClearFlags, color: [f32; 4]) -> Result<()> {
        if !self.is_recording {
            return Err(Error::BackendError("Command list not recording".to_string()));
        }

        self.commands.push(GlCommand::Clear { flags, color });

        Ok(())
    }

    fn set_viewport(&mut self, viewport: Viewport) -> Result<()> {
        if !self.is_recording {
            return Err(Error::BackendError("Command list not recording".to_string()));
        }

        self.commands.push(GlCommand::SetViewport { viewport });

        Ok(())
    }

    fn bind_shader_program(&mut self, program: &Arc<dyn RendererShaderProgram>) -> Result<()> {
        if !self.is_recording {
            return Err(Error::BackendError("Command list not recording".to_string()));
        }

        self.commands.push(GlCommand::BindShaderProgram {
            program: Arc::clone(program),
        });

        Ok(())
    }

    fn bind_vertex_buffer(
        &mut self,
        buffer: &Arc<dyn RendererBuffer>,
        layout: &VertexLayout,
    ) -> Result<()> {
        if !self.is_recording {
            return Err(Error::BackendError("Command list not recording".to_string()));
        }

        self.commands.push(GlCommand::BindVertexBuffer {
            buffer: Arc::clone(buffer),
            layout: layout.clone(),
        });

        Ok(())
    }

    fn bind_index_buffer(
        &mut self,
        buffer: &Arc<dyn RendererBuffer>,
        index_type: IndexType,
    ) -> Result<()> {
        if !self.is_recording {
            return Err(Error::BackendError("Command list not recording".to_string()));
        }

        self.commands.push(GlCommand::BindIndexBuffer {
            buffer: Arc::clone(buffer),
            index_type,
        });

        Ok(())
    }

    fn draw_indexed(
        &mut self,
        topology: PrimitiveTopology,
        index_count: u32,
        first_index: u32,
    ) -> Result<()> {
        if !self.is_recording {
            return Err(Error::BackendError("Command list not recording".to_string()));
        }

        self.commands.push(GlCommand::DrawIndexed {
            topology,
            index_count,
            first_index,
        });

        Ok(())
    }
}

#[cfg(test)]
#[path = "gl_command_list_tests.rs"]
mod tests;
