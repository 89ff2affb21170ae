/// GlRenderer - OpenGL implementation of Renderer trait

use quadra_engine::quadra::{Renderer, Result, Error};
use quadra_engine::quadra::render::{
    CommandList as RendererCommandList, Buffer as RendererBuffer,
    ShaderProgram as RendererShaderProgram,
    BufferDesc, ShaderProgramDesc,
    IndexType, PrimitiveTopology, VertexInputRate,
    RendererStats, Config, DebugOutput,
};
use glow::HasContext;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use quadra_engine::{engine_info, engine_error, engine_err, engine_bail};

use crate::gl_buffer::Buffer;
use crate::gl_shader::ShaderProgram;
use crate::gl_command_list::{CommandList, GlCommand};
use crate::gl_format::{
    buffer_format_to_gl, buffer_usage_to_gl, clear_flags_to_gl,
    index_type_to_gl, topology_to_gl,
};
use crate::gl_call;

/// OpenGL device implementation
///
/// Central object for creating resources and replaying recorded command
/// lists. Owns only the loaded function pointers; the surface and the
/// current context live in `GlContext` and stay on the thread that made
/// the context current.
pub struct GlRenderer {
    /// Loaded OpenGL function pointers, shared with every resource
    gl: Arc<glow::Context>,
    /// Vertex array object bound for the renderer's whole lifetime
    /// (core profile rejects attribute pointers without one)
    vao: glow::VertexArray,
    /// Frame statistics, refreshed on every submit (behind Mutex for &self access)
    stats: Mutex<RendererStats>,
    /// Bytes currently allocated in buffer objects, shared with each Buffer
    memory_used: Arc<AtomicU64>,
}

impl GlRenderer {
    pub fn new(gl: Arc<glow::Context>, config: &Config) -> Result<Self> {
        unsafe {
            // Report which driver the context ended up on
            let version = gl.get_parameter_string(glow::VERSION);
            engine_info!("quadra::gl", "OpenGL version: {}", version);
            engine_info!(
                "quadra::gl",
                "Initializing renderer for {} v{}.{}.{}",
                config.app_name,
                config.app_version.0,
                config.app_version.1,
                config.app_version.2
            );

            // Install per-call error checking if validation is enabled
            if config.enable_validation {
                crate::debug::init_error_check_config(crate::debug::Config {
                    output: DebugOutput::Console,
                    break_on_error: false,
                    panic_on_error: false,
                    enable_stats: true,
                });
            }

            // Core profile requires a bound vertex array before any
            // attribute pointer is set, so one is kept bound for the
            // renderer's whole lifetime.
            let vao = gl.create_vertex_array()
                .map_err(|e| {
                    engine_error!("quadra::gl", "Failed to create vertex array: {}", e);
                    Error::InitializationFailed(format!("Failed to create vertex array: {}", e))
                })?;
            gl.bind_vertex_array(Some(vao));

            Ok(Self {
                gl,
                vao,
                stats: Mutex::new(RendererStats::default()),
                memory_used: Arc::new(AtomicU64::new(0)),
            })
        }
    }

    /// Replay one recorded command list against the live context
    fn replay(&self, list: &CommandList) -> Result<()> {
        // Element type of the most recent BindIndexBuffer, consumed by DrawIndexed
        let mut bound_index_type: Option<IndexType> = None;

        for command in &list.commands {
            match command {
                GlCommand::Clear { flags, color } => unsafe {
                    gl_call!(self.gl, self.gl.clear_color(color[0], color[1], color[2], color[3]))?;
                    gl_call!(self.gl, self.gl.clear(clear_flags_to_gl(*flags)))?;
                },

                GlCommand::SetViewport { viewport } => unsafe {
                    gl_call!(self.gl, self.gl.viewport(
                        viewport.x as i32,
                        viewport.y as i32,
                        viewport.width as i32,
                        viewport.height as i32,
                    ))?;
                    gl_call!(self.gl, self.gl.depth_range_f32(viewport.min_depth, viewport.max_depth))?;
                },

                GlCommand::BindShaderProgram { program } => unsafe {
                    let gl_program = &*(Arc::as_ptr(program) as *const ShaderProgram);
                    gl_call!(self.gl, self.gl.use_program(Some(gl_program.program)))?;
                },

                GlCommand::BindVertexBuffer { buffer, layout } => unsafe {
                    let gl_buffer = &*(Arc::as_ptr(buffer) as *const Buffer);
                    gl_call!(self.gl, self.gl.bind_buffer(glow::ARRAY_BUFFER, Some(gl_buffer.buffer)))?;

                    // Attribute pointers capture the currently bound ARRAY_BUFFER
                    for attribute in &layout.attributes {
                        let binding = layout
                            .bindings
                            .iter()
                            .find(|b| b.binding == attribute.binding)
                            .ok_or_else(|| engine_err!(
                                "quadra::gl",
                                "Vertex attribute at location {} references unknown binding {}",
                                attribute.location,
                                attribute.binding
                            ))?;

                        let format = buffer_format_to_gl(attribute.format);
                        gl_call!(self.gl, self.gl.enable_vertex_attrib_array(attribute.location))?;
                        if format.integer {
                            gl_call!(self.gl, self.gl.vertex_attrib_pointer_i32(
                                attribute.location,
                                format.components,
                                format.gl_type,
                                binding.stride as i32,
                                attribute.offset as i32,
                            ))?;
                        } else {
                            gl_call!(self.gl, self.gl.vertex_attrib_pointer_f32(
                                attribute.location,
                                format.components,
                                format.gl_type,
                                false,
                                binding.stride as i32,
                                attribute.offset as i32,
                            ))?;
                        }

                        let divisor = match binding.input_rate {
                            VertexInputRate::Vertex => 0,
                            VertexInputRate::Instance => 1,
                        };
                        gl_call!(self.gl, self.gl.vertex_attrib_divisor(attribute.location, divisor))?;
                    }
                },

                GlCommand::BindIndexBuffer { buffer, index_type } => unsafe {
                    let gl_buffer = &*(Arc::as_ptr(buffer) as *const Buffer);
                    gl_call!(self.gl, self.gl.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, Some(gl_buffer.buffer)))?;
                    bound_index_type = Some(*index_type);
                },

                GlCommand::DrawIndexed { topology, index_count, first_index } => unsafe {
                    let index_type = match bound_index_type {
                        Some(ty) => ty,
                        None => engine_bail!("quadra::gl", "draw_indexed replayed without a bound index buffer"),
                    };

                    let offset = (first_index * index_type.size_bytes()) as i32;
                    gl_call!(self.gl, self.gl.draw_elements(
                        topology_to_gl(*topology),
                        *index_count as i32,
                        index_type_to_gl(index_type),
                        offset,
                    ))?;

                    let mut stats = self.stats.lock().unwrap();
                    stats.draw_calls += 1;
                    stats.triangles += match topology {
                        PrimitiveTopology::TriangleList => index_count / 3,
                        PrimitiveTopology::TriangleStrip => index_count.saturating_sub(2),
                        _ => 0,
                    };
                },
            }
        }

        Ok(())
    }
}

impl Renderer for GlRenderer {
    fn create_buffer(&mut self, desc: BufferDesc) -> Result<Arc<dyn RendererBuffer>> {
        let target = buffer_usage_to_gl(desc.usage);

        unsafe {
            let buffer = self.gl.create_buffer()
                .map_err(|e| engine_err!("quadra::gl", "Failed to create buffer of size {} bytes: {}", desc.size, e))?;

            gl_call!(self.gl, self.gl.bind_buffer(target, Some(buffer)))?;

            // Storage is sized once here; contents arrive through Buffer::update
            if let Err(err) = gl_call!(self.gl, self.gl.buffer_data_size(target, desc.size as i32, glow::STATIC_DRAW)) {
                self.gl.delete_buffer(buffer);
                if matches!(err, Error::GraphicsCallFailed { code, .. } if code == glow::OUT_OF_MEMORY) {
                    engine_error!("quadra::gl", "Out of GPU memory allocating buffer of {} bytes", desc.size);
                    return Err(Error::OutOfMemory);
                }
                return Err(err);
            }

            Ok(Arc::new(Buffer::new(
                Arc::clone(&self.gl),
                buffer,
                target,
                desc.size,
                Arc::clone(&self.memory_used),
            )))
        }
    }

    fn create_shader_program(&mut self, desc: ShaderProgramDesc) -> Result<Arc<dyn RendererShaderProgram>> {
        let program = ShaderProgram::new(Arc::clone(&self.gl), &desc)?;
        Ok(Arc::new(program))
    }

    fn create_command_list(&self) -> Result<Box<dyn RendererCommandList>> {
        Ok(Box::new(CommandList::new()))
    }

    fn submit(&self, commands: &[&dyn RendererCommandList]) -> Result<()> {
        // Draw counters restart each submit; memory usage is carried by the
        // buffers themselves.
        {
            let mut stats = self.stats.lock().unwrap();
            stats.draw_calls = 0;
            stats.triangles = 0;
        }

        for cmd in commands {
            let gl_cmd = *cmd as *const dyn RendererCommandList as *const CommandList;
            let gl_cmd = unsafe { &*gl_cmd };
            self.replay(gl_cmd)?;
        }

        Ok(())
    }

    fn stats(&self) -> RendererStats {
        let mut stats = *self.stats.lock().unwrap();
        stats.gpu_memory_used = self.memory_used.load(Ordering::Relaxed);
        stats
    }

    fn resize(&mut self, width: u32, height: u32) {
        // The default framebuffer tracks the window; only the viewport
        // needs refreshing.
        unsafe {
            self.gl.viewport(0, 0, width as i32, height as i32);
        }
    }
}

impl Drop for GlRenderer {
    fn drop(&mut self) {
        engine_info!("quadra::gl", "Destroying OpenGL renderer");

        unsafe {
            // 1. Release renderer-owned GL objects
            self.gl.bind_vertex_array(None);
            self.gl.delete_vertex_array(self.vao);
        }

        // 2. Drop the error-check config (stats survive for the final report)
        crate::debug::cleanup_error_check_config();
    }
}
