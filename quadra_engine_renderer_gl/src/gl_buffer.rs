/// Buffer - OpenGL implementation of RendererBuffer trait

use glow::HasContext;
use quadra_engine::engine_error;
use quadra_engine::quadra::{render::Buffer as RendererBuffer, Error, Result};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::gl_call;

/// OpenGL buffer implementation
///
/// Counts its size against the shared GPU memory counter on creation and
/// releases it in `Drop`.
pub struct Buffer {
    /// Shared GL function table
    gl: Arc<glow::Context>,
    /// GL buffer object
    pub(crate) buffer: glow::Buffer,
    /// Bind target the buffer was created for
    target: u32,
    /// Buffer size in bytes
    pub(crate) size: u64,
    /// Live GPU memory counter shared with the renderer
    memory_used: Arc<AtomicU64>,
}

impl Buffer {
    /// Wrap an allocated GL buffer object
    pub(crate) fn new(
        gl: Arc<glow::Context>,
        buffer: glow::Buffer,
        target: u32,
        size: u64,
        memory_used: Arc<AtomicU64>,
    ) -> Self {
        memory_used.fetch_add(size, Ordering::Relaxed);
        Self {
            gl,
            buffer,
            target,
            size,
            memory_used,
        }
    }
}

impl RendererBuffer for Buffer {
    fn update(&self, offset: u64, data: &[u8]) -> Result<()> {
        // Validate the range before touching GL state
        if offset + data.len() as u64 > self.size {
            engine_error!(
                "quadra::gl",
                "Buffer update failed: write of {} bytes at offset {} exceeds buffer size {}",
                data.len(),
                offset,
                self.size
            );
            return Err(Error::InvalidResource(format!(
                "buffer update out of range: offset {} + {} bytes > size {}",
                offset,
                data.len(),
                self.size
            )));
        }

        unsafe {
            gl_call!(self.gl, self.gl.bind_buffer(self.target, Some(self.buffer)))?;
            gl_call!(
                self.gl,
                self.gl
                    .buffer_sub_data_u8_slice(self.target, offset as i32, data)
            )?;
        }

        Ok(())
    }
}

impl Drop for Buffer {
    fn drop(&mut self) {
        self.memory_used.fetch_sub(self.size, Ordering::Relaxed);
        unsafe {
            self.gl.delete_buffer(self.buffer);
        }
    }
}
