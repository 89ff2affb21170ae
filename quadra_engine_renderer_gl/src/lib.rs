/*!
# Quadra Engine - OpenGL Renderer Backend

OpenGL implementation of the Quadra rendering engine.

This crate implements the quadra_engine rendering traits on top of the
glow bindings, with glutin and glutin-winit wiring the context to a
winit window.

Per-call error checking is available through [`gl_call!`] and is enabled
by the renderer's validation setting.
*/

// OpenGL implementation modules
mod gl;
mod gl_buffer;
mod gl_shader;
mod gl_command_list;
mod gl_context;
mod gl_format;
mod debug;

pub use gl::GlRenderer;
pub use gl_context::GlContext;
pub use gl_buffer::Buffer as GlBuffer;
pub use gl_shader::ShaderProgram as GlShaderProgram;
pub use gl_command_list::CommandList as GlCommandList;

// Re-export error-check utilities (check and clear_errors also back gl_call!)
pub use debug::{
    check, cleanup_error_check_config, clear_errors, get_error_check_stats,
    init_error_check_config, print_error_check_stats_report,
    Config as ErrorCheckConfig,
};
