/// Renderer module - all rendering-related types and traits

// Module declarations
pub mod renderer;
pub mod buffer;
pub mod shader_program;
pub mod vertex_layout;
pub mod command_list;
pub mod debug;

#[cfg(test)]
pub mod mock_renderer;

// Re-export everything from renderer.rs
pub use renderer::*;

// Re-export from other modules
pub use buffer::*;
pub use shader_program::*;
pub use vertex_layout::*;
pub use command_list::*;
pub use debug::*;
