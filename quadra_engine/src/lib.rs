/*!
# Quadra Engine

Core traits and types for the Quadra rendering engine.

This crate provides the platform-agnostic API for rendering using trait-based
dynamic polymorphism. Backend implementations (OpenGL today, others later)
provide concrete types that implement these traits.

## Architecture

- **Renderer**: Factory trait for creating GPU resources and submitting work
- **Buffer**: GPU buffer resource trait
- **ShaderProgram**: Compiled-and-linked shader program trait
- **CommandList**: Recorded command sequence trait

The `resource` module holds CPU-side assets: the two-section shader source
parser and the built-in quad geometry.
*/

// Internal modules
mod error;
mod engine;
pub mod log;
pub mod renderer;
pub mod resource;

// Main quadra namespace module
pub mod quadra {
    // Error types
    pub use crate::error::{Error, Result};

    // Engine singleton
    pub use crate::engine::Engine;

    // Renderer factory trait
    pub use crate::renderer::Renderer;

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
        // Note: engine_* macros are NOT re-exported here - they are internal only
    }

    // Render sub-module with all rendering types
    pub mod render {
        pub use crate::renderer::*;
    }

    // Resource sub-module
    pub mod resource {
        pub use crate::resource::*;
    }
}

// Re-export math library at crate root
pub use glam;
