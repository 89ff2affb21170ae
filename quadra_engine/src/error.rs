//! Error types for the Quadra engine
//!
//! This module defines the error types used throughout the engine,
//! including rendering, initialization, and resource management.

use std::fmt;

/// Result type for Quadra engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Quadra engine errors
#[derive(Debug, Clone)]
pub enum Error {
    /// Backend-specific error (OpenGL, driver, etc.)
    BackendError(String),

    /// Out of GPU memory
    OutOfMemory,

    /// Invalid resource (buffer, shader, etc.)
    InvalidResource(String),

    /// Initialization failed (engine, renderer, windowing)
    InitializationFailed(String),

    /// A shader stage failed to compile (message carries the stage and
    /// the driver's info log)
    ShaderCompilationFailed(String),

    /// A graphics API call left error state behind
    GraphicsCallFailed {
        /// First error code drained after the call
        code: u32,
        /// Literal text of the failing call
        call: String,
        /// Source file of the call site
        file: &'static str,
        /// Source line of the call site
        line: u32,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BackendError(msg) => write!(f, "Backend error: {}", msg),
            Error::OutOfMemory => write!(f, "Out of GPU memory"),
            Error::InvalidResource(msg) => write!(f, "Invalid resource: {}", msg),
            Error::InitializationFailed(msg) => write!(f, "Initialization failed: {}", msg),
            Error::ShaderCompilationFailed(msg) => write!(f, "Shader compilation failed: {}", msg),
            Error::GraphicsCallFailed { code, call, file, line } => {
                write!(f, "Graphics call failed ({}): {} at {}:{}", code, call, file, line)
            }
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
