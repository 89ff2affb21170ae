/// ShaderProgram trait and shader program descriptor

/// Shader stage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderStage {
    /// Vertex shader
    Vertex,
    /// Fragment/Pixel shader
    Fragment,
}

/// Descriptor for creating a shader program
///
/// Carries the GLSL source text for both stages. The backend compiles each
/// stage and links them into a single program.
#[derive(Debug, Clone)]
pub struct ShaderProgramDesc<'a> {
    /// Vertex stage source text
    pub vertex_source: &'a str,
    /// Fragment stage source text
    pub fragment_source: &'a str,
}

/// Shader program resource trait
///
/// Implemented by backend-specific program types (e.g., GlShaderProgram).
/// The program is automatically destroyed when dropped.
pub trait ShaderProgram: Send + Sync {
    // No public methods, programs are bound through command lists
}
