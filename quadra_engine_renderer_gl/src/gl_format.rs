/// Format conversions - engine enums to OpenGL constants
///
/// Pure mapping functions between the engine's renderer enums and the GL
/// constants the backend hands to glow. All mappings are total.

use quadra_engine::quadra::render::{
    BufferFormat, BufferUsage, ClearFlags, IndexType, PrimitiveTopology, ShaderStage,
};

/// Vertex attribute pointer parameters for one `BufferFormat`
///
/// `integer` selects the integer attribute pointer path
/// (`glVertexAttribIPointer`); float formats use the float path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct GlVertexFormat {
    /// Number of components (1-4)
    pub components: i32,
    /// GL component type (FLOAT, INT, UNSIGNED_SHORT, ...)
    pub gl_type: u32,
    /// Use the integer attribute pointer path
    pub integer: bool,
}

/// Map buffer usage to the GL bind target
pub(crate) fn buffer_usage_to_gl(usage: BufferUsage) -> u32 {
    match usage {
        BufferUsage::Vertex => glow::ARRAY_BUFFER,
        BufferUsage::Index => glow::ELEMENT_ARRAY_BUFFER,
        BufferUsage::Uniform => glow::UNIFORM_BUFFER,
        BufferUsage::Storage => glow::SHADER_STORAGE_BUFFER,
    }
}

/// Map a buffer format to its vertex attribute pointer parameters
pub(crate) fn buffer_format_to_gl(format: BufferFormat) -> GlVertexFormat {
    let (components, gl_type, integer) = match format {
        // Float formats
        BufferFormat::R32_SFLOAT => (1, glow::FLOAT, false),
        BufferFormat::R32G32_SFLOAT => (2, glow::FLOAT, false),
        BufferFormat::R32G32B32_SFLOAT => (3, glow::FLOAT, false),
        BufferFormat::R32G32B32A32_SFLOAT => (4, glow::FLOAT, false),

        // Integer formats (signed)
        BufferFormat::R32_SINT => (1, glow::INT, true),
        BufferFormat::R32G32_SINT => (2, glow::INT, true),
        BufferFormat::R32G32B32_SINT => (3, glow::INT, true),
        BufferFormat::R32G32B32A32_SINT => (4, glow::INT, true),

        // Integer formats (unsigned)
        BufferFormat::R32_UINT => (1, glow::UNSIGNED_INT, true),
        BufferFormat::R32G32_UINT => (2, glow::UNSIGNED_INT, true),
        BufferFormat::R32G32B32_UINT => (3, glow::UNSIGNED_INT, true),
        BufferFormat::R32G32B32A32_UINT => (4, glow::UNSIGNED_INT, true),

        // Short formats (signed)
        BufferFormat::R16_SINT => (1, glow::SHORT, true),
        BufferFormat::R16G16_SINT => (2, glow::SHORT, true),
        BufferFormat::R16G16B16A16_SINT => (4, glow::SHORT, true),

        // Short formats (unsigned)
        BufferFormat::R16_UINT => (1, glow::UNSIGNED_SHORT, true),
        BufferFormat::R16G16_UINT => (2, glow::UNSIGNED_SHORT, true),
        BufferFormat::R16G16B16A16_UINT => (4, glow::UNSIGNED_SHORT, true),

        // Byte formats (signed)
        BufferFormat::R8_SINT => (1, glow::BYTE, true),
        BufferFormat::R8G8_SINT => (2, glow::BYTE, true),
        BufferFormat::R8G8B8A8_SINT => (4, glow::BYTE, true),

        // Byte formats (unsigned)
        BufferFormat::R8_UINT => (1, glow::UNSIGNED_BYTE, true),
        BufferFormat::R8G8_UINT => (2, glow::UNSIGNED_BYTE, true),
        BufferFormat::R8G8B8A8_UINT => (4, glow::UNSIGNED_BYTE, true),
    };

    GlVertexFormat {
        components,
        gl_type,
        integer,
    }
}

/// Map an index type to the GL element type for indexed draws
///
/// Index data is always unsigned; this mapping never produces a signed
/// element type.
pub(crate) fn index_type_to_gl(index_type: IndexType) -> u32 {
    match index_type {
        IndexType::U16 => glow::UNSIGNED_SHORT,
        IndexType::U32 => glow::UNSIGNED_INT,
    }
}

/// Map a primitive topology to the GL draw mode
pub(crate) fn topology_to_gl(topology: PrimitiveTopology) -> u32 {
    match topology {
        PrimitiveTopology::TriangleList => glow::TRIANGLES,
        PrimitiveTopology::TriangleStrip => glow::TRIANGLE_STRIP,
        PrimitiveTopology::LineList => glow::LINES,
        PrimitiveTopology::PointList => glow::POINTS,
    }
}

/// Map clear flags to the GL clear mask
pub(crate) fn clear_flags_to_gl(flags: ClearFlags) -> u32 {
    let mut mask = 0;
    if flags.contains(ClearFlags::COLOR) {
        mask |= glow::COLOR_BUFFER_BIT;
    }
    if flags.contains(ClearFlags::DEPTH) {
        mask |= glow::DEPTH_BUFFER_BIT;
    }
    if flags.contains(ClearFlags::STENCIL) {
        mask |= glow::STENCIL_BUFFER_BIT;
    }
    mask
}

/// Map a shader stage to the GL shader type
pub(crate) fn shader_stage_to_gl(stage: ShaderStage) -> u32 {
    match stage {
        ShaderStage::Vertex => glow::VERTEX_SHADER,
        ShaderStage::Fragment => glow::FRAGMENT_SHADER,
    }
}

/// Name of a GL error code for log messages
pub(crate) fn error_code_name(code: u32) -> &'static str {
    match code {
        glow::INVALID_ENUM => "GL_INVALID_ENUM",
        glow::INVALID_VALUE => "GL_INVALID_VALUE",
        glow::INVALID_OPERATION => "GL_INVALID_OPERATION",
        glow::INVALID_FRAMEBUFFER_OPERATION => "GL_INVALID_FRAMEBUFFER_OPERATION",
        glow::OUT_OF_MEMORY => "GL_OUT_OF_MEMORY",
        _ => "GL_UNKNOWN_ERROR",
    }
}

#[cfg(test)]
#[path = "gl_format_tests.rs"]
mod tests;
