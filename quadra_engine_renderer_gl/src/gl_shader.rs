/// ShaderProgram - OpenGL implementation of RendererShaderProgram trait

use glow::HasContext;
use quadra_engine::quadra::{
    render::{ShaderProgram as RendererShaderProgram, ShaderProgramDesc, ShaderStage},
    Error, Result,
};
use quadra_engine::{engine_err, engine_error, engine_warn};
use std::sync::Arc;

use crate::gl_format::shader_stage_to_gl;

/// OpenGL shader program implementation
///
/// Owns a linked GL program object; the program is deleted in `Drop`.
pub struct ShaderProgram {
    /// Shared GL function table
    gl: Arc<glow::Context>,
    /// Linked GL program object
    pub(crate) program: glow::Program,
}

impl ShaderProgram {
    /// Compile both stages and link them into a program
    ///
    /// The vertex stage is compiled first, then the fragment stage. A stage
    /// that fails to compile aborts creation before any attach; a program
    /// object only exists once both stages compiled. A false link status is
    /// logged as a warning (with the program info log) but the handle is
    /// still returned.
    pub(crate) fn new(gl: Arc<glow::Context>, desc: &ShaderProgramDesc) -> Result<Self> {
        // 1. Compile both stages up front
        let vertex = compile_stage(&gl, ShaderStage::Vertex, desc.vertex_source)?;
        let fragment = match compile_stage(&gl, ShaderStage::Fragment, desc.fragment_source) {
            Ok(shader) => shader,
            Err(err) => {
                unsafe { gl.delete_shader(vertex) };
                return Err(err);
            }
        };

        // 2. Create the program and attach the compiled stages
        let program = match unsafe { gl.create_program() } {
            Ok(program) => program,
            Err(err) => {
                unsafe {
                    gl.delete_shader(vertex);
                    gl.delete_shader(fragment);
                }
                return Err(engine_err!(
                    "quadra::gl",
                    "Failed to create program object: {}",
                    err
                ));
            }
        };

        unsafe {
            gl.attach_shader(program, vertex);
            gl.attach_shader(program, fragment);

            // 3. Link and validate
            gl.link_program(program);
            if !gl.get_program_link_status(program) {
                let info_log = gl.get_program_info_log(program);
                engine_warn!("quadra::gl", "Program link failed: {}", info_log);
            }

            gl.validate_program(program);

            // 4. Stage objects are owned by the linked program now
            gl.delete_shader(vertex);
            gl.delete_shader(fragment);
        }

        Ok(Self { gl, program })
    }
}

/// Compile one shader stage, returning the stage object
///
/// A compile failure logs the driver's info log, deletes the stage object
/// and returns [`Error::ShaderCompilationFailed`].
fn compile_stage(gl: &glow::Context, stage: ShaderStage, source: &str) -> Result<glow::Shader> {
    let stage_name = match stage {
        ShaderStage::Vertex => "vertex",
        ShaderStage::Fragment => "fragment",
    };

    let shader = unsafe { gl.create_shader(shader_stage_to_gl(stage)) }.map_err(|e| {
        engine_err!(
            "quadra::gl",
            "Failed to create {} shader object: {}",
            stage_name,
            e
        )
    })?;

    unsafe {
        gl.shader_source(shader, source);
        gl.compile_shader(shader);

        if !gl.get_shader_compile_status(shader) {
            let info_log = gl.get_shader_info_log(shader);
            engine_error!("quadra::gl", "Failed to compile {} shader!", stage_name);
            engine_error!("quadra::gl", "{}", info_log);
            gl.delete_shader(shader);
            return Err(Error::ShaderCompilationFailed(format!(
                "{} shader: {}",
                stage_name, info_log
            )));
        }
    }

    Ok(shader)
}

impl RendererShaderProgram for ShaderProgram {
    // No public methods, programs are bound through command lists
}

impl Drop for ShaderProgram {
    fn drop(&mut self) {
        unsafe {
            self.gl.delete_program(self.program);
        }
    }
}
