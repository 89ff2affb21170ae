//! Shader source file splitting.
//!
//! Shader files store every stage of one program in a single text file,
//! separated by `#shader` markers:
//!
//! ```text
//! #shader vertex
//! ...GLSL vertex source...
//! #shader fragment
//! ...GLSL fragment source...
//! ```
//!
//! Sections may appear in any order. Marker lines are never part of the
//! extracted sources.

use std::fs;
use std::path::Path;

use crate::engine_warn;

/// Which section of the file lines are currently collected into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    None,
    Vertex,
    Fragment,
}

/// Per-stage GLSL sources extracted from one shader file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShaderSources {
    /// Vertex stage source text
    pub vertex: String,
    /// Fragment stage source text
    pub fragment: String,
}

/// Split shader text into per-stage sources.
///
/// Lines before the first marker are discarded. A `#shader` line with an
/// unknown stage keyword leaves the current section unchanged. Every
/// collected line is normalized to end with `\n`.
///
/// # Arguments
///
/// * `source` - Full text of a multi-stage shader file
///
/// # Example
///
/// ```
/// use quadra_engine::quadra::resource::parse_shader_source;
///
/// let sources = parse_shader_source("#shader vertex\nvoid main() {}\n");
/// assert_eq!(sources.vertex, "void main() {}\n");
/// assert!(sources.fragment.is_empty());
/// ```
pub fn parse_shader_source(source: &str) -> ShaderSources {
    let mut sources = ShaderSources::default();
    let mut section = Section::None;

    for line in source.lines() {
        if line.contains("#shader") {
            if line.contains("vertex") {
                section = Section::Vertex;
            } else if line.contains("fragment") {
                section = Section::Fragment;
            }
            // Unknown stage keyword: keep collecting into the current section
        } else {
            let target = match section {
                Section::None => continue,
                Section::Vertex => &mut sources.vertex,
                Section::Fragment => &mut sources.fragment,
            };
            target.push_str(line);
            target.push('\n');
        }
    }

    sources
}

/// Read and split a shader file from disk.
///
/// An unreadable file logs a warning and yields empty sources, so callers
/// see the same downstream behavior as an empty file.
///
/// # Arguments
///
/// * `path` - Path to the shader file
pub fn parse_shader_file(path: impl AsRef<Path>) -> ShaderSources {
    let path = path.as_ref();
    match fs::read_to_string(path) {
        Ok(text) => parse_shader_source(&text),
        Err(err) => {
            engine_warn!("quadra::ShaderSource",
                "Failed to read shader file '{}': {}", path.display(), err);
            ShaderSources::default()
        }
    }
}

#[cfg(test)]
#[path = "shader_source_tests.rs"]
mod tests;
