//! Shader sources, error formatting and the compile-then-link pipeline.
//!
//! [`build_program`] works against any [`GpuBackend`]. Both stages must
//! compile before linking is attempted; a failed stage is released by the
//! backend and the surviving one is released here.

use thiserror::Error;

use crate::gpu::{GpuBackend, ShaderStage};

/// Name of the position attribute in [`VERTEX_SHADER`].
pub const POSITION_ATTRIBUTE: &str = "aVertexPosition";
/// Name of the model-view matrix uniform in [`VERTEX_SHADER`].
pub const MODEL_VIEW_UNIFORM: &str = "uModelViewMatrix";
/// Name of the projection matrix uniform in [`VERTEX_SHADER`].
pub const PROJECTION_UNIFORM: &str = "uProjectionMatrix";
/// Name of the fill color uniform in [`FRAGMENT_SHADER`].
pub const FILL_COLOR_UNIFORM: &str = "uFillColor";

/// GLSL ES 3.0 vertex shader: projection * model-view * position.
pub const VERTEX_SHADER: &str = r#"#version 300 es
in vec4 aVertexPosition;
uniform mat4 uModelViewMatrix;
uniform mat4 uProjectionMatrix;

void main() {
    gl_Position = uProjectionMatrix * uModelViewMatrix * aVertexPosition;
}
"#;

/// GLSL ES 3.0 fragment shader: flat fill color.
pub const FRAGMENT_SHADER: &str = r#"#version 300 es
precision mediump float;
uniform vec4 uFillColor;
out vec4 fragColor;

void main() {
    fragColor = uFillColor;
}
"#;

/// Errors that can occur during shader compilation or program linking.
#[derive(Debug, Clone, Error)]
pub enum ShaderError {
    /// A shader stage failed to compile.
    #[error("shader compile error ({stage}):\n{log}")]
    CompileError {
        /// The shader stage that failed (e.g. "vertex", "fragment").
        stage: String,
        /// Numbered source followed by the driver's info log.
        log: String,
    },
    /// A program failed to link.
    #[error("shader link error:\n{0}")]
    LinkError(String),
}

/// Formats a shader compilation error for human-readable debugging.
///
/// Prepends right-aligned line numbers to each line of `source`, then
/// appends the driver's error `log`, so the line references in the log can
/// be matched against the GLSL. Either argument may be empty.
pub fn format_shader_error(source: &str, log: &str) -> String {
    let source_lines: Vec<&str> = source.lines().collect();
    let width = source_lines.len().max(1).to_string().len();

    let numbered = source_lines
        .iter()
        .enumerate()
        .map(|(i, line)| format!("{:>width$}: {line}", i + 1))
        .collect::<Vec<_>>()
        .join("\n");

    match (numbered.is_empty(), log.is_empty()) {
        (true, true) => String::new(),
        (true, false) => log.to_string(),
        (false, true) => numbered,
        (false, false) => format!("{numbered}\n\n{log}"),
    }
}

fn compile_stage<B: GpuBackend>(
    gpu: &B,
    stage: ShaderStage,
    source: &str,
) -> Result<B::Shader, ShaderError> {
    gpu.compile_shader(stage, source).map_err(|info_log| {
        let err = ShaderError::CompileError {
            stage: stage.name().to_string(),
            log: format_shader_error(source, &info_log),
        };
        log::error!("{err}");
        err
    })
}

/// Compiles both stages, links them and makes the program current.
///
/// The linker is never invoked unless both stages compiled. Stage objects
/// are released on every path; the returned program keeps its own copies.
///
/// # Errors
///
/// Returns `ShaderError::CompileError` for the first stage that fails, or
/// `ShaderError::LinkError` if linking fails.
pub fn build_program<B: GpuBackend>(
    gpu: &B,
    vertex_src: &str,
    fragment_src: &str,
) -> Result<B::Program, ShaderError> {
    let vert = compile_stage(gpu, ShaderStage::Vertex, vertex_src)?;
    let frag = match compile_stage(gpu, ShaderStage::Fragment, fragment_src) {
        Ok(f) => f,
        Err(e) => {
            gpu.delete_shader(vert);
            return Err(e);
        }
    };

    let linked = gpu.link_program(vert, frag);
    gpu.delete_shader(vert);
    gpu.delete_shader(frag);

    let program = linked.map_err(|info_log| {
        let err = ShaderError::LinkError(info_log);
        log::error!("{err}");
        err
    })?;

    gpu.use_program(program);
    log::info!("shader program linked");
    Ok(program)
}
