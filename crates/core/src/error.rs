//! Error types for glyph-spin setup.
//!
//! Every variant is fatal to startup. Nothing here is produced per frame.

use thiserror::Error;

use crate::shader::ShaderError;

/// Errors produced while setting up the demo.
#[derive(Debug, Clone, Error)]
pub enum DemoError {
    /// The host could not provide a graphics context for the canvas.
    #[error("graphics context unavailable: {0}")]
    ContextUnavailable(String),

    /// A shader stage failed to compile or the program failed to link.
    #[error(transparent)]
    Shader(#[from] ShaderError),

    /// The vertex buffer could not be created.
    #[error("vertex buffer creation failed: {0}")]
    Buffer(String),

    /// A uniform or attribute the shaders declare was not found in the program.
    #[error("shader location not found: {0}")]
    MissingLocation(String),

    /// The startup configuration could not be parsed or was out of range.
    #[error("invalid config: {0}")]
    Config(String),

    /// The host environment failed outside the graphics context (DOM lookup, event wiring).
    #[error("host error: {0}")]
    Host(String),
}

impl DemoError {
    /// Whether this failure is shown to the operator with a blocking alert.
    ///
    /// Only a missing context is alerted; everything else goes to the log.
    pub fn is_alerted(&self) -> bool {
        matches!(self, DemoError::ContextUnavailable(_))
    }
}
