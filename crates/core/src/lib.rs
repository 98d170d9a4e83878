#![deny(unsafe_code)]
//! Core of the glyph-spin demo: a rotating "S" glyph drawn with WebGL2.
//!
//! Everything here except [`render`] is platform-independent: scene state,
//! transforms, the vertex list, startup config, key mapping, the shader
//! compile/link pipeline and the one-time setup. The browser adapter in
//! `glyph-spin-wasm` supplies the [`app::Host`] and drives [`app::Demo::tick`].

pub mod app;
pub mod config;
pub mod error;
pub mod geometry;
pub mod gpu;
pub mod input;
pub mod scene;
pub mod shader;
pub mod transform;

#[cfg(feature = "render")]
pub mod render;

pub use app::{setup, Demo, Host};
pub use config::DemoConfig;
pub use error::DemoError;
pub use geometry::GeometryBuffer;
pub use gpu::{GpuBackend, ShaderStage};
pub use input::InputAction;
pub use scene::SceneState;
pub use shader::ShaderError;
pub use transform::FrameUniforms;
