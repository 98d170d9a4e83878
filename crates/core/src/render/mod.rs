//! WebGL2 rendering through `glow`.
//!
//! This module is only available when the `render` feature is enabled.
//!
//! # Module overview
//!
//! - [`context`] -- `GpuContext`, the `glow` implementation of
//!   [`GpuBackend`](crate::gpu::GpuBackend).
//! - [`renderer`] -- `FrameRenderer`, the per-frame clear, upload and draw.

pub mod context;
pub mod renderer;

pub use context::GpuContext;
pub use renderer::FrameRenderer;
