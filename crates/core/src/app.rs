//! Setup and per-frame update, independent of any real display.
//!
//! [`setup`] runs once: context, shaders, vertex buffer. The host adapter
//! then owns the drive loop and calls [`Demo::tick`] once per display
//! refresh and [`Demo::handle_key`] for each key press. Neither blocks.

use crate::config::DemoConfig;
use crate::error::DemoError;
use crate::geometry::{GeometryBuffer, S_GLYPH_VERTICES};
use crate::gpu::GpuBackend;
use crate::input::InputAction;
use crate::scene::SceneState;
use crate::shader::{build_program, FRAGMENT_SHADER, VERTEX_SHADER};
use crate::transform::FrameUniforms;

/// Text of the blocking alert shown when no context is available.
pub const CONTEXT_UNAVAILABLE_ALERT: &str =
    "WebGL2 is not available in your browser. Please try another browser.";

/// The environment the demo runs in.
pub trait Host {
    type Gpu: GpuBackend;

    /// Obtains the graphics context for the canvas with the given DOM id.
    ///
    /// # Errors
    ///
    /// Returns `DemoError::ContextUnavailable` when there is no usable
    /// context, or `DemoError::Host` when the canvas itself is missing.
    fn acquire_context(&mut self, canvas_id: &str) -> Result<Self::Gpu, DemoError>;

    /// Shows a blocking, user-facing message.
    fn alert(&mut self, message: &str);
}

/// A fully set-up demo: one program, one buffer, the scene that drives them.
pub struct Demo<G: GpuBackend> {
    gpu: G,
    program: G::Program,
    geometry: GeometryBuffer<G::Buffer>,
    scene: SceneState,
    config: DemoConfig,
}

/// Runs the one-time setup. Any failure aborts; nothing is retried.
///
/// Only an unavailable context is alerted. Compile and link failures are
/// logged by the shader pipeline and returned.
///
/// # Errors
///
/// Returns the first `DemoError` encountered.
pub fn setup<H: Host>(host: &mut H, config: DemoConfig) -> Result<Demo<H::Gpu>, DemoError> {
    config.validate()?;

    let gpu = host.acquire_context(&config.canvas_id).map_err(|e| {
        log::error!("{e}");
        if e.is_alerted() {
            host.alert(CONTEXT_UNAVAILABLE_ALERT);
        }
        e
    })?;

    let program = build_program(&gpu, VERTEX_SHADER, FRAGMENT_SHADER)?;
    let geometry = GeometryBuffer::upload(&gpu, &S_GLYPH_VERTICES).map_err(|e| {
        log::error!("vertex buffer creation failed: {e}");
        DemoError::Buffer(e)
    })?;

    log::info!("setup complete on canvas '{}'", config.canvas_id);
    Ok(Demo {
        gpu,
        program,
        geometry,
        scene: SceneState::new(&config),
        config,
    })
}

impl<G: GpuBackend> Demo<G> {
    /// Advances the scene one frame and returns what to draw.
    ///
    /// `aspect` must be read from the canvas at call time.
    pub fn tick(&mut self, aspect: f32) -> FrameUniforms {
        self.scene.tick();
        FrameUniforms::compute(&self.scene, &self.config, aspect, self.geometry.draw_count())
    }

    /// Applies a key press. Returns whether the key was recognised.
    pub fn handle_key(&mut self, code: &str) -> bool {
        match InputAction::from_key_code(code, &self.config) {
            Some(InputAction::ToggleAnimation) => {
                self.scene.toggle_animation();
                true
            }
            None => false,
        }
    }

    pub fn gpu(&self) -> &G {
        &self.gpu
    }

    pub fn program(&self) -> G::Program {
        self.program
    }

    pub fn geometry(&self) -> &GeometryBuffer<G::Buffer> {
        &self.geometry
    }

    pub fn scene(&self) -> &SceneState {
        &self.scene
    }

    pub fn config(&self) -> &DemoConfig {
        &self.config
    }
}
