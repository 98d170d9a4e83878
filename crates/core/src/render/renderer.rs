//! Per-frame draw of the glyph.
//!
//! Locations are resolved once in [`FrameRenderer::new`]. [`FrameRenderer::draw`]
//! has no failure path.

use crate::app::Demo;
use crate::error::DemoError;
use crate::geometry::COMPONENTS_PER_VERTEX;
use crate::shader::{FILL_COLOR_UNIFORM, MODEL_VIEW_UNIFORM, POSITION_ATTRIBUTE, PROJECTION_UNIFORM};
use crate::transform::FrameUniforms;

use super::context::GpuContext;

/// Bound state for drawing the single program/buffer pair.
pub struct FrameRenderer {
    program: glow::Program,
    buffer: glow::Buffer,
    position: u32,
    model_view: glow::UniformLocation,
    projection: glow::UniformLocation,
    fill_color: glow::UniformLocation,
    clear_rgba: [f32; 4],
    fill_rgba: [f32; 4],
}

impl FrameRenderer {
    /// Looks up every attribute and uniform the shaders declare.
    ///
    /// # Errors
    ///
    /// Returns `DemoError::MissingLocation` naming the first symbol the
    /// linked program does not expose.
    #[allow(unsafe_code)]
    pub fn new(demo: &Demo<GpuContext>) -> Result<Self, DemoError> {
        use glow::HasContext;

        let gl = demo.gpu().gl();
        let program = demo.program();
        let missing = |name: &str| DemoError::MissingLocation(name.to_string());

        // SAFETY: program is a linked handle owned by the demo.
        let (position, model_view, projection, fill_color) = unsafe {
            (
                gl.get_attrib_location(program, POSITION_ATTRIBUTE)
                    .ok_or_else(|| missing(POSITION_ATTRIBUTE))?,
                gl.get_uniform_location(program, MODEL_VIEW_UNIFORM)
                    .ok_or_else(|| missing(MODEL_VIEW_UNIFORM))?,
                gl.get_uniform_location(program, PROJECTION_UNIFORM)
                    .ok_or_else(|| missing(PROJECTION_UNIFORM))?,
                gl.get_uniform_location(program, FILL_COLOR_UNIFORM)
                    .ok_or_else(|| missing(FILL_COLOR_UNIFORM))?,
            )
        };

        let config = demo.config();
        Ok(Self {
            program,
            buffer: demo.geometry().handle(),
            position,
            model_view,
            projection,
            fill_color,
            clear_rgba: config.clear_color,
            fill_rgba: config.fill_color,
        })
    }

    /// Clears, uploads both matrices, declares the vertex layout and draws
    /// `frame.draw_count` vertices as a triangle list.
    #[allow(unsafe_code)]
    pub fn draw(&self, ctx: &GpuContext, frame: &FrameUniforms) {
        use glow::HasContext;

        let gl = ctx.gl();
        let [r, g, b, a] = self.clear_rgba;

        // SAFETY: every handle and location was obtained from this context
        // in new() and lives as long as the page.
        unsafe {
            gl.clear_color(r, g, b, a);
            gl.clear(glow::COLOR_BUFFER_BIT | glow::DEPTH_BUFFER_BIT);

            gl.use_program(Some(self.program));
            gl.uniform_matrix_4_f32_slice(
                Some(&self.projection),
                false,
                &frame.projection.to_cols_array(),
            );
            gl.uniform_matrix_4_f32_slice(
                Some(&self.model_view),
                false,
                &frame.model_view.to_cols_array(),
            );
            gl.uniform_4_f32_slice(Some(&self.fill_color), &self.fill_rgba);

            gl.bind_buffer(glow::ARRAY_BUFFER, Some(self.buffer));
            gl.vertex_attrib_pointer_f32(
                self.position,
                COMPONENTS_PER_VERTEX as i32,
                glow::FLOAT,
                false,
                0,
                0,
            );
            gl.enable_vertex_attrib_array(self.position);

            gl.draw_arrays(glow::TRIANGLES, 0, frame.draw_count as i32);
        }
    }
}
