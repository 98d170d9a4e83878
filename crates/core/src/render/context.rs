//! `glow` implementation of [`GpuBackend`].
//!
//! `GpuContext` wraps the `glow::Context` created by the host. All setup
//! goes through the trait; the frame renderer borrows [`GpuContext::gl`].

use crate::gpu::{GpuBackend, ShaderStage};

/// Wraps a `glow::Context` for the lifetime of the page.
pub struct GpuContext {
    gl: glow::Context,
}

impl GpuContext {
    /// Wraps an already-created context.
    pub fn new(gl: glow::Context) -> Self {
        Self { gl }
    }

    /// Returns a reference to the underlying `glow::Context`.
    pub fn gl(&self) -> &glow::Context {
        &self.gl
    }

    /// Consumes this wrapper and returns the underlying `glow::Context`.
    pub fn into_gl(self) -> glow::Context {
        self.gl
    }
}

fn gl_stage(stage: ShaderStage) -> u32 {
    match stage {
        ShaderStage::Vertex => glow::VERTEX_SHADER,
        ShaderStage::Fragment => glow::FRAGMENT_SHADER,
    }
}

#[allow(unsafe_code)]
impl GpuBackend for GpuContext {
    type Shader = glow::Shader;
    type Program = glow::Program;
    type Buffer = glow::Buffer;

    fn compile_shader(&self, stage: ShaderStage, source: &str) -> Result<glow::Shader, String> {
        use glow::HasContext;

        // SAFETY: glow wraps raw GL calls as unsafe. The stage constant is
        // valid and the shader is deleted on the failure path.
        let shader = unsafe { self.gl.create_shader(gl_stage(stage))? };

        unsafe {
            self.gl.shader_source(shader, source);
            self.gl.compile_shader(shader);
        }

        if unsafe { self.gl.get_shader_compile_status(shader) } {
            Ok(shader)
        } else {
            let info_log = unsafe { self.gl.get_shader_info_log(shader) };
            unsafe { self.gl.delete_shader(shader) };
            Err(info_log)
        }
    }

    fn delete_shader(&self, shader: glow::Shader) {
        use glow::HasContext;

        // SAFETY: shader is a handle from a successful compile_shader call.
        unsafe { self.gl.delete_shader(shader) };
    }

    fn link_program(
        &self,
        vertex: glow::Shader,
        fragment: glow::Shader,
    ) -> Result<glow::Program, String> {
        use glow::HasContext;

        // SAFETY: both shaders are valid compiled handles. The program is
        // deleted if linking fails.
        let program = unsafe { self.gl.create_program()? };

        unsafe {
            self.gl.attach_shader(program, vertex);
            self.gl.attach_shader(program, fragment);
            self.gl.link_program(program);

            // The program keeps its own copies once linked.
            self.gl.detach_shader(program, vertex);
            self.gl.detach_shader(program, fragment);
        }

        if unsafe { self.gl.get_program_link_status(program) } {
            Ok(program)
        } else {
            let info_log = unsafe { self.gl.get_program_info_log(program) };
            unsafe { self.gl.delete_program(program) };
            Err(info_log)
        }
    }

    fn use_program(&self, program: glow::Program) {
        use glow::HasContext;

        // SAFETY: program is a successfully linked handle.
        unsafe { self.gl.use_program(Some(program)) };
    }

    fn create_static_buffer(&self, data: &[f32]) -> Result<glow::Buffer, String> {
        use glow::HasContext;

        // SAFETY: the buffer is freshly created and bound before upload.
        unsafe {
            let buffer = self.gl.create_buffer()?;
            self.gl.bind_buffer(glow::ARRAY_BUFFER, Some(buffer));
            self.gl.buffer_data_u8_slice(
                glow::ARRAY_BUFFER,
                bytemuck::cast_slice(data),
                glow::STATIC_DRAW,
            );
            Ok(buffer)
        }
    }
}
