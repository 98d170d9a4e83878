//! The graphics capabilities setup consumes, as a trait.
//!
//! The `glow` implementation lives in [`crate::render::context`] behind the
//! `render` feature. Tests drive setup through a recording mock instead.

/// A programmable pipeline stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    /// Lowercase stage name used in diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            ShaderStage::Vertex => "vertex",
            ShaderStage::Fragment => "fragment",
        }
    }
}

/// Setup-time operations on a graphics context.
///
/// Handles are opaque and `Copy`, matching how GL names behave. Errors are
/// the driver's info log (or a short reason when there is none).
pub trait GpuBackend {
    type Shader: Copy;
    type Program: Copy;
    type Buffer: Copy;

    /// Creates and compiles one stage.
    ///
    /// On failure the shader object must already be released and the
    /// driver log returned.
    fn compile_shader(&self, stage: ShaderStage, source: &str) -> Result<Self::Shader, String>;

    /// Releases a shader object.
    fn delete_shader(&self, shader: Self::Shader);

    /// Links two compiled stages into a program.
    ///
    /// On failure the program object must already be released.
    fn link_program(
        &self,
        vertex: Self::Shader,
        fragment: Self::Shader,
    ) -> Result<Self::Program, String>;

    /// Makes `program` the current program.
    fn use_program(&self, program: Self::Program);

    /// Allocates an array buffer and uploads `data` with static usage.
    fn create_static_buffer(&self, data: &[f32]) -> Result<Self::Buffer, String>;
}

#[cfg(test)]
pub(crate) mod mock {
    //! Recording backend shared by the shader, geometry and app tests.

    use super::*;
    use std::cell::RefCell;

    #[derive(Debug, Clone, PartialEq)]
    pub enum Call {
        Compile(ShaderStage),
        DeleteShader(u32),
        Link(u32, u32),
        Use(u32),
        CreateBuffer(usize),
    }

    /// Fails a stage whose source contains `"INVALID"`; fails linking when
    /// `fail_link` is set.
    #[derive(Default)]
    pub struct MockGpu {
        pub calls: RefCell<Vec<Call>>,
        pub fail_link: bool,
        pub fail_buffer: bool,
        pub next: RefCell<u32>,
    }

    impl MockGpu {
        pub fn calls(&self) -> Vec<Call> {
            self.calls.borrow().clone()
        }

        fn handle(&self) -> u32 {
            let mut next = self.next.borrow_mut();
            *next += 1;
            *next
        }
    }

    impl GpuBackend for MockGpu {
        type Shader = u32;
        type Program = u32;
        type Buffer = u32;

        fn compile_shader(&self, stage: ShaderStage, source: &str) -> Result<u32, String> {
            self.calls.borrow_mut().push(Call::Compile(stage));
            if source.contains("INVALID") {
                Err(format!("ERROR: 0:1: '{}' : syntax error", stage.name()))
            } else {
                Ok(self.handle())
            }
        }

        fn delete_shader(&self, shader: u32) {
            self.calls.borrow_mut().push(Call::DeleteShader(shader));
        }

        fn link_program(&self, vertex: u32, fragment: u32) -> Result<u32, String> {
            self.calls.borrow_mut().push(Call::Link(vertex, fragment));
            if self.fail_link {
                Err("link failed".to_string())
            } else {
                Ok(self.handle())
            }
        }

        fn use_program(&self, program: u32) {
            self.calls.borrow_mut().push(Call::Use(program));
        }

        fn create_static_buffer(&self, data: &[f32]) -> Result<u32, String> {
            self.calls.borrow_mut().push(Call::CreateBuffer(data.len()));
            if self.fail_buffer {
                Err("out of memory".to_string())
            } else {
                Ok(self.handle())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_names_are_lowercase() {
        assert_eq!(ShaderStage::Vertex.name(), "vertex");
        assert_eq!(ShaderStage::Fragment.name(), "fragment");
    }
}
