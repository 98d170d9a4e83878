//! The "S" glyph vertex list and its static GPU buffer.

use crate::gpu::GpuBackend;

/// Components per vertex (x, y, z).
pub const COMPONENTS_PER_VERTEX: usize = 3;

/// Vertices per triangle in a triangle list.
pub const VERTICES_PER_TRIANGLE: usize = 3;

/// Flattened `(x, y, z)` positions of the "S" glyph, in the z = 0 plane.
///
/// Four four-point segments (top bar, upper left stem, lower stem, bottom
/// bar) followed by a lone centre point. Interpreted as a triangle list,
/// the final two points never complete a triangle.
#[rustfmt::skip]
pub const S_GLYPH_VERTICES: [f32; 51] = [
    // top bar
    -0.6,  0.4, 0.0,
    -0.2,  0.4, 0.0,
    -0.2,  0.3, 0.0,
    -0.6,  0.3, 0.0,
    // upper stem
    -0.6,  0.3, 0.0,
    -0.5,  0.3, 0.0,
    -0.5,  0.1, 0.0,
    -0.6,  0.1, 0.0,
    // lower stem
    -0.6,  0.1, 0.0,
    -0.5,  0.1, 0.0,
    -0.5,  0.0, 0.0,
    -0.6,  0.0, 0.0,
    // bottom bar
    -0.6,  0.0, 0.0,
    -0.2,  0.0, 0.0,
    -0.2, -0.1, 0.0,
    -0.6, -0.1, 0.0,
    // centre point
    -0.4,  0.2, 0.0,
];

/// Number of points in `vertices`.
pub fn vertex_count(vertices: &[f32]) -> usize {
    vertices.len() / COMPONENTS_PER_VERTEX
}

/// Number of vertices a triangle-list draw can use: whole triangles only.
pub fn triangle_list_count(vertex_count: usize) -> usize {
    (vertex_count / VERTICES_PER_TRIANGLE) * VERTICES_PER_TRIANGLE
}

/// The single static vertex buffer, with the counts needed to draw it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeometryBuffer<H> {
    handle: H,
    vertex_count: usize,
}

impl<H: Copy> GeometryBuffer<H> {
    /// Uploads `vertices` once with static usage.
    ///
    /// Warns when the tail of the list does not form a whole triangle; the
    /// orphaned points are uploaded but not drawn.
    ///
    /// # Errors
    ///
    /// Returns the backend's reason if the buffer cannot be created.
    pub fn upload<B>(gpu: &B, vertices: &[f32]) -> Result<Self, String>
    where
        B: GpuBackend<Buffer = H>,
    {
        let handle = gpu.create_static_buffer(vertices)?;
        let count = vertex_count(vertices);
        let orphaned = count - triangle_list_count(count);
        if orphaned > 0 {
            log::warn!(
                "vertex list has {count} points; the last {orphaned} do not form a triangle and are not drawn"
            );
        }
        log::info!("uploaded {count} vertices");
        Ok(Self {
            handle,
            vertex_count: count,
        })
    }

    /// Backend handle of the buffer.
    pub fn handle(&self) -> H {
        self.handle
    }

    /// Points uploaded to the buffer.
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Points covered by the triangle-list draw call.
    pub fn draw_count(&self) -> usize {
        triangle_list_count(self.vertex_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gpu::mock::{Call, MockGpu};

    #[test]
    fn s_glyph_has_seventeen_points() {
        assert_eq!(vertex_count(&S_GLYPH_VERTICES), 17);
    }

    #[test]
    fn s_glyph_is_flat() {
        assert!(S_GLYPH_VERTICES
            .chunks_exact(COMPONENTS_PER_VERTEX)
            .all(|v| v[2] == 0.0));
    }

    #[test]
    fn triangle_list_count_drops_partial_triangle() {
        assert_eq!(triangle_list_count(17), 15);
        assert_eq!(triangle_list_count(15), 15);
        assert_eq!(triangle_list_count(2), 0);
        assert_eq!(triangle_list_count(0), 0);
    }

    #[test]
    fn upload_creates_one_buffer_with_all_floats() {
        let gpu = MockGpu::default();
        let buffer = GeometryBuffer::upload(&gpu, &S_GLYPH_VERTICES).unwrap();
        assert_eq!(gpu.calls(), vec![Call::CreateBuffer(51)]);
        assert_eq!(buffer.vertex_count(), 17);
        assert_eq!(buffer.draw_count(), 15);
        assert_eq!(buffer.handle(), 1);
    }

    #[test]
    fn upload_propagates_backend_failure() {
        let gpu = MockGpu {
            fail_buffer: true,
            ..MockGpu::default()
        };
        let err = GeometryBuffer::upload(&gpu, &S_GLYPH_VERTICES).unwrap_err();
        assert!(err.contains("out of memory"));
    }
}
