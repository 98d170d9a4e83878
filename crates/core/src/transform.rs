//! Projection and model-view matrices for one frame.
//!
//! Pure functions over [`SceneState`] and [`DemoConfig`]. The GPU side in
//! [`crate::render::renderer`] only uploads what these produce.

use std::f64::consts::TAU;

use glam::{Mat4, Vec3};

use crate::config::DemoConfig;
use crate::scene::SceneState;

/// Width / height of the canvas, or 1.0 when the canvas has collapsed.
pub fn aspect_ratio(width: f64, height: f64) -> f32 {
    if height > 0.0 && width > 0.0 {
        (width / height) as f32
    } else {
        1.0
    }
}

/// Right-handed GL perspective projection with the configured fov and depth range.
pub fn projection(aspect: f32, config: &DemoConfig) -> Mat4 {
    Mat4::perspective_rh_gl(config.fov_y_radians(), aspect, config.z_near, config.z_far)
}

/// Rotation reduced to `[0, 2π)` in `f64`, then narrowed for the GPU.
pub fn wrapped_angle(rotation: f64) -> f32 {
    rotation.rem_euclid(TAU) as f32
}

/// Translate back along -z, then rotate about +y, then scale uniformly.
pub fn model_view(scene: &SceneState, config: &DemoConfig) -> Mat4 {
    Mat4::from_translation(Vec3::new(0.0, 0.0, -config.camera_distance))
        * Mat4::from_rotation_y(wrapped_angle(scene.rotation()))
        * Mat4::from_scale(Vec3::splat(scene.scale()))
}

/// Everything one draw call needs from the CPU side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameUniforms {
    pub projection: Mat4,
    pub model_view: Mat4,
    /// Vertices passed to the triangle-list draw.
    pub draw_count: usize,
}

impl FrameUniforms {
    pub fn compute(
        scene: &SceneState,
        config: &DemoConfig,
        aspect: f32,
        draw_count: usize,
    ) -> Self {
        Self {
            projection: projection(aspect, config),
            model_view: model_view(scene, config),
            draw_count,
        }
    }
}
