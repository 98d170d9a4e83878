//! Mutable per-demo scene values: rotation, scale, animation flag.
//!
//! Owned by [`crate::app::Demo`] and touched only on the host's single
//! event thread.

use crate::config::DemoConfig;

/// Rotation, scale and animation state of the glyph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneState {
    rotation: f64,
    rotation_step: f64,
    scale: f32,
    animating: bool,
}

impl SceneState {
    /// Starts at zero rotation with the configured step, scale and flag.
    pub fn new(config: &DemoConfig) -> Self {
        Self {
            rotation: 0.0,
            rotation_step: config.rotation_step,
            scale: config.scale,
            animating: config.animate_on_start,
        }
    }

    /// Starts from `rotation` radians instead of zero.
    pub fn with_rotation(mut self, rotation: f64) -> Self {
        self.rotation = rotation;
        self
    }

    /// Advances rotation by one step if animating. Returns whether it moved.
    ///
    /// Accumulated in `f64` and never wrapped here; the model-view reduces
    /// it modulo one turn before narrowing to `f32`.
    pub fn tick(&mut self) -> bool {
        if self.animating {
            self.rotation += self.rotation_step;
        }
        self.animating
    }

    /// Flips the animation flag and returns the new value.
    pub fn toggle_animation(&mut self) -> bool {
        self.animating = !self.animating;
        log::debug!(
            "animation {}",
            if self.animating { "resumed" } else { "paused" }
        );
        self.animating
    }

    /// Current rotation about the vertical axis, in radians.
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn is_animating(&self) -> bool {
        self.animating
    }
}

impl Default for SceneState {
    fn default() -> Self {
        Self::new(&DemoConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_scene_starts_still_and_animating() {
        let s = SceneState::default();
        assert_eq!(s.rotation(), 0.0);
        assert_eq!(s.scale(), 1.0);
        assert!(s.is_animating());
    }

    #[test]
    fn tick_advances_by_step() {
        let mut s = SceneState::default();
        assert!(s.tick());
        assert_eq!(s.rotation(), 0.01);
    }

    #[test]
    fn tick_keeps_full_step_after_days_of_frames() {
        // 2^18 rad is about five days at 60 Hz.
        for start in [16_384.0, 262_144.0, 1.0e9] {
            let mut s = SceneState::default().with_rotation(start);
            s.tick();
            let step = s.rotation() - start;
            assert!(
                (step - 0.01).abs() < 1e-6,
                "step from {start} was {step}, expected 0.01"
            );
        }
    }

    #[test]
    fn toggle_twice_restores_animation() {
        let mut s = SceneState::default();
        assert!(!s.toggle_animation());
        assert!(!s.is_animating());
        assert!(s.toggle_animation());
        assert!(s.is_animating());
    }

    #[test]
    fn paused_scene_does_not_move() {
        let mut s = SceneState::default();
        s.tick();
        s.toggle_animation();
        let frozen = s.rotation();
        for _ in 0..100 {
            assert!(!s.tick());
        }
        assert_eq!(s.rotation(), frozen);
    }

    #[test]
    fn config_can_start_paused() {
        let config = DemoConfig {
            animate_on_start: false,
            ..DemoConfig::default()
        };
        let mut s = SceneState::new(&config);
        s.tick();
        assert_eq!(s.rotation(), 0.0);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn n_animated_ticks_accumulate_n_steps(n in 0usize..5000) {
                let mut s = SceneState::default();
                let mut expected = 0.0_f64;
                for _ in 0..n {
                    s.tick();
                    expected += 0.01;
                }
                prop_assert_eq!(s.rotation(), expected);
                prop_assert!((s.rotation() - n as f64 * 0.01).abs() < 1e-9 * (1.0 + n as f64));
                prop_assert_eq!(s.scale(), 1.0);
            }

            #[test]
            fn rotation_is_monotonic_while_animating(
                start in 0.0_f64..1.0e9,
                n in 1usize..1000,
            ) {
                let mut s = SceneState::default().with_rotation(start);
                let mut last = s.rotation();
                for _ in 0..n {
                    s.tick();
                    prop_assert!(s.rotation() > last);
                    last = s.rotation();
                }
            }

            #[test]
            fn rotation_frozen_across_paused_frames(before in 0usize..200, paused in 0usize..200) {
                let mut s = SceneState::default();
                for _ in 0..before {
                    s.tick();
                }
                s.toggle_animation();
                let frozen = s.rotation();
                for _ in 0..paused {
                    s.tick();
                }
                prop_assert_eq!(s.rotation(), frozen);
            }
        }
    }
}
