//! Startup configuration.
//!
//! Every field has a default equal to the demo's fixed constants, so an
//! empty JSON object (or no config at all) reproduces the stock behavior.

use serde::{Deserialize, Serialize};

use crate::error::DemoError;

/// Tunable constants read once at startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// DOM id of the canvas to draw into.
    pub canvas_id: String,
    /// Vertical field of view in degrees.
    pub fov_y_degrees: f32,
    pub z_near: f32,
    pub z_far: f32,
    /// Distance from the camera to the glyph along -z.
    pub camera_distance: f32,
    /// Radians added to the rotation on each animated frame.
    pub rotation_step: f64,
    /// Uniform scale applied to the glyph.
    pub scale: f32,
    /// `KeyboardEvent.code` that toggles animation.
    pub toggle_key: String,
    /// Whether the glyph is spinning when the page loads.
    pub animate_on_start: bool,
    /// RGBA clear color.
    pub clear_color: [f32; 4],
    /// RGBA fill color of the glyph.
    pub fill_color: [f32; 4],
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            canvas_id: "canvas".to_string(),
            fov_y_degrees: 45.0,
            z_near: 0.1,
            z_far: 100.0,
            camera_distance: 5.0,
            rotation_step: 0.01,
            scale: 1.0,
            toggle_key: "Space".to_string(),
            animate_on_start: true,
            clear_color: [0.0, 0.0, 0.0, 1.0],
            fill_color: [1.0, 0.0, 0.0, 1.0],
        }
    }
}

impl DemoConfig {
    /// Parses a JSON object, filling missing fields with defaults, then validates.
    ///
    /// # Errors
    ///
    /// Returns `DemoError::Config` for malformed JSON or out-of-range values.
    pub fn from_json(json: &str) -> Result<Self, DemoError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| DemoError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the values describe a drawable scene.
    ///
    /// # Errors
    ///
    /// Returns `DemoError::Config` naming the first offending field.
    pub fn validate(&self) -> Result<(), DemoError> {
        let fail = |msg: String| -> Result<(), DemoError> { Err(DemoError::Config(msg)) };

        if self.canvas_id.is_empty() {
            return fail("canvas_id must not be empty".into());
        }
        if self.toggle_key.is_empty() {
            return fail("toggle_key must not be empty".into());
        }
        if !(self.fov_y_degrees > 0.0 && self.fov_y_degrees < 180.0) {
            return fail(format!(
                "fov_y_degrees must be in (0, 180), got {}",
                self.fov_y_degrees
            ));
        }
        if !(self.z_near > 0.0 && self.z_near < self.z_far && self.z_far.is_finite()) {
            return fail(format!(
                "expected 0 < z_near < z_far, got near {} far {}",
                self.z_near, self.z_far
            ));
        }
        if !(self.scale.is_finite() && self.scale > 0.0) {
            return fail(format!("scale must be finite and positive, got {}", self.scale));
        }
        if !self.rotation_step.is_finite() {
            return fail(format!(
                "rotation_step must be finite, got {}",
                self.rotation_step
            ));
        }
        if !self.camera_distance.is_finite() {
            return fail(format!(
                "camera_distance must be finite, got {}",
                self.camera_distance
            ));
        }
        Ok(())
    }

    /// Field of view in radians.
    pub fn fov_y_radians(&self) -> f32 {
        self.fov_y_degrees.to_radians()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_stock_demo() {
        let c = DemoConfig::default();
        assert_eq!(c.canvas_id, "canvas");
        assert_eq!(c.fov_y_degrees, 45.0);
        assert_eq!(c.z_near, 0.1);
        assert_eq!(c.z_far, 100.0);
        assert_eq!(c.camera_distance, 5.0);
        assert_eq!(c.rotation_step, 0.01);
        assert_eq!(c.scale, 1.0);
        assert_eq!(c.toggle_key, "Space");
        assert!(c.animate_on_start);
        assert_eq!(c.clear_color, [0.0, 0.0, 0.0, 1.0]);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn empty_object_yields_defaults() {
        let c = DemoConfig::from_json("{}").unwrap();
        assert_eq!(c, DemoConfig::default());
    }

    #[test]
    fn partial_object_overrides_only_named_fields() {
        let c = DemoConfig::from_json(r#"{"rotation_step": 0.05, "canvas_id": "glcanvas"}"#)
            .unwrap();
        assert_eq!(c.rotation_step, 0.05);
        assert_eq!(c.canvas_id, "glcanvas");
        assert_eq!(c.scale, 1.0);
    }

    #[test]
    fn malformed_json_is_config_error() {
        let err = DemoConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, DemoError::Config(_)));
    }

    #[test]
    fn rejects_inverted_depth_range() {
        let err = DemoConfig::from_json(r#"{"z_near": 10.0, "z_far": 1.0}"#).unwrap_err();
        assert!(err.to_string().contains("z_near"), "got: {err}");
    }

    #[test]
    fn rejects_degenerate_fov() {
        assert!(DemoConfig::from_json(r#"{"fov_y_degrees": 0.0}"#).is_err());
        assert!(DemoConfig::from_json(r#"{"fov_y_degrees": 180.0}"#).is_err());
    }

    #[test]
    fn rejects_non_positive_scale() {
        let err = DemoConfig::from_json(r#"{"scale": 0.0}"#).unwrap_err();
        assert!(err.to_string().contains("scale"), "got: {err}");
    }

    #[test]
    fn rejects_empty_canvas_id() {
        assert!(DemoConfig::from_json(r#"{"canvas_id": ""}"#).is_err());
    }

    #[test]
    fn fov_converts_to_radians() {
        let c = DemoConfig::default();
        assert!((c.fov_y_radians() - std::f32::consts::FRAC_PI_4).abs() < 1e-6);
    }

    #[test]
    fn json_contains_expected_keys() {
        let v = serde_json::to_value(DemoConfig::default()).unwrap();
        for key in ["canvas_id", "fov_y_degrees", "rotation_step", "toggle_key"] {
            assert!(v.get(key).is_some(), "missing {key}");
        }
    }
}
