use serde::{Deserialize, Serialize};

use crate::core::PixelScale;

pub const DEFAULT_ENTITY_COUNT: u32 = 20;
/// Pixels per simulation unit
pub const DEFAULT_SCALE: f32 = 200.0;
pub const DEFAULT_GRAVITY: f32 = 10.0;
pub const DEFAULT_MIN_BOX_SIZE: u32 = 10;
pub const DEFAULT_MAX_BOX_SIZE: u32 = 90;
pub const DEFAULT_TIMESTEP: f32 = 1.0 / 60.0;
pub const DEFAULT_VELOCITY_ITERATIONS: u32 = 8;
pub const DEFAULT_POSITION_ITERATIONS: u32 = 2;
pub const DEFAULT_MAX_DRAG_FORCE: f32 = 10_000.0;
pub const DEFAULT_DEBUG_FILL_ALPHA: f32 = 0.35;

/// Startup configuration. Every field has a compiled-in default, so an empty
/// JSON object is a valid config.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub entity_count: u32,
    pub scale: f32,
    pub debug_draw: bool,
    pub gravity: f32,
    pub min_box_size: u32,
    pub max_box_size: u32,
    pub timestep: f32,
    pub velocity_iterations: u32,
    pub position_iterations: u32,
    pub max_drag_force: f32,
    pub debug_fill_alpha: f32,
    pub seed: Option<u64>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            entity_count: DEFAULT_ENTITY_COUNT,
            scale: DEFAULT_SCALE,
            debug_draw: false,
            gravity: DEFAULT_GRAVITY,
            min_box_size: DEFAULT_MIN_BOX_SIZE,
            max_box_size: DEFAULT_MAX_BOX_SIZE,
            timestep: DEFAULT_TIMESTEP,
            velocity_iterations: DEFAULT_VELOCITY_ITERATIONS,
            position_iterations: DEFAULT_POSITION_ITERATIONS,
            max_drag_force: DEFAULT_MAX_DRAG_FORCE,
            debug_fill_alpha: DEFAULT_DEBUG_FILL_ALPHA,
            seed: None,
        }
    }
}

impl DemoConfig {
    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: DemoConfig = serde_json::from_str(json).map_err(|e| e.to_string())?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn validate(&self) -> Result<(), String> {
        if !(self.scale.is_finite() && self.scale > 0.0) {
            return Err(format!("scale must be a positive number, got {}", self.scale));
        }
        if !self.gravity.is_finite() {
            return Err("gravity must be finite".to_string());
        }
        if self.min_box_size == 0 || self.min_box_size >= self.max_box_size {
            return Err(format!(
                "box size range [{}, {}) is empty",
                self.min_box_size, self.max_box_size
            ));
        }
        if !(self.timestep.is_finite() && self.timestep > 0.0) {
            return Err(format!("timestep must be positive, got {}", self.timestep));
        }
        if self.velocity_iterations == 0 {
            return Err("velocity_iterations must be at least 1".to_string());
        }
        if !(self.max_drag_force.is_finite() && self.max_drag_force > 0.0) {
            return Err("max_drag_force must be positive".to_string());
        }
        if !(0.0..=1.0).contains(&self.debug_fill_alpha) {
            return Err("debug_fill_alpha must be within [0, 1]".to_string());
        }
        Ok(())
    }

    pub fn pixel_scale(&self) -> PixelScale {
        PixelScale::new(self.scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_yields_defaults() {
        let config = DemoConfig::from_json("{}").unwrap();
        assert_eq!(config, DemoConfig::default());
        assert_eq!(config.entity_count, 20);
        assert_eq!(config.scale, 200.0);
        assert!(!config.debug_draw);
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let config = DemoConfig::from_json(r#"{"entity_count": 3, "debug_draw": true, "seed": 9}"#)
            .unwrap();
        assert_eq!(config.entity_count, 3);
        assert!(config.debug_draw);
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.velocity_iterations, 8);
        assert_eq!(config.position_iterations, 2);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(DemoConfig::from_json(r#"{"scale": 0}"#).is_err());
        assert!(DemoConfig::from_json(r#"{"min_box_size": 50, "max_box_size": 50}"#).is_err());
        assert!(DemoConfig::from_json(r#"{"timestep": -1}"#).is_err());
        assert!(DemoConfig::from_json(r#"{"debug_fill_alpha": 2}"#).is_err());
        assert!(DemoConfig::from_json("not json").is_err());
    }
}
