//! Simulation settings
//!
//! Supplied by the harness as JSON; every field falls back to the defaults
//! in `consts` when absent.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{ConfigError, Result};

/// Simulation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Display ===
    /// Display width in pixels
    pub display_width: f32,
    /// Display height in pixels
    pub display_height: f32,
    /// Harness timer rate (ticks per second)
    pub tick_hz: f32,

    // === Triangle ===
    /// Circumradius of the triangle
    pub triangle_radius: f32,
    /// Rotation per tick (degrees, sign sets direction)
    pub rot_angle_change: f32,
    /// Mirror the spin whenever the ball hits the triangle
    pub reverse_spin_on_hit: bool,

    // === Ball ===
    /// Ball speed (pixels per second)
    pub ball_speed: f32,
    /// Ball drawing radius
    pub ball_radius: f32,
    /// Seed for the ball's spawn position and heading
    pub seed: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            display_width: DISPLAY_WIDTH,
            display_height: DISPLAY_HEIGHT,
            tick_hz: TICK_HZ,

            triangle_radius: TRIANGLE_RADIUS,
            rot_angle_change: ROT_ANGLE_CHANGE,
            reverse_spin_on_hit: true,

            ball_speed: BALL_SPEED,
            ball_radius: BALL_RADIUS,
            seed: 0x5EED,
        }
    }
}

impl Settings {
    /// Parse and validate settings from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Self = serde_json::from_str(json).map_err(ConfigError::from)?;
        settings.validate()?;
        log::info!("Loaded settings ({}x{})", settings.display_width, settings.display_height);
        Ok(settings)
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self).map_err(ConfigError::from)?)
    }

    /// Seconds per tick
    pub fn tick_dt(&self) -> f32 {
        1.0 / self.tick_hz
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<()> {
        positive("display_width", self.display_width)?;
        positive("display_height", self.display_height)?;
        positive("tick_hz", self.tick_hz)?;
        positive("triangle_radius", self.triangle_radius)?;
        positive("ball_radius", self.ball_radius)?;

        if !(self.ball_speed.is_finite() && self.ball_speed >= 0.0) {
            return Err(invalid("ball_speed", format!("must be >= 0, got {}", self.ball_speed)));
        }
        if !self.rot_angle_change.is_finite() || self.rot_angle_change.abs() >= 180.0 {
            return Err(invalid(
                "rot_angle_change",
                format!("must be within (-180, 180), got {}", self.rot_angle_change),
            ));
        }

        let min_side = self.display_width.min(self.display_height);
        if self.triangle_radius * 2.0 > min_side {
            return Err(invalid(
                "triangle_radius",
                format!("{} does not fit a {min_side} pixel display", self.triangle_radius),
            ));
        }
        // Too small for the display centre collapses the vertices
        if let Err(err) = crate::sim::Triangle::from_settings(self) {
            return Err(invalid("triangle_radius", err.to_string()));
        }
        Ok(())
    }
}

fn positive(field: &'static str, value: f32) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(invalid(field, format!("must be positive, got {value}")))
    }
}

fn invalid(field: &'static str, reason: String) -> crate::Error {
    ConfigError::Invalid { field, reason }.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert!((settings.tick_dt() - 1.0 / 30.0).abs() < 1e-6);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings = Settings::from_json(r#"{ "rot_angle_change": -3.5, "seed": 7 }"#).unwrap();
        assert_eq!(settings.rot_angle_change, -3.5);
        assert_eq!(settings.seed, 7);
        assert_eq!(settings.display_width, DISPLAY_WIDTH);
        assert!(settings.reverse_spin_on_hit);
    }

    #[test]
    fn test_json_round_trip() {
        let settings = Settings {
            triangle_radius: 90.0,
            ..Settings::default()
        };
        let json = settings.to_json().unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            Settings::from_json("{ not json"),
            Err(Error::Config(ConfigError::Parse(_)))
        ));
    }

    #[test]
    fn test_invalid_values() {
        let cases = [
            (r#"{ "display_height": 0 }"#, "display_height"),
            (r#"{ "tick_hz": -30 }"#, "tick_hz"),
            (r#"{ "rot_angle_change": 270 }"#, "rot_angle_change"),
            (r#"{ "triangle_radius": 500 }"#, "triangle_radius"),
            (r#"{ "triangle_radius": 0.00001 }"#, "triangle_radius"),
            (r#"{ "ball_speed": -1 }"#, "ball_speed"),
        ];
        for (json, expected) in cases {
            match Settings::from_json(json) {
                Err(Error::Config(ConfigError::Invalid { field, .. })) => {
                    assert_eq!(field, expected)
                }
                other => panic!("{json}: expected invalid {expected}, got {other:?}"),
            }
        }
    }
}
