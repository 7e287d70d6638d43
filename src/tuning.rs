//! Data-driven game balance
//!
//! Every gameplay constant the entities use, grouped per entity. Tuning
//! files are JSON; missing fields fall back to the defaults in `consts`.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Paddle geometry, movement and power-up durations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaddleTuning {
    pub width: f32,
    /// Width while the grow power-up is active
    pub grown_width: f32,
    pub height: f32,
    /// Pixels moved per tick while a direction is held
    pub speed: f32,
    /// Distance from the bottom of the screen to the paddle's top edge
    pub bottom_margin: f32,
    /// Ticks each paddle power-up lasts
    pub effect_ticks: u32,
}

impl Default for PaddleTuning {
    fn default() -> Self {
        Self {
            width: PADDLE_WIDTH,
            grown_width: PADDLE_GROWN_WIDTH,
            height: PADDLE_HEIGHT,
            speed: PADDLE_SPEED,
            bottom_margin: PADDLE_BOTTOM_MARGIN,
            effect_ticks: EFFECT_DURATION_TICKS,
        }
    }
}

/// Ball size, speed and slow-effect duration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BallTuning {
    pub radius: f32,
    /// Speed of each velocity component after reset or launch
    pub base_speed: f32,
    /// Ticks the slow power-up lasts
    pub slow_ticks: u32,
}

impl Default for BallTuning {
    fn default() -> Self {
        Self {
            radius: BALL_RADIUS,
            base_speed: BALL_BASE_SPEED,
            slow_ticks: EFFECT_DURATION_TICKS,
        }
    }
}

/// Falling pickup geometry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PowerUpTuning {
    pub width: f32,
    pub height: f32,
    pub fall_speed: f32,
}

impl Default for PowerUpTuning {
    fn default() -> Self {
        Self {
            width: POWER_UP_WIDTH,
            height: POWER_UP_HEIGHT,
            fall_speed: POWER_UP_FALL_SPEED,
        }
    }
}

/// Laser projectile geometry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LaserTuning {
    pub width: f32,
    pub height: f32,
    /// Vertical speed per tick (negative = upward)
    pub speed: f32,
}

impl Default for LaserTuning {
    fn default() -> Self {
        Self {
            width: LASER_WIDTH,
            height: LASER_HEIGHT,
            speed: LASER_SPEED,
        }
    }
}

/// Ranges used when spawning a burst of particles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticleSpread {
    pub min_size: u32,
    pub max_size: u32,
    pub min_speed: f32,
    pub max_speed: f32,
    pub gravity: f32,
    /// Size lost per tick
    pub shrink: f32,
}

impl Default for ParticleSpread {
    fn default() -> Self {
        Self {
            min_size: PARTICLE_MIN_SIZE,
            max_size: PARTICLE_MAX_SIZE,
            min_speed: PARTICLE_MIN_SPEED,
            max_speed: PARTICLE_MAX_SPEED,
            gravity: PARTICLE_GRAVITY,
            shrink: PARTICLE_SHRINK,
        }
    }
}

/// Firework rocket and burst parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FireworkTuning {
    pub particle_count: usize,
    pub min_ascent_speed: f32,
    pub max_ascent_speed: f32,
    /// Explosion altitude range as fractions of screen height
    pub min_altitude: f32,
    pub max_altitude: f32,
    pub min_channel: u8,
    pub particles: ParticleSpread,
}

impl Default for FireworkTuning {
    fn default() -> Self {
        Self {
            particle_count: FIREWORK_PARTICLES,
            min_ascent_speed: FIREWORK_MIN_ASCENT_SPEED,
            max_ascent_speed: FIREWORK_MAX_ASCENT_SPEED,
            min_altitude: FIREWORK_MIN_ALTITUDE,
            max_altitude: FIREWORK_MAX_ALTITUDE,
            min_channel: FIREWORK_MIN_CHANNEL,
            particles: ParticleSpread::default(),
        }
    }
}

/// Complete game balance
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub paddle: PaddleTuning,
    pub ball: BallTuning,
    pub power_up: PowerUpTuning,
    pub laser: LaserTuning,
    pub firework: FireworkTuning,
}

impl Tuning {
    /// Parse a tuning file. Missing sections and fields keep their defaults.
    /// Files that parse but would break the simulation are rejected.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let tuning: Self = serde_json::from_str(json)?;
        tuning
            .validate()
            .map_err(<serde_json::Error as serde::de::Error>::custom)?;
        Ok(tuning)
    }

    /// Check that every random range is ordered and every effect lasts at
    /// least one tick
    pub fn validate(&self) -> Result<(), String> {
        if self.paddle.effect_ticks == 0 {
            return Err("paddle.effect_ticks must be at least 1".into());
        }
        if self.ball.slow_ticks == 0 {
            return Err("ball.slow_ticks must be at least 1".into());
        }

        let firework = &self.firework;
        let particles = &firework.particles;
        if particles.min_size > particles.max_size {
            return Err(format!(
                "firework.particles size range {}..={} is inverted",
                particles.min_size, particles.max_size
            ));
        }
        let ranges = [
            ("firework.particles speed", particles.min_speed, particles.max_speed),
            ("firework ascent speed", firework.min_ascent_speed, firework.max_ascent_speed),
            ("firework altitude", firework.min_altitude, firework.max_altitude),
        ];
        for (name, min, max) in ranges {
            // Also rejects NaN bounds
            if !(min.is_finite() && max.is_finite() && min <= max) {
                return Err(format!("{} range {}..={} is invalid", name, min, max));
            }
        }
        Ok(())
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load tuning from disk, falling back to defaults on any error
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(tuning) => {
                    log::info!("Loaded tuning from {}", path.display());
                    tuning
                }
                Err(err) => {
                    log::warn!("Invalid tuning file {}: {}", path.display(), err);
                    Self::default()
                }
            },
            Err(err) => {
                log::warn!("Could not read tuning file {}: {}", path.display(), err);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_consts() {
        let tuning = Tuning::default();
        assert_eq!(tuning.paddle.width, 100.0);
        assert_eq!(tuning.paddle.grown_width, 150.0);
        assert_eq!(tuning.paddle.effect_ticks, 600);
        assert_eq!(tuning.ball.base_speed, 6.0);
        assert_eq!(tuning.laser.speed, -8.0);
        assert_eq!(tuning.firework.particle_count, 50);
        assert_eq!(tuning.firework.particles.gravity, 0.1);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "ball": { "base_speed": 9.0 } }"#).unwrap();
        assert_eq!(tuning.ball.base_speed, 9.0);
        assert_eq!(tuning.ball.radius, BALL_RADIUS);
        assert_eq!(tuning.paddle, PaddleTuning::default());
    }

    #[test]
    fn test_json_roundtrip() {
        let mut tuning = Tuning::default();
        tuning.paddle.speed = 12.0;
        let json = tuning.to_json().unwrap();
        assert_eq!(Tuning::from_json(&json).unwrap(), tuning);
    }

    #[test]
    fn test_invalid_json_is_error() {
        assert!(Tuning::from_json("{ not json").is_err());
    }

    #[test]
    fn test_defaults_are_valid() {
        assert_eq!(Tuning::default().validate(), Ok(()));
    }

    #[test]
    fn test_inverted_particle_speed_rejected() {
        let err = Tuning::from_json(r#"{ "firework": { "particles": { "min_speed": 5.0 } } }"#)
            .unwrap_err();
        assert!(err.to_string().contains("speed"));
    }

    #[test]
    fn test_inverted_ranges_rejected() {
        let files = [
            r#"{ "firework": { "particles": { "min_size": 9 } } }"#,
            r#"{ "firework": { "min_ascent_speed": 20.0 } }"#,
            r#"{ "firework": { "min_altitude": 0.9, "max_altitude": 0.1 } }"#,
        ];
        for json in files {
            assert!(Tuning::from_json(json).is_err(), "accepted {}", json);
        }
    }

    #[test]
    fn test_zero_durations_rejected() {
        assert!(Tuning::from_json(r#"{ "paddle": { "effect_ticks": 0 } }"#).is_err());
        assert!(Tuning::from_json(r#"{ "ball": { "slow_ticks": 0 } }"#).is_err());
    }

    #[test]
    fn test_load_invalid_file_falls_back() {
        let path = std::env::temp_dir().join("brick-breaker-inverted-tuning.json");
        std::fs::write(&path, r#"{ "paddle": { "effect_ticks": 0 } }"#).unwrap();
        let tuning = Tuning::load(&path);
        let _ = std::fs::remove_file(&path);
        assert_eq!(tuning, Tuning::default());
    }

    #[test]
    fn test_load_missing_file_falls_back() {
        let tuning = Tuning::load("/nonexistent/brick-breaker-tuning.json");
        assert_eq!(tuning, Tuning::default());
    }
}
