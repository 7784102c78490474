use crate::config::worldgen::positive;
use crate::utils::error::ConfigError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhysicsConfig {
    /// blocks/sec²
    pub gravity: f32,
    /// Fixed steps per simulated second
    pub simulation_rate: f32,
    /// Longest frame `update` will account for, in seconds
    pub max_frame_time: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: 32.0,
            simulation_rate: 200.0,
            max_frame_time: 0.1,
        }
    }
}

impl PhysicsConfig {
    pub fn step_size(&self) -> f32 {
        1.0 / self.simulation_rate
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.gravity.is_finite() {
            return Err(ConfigError::NonFinite {
                what: "physics.gravity",
                value: self.gravity as f64,
            });
        }
        positive("physics.simulation_rate", self.simulation_rate as f64)?;
        positive("physics.max_frame_time", self.max_frame_time as f64)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerConfig {
    pub radius: f32,
    pub height: f32,
    /// blocks/sec
    pub max_speed: f32,
    /// Top-center of the collision cylinder at spawn
    pub spawn: [f32; 3],
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            radius: 0.5,
            height: 1.75,
            max_speed: 10.0,
            spawn: [32.0, 16.0, 32.0],
        }
    }
}

impl PlayerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("player.radius", self.radius as f64)?;
        positive("player.height", self.height as f64)?;
        if !(self.max_speed.is_finite() && self.max_speed >= 0.0) {
            return Err(ConfigError::Negative {
                what: "player.max_speed",
                value: self.max_speed as f64,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_size() {
        let config = PhysicsConfig::default();
        assert!((config.step_size() - 0.005).abs() < 1e-7);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_zero_rate() {
        let config = PhysicsConfig {
            simulation_rate: 0.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_flat_player() {
        let config = PlayerConfig {
            height: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositive { what: "player.height", .. })
        ));
    }

    #[test]
    fn test_gravity_sign_free_but_finite() {
        for gravity in [0.0, -9.8] {
            let config = PhysicsConfig {
                gravity,
                ..Default::default()
            };
            assert!(config.validate().is_ok());
        }

        let config = PhysicsConfig {
            gravity: f32::INFINITY,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::NonFinite { what: "physics.gravity", .. }));
        assert!(!err.to_string().contains("positive"));
    }

    #[test]
    fn test_max_speed_may_be_zero() {
        let still = PlayerConfig {
            max_speed: 0.0,
            ..Default::default()
        };
        assert!(still.validate().is_ok());

        let backwards = PlayerConfig {
            max_speed: -1.0,
            ..Default::default()
        };
        assert!(matches!(
            backwards.validate(),
            Err(ConfigError::Negative { what: "player.max_speed", .. })
        ));
    }
}
