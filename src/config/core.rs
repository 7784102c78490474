use crate::config::gameplay::{PhysicsConfig, PlayerConfig};
use crate::config::worldgen::WorldGenConfig;
use crate::utils::error::Result;
use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Top-level configuration, one TOML table per subsystem.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub world: WorldGenConfig,
    pub physics: PhysicsConfig,
    pub player: PlayerConfig,
}

impl EngineConfig {
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: EngineConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading config from {}", path.display());
        let source = fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let source = toml::to_string_pretty(self)?;
        fs::write(path, source)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        self.world.validate()?;
        self.physics.validate()?;
        self.player.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::{ConfigError, EngineError};

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = EngineConfig::from_toml_str(
            r#"
            [physics]
            gravity = 9.8
            simulation_rate = 120.0
            max_frame_time = 0.05
            "#,
        )
        .unwrap();

        assert_eq!(config.physics.gravity, 9.8);
        assert_eq!(config.world, WorldGenConfig::default());
        assert_eq!(config.player, PlayerConfig::default());
    }

    #[test]
    fn test_invalid_values_rejected_at_load() {
        let err = EngineConfig::from_toml_str(
            r#"
            [world]
            draw_distance = 0
            chunk_size = { width = 16, height = 32 }

            [world.params]
            seed = 42
            resources = []

            [world.params.terrain]
            scale = -1.0
            magnitude = 0.5
            offset = 0.5
            "#,
        )
        .unwrap_err();

        assert!(matches!(
            err,
            EngineError::ConfigError(ConfigError::NonPositive { what: "terrain.scale", .. })
        ));
    }

    #[test]
    fn test_malformed_toml() {
        assert!(matches!(
            EngineConfig::from_toml_str("[physics\ngravity = "),
            Err(EngineError::ParseError(_))
        ));
    }

    #[test]
    fn test_save_and_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("voxsim.toml");

        let mut config = EngineConfig::default();
        config.world.params.seed = 1234;
        config.world.params.resources.truncate(1);
        config.save(&path).unwrap();

        let loaded = EngineConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            EngineConfig::load(dir.path().join("absent.toml")),
            Err(EngineError::IoError(_))
        ));
    }
}
