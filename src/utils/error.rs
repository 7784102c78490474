use std::io;
use thiserror::Error;

/// Rejected generation or simulation parameters.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{what} must be a positive finite number, got {value}")]
    NonPositive { what: &'static str, value: f64 },

    #[error("{what} must be a finite number, got {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("{what} must be a non-negative finite number, got {value}")]
    Negative { what: &'static str, value: f64 },

    #[error("{what} must lie in [0, 1], got {value}")]
    OutOfUnitRange { what: &'static str, value: f64 },

    #[error("Unknown block type: {0}")]
    UnknownBlock(String),

    #[error("Block type {0} is not a resource")]
    NotAResource(String),

    #[error("Chunk dimensions must be non-zero, got {width}x{height}x{width}")]
    EmptyChunk { width: u32, height: u32 },
}

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Failed to write config: {0}")]
    SerializeError(#[from] toml::ser::Error),

    #[error("Configuration error: {0}")]
    ConfigError(#[from] ConfigError),
}

pub type Result<T> = std::result::Result<T, EngineError>;
