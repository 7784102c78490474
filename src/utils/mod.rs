pub mod error;
pub mod rng;

pub use error::{ConfigError, EngineError, Result};
pub use rng::WorldRng;
