pub mod noise;
pub mod terrain;

pub use self::noise::NoiseField;
