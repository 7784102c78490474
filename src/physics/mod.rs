//! Player collision and fixed-step integration
pub mod collision;
pub mod handler;

pub use collision::{broad_phase, narrow_phase, point_in_cylinder, Collision};
pub use handler::{resolve_collisions, PlayerPhysicsHandler};
