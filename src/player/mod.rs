pub mod core;
pub mod input;

pub use self::core::Player;
pub use input::{MoveAction, PlayerInput};
