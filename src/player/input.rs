use glam::Vec2;

/// Movement keys understood by the player, independent of any windowing layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveAction {
    Forward,
    Backward,
    Left,
    Right,
}

/// Held movement input, filled in by whatever event system drives the game.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct PlayerInput {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
}

impl PlayerInput {
    pub fn set(&mut self, action: MoveAction, pressed: bool) {
        match action {
            MoveAction::Forward => self.forward = pressed,
            MoveAction::Backward => self.backward = pressed,
            MoveAction::Left => self.left = pressed,
            MoveAction::Right => self.right = pressed,
        }
    }

    /// Local-frame direction: `x` is strafe (right positive), `y` is the z axis
    /// (forward negative). Components are -1, 0 or 1.
    pub fn movement(&self) -> Vec2 {
        let axis = |pos: bool, neg: bool| (pos as i8 - neg as i8) as f32;
        Vec2::new(axis(self.right, self.left), axis(self.backward, self.forward))
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
