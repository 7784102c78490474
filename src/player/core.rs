use crate::config::gameplay::PlayerConfig;
use crate::player::input::PlayerInput;
use glam::{Quat, Vec3};

/// Upright collision cylinder driven by input and the physics handler.
///
/// `position` is the top-centre of the cylinder, which spans
/// `position.y - height ..= position.y`. `velocity` is in the player's local,
/// yaw-relative frame; local forward is -Z and right is +X.
#[derive(Debug, Clone)]
pub struct Player {
    pub position: Vec3,
    pub velocity: Vec3,
    /// Look direction around +Y, radians
    pub yaw: f32,
    pub radius: f32,
    pub height: f32,
    pub max_speed: f32,
    pub on_ground: bool,
    pub input: PlayerInput,
    spawn: Vec3,
}

impl Default for Player {
    fn default() -> Self {
        Self::new(&PlayerConfig::default())
    }
}

impl Player {
    pub fn new(config: &PlayerConfig) -> Self {
        let spawn = Vec3::from_array(config.spawn);
        Self {
            position: spawn,
            velocity: Vec3::ZERO,
            yaw: 0.0,
            radius: config.radius,
            height: config.height,
            max_speed: config.max_speed,
            on_ground: false,
            input: PlayerInput::default(),
            spawn,
        }
    }

    pub fn spawn(&self) -> Vec3 {
        self.spawn
    }

    pub fn set_spawn(&mut self, spawn: Vec3) {
        self.spawn = spawn;
    }

    /// Back to the spawn point, at rest.
    pub fn reset(&mut self) {
        self.position = self.spawn;
        self.velocity = Vec3::ZERO;
        self.on_ground = false;
    }

    /// Centre of the bounding cylinder.
    pub fn center(&self) -> Vec3 {
        self.position - Vec3::new(0.0, self.height / 2.0, 0.0)
    }

    fn yaw_rotation(&self) -> Quat {
        Quat::from_rotation_y(self.yaw)
    }

    /// Velocity rotated from the local frame into world space.
    pub fn world_velocity(&self) -> Vec3 {
        self.yaw_rotation() * self.velocity
    }

    /// Adds a world-space velocity change, expressed back in the local frame.
    pub fn apply_world_delta_velocity(&mut self, delta: Vec3) {
        self.velocity += self.yaw_rotation().inverse() * delta;
    }

    /// Sets horizontal velocity from held input and integrates position over `dt`.
    pub fn apply_inputs(&mut self, dt: f32) {
        let movement = self.input.movement();
        self.velocity.x = movement.x * self.max_speed;
        self.velocity.z = movement.y * self.max_speed;

        self.position += self.world_velocity() * dt;
    }
}
