use crate::config::gameplay::PhysicsConfig;
use crate::physics::collision::{self, Collision};
use crate::player::Player;
use crate::world::BlockSource;
use glam::Vec3;
use log::{trace, warn};

/// Fraction of a step the accumulator may fall short by and still take it.
const STEP_TOLERANCE: f64 = 1e-4;

/// Fixed-timestep integrator for the player cylinder.
///
/// Frame time is accumulated in `f64` and consumed in whole steps of
/// `step_size`; any remainder carries over to the next frame.
pub struct PlayerPhysicsHandler {
    gravity: f32,
    step_size: f32,
    max_frame_time: f32,
    accumulated_time: f64,
}

impl Default for PlayerPhysicsHandler {
    fn default() -> Self {
        Self::new(&PhysicsConfig::default())
    }
}

impl PlayerPhysicsHandler {
    pub fn new(config: &PhysicsConfig) -> Self {
        Self {
            gravity: config.gravity,
            step_size: config.step_size(),
            max_frame_time: config.max_frame_time,
            accumulated_time: 0.0,
        }
    }

    pub fn step_size(&self) -> f32 {
        self.step_size
    }

    /// Unsimulated time carried over from previous frames.
    pub fn accumulated_time(&self) -> f64 {
        self.accumulated_time
    }

    /// Advances the simulation by a frame of `dt` seconds and returns the
    /// number of fixed steps taken.
    pub fn update<W: BlockSource + ?Sized>(
        &mut self,
        dt: f32,
        player: &mut Player,
        world: &W,
    ) -> usize {
        let mut dt = dt.max(0.0);
        if dt > self.max_frame_time {
            warn!(
                "Frame time {:.3}s exceeds {:.3}s, clamping",
                dt, self.max_frame_time
            );
            dt = self.max_frame_time;
        }
        self.accumulated_time += dt as f64;

        let step = self.step_size as f64;
        let mut steps = 0;
        while self.accumulated_time + step * STEP_TOLERANCE >= step {
            self.fixed_update(player, world);
            self.accumulated_time -= step;
            steps += 1;
        }
        steps
    }

    fn fixed_update<W: BlockSource + ?Sized>(&self, player: &mut Player, world: &W) {
        player.velocity.y -= self.gravity * self.step_size;
        player.apply_inputs(self.step_size);
        self.detect_collisions(player, world);
    }

    /// Runs both collision phases against `world` and resolves the result.
    /// Returns the contacts that were actually applied.
    pub fn detect_collisions<W: BlockSource + ?Sized>(
        &self,
        player: &mut Player,
        world: &W,
    ) -> Vec<Collision> {
        player.on_ground = false;

        let candidates = collision::broad_phase(player, world);
        let collisions = collision::narrow_phase(&candidates, player);
        trace!(
            "{} candidates, {} collisions at {}",
            candidates.len(),
            collisions.len(),
            player.position
        );

        resolve_collisions(collisions, player)
    }
}

/// Applies contacts deepest-first, skipping any an earlier push already cleared
/// and any whose normal is zero (player axis inside the block footprint).
///
/// Each applied contact moves the player out along its normal and removes the
/// velocity component along that normal. Equal overlaps keep detection order.
pub fn resolve_collisions(mut collisions: Vec<Collision>, player: &mut Player) -> Vec<Collision> {
    collisions.sort_by(|a, b| b.overlap.total_cmp(&a.overlap));

    let mut applied = Vec::with_capacity(collisions.len());
    for collision in collisions {
        if collision.normal == Vec3::ZERO
            || !collision::point_in_cylinder(collision.contact_point, player)
        {
            continue;
        }

        player.position += collision.normal * collision.overlap;

        let magnitude = player.world_velocity().dot(collision.normal);
        player.apply_world_delta_velocity(-collision.normal * magnitude);

        if collision.normal.y > 0.0 {
            player.on_ground = true;
        }
        applied.push(collision);
    }
    applied
}
