use anyhow::Result;
use glam::Vec3;
use log::{info, LevelFilter};
use simple_logger::SimpleLogger;
use std::env;

use voxsim::{
    physics::PlayerPhysicsHandler,
    player::{MoveAction, Player},
    world::{BlockId, World},
    EngineConfig,
};

const FRAME_TIME: f32 = 1.0 / 60.0;
const RUN_SECONDS: u32 = 5;

fn main() -> Result<()> {
    SimpleLogger::new().with_level(LevelFilter::Info).init()?;

    let config = match env::args().nth(1) {
        Some(path) => EngineConfig::load(path)?,
        None => {
            info!("No config given, using defaults");
            EngineConfig::default()
        }
    };

    let mut world = World::new(config.world.clone());
    world.generate()?;

    for (coord, chunk) in world.chunks() {
        info!(
            "Chunk {:?}: {} stone, {} coal, {} iron, {} visible instances",
            coord,
            chunk.count_blocks(BlockId::STONE),
            chunk.count_blocks(BlockId::COAL_ORE),
            chunk.count_blocks(BlockId::IRON_ORE),
            chunk.meshes().total_instances()
        );
    }

    let mut player = Player::new(&config.player);
    let spawn = player.spawn();
    let column = (spawn.x.round() as i32, spawn.z.round() as i32);
    if let Some(surface) = world.surface_height(column.0, column.1) {
        // Drop in from just above the grass
        let clear = surface as f32 + 0.5 + player.height + 1.0;
        player.set_spawn(Vec3::new(spawn.x, spawn.y.max(clear), spawn.z));
        player.reset();
    }
    info!("Spawning player at {}", player.position);

    let mut physics = PlayerPhysicsHandler::new(&config.physics);
    let frames_per_second = (1.0 / FRAME_TIME).round() as u32;

    for second in 1..=RUN_SECONDS {
        // Stand still for the first half, then walk forward
        player
            .input
            .set(MoveAction::Forward, second > RUN_SECONDS / 2);

        let mut steps = 0;
        for _ in 0..frames_per_second {
            steps += physics.update(FRAME_TIME, &mut player, &world);
        }

        info!(
            "t={}s pos={} vel={} on_ground={} ({} steps)",
            second,
            player.position,
            player.world_velocity(),
            player.on_ground,
            steps
        );
    }

    Ok(())
}
