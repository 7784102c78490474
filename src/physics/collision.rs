use crate::player::Player;
use crate::world::BlockSource;
use glam::{IVec3, Vec3};

/// A unit block penetrating the player's bounding cylinder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Collision {
    /// Penetration depth along `normal`
    pub overlap: f32,
    /// Unit push-out direction, world space
    pub normal: Vec3,
    pub block: IVec3,
    /// Point on the block closest to the cylinder centre
    pub contact_point: Vec3,
}

/// Strict containment test against the player's cylinder.
///
/// Points on the cylinder's surface are outside, so a contact that was
/// pushed out exactly to the boundary no longer counts as penetrating.
pub fn point_in_cylinder(point: Vec3, player: &Player) -> bool {
    let d = point - player.center();
    let r_sq = d.x * d.x + d.z * d.z;

    d.y.abs() < player.height / 2.0 && r_sq < player.radius * player.radius
}

/// Non-empty blocks whose cells intersect the player's integer-rounded extents.
///
/// Blocks occupy `[c - 0.5, c + 0.5]` around their integer coordinate `c`.
/// Coordinates outside the source's bounds count as empty.
pub fn broad_phase<W: BlockSource + ?Sized>(player: &Player, world: &W) -> Vec<IVec3> {
    let p = player.position;
    let min = IVec3::new(
        (p.x - player.radius).floor() as i32,
        (p.y - player.height).floor() as i32,
        (p.z - player.radius).floor() as i32,
    );
    let max = IVec3::new(
        (p.x + player.radius).ceil() as i32,
        p.y.ceil() as i32,
        (p.z + player.radius).ceil() as i32,
    );

    let mut candidates = Vec::new();
    for x in min.x..=max.x {
        for y in min.y..=max.y {
            for z in min.z..=max.z {
                if world.get_block(x, y, z).is_some_and(|block| !block.is_empty()) {
                    candidates.push(IVec3::new(x, y, z));
                }
            }
        }
    }
    candidates
}

/// Exact cylinder-vs-box test for each candidate, in candidate order.
///
/// The push-out axis is whichever needs the smaller correction: vertical
/// (clearing the cylinder's cap) or radial (clearing its side).
pub fn narrow_phase(candidates: &[IVec3], player: &Player) -> Vec<Collision> {
    let center = player.center();
    let half_height = player.height / 2.0;

    candidates
        .iter()
        .filter_map(|&block| {
            let b = block.as_vec3();
            let closest = Vec3::new(
                center.x.clamp(b.x - 0.5, b.x + 0.5),
                center.y.clamp(b.y - 0.5, b.y + 0.5),
                center.z.clamp(b.z - 0.5, b.z + 0.5),
            );

            if !point_in_cylinder(closest, player) {
                return None;
            }

            let d = closest - center;
            let overlap_y = half_height - d.y.abs();
            let overlap_xz = player.radius - (d.x * d.x + d.z * d.z).sqrt();

            let (normal, overlap) = if overlap_y < overlap_xz {
                let sign = if d.y > 0.0 { -1.0 } else { 1.0 };
                (Vec3::new(0.0, sign, 0.0), overlap_y)
            } else {
                (Vec3::new(-d.x, 0.0, -d.z).normalize_or_zero(), overlap_xz)
            };

            Some(Collision {
                overlap,
                normal,
                block,
                contact_point: closest,
            })
        })
        .collect()
}
