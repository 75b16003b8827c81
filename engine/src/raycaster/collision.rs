//! Point-in-grid collision shared by player movement, projectile flight and
//! ray termination.

use super::map2d::{CellKind, DoorOrientation, GridMap, Material};
use crate::game::{ObjectId, ObjectSet};
use crate::host::TextureId;

/// Half the thickness of a door slab, in grid units
pub const DOOR_HALF_THICKNESS: f32 = 0.02;

/// What a collision point touched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    Wall(Material),
    Door(ObjectId),
}

impl Surface {
    pub fn texture(self) -> TextureId {
        match self {
            Surface::Wall(material) => material.texture(),
            Surface::Door(_) => TextureId::Door,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Collision {
    pub surface: Surface,
    /// Horizontal texture coordinate in `[0, 1)`
    pub tex_offset: f32,
}

/// Wall test for a continuous point.
///
/// The texture offset is the fractional part of whichever coordinate lies
/// further from a grid line: a point just past a vertical face (x close to an
/// integer) samples the texture by its y fraction, and vice versa.
pub fn is_wall_collision(map: &GridMap, x: f32, y: f32) -> Option<(Material, f32)> {
    match map.cell_at(x, y) {
        CellKind::Wall(material) => Some((material, wall_tex_offset(x, y))),
        _ => None,
    }
}

fn wall_tex_offset(x: f32, y: f32) -> f32 {
    let fx = x - x.floor();
    let fy = y - y.floor();
    let edge_x = fx.min(1.0 - fx);
    let edge_y = fy.min(1.0 - fy);
    if edge_x > edge_y {
        fx
    } else {
        fy
    }
}

/// Door test for a continuous point.
///
/// A door occupies a slab of `DOOR_HALF_THICKNESS` either side of its
/// centerline, and only the first `width` of the cell along the door. The
/// returned offset `1 - width + along` slides the texture with the slab.
pub fn is_door_collision(
    map: &GridMap,
    objects: &ObjectSet,
    x: f32,
    y: f32,
) -> Option<(ObjectId, f32)> {
    let CellKind::Door { orientation, door } = map.cell_at(x, y) else {
        return None;
    };
    let fx = x - x.floor();
    let fy = y - y.floor();
    let (across, along) = match orientation {
        DoorOrientation::Horizontal => (fy, fx),
        DoorOrientation::Vertical => (fx, fy),
    };
    if (across - 0.5).abs() > DOOR_HALF_THICKNESS {
        return None;
    }
    let width = objects.door_width(door);
    if along >= width {
        return None;
    }
    Some((door, 1.0 - width + along))
}

/// Wall or door at this point
pub fn is_collision(map: &GridMap, objects: &ObjectSet, x: f32, y: f32) -> Option<Collision> {
    if let Some((material, tex_offset)) = is_wall_collision(map, x, y) {
        return Some(Collision {
            surface: Surface::Wall(material),
            tex_offset,
        });
    }
    is_door_collision(map, objects, x, y).map(|(door, tex_offset)| Collision {
        surface: Surface::Door(door),
        tex_offset,
    })
}
