pub mod caster;
pub mod collision;
pub mod map2d;
pub mod renderer;

pub use caster::{cast_ray, fisheye_corrected, projected_height, RayHit};
pub use collision::{is_collision, is_door_collision, is_wall_collision, Collision, Surface};
pub use map2d::{CellKind, DoorOrientation, GridMap, Material};
pub use renderer::{DepthBuffer, Raycaster, SpriteProjection};
