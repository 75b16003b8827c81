use glam::Vec2;

use super::collision::{is_collision, Surface};
use super::map2d::GridMap;
use crate::game::ObjectSet;

/// Where a ray stopped
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// Raw distance travelled along the ray (not fisheye corrected)
    pub distance: f32,
    pub surface: Surface,
    pub tex_offset: f32,
}

/// March a ray from `origin` at `angle` in increments of `step` until it
/// reports a wall or door collision. Rays that travel past `max_distance`
/// return `None` and are drawn as background.
///
/// A smaller step resolves wall edges and thin doors more precisely at a
/// proportionally higher cost.
pub fn cast_ray(
    map: &GridMap,
    objects: &ObjectSet,
    origin: Vec2,
    angle: f32,
    max_distance: f32,
    step: f32,
) -> Option<RayHit> {
    let direction = Vec2::from_angle(angle);
    let mut distance = 0.0;

    while distance < max_distance {
        distance += step;
        let point = origin + direction * distance;
        if let Some(collision) = is_collision(map, objects, point.x, point.y) {
            return Some(RayHit {
                distance,
                surface: collision.surface,
                tex_offset: collision.tex_offset,
            });
        }
    }

    None
}

/// Project a raw ray length onto the facing direction so flat walls stay flat
pub fn fisheye_corrected(raw_distance: f32, facing: f32, ray_angle: f32) -> f32 {
    raw_distance * (facing - ray_angle).cos()
}

/// On-screen height of a wall slice at `corrected_distance`
pub fn projected_height(screen_height: i32, corrected_distance: f32) -> f32 {
    if corrected_distance <= f32::EPSILON {
        return screen_height as f32;
    }
    screen_height as f32 / corrected_distance
}
