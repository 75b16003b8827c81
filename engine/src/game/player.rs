use std::f32::consts::{PI, TAU};

use glam::Vec2;

use crate::raycaster::collision::DOOR_HALF_THICKNESS;

/// Longest stride between collision samples along a move, narrower than a
/// closed door
const SWEEP_STEP: f32 = DOOR_HALF_THICKNESS;

/// Player position and facing, which double as the camera
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    /// Position in continuous grid units
    pub position: Vec2,
    /// Facing angle in radians, always in `[0, 2π)`
    facing: f32,
}

impl Player {
    /// Create a new player at the specified position
    pub fn new(position: Vec2, facing: f32) -> Self {
        Self {
            position,
            facing: normalize_angle(facing),
        }
    }

    pub fn facing(&self) -> f32 {
        self.facing
    }

    /// Unit vector along the facing angle
    pub fn direction(&self) -> Vec2 {
        Vec2::from_angle(self.facing)
    }

    /// Rotate by `delta` radians (positive turns right in screen space)
    pub fn turn(&mut self, delta: f32) {
        self.facing = normalize_angle(self.facing + delta);
    }

    /// Move `distance` along the facing direction (negative backs up) unless
    /// `blocked` rejects any point on the way. Returns whether the player moved.
    pub fn step(&mut self, distance: f32, blocked: impl Fn(Vec2) -> bool) -> bool {
        let destination = self.position + self.direction() * distance;
        if sweep_blocked(self.position, destination, blocked) {
            return false;
        }
        self.position = destination;
        true
    }
}

/// Sample the segment `from..=to` at strides of at most `SWEEP_STEP` and
/// report whether any sample after `from` is blocked
pub fn sweep_blocked(from: Vec2, to: Vec2, blocked: impl Fn(Vec2) -> bool) -> bool {
    let samples = (from.distance(to) / SWEEP_STEP).ceil().max(1.0) as usize;
    (1..=samples).any(|i| blocked(from.lerp(to, i as f32 / samples as f32)))
}

/// Wrap an angle into `[0, 2π)`
pub fn normalize_angle(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid rounds tiny negative inputs up to exactly TAU
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}

/// Wrap an angle into `(-π, π]`
pub fn signed_angle(angle: f32) -> f32 {
    let wrapped = normalize_angle(angle);
    if wrapped > PI {
        wrapped - TAU
    } else {
        wrapped
    }
}
