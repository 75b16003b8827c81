use std::f32::consts::PI;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::host::Rgba;

/// Tunable engine constants.
/// Missing JSON fields fall back to the defaults below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Screen width in pixels, one ray per column
    pub screen_width: i32,
    /// Screen height in pixels
    pub screen_height: i32,
    /// Horizontal field of view in radians
    pub fov: f32,
    /// Rays travelling further than this hit nothing
    pub max_distance: f32,
    /// Ray march increment in grid units (smaller is sharper and slower)
    pub ray_step: f32,

    /// Distance covered by one move command
    pub move_speed: f32,
    /// Angle covered by one turn command, in radians
    pub turn_speed: f32,
    /// Grid units per second
    pub projectile_speed: f32,
    /// Door width lost per second while opening
    pub door_speed: f32,
    /// Grid units per second
    pub fly_speed: f32,
    /// Seconds between random direction changes of a fly
    pub fly_turn_interval: f32,

    pub starting_lives: u32,

    pub ceiling_color: Rgba,
    pub floor_color: Rgba,
    pub hud_color: Rgba,
    pub hud_outline_color: Rgba,

    /// Seed for the roaming enemies' random walk
    pub seed: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            screen_width: 1024,
            screen_height: 768,
            fov: PI / 3.0,
            max_distance: 20.0,
            ray_step: 0.01,
            move_speed: 0.1,
            turn_speed: 0.1,
            projectile_speed: 6.0,
            door_speed: 1.0,
            fly_speed: 1.0,
            fly_turn_interval: 1.5,
            starting_lives: 3,
            ceiling_color: Rgba::new(40, 40, 48, 255),
            floor_color: Rgba::new(90, 80, 70, 255),
            hud_color: Rgba::WHITE,
            hud_outline_color: Rgba::BLACK,
            seed: 0x5eed,
        }
    }
}

impl EngineConfig {
    /// Load and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_bytes(&bytes)
    }

    pub fn from_json_bytes(bytes: &[u8]) -> Result<Self, ConfigError> {
        let config: EngineConfig = serde_json::from_slice(bytes)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_bytes(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec_pretty(self)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.screen_width <= 0 || self.screen_height <= 0 {
            return Err(invalid(
                "screen_width",
                format!("screen must be positive, got {}x{}", self.screen_width, self.screen_height),
            ));
        }
        if !(self.fov > 0.0 && self.fov < PI) {
            return Err(invalid("fov", format!("{} is outside (0, pi)", self.fov)));
        }
        if !(self.ray_step > 0.0) {
            return Err(invalid("ray_step", format!("{} is not positive", self.ray_step)));
        }
        if !(self.max_distance > self.ray_step) {
            return Err(invalid(
                "max_distance",
                format!("{} must exceed ray_step {}", self.max_distance, self.ray_step),
            ));
        }
        for (field, speed) in [
            ("move_speed", self.move_speed),
            ("projectile_speed", self.projectile_speed),
            ("door_speed", self.door_speed),
            ("fly_speed", self.fly_speed),
        ] {
            if !(speed > 0.0) {
                return Err(invalid(field, format!("{speed} is not positive")));
            }
        }
        if self.starting_lives == 0 {
            return Err(invalid("starting_lives", "the player needs at least one life".to_string()));
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: String) -> ConfigError {
    ConfigError::Invalid { field, reason }
}
