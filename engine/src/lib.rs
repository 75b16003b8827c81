//! Raycasting engine for grid-based first-person levels.
//!
//! The crate owns every game rule: the tile grid, the ray caster, the object
//! model and the per-frame compositor. Windowing, textures, audio and input
//! are provided by the host through the traits in [`host`].

pub mod config;
pub mod error;
pub mod game;
pub mod host;
pub mod map;
pub mod raycaster;

pub use config::EngineConfig;
pub use error::{ConfigError, LevelError};
pub use game::{GameState, Player, Stats};
pub use host::{Audio, Canvas, Command, Outcome, Rect, Rgba, Sound, TextureId};
pub use map::Level;
