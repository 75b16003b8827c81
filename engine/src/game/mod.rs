mod behavior;
mod game_state;
mod objects;
mod player;

pub use game_state::{GameState, Stats};
pub use objects::{Capabilities, DoorState, Object, ObjectId, ObjectKind, ObjectSet};
pub use player::{normalize_angle, signed_angle, sweep_blocked, Player};
