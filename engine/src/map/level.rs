use std::path::Path;
use std::str::FromStr;

use glam::Vec2;
use tracing::info;

use crate::error::LevelError;
use crate::game::{Object, ObjectSet};
use crate::raycaster::{CellKind, DoorOrientation, GridMap, Material};

/// A parsed level: the grid, every object and where the player starts.
///
/// The text format is a `width height` header followed by `height` rows of
/// exactly `width` symbols:
///
/// | symbol      | meaning                   |
/// |-------------|---------------------------|
/// | `1` `2` `3` | wall of that material     |
/// | `-` `\|`    | horizontal / vertical door |
/// | `@`         | player start (exactly one) |
/// | `p`         | stationary hazard          |
/// | `f`         | roaming hazard             |
/// | `c`         | coin                       |
/// | `*`         | flower                     |
/// | other       | empty floor                |
pub struct Level {
    pub map: GridMap,
    pub objects: ObjectSet,
    pub player_start: Vec2,
}

impl Level {
    /// Load a level from file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LevelError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| LevelError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let level: Level = source.parse()?;
        info!(
            path = %path.display(),
            width = level.map.width,
            height = level.map.height,
            objects = level.objects.len(),
            "level loaded"
        );
        Ok(level)
    }
}

impl FromStr for Level {
    type Err = LevelError;

    fn from_str(source: &str) -> Result<Self, Self::Err> {
        let mut lines = source.lines().map(|line| line.trim_end_matches('\r'));
        let header = lines.next().unwrap_or_default();
        let (width, height) = parse_header(header)?;

        let mut rows: Vec<&str> = lines.collect();
        while rows.last().is_some_and(|row| row.is_empty()) {
            rows.pop();
        }
        if rows.len() != height {
            return Err(LevelError::RowCount {
                expected: height,
                found: rows.len(),
            });
        }

        let mut map = GridMap::new(width, height);
        let mut objects = ObjectSet::new();
        let mut player_start = None;

        for (y, row) in rows.iter().enumerate() {
            let found = row.chars().count();
            if found != width {
                return Err(LevelError::RowLength {
                    row: y,
                    expected: width,
                    found,
                });
            }

            for (x, symbol) in row.chars().enumerate() {
                let centre = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
                let object = match symbol {
                    '1' | '2' | '3' => {
                        let material = Material(symbol as u8 - b'0');
                        map.set_cell(x, y, CellKind::Wall(material));
                        None
                    }
                    '-' => Some(Object::door(centre, DoorOrientation::Horizontal)),
                    '|' => Some(Object::door(centre, DoorOrientation::Vertical)),
                    '@' => {
                        if player_start.is_some() {
                            return Err(LevelError::DuplicatePlayer { x, y });
                        }
                        player_start = Some(centre);
                        None
                    }
                    'p' => Some(Object::poo(centre)),
                    'f' => Some(Object::fly(centre)),
                    'c' => Some(Object::coin(centre)),
                    '*' => Some(Object::flower(centre)),
                    _ => None,
                };

                let Some(object) = object else {
                    continue;
                };
                let door = object.door_state().map(|state| state.orientation);
                let id = objects.try_push(object).ok_or(LevelError::TooManyObjects {
                    capacity: ObjectSet::CAPACITY,
                })?;
                if let Some(orientation) = door {
                    map.set_cell(x, y, CellKind::Door { orientation, door: id });
                }
            }
        }

        let player_start = player_start.ok_or(LevelError::MissingPlayer)?;
        Ok(Level {
            map,
            objects,
            player_start,
        })
    }
}

fn parse_header(header: &str) -> Result<(usize, usize), LevelError> {
    let invalid = || LevelError::InvalidHeader(header.to_string());
    let mut fields = header.split_whitespace();
    let width = fields.next().and_then(|f| f.parse::<usize>().ok()).ok_or_else(invalid)?;
    let height = fields.next().and_then(|f| f.parse::<usize>().ok()).ok_or_else(invalid)?;
    if fields.next().is_some() {
        return Err(invalid());
    }
    if width == 0 || height == 0 {
        return Err(LevelError::EmptyDimensions { width, height });
    }
    Ok((width, height))
}
