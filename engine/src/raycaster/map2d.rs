use crate::game::ObjectId;
use crate::host::TextureId;

/// Wall material as written in the level file (`1`, `2`, `3`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Material(pub u8);

impl Material {
    /// Material reported for every cell outside the map
    pub const BOUNDARY: Material = Material(0);

    /// Texture used to draw walls of this material
    pub fn texture(self) -> TextureId {
        match self.0 {
            2 => TextureId::Wall2,
            3 => TextureId::Wall3,
            _ => TextureId::Wall1,
        }
    }
}

/// Which centerline a sliding door sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DoorOrientation {
    /// `-`: spans the cell along x, centred on y + 0.5
    Horizontal,
    /// `|`: spans the cell along y, centred on x + 0.5
    Vertical,
}

/// Classification of a single grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Empty,
    Wall(Material),
    /// Door geometry lives in the door object referenced here
    Door {
        orientation: DoorOrientation,
        door: ObjectId,
    },
}

/// 2D grid-based map for raycasting
pub struct GridMap {
    /// Width of the map in cells
    pub width: usize,
    /// Height of the map in cells
    pub height: usize,
    /// Cell data, indexed `grid[x][y]`
    grid: Vec<Vec<CellKind>>,
}

impl GridMap {
    /// Create a new empty map
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            grid: vec![vec![CellKind::Empty; height]; width],
        }
    }

    pub fn is_within_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    /// Get cell kind at grid coordinates (out of bounds is a boundary wall)
    pub fn cell_kind(&self, x: i32, y: i32) -> CellKind {
        if !self.is_within_bounds(x, y) {
            return CellKind::Wall(Material::BOUNDARY);
        }
        self.grid[x as usize][y as usize]
    }

    /// Cell containing a continuous position
    pub fn cell_at(&self, x: f32, y: f32) -> CellKind {
        self.cell_kind(x.floor() as i32, y.floor() as i32)
    }

    /// Overwrite a cell. Out of range coordinates are ignored.
    pub fn set_cell(&mut self, x: usize, y: usize, kind: CellKind) {
        if x < self.width && y < self.height {
            self.grid[x][y] = kind;
        }
    }
}
