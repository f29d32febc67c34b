//! Level grid storage

use crate::TileId;

/// Minimum width/height of a level grid. Anything smaller has no usable
/// editing surface.
pub const MIN_GRID_SIZE: u32 = 3;

/// Maximum width/height of a level grid. Caps the allocation a level file
/// can demand before its cell data has even been read.
pub const MAX_GRID_SIZE: u32 = 4096;

/// A width x height grid of tile identifiers.
///
/// Cells live in a single flat buffer in row-major order (`y * width + x`);
/// `None` is an empty cell. Changing dimensions means allocating a new grid,
/// there is no resize-in-place.
#[derive(Debug, Clone, PartialEq)]
pub struct LevelGrid {
    width: u32,
    height: u32,
    cells: Vec<Option<TileId>>,
}

impl LevelGrid {
    /// Create a grid with every cell empty.
    ///
    /// Dimensions below [`MIN_GRID_SIZE`] are a caller contract violation.
    pub fn new(width: u32, height: u32) -> Self {
        debug_assert!(
            width >= MIN_GRID_SIZE && height >= MIN_GRID_SIZE,
            "grid dimensions must be at least {MIN_GRID_SIZE}x{MIN_GRID_SIZE}, got {width}x{height}"
        );
        let size = width as usize * height as usize;
        Self {
            width,
            height,
            cells: vec![None; size],
        }
    }

    /// Grid width in cells.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Grid height in cells.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Tile identifier at (x, y), or `None` for an empty cell.
    ///
    /// Coordinates must be in range; the caller enumerates exactly
    /// width x height positions.
    pub fn get(&self, x: u32, y: u32) -> Option<TileId> {
        debug_assert!(x < self.width && y < self.height);
        self.cells[y as usize * self.width as usize + x as usize]
    }

    /// Set the cell at (x, y). Painting `None` clears the cell.
    pub fn set(&mut self, x: u32, y: u32, tile: Option<TileId>) {
        debug_assert!(x < self.width && y < self.height);
        self.cells[y as usize * self.width as usize + x as usize] = tile;
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Option<TileId>] {
        &self.cells
    }
}
