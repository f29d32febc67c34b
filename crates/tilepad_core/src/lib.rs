//! Core data structures for tilepad
//!
//! This crate provides the fundamental types for the tilepad level editor:
//! - `LevelGrid` - The paintable width x height grid of tile identifiers
//! - `Legend` - The identifier <-> name mapping persisted with a level
//! - `TextureRecord` - One imported tile image and its canonical name
//! - `TextureRegistry` - Name and identifier bookkeeping across sessions
//! - `write_level`/`parse_level` - The plain-text level file format

mod format;
mod grid;
mod legend;
mod registry;
mod texture;

pub use format::{load_level, parse_level, save_level, write_level, LevelFormatError};
pub use grid::{LevelGrid, MAX_GRID_SIZE, MIN_GRID_SIZE};
pub use legend::Legend;
pub use registry::TextureRegistry;
pub use texture::{canonical_name, TextureRecord};

/// Tile identifier as stored in grid cells and legend entries.
///
/// Identifiers count up from 1; the on-disk format writes empty cells as 0.
pub type TileId = u16;
