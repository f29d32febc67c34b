//! The editing session: one registry, one grid, driven by the UI

use std::path::{Path, PathBuf};

use log::{info, warn};
use tilepad_core::{LevelFormatError, LevelGrid, TextureRecord, TextureRegistry, TileId};

use crate::import::decode_record;

/// Owned state for a single editing session.
///
/// The UI holds exactly one of these and calls into it one operation at a
/// time inside its frame loop; there is no interior mutability and no
/// background work. A session starts with no level open; `new_level` or
/// `load_level` begins editing, and either of them later discards the
/// current grid outright (there is no unsaved-changes tracking).
#[derive(Debug, Default)]
pub struct EditorSession {
    registry: TextureRegistry,
    grid: Option<LevelGrid>,
}

impl EditorSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// The texture registry backing the palette.
    pub fn registry(&self) -> &TextureRegistry {
        &self.registry
    }

    /// The open grid, if a level has been created or loaded.
    pub fn grid(&self) -> Option<&LevelGrid> {
        self.grid.as_ref()
    }

    /// Start a fresh level, discarding any current grid.
    pub fn new_level(&mut self, width: u32, height: u32) {
        self.grid = Some(LevelGrid::new(width, height));
    }

    /// Paint (or clear, with `None`) the cell at (x, y).
    ///
    /// An open level and in-range coordinates are the caller's contract.
    pub fn paint(&mut self, x: u32, y: u32, tile: Option<TileId>) {
        debug_assert!(self.grid.is_some(), "paint with no level open");
        if let Some(grid) = &mut self.grid {
            grid.set(x, y, tile);
        }
    }

    /// Add already-decoded texture records to the registry.
    pub fn import_records<I>(&mut self, records: I)
    where
        I: IntoIterator<Item = TextureRecord>,
    {
        self.registry.import_all(records);
    }

    /// Decode and import a batch of image files, in order.
    ///
    /// A file that fails to decode is reported and skipped; the rest of the
    /// batch still imports. Returns how many files made it in.
    pub fn import_files(&mut self, paths: &[PathBuf]) -> usize {
        let mut imported = 0;
        for path in paths {
            match decode_record(path) {
                Ok(record) => {
                    self.registry.import(record);
                    imported += 1;
                }
                Err(e) => warn!("skipping texture {}: {}", path.display(), e),
            }
        }
        imported
    }

    /// Bind the next free identifier to the pending texture with this name.
    pub fn assign_texture(&mut self, name: &str) -> Option<TileId> {
        self.registry.assign(name)
    }

    /// Save the open level and the current legend to `path`.
    pub fn save_level(&self, path: &Path) -> Result<(), LevelFormatError> {
        debug_assert!(self.grid.is_some(), "save with no level open");
        let Some(grid) = &self.grid else {
            return Ok(());
        };
        tilepad_core::save_level(path, grid, &self.registry.legend())?;
        info!("saved level to {}", path.display());
        Ok(())
    }

    /// Load a level file, replacing the grid and reconciling the registry
    /// against the file's legend.
    ///
    /// On failure the session is left exactly as it was.
    pub fn load_level(&mut self, path: &Path) -> Result<(), LevelFormatError> {
        let (grid, legend) = tilepad_core::load_level(path)?;
        self.grid = Some(grid);
        self.registry.reconcile(&legend);
        info!("loaded level from {}", path.display());
        Ok(())
    }
}
