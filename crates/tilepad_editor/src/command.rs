//! Discrete editing commands
//!
//! The UI translates clicks and menu picks into commands and applies them to
//! the session one at a time. How an event was detected stays in the UI;
//! what the operation means lives here.

use std::path::PathBuf;

use tilepad_core::{LevelFormatError, TileId};

use crate::EditorSession;

/// One editing operation, applied synchronously to a session.
#[derive(Debug, Clone, PartialEq)]
pub enum EditorCommand {
    /// Start a fresh level, discarding the current grid.
    NewLevel { width: u32, height: u32 },
    /// Set (or clear, with `None`) one cell.
    PaintCell {
        x: u32,
        y: u32,
        tile: Option<TileId>,
    },
    /// Bind the next free identifier to a pending texture.
    AssignTexture { name: String },
    /// Decode and import texture files.
    ImportTextures { paths: Vec<PathBuf> },
    /// Write the current level to a file.
    SaveLevel { path: PathBuf },
    /// Replace the session contents with a level file.
    LoadLevel { path: PathBuf },
}

impl EditorCommand {
    /// Apply this command to a session.
    ///
    /// Only save and load can fail; every other command completes without
    /// touching the file system.
    pub fn apply(self, session: &mut EditorSession) -> Result<(), LevelFormatError> {
        match self {
            EditorCommand::NewLevel { width, height } => {
                session.new_level(width, height);
                Ok(())
            }
            EditorCommand::PaintCell { x, y, tile } => {
                session.paint(x, y, tile);
                Ok(())
            }
            EditorCommand::AssignTexture { name } => {
                session.assign_texture(&name);
                Ok(())
            }
            EditorCommand::ImportTextures { paths } => {
                session.import_files(&paths);
                Ok(())
            }
            EditorCommand::SaveLevel { path } => session.save_level(&path),
            EditorCommand::LoadLevel { path } => session.load_level(&path),
        }
    }
}
