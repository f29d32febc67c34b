//! Editing-session layer for tilepad
//!
//! This crate drives `tilepad_core` on behalf of a UI front end:
//! - `EditorSession` - Owned registry + grid state, one per editor window
//! - `EditorCommand` - Discrete operations the UI emits
//! - `decode_record` - Header-only texture decoding for import
//! - `EditorPreferences` - Persistent editor settings

mod command;
mod import;
mod preferences;
mod session;

pub use command::EditorCommand;
pub use import::{decode_record, ImportError};
pub use preferences::{EditorPreferences, RecentLevel, MAX_RECENT_LEVELS};
pub use session::EditorSession;
