//! Imported texture records and canonical naming

use crate::TileId;

/// Derive the canonical texture name from a file path.
///
/// Strips everything up to and including the last path separator, then
/// everything from the first `.` of what remains. `a/b/tile01.png`,
/// `tile01.foo.png` and plain `tile01` all yield `tile01`. Files sharing a
/// basename-before-first-dot are the same texture on purpose: a level saved
/// against `tiles/wall.png` still resolves after the art moves to
/// `art/wall.bmp`.
pub fn canonical_name(path: &str) -> String {
    let base = match path.rfind(['/', '\\']) {
        Some(sep) => &path[sep + 1..],
        None => path,
    };
    let stem = match base.find('.') {
        Some(dot) => &base[..dot],
        None => base,
    };
    stem.to_string()
}

/// One imported tile image.
///
/// Created once per decoded file. Everything except `id` is immutable;
/// `id` is bound exactly once, either by the registry reconciling the record
/// against a loaded legend or by an explicit assignment from the palette.
#[derive(Debug, Clone, PartialEq)]
pub struct TextureRecord {
    /// Canonical texture name (see [`canonical_name`]).
    pub name: String,
    /// Bound tile identifier, `None` while the texture is unassigned.
    pub id: Option<TileId>,
    /// Source image width in pixels.
    pub width: u32,
    /// Source image height in pixels.
    pub height: u32,
    /// Color channels in the source image (3 = RGB, 4 = RGBA).
    pub channels: u8,
}

impl TextureRecord {
    /// Create an unassigned record for a decoded image file.
    pub fn new(path: &str, width: u32, height: u32, channels: u8) -> Self {
        Self {
            name: canonical_name(path),
            id: None,
            width,
            height,
            channels,
        }
    }
}
