//! Texture import: image decoding and record creation

use std::path::Path;

use image::{ImageDecoder, ImageReader};
use thiserror::Error;
use tilepad_core::TextureRecord;

/// Errors surfaced while decoding a texture file.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("image decode error: {0}")]
    Image(#[from] image::ImageError),
}

/// Decode just enough of an image file to build a [`TextureRecord`].
///
/// Only the header is read: the record needs dimensions and the channel
/// count, never the pixels.
pub fn decode_record(path: &Path) -> Result<TextureRecord, ImportError> {
    let decoder = ImageReader::open(path)?
        .with_guessed_format()?
        .into_decoder()?;
    let (width, height) = decoder.dimensions();
    let channels = decoder.color_type().channel_count();
    Ok(TextureRecord::new(
        &path.to_string_lossy(),
        width,
        height,
        channels,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_record_reads_dimensions_and_channels() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wall.png");
        image::RgbaImage::new(8, 4).save(&path).unwrap();

        let record = decode_record(&path).unwrap();
        assert_eq!(record.name, "wall");
        assert_eq!((record.width, record.height), (8, 4));
        assert_eq!(record.channels, 4);
        assert_eq!(record.id, None);
    }

    #[test]
    fn test_decode_record_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = decode_record(&dir.path().join("gone.png"));
        assert!(matches!(result, Err(ImportError::Io(_))));
    }

    #[test]
    fn test_decode_record_rejects_non_image_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fake.png");
        std::fs::write(&path, "not an image").unwrap();

        assert!(decode_record(&path).is_err());
    }
}
