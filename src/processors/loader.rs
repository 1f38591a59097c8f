// batch-resize/src/processors/loader.rs
use crate::core::{ImageToolError, Result, SourceFormat};
use image::{DynamicImage, GenericImageView};
use std::fs::File;
use std::io::{self, Chain, Cursor, Read};
use std::path::Path;

/// Bytes buffered for signature detection. Long enough for every magic
/// number `image::guess_format` knows about.
pub const HEADER_PROBE_BYTES: usize = 32;

/// A stream whose already-sniffed header is replayed ahead of the rest.
pub type ReplayReader<R> = Chain<Cursor<Vec<u8>>, R>;

pub struct DecodedImage {
    pub image: DynamicImage,
    pub format: SourceFormat,
    pub width: u32,
    pub height: u32,
    pub file_size: u64,
}

#[derive(Clone, Default)]
pub struct Loader;

impl Loader {
    pub fn new() -> Self {
        Self
    }

    pub fn load(&self, path: &Path) -> Result<DecodedImage> {
        log::debug!("Loading image from: {}", path.display());

        let file = File::open(path).map_err(|e| unreadable(path, e))?;
        self.decode(file, path)
    }

    /// Identifies the format from a prefix of `reader` and hands back a reader
    /// that still yields the stream from its first byte.
    pub fn sniff<R: Read>(
        &self,
        mut reader: R,
        path: &Path,
    ) -> Result<(SourceFormat, ReplayReader<R>)> {
        let mut header = Vec::with_capacity(HEADER_PROBE_BYTES);
        reader
            .by_ref()
            .take(HEADER_PROBE_BYTES as u64)
            .read_to_end(&mut header)
            .map_err(|e| unreadable(path, e))?;

        let detected = image::guess_format(&header).map_err(|_| {
            ImageToolError::UnrecognizedFormat {
                path: path.to_path_buf(),
            }
        })?;

        let format = SourceFormat::from_image_format(detected).ok_or_else(|| {
            ImageToolError::UnsupportedFormat {
                path: path.to_path_buf(),
                format: detected
                    .extensions_str()
                    .first()
                    .copied()
                    .unwrap_or("unknown")
                    .to_string(),
            }
        })?;

        log::debug!("Detected {} header in {}", format, path.display());

        Ok((format, Cursor::new(header).chain(reader)))
    }

    pub fn decode<R: Read>(&self, reader: R, path: &Path) -> Result<DecodedImage> {
        let (format, mut stream) = self.sniff(reader, path)?;

        let mut bytes = Vec::new();
        stream
            .read_to_end(&mut bytes)
            .map_err(|e| unreadable(path, e))?;

        let image = image::load_from_memory_with_format(&bytes, format.image_format())
            .map_err(|e| ImageToolError::DecodeFailure {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        let (width, height) = image.dimensions();
        log::debug!(
            "Loaded image: {}x{} pixels, format: {}, color: {:?}",
            width,
            height,
            format,
            image.color()
        );

        Ok(DecodedImage {
            image,
            format,
            width,
            height,
            file_size: bytes.len() as u64,
        })
    }
}

fn unreadable(path: &Path, source: io::Error) -> ImageToolError {
    ImageToolError::UnreadableSource {
        path: path.to_path_buf(),
        source,
    }
}
