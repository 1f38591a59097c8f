// batch-resize/src/processors/compressor.rs
use crate::core::{ImageToolError, Result, SourceFormat};
use crate::utils::format_file_size;
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::{DynamicImage, ImageResult};
use oxipng::{optimize_from_memory, Options};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

pub const JPEG_QUALITY: u8 = 100;

pub struct Compressor {
    quality: u8,
    optimize_png: bool,
}

impl Compressor {
    pub fn new() -> Self {
        Self {
            quality: JPEG_QUALITY,
            optimize_png: false,
        }
    }

    pub fn with_png_optimization(mut self, optimize: bool) -> Self {
        self.optimize_png = optimize;
        self
    }

    /// Creates `path` and encodes `image` into it. Returns the size written.
    ///
    /// The file is created before encoding starts, so an encoder failure
    /// leaves a truncated file behind.
    pub fn save(&self, image: &DynamicImage, path: &Path, format: SourceFormat) -> Result<u64> {
        log::debug!(
            "Saving image to {} with format {}, quality: {}",
            path.display(),
            format,
            self.quality
        );

        let file = File::create(path).map_err(|source| ImageToolError::OutputFileCreateFailure {
            path: path.to_path_buf(),
            source,
        })?;
        let mut writer = BufWriter::new(file);

        match format {
            SourceFormat::Jpeg => self
                .write_jpeg(image, &mut writer)
                .map_err(|e| encode_failure(path, e))?,
            SourceFormat::Png if self.optimize_png => {
                let optimized = self.compress_to_bytes(image, format, path)?;
                writer
                    .write_all(&optimized)
                    .map_err(|e| encode_failure(path, e))?;
            }
            SourceFormat::Png => self
                .write_png(image, &mut writer)
                .map_err(|e| encode_failure(path, e))?,
        }

        let file = writer
            .into_inner()
            .map_err(|e| encode_failure(path, e.error()))?;
        let size = match file.metadata() {
            Ok(metadata) => metadata.len(),
            Err(e) => {
                log::warn!("Failed to read size of {}: {}", path.display(), e);
                0
            }
        };

        log::info!("Saved image: {} ({})", path.display(), format_file_size(size));
        Ok(size)
    }

    /// Encodes into memory. PNG output goes through oxipng when enabled.
    pub fn compress_to_bytes(
        &self,
        image: &DynamicImage,
        format: SourceFormat,
        path: &Path,
    ) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();

        match format {
            SourceFormat::Jpeg => self
                .write_jpeg(image, &mut buffer)
                .map_err(|e| encode_failure(path, e))?,
            SourceFormat::Png => {
                self.write_png(image, &mut buffer)
                    .map_err(|e| encode_failure(path, e))?;
                if self.optimize_png {
                    return self.optimize_png_bytes(&buffer, path);
                }
            }
        }

        Ok(buffer)
    }

    // JPEG carries no alpha channel
    fn write_jpeg<W: Write>(&self, image: &DynamicImage, writer: W) -> ImageResult<()> {
        DynamicImage::ImageRgb8(image.to_rgb8())
            .write_with_encoder(JpegEncoder::new_with_quality(writer, self.quality))
    }

    fn write_png<W: Write>(&self, image: &DynamicImage, writer: W) -> ImageResult<()> {
        image.write_with_encoder(PngEncoder::new(writer))
    }

    fn optimize_png_bytes(&self, data: &[u8], path: &Path) -> Result<Vec<u8>> {
        let optimized = optimize_from_memory(data, &Options::default())
            .map_err(|e| encode_failure(path, format!("PNG optimization failed: {}", e)))?;

        log::debug!(
            "oxipng: {} -> {} bytes for {}",
            data.len(),
            optimized.len(),
            path.display()
        );
        Ok(optimized)
    }
}

impl Default for Compressor {
    fn default() -> Self {
        Self::new()
    }
}

fn encode_failure(path: &Path, error: impl ToString) -> ImageToolError {
    ImageToolError::EncodeFailure {
        path: path.to_path_buf(),
        message: error.to_string(),
    }
}
