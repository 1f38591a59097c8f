// batch-resize/src/core/processor.rs
use super::{
    ImageToolError, ResizeConfig, Result, SourceFormat, SuffixStyle, TargetDimensions,
    MAX_DIMENSION,
};
use crate::processors::{Compressor, Loader, Resizer};
use crate::utils::output_file_name;
use std::fs;
use std::path::{Path, PathBuf};

/// What one successful run of the pipeline produced.
#[derive(Debug, Clone)]
pub struct ResizeReport {
    pub output_path: PathBuf,
    pub format: SourceFormat,
    pub source_dimensions: (u32, u32),
    pub target: TargetDimensions,
    pub size_before: u64,
    pub size_after: u64,
}

pub struct ImageProcessor {
    config: ResizeConfig,
    loader: Loader,
    resizer: Resizer,
    compressor: Compressor,
}

impl ImageProcessor {
    pub fn new(config: ResizeConfig) -> Self {
        let compressor = Compressor::new().with_png_optimization(config.optimize_png);

        Self {
            config,
            loader: Loader::new(),
            resizer: Resizer::new(),
            compressor,
        }
    }

    pub fn config(&self) -> &ResizeConfig {
        &self.config
    }

    /// Decodes `source_path`, scales it and writes it into the output directory.
    ///
    /// Nothing is rolled back on failure: a directory created here or a stale
    /// output file removed here stays that way.
    pub fn resize<P: AsRef<Path>>(&self, source_path: P) -> Result<ResizeReport> {
        let source_path = source_path.as_ref();

        let decoded = self.loader.load(source_path)?;

        let target = Resizer::target_dimensions(
            (decoded.width, decoded.height),
            self.config.width,
            self.config.height,
        )?;
        if target.is_empty() || target.width > MAX_DIMENSION || target.height > MAX_DIMENSION {
            return Err(ImageToolError::InvalidDimensions {
                width: target.width,
                height: target.height,
            });
        }

        let resized = self.resizer.resize(&decoded.image, target);
        drop(decoded.image);

        self.ensure_output_dir()?;

        let output_path = self.output_path(source_path)?;
        remove_stale_output(&output_path)?;

        let size_after = self.compressor.save(&resized, &output_path, decoded.format)?;

        Ok(ResizeReport {
            output_path,
            format: decoded.format,
            source_dimensions: (decoded.width, decoded.height),
            target,
            size_before: decoded.file_size,
            size_after,
        })
    }

    pub fn output_path(&self, source_path: &Path) -> Result<PathBuf> {
        let file_name = source_path
            .file_name()
            .map(|name| name.to_string_lossy())
            .ok_or_else(|| {
                ImageToolError::InvalidParameter(format!(
                    "Invalid file name: {}",
                    source_path.display()
                ))
            })?;

        Ok(self.config.output_dir.join(output_file_name(
            &file_name,
            &self.config.suffix,
            self.config.suffix_style,
        )))
    }

    // One level only; a missing parent is an error.
    fn ensure_output_dir(&self) -> Result<()> {
        let dir = &self.config.output_dir;
        if fs::metadata(dir).is_ok() {
            return Ok(());
        }

        log::debug!("Creating output directory {}", dir.display());
        fs::create_dir(dir).map_err(|source| ImageToolError::OutputDirCreateFailure {
            path: dir.clone(),
            source,
        })
    }
}

fn remove_stale_output(path: &Path) -> Result<()> {
    if fs::symlink_metadata(path).is_err() {
        return Ok(());
    }

    log::warn!("Replacing existing output file {}", path.display());
    fs::remove_file(path).map_err(|source| ImageToolError::OutputFileRemoveFailure {
        path: path.to_path_buf(),
        source,
    })
}

/// Resizes a single file with default encoder settings and legacy naming.
///
/// A `width` or `height` of 0 is derived from the other side.
pub fn resize_image<P: AsRef<Path>, Q: AsRef<Path>>(
    source_path: P,
    width: u32,
    height: u32,
    output_dir: Q,
    suffix: &str,
) -> Result<ResizeReport> {
    let config = ResizeConfig {
        width,
        height,
        output_dir: output_dir.as_ref().to_path_buf(),
        suffix: suffix.to_string(),
        suffix_style: SuffixStyle::Legacy,
        optimize_png: false,
    };

    ImageProcessor::new(config).resize(source_path)
}
