// batch-resize/src/core/mod.rs
pub mod processor;

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

pub use processor::{resize_image, ImageProcessor, ResizeReport};

/// Largest width or height accepted on the command line.
pub const MAX_DIMENSION: u32 = 100_000;

/// The two container formats the pipeline reads and writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Jpeg,
    Png,
}

impl SourceFormat {
    pub fn from_image_format(format: image::ImageFormat) -> Option<Self> {
        match format {
            image::ImageFormat::Jpeg => Some(Self::Jpeg),
            image::ImageFormat::Png => Some(Self::Png),
            _ => None,
        }
    }

    pub fn image_format(self) -> image::ImageFormat {
        match self {
            Self::Jpeg => image::ImageFormat::Jpeg,
            Self::Png => image::ImageFormat::Png,
        }
    }
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Jpeg => f.write_str("jpeg"),
            Self::Png => f.write_str("png"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetDimensions {
    pub width: u32,
    pub height: u32,
}

impl TargetDimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

impl fmt::Display for TargetDimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// How a non-empty suffix is worked into the output file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SuffixStyle {
    /// `A01.jpg` + `_resized` -> `[A01 jpg]_resized.jpg`
    #[default]
    Legacy,
    /// `A01.jpg` + `_resized` -> `A01_resized.jpg`
    BeforeExtension,
}

#[derive(Debug, Clone)]
pub struct ResizeConfig {
    pub width: u32,
    pub height: u32,
    pub output_dir: PathBuf,
    pub suffix: String,
    pub suffix_style: SuffixStyle,
    pub optimize_png: bool,
}

#[derive(Debug, Default)]
pub struct ProcessingStats {
    pub processed_count: usize,
    pub total_size_before: u64,
    pub total_size_after: u64,
    pub errors: Vec<(String, String)>,
}

impl Default for ResizeConfig {
    fn default() -> Self {
        Self {
            width: 0,
            height: 0,
            output_dir: PathBuf::from("output"),
            suffix: String::new(),
            suffix_style: SuffixStyle::Legacy,
            optimize_png: false,
        }
    }
}

impl ResizeConfig {
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 && self.height == 0 {
            return Err(ImageToolError::InvalidParameter(
                "Either width or height must be a positive integer".to_string(),
            ));
        }

        if self.width > MAX_DIMENSION || self.height > MAX_DIMENSION {
            return Err(ImageToolError::InvalidParameter(format!(
                "Dimensions too large (max {} pixels)",
                MAX_DIMENSION
            )));
        }

        Ok(())
    }
}

#[derive(Error, Debug)]
pub enum ImageToolError {
    #[error("cannot read {path}: {source}")]
    UnreadableSource {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unrecognized image format: {path}")]
    UnrecognizedFormat { path: PathBuf },

    #[error("unsupported format {format} (only jpeg and png are handled): {path}")]
    UnsupportedFormat { path: PathBuf, format: String },

    #[error("failed to decode {path}: {message}")]
    DecodeFailure { path: PathBuf, message: String },

    #[error("invalid target dimensions {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("cannot create output directory {path}: {source}")]
    OutputDirCreateFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot remove existing output file {path}: {source}")]
    OutputFileRemoveFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot create output file {path}: {source}")]
    OutputFileCreateFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode {path}: {message}")]
    EncodeFailure { path: PathBuf, message: String },

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

pub type Result<T> = std::result::Result<T, ImageToolError>;
