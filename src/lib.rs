mod cli;
mod core;
mod processors;
mod utils;

pub use crate::cli::{Cli, SuffixStyleArg};
pub use crate::core::{
    resize_image, ImageProcessor, ImageToolError, ProcessingStats, ResizeConfig, ResizeReport,
    Result, SourceFormat, SuffixStyle, TargetDimensions, MAX_DIMENSION,
};
pub use crate::processors::{
    calculate_overall_savings, BatchProcessor, Compressor, DecodedImage, Loader, ReplayReader,
    Resizer, HEADER_PROBE_BYTES, JPEG_QUALITY,
};
pub use crate::utils::{format_file_size, output_file_name, parse_input_files, resolve_input_path};

pub mod prelude {
    pub use crate::{
        BatchProcessor, Compressor, ImageProcessor, Loader, ResizeConfig, Resizer, SuffixStyle,
    };
}

// Re-export commonly used types
pub use image::DynamicImage;
