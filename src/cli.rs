// batch-resize/src/cli.rs
use crate::core::{ResizeConfig, SuffixStyle};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "batch-resize", version, about = "Resize a batch of JPEG and PNG images")]
pub struct Cli {
    /// Directory resized images are written to; created if it does not exist
    #[arg(short, long = "output-dir", alias = "outputDir", default_value = "output")]
    pub output_dir: PathBuf,

    /// Target width in pixels; 0 or less derives it from the height
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub width: i64,

    /// Target height in pixels; 0 or less derives it from the width
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub height: i64,

    /// Comma-separated list of images to convert
    #[arg(short, long = "input-files", alias = "inputFiles")]
    pub input_files: String,

    /// Directory relative input files are resolved against
    #[arg(short, long = "base-dir", alias = "baseDir")]
    pub base_dir: Option<PathBuf>,

    /// String added to output file names, e.g. `_resized`
    #[arg(short, long, default_value = "")]
    pub suffix: String,

    /// How the suffix is placed in the file name
    #[arg(long, value_enum, default_value_t = SuffixStyleArg::Legacy)]
    pub suffix_style: SuffixStyleArg,

    /// Run PNG output through a lossless oxipng pass
    #[arg(long)]
    pub optimize_png: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SuffixStyleArg {
    /// `A01.jpg` -> `[A01 jpg]_resized.jpg`
    Legacy,
    /// `A01.jpg` -> `A01_resized.jpg`
    BeforeExtension,
}

impl From<SuffixStyleArg> for SuffixStyle {
    fn from(arg: SuffixStyleArg) -> Self {
        match arg {
            SuffixStyleArg::Legacy => SuffixStyle::Legacy,
            SuffixStyleArg::BeforeExtension => SuffixStyle::BeforeExtension,
        }
    }
}

impl Cli {
    pub fn to_config(&self) -> ResizeConfig {
        ResizeConfig {
            width: requested_dimension(self.width),
            height: requested_dimension(self.height),
            output_dir: self.output_dir.clone(),
            suffix: self.suffix.clone(),
            suffix_style: self.suffix_style.into(),
            optimize_png: self.optimize_png,
        }
    }
}

// Negative means "auto", same as 0.
fn requested_dimension(value: i64) -> u32 {
    u32::try_from(value.max(0)).unwrap_or(u32::MAX)
}
