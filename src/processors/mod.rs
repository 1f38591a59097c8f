// batch-resize/src/processors/mod.rs
mod batch;
mod compressor;
mod loader;
mod resizer;

pub use batch::{calculate_overall_savings, BatchProcessor};
pub use compressor::{Compressor, JPEG_QUALITY};
pub use loader::{DecodedImage, Loader, ReplayReader, HEADER_PROBE_BYTES};
pub use resizer::Resizer;
