// batch-resize/src/processors/resizer.rs
use crate::core::{ImageToolError, Result, TargetDimensions};
use image::{imageops::FilterType, DynamicImage};

pub struct Resizer {
    filter: FilterType,
}

impl Resizer {
    pub fn new() -> Self {
        Self {
            filter: FilterType::CatmullRom,
        }
    }

    pub fn resize(&self, image: &DynamicImage, target: TargetDimensions) -> DynamicImage {
        if target.width == image.width() && target.height == image.height() {
            log::debug!("Image dimensions unchanged, skipping resize");
            return image.clone();
        }

        log::debug!(
            "Resizing image from {}x{} to {}",
            image.width(),
            image.height(),
            target
        );

        image.resize_exact(target.width, target.height, self.filter)
    }

    /// Works out the output size for a `source` of `(width, height)`.
    ///
    /// A requested side of 0 means "derive it from the other one". The ratio is
    /// taken as a whole percentage first and the result truncated again, so
    /// `1024x768` at height 500 gives width 665 rather than 666. With both
    /// sides at 0 the result is `0x0`; callers decide whether that is usable.
    pub fn target_dimensions(
        source: (u32, u32),
        width: u32,
        height: u32,
    ) -> Result<TargetDimensions> {
        let (src_w, src_h) = source;

        if width > 0 && height > 0 {
            return Ok(TargetDimensions::new(width, height));
        }

        if height > 0 {
            let new_w = scale_side(src_w, height, src_h)
                .ok_or(ImageToolError::InvalidDimensions { width: 0, height })?;
            return Ok(TargetDimensions::new(new_w, height));
        }

        if width > 0 {
            let new_h = scale_side(src_h, width, src_w)
                .ok_or(ImageToolError::InvalidDimensions { width, height: 0 })?;
            return Ok(TargetDimensions::new(width, new_h));
        }

        Ok(TargetDimensions::new(0, 0))
    }
}

impl Default for Resizer {
    fn default() -> Self {
        Self::new()
    }
}

// other_side * (requested * 100 / side) / 100, truncating at each division
fn scale_side(other_side: u32, requested: u32, side: u32) -> Option<u32> {
    if side == 0 {
        return None;
    }
    let percent = u64::from(requested) * 100 / u64::from(side);
    let scaled = u64::from(other_side) * percent / 100;
    u32::try_from(scaled).ok()
}
