#[cfg(test)]
mod tests {
    use assert_fs::prelude::*;
    use assert_fs::TempDir;
    use batch_resize::{
        resize_image, BatchProcessor, ImageProcessor, ImageToolError, ResizeConfig, Resizer,
        SourceFormat, SuffixStyle, TargetDimensions,
    };
    use image::{GenericImageView, ImageFormat, Rgb, RgbImage, Rgba, RgbaImage};
    use std::fs;
    use std::path::Path;

    fn write_jpeg(path: &Path, width: u32, height: u32) {
        let img = RgbImage::from_fn(width, height, |x, y| {
            Rgb([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8])
        });
        img.save_with_format(path, ImageFormat::Jpeg).unwrap();
    }

    fn write_png(path: &Path, width: u32, height: u32) -> RgbaImage {
        let img = RgbaImage::from_fn(width, height, |x, y| {
            Rgba([(x * 7 % 256) as u8, (y * 11 % 256) as u8, 128, (x % 2 * 127 + 128) as u8])
        });
        img.save_with_format(path, ImageFormat::Png).unwrap();
        img
    }

    fn config(temp_dir: &TempDir, width: u32, height: u32) -> ResizeConfig {
        ResizeConfig {
            width,
            height,
            output_dir: temp_dir.path().join("output"),
            ..Default::default()
        }
    }

    #[test]
    fn test_height_only_keeps_aspect_ratio() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.child("photo.jpg");
        write_jpeg(input.path(), 800, 600);

        let report = ImageProcessor::new(config(&temp_dir, 0, 300))
            .resize(input.path())
            .unwrap();

        assert_eq!(report.format, SourceFormat::Jpeg);
        assert_eq!(report.source_dimensions, (800, 600));
        assert_eq!((report.target.width, report.target.height), (400, 300));
        assert_eq!(report.output_path, temp_dir.path().join("output/photo.jpg"));

        let written = image::open(&report.output_path).unwrap();
        assert_eq!(written.dimensions(), (400, 300));
        assert_eq!(
            image::ImageFormat::from_path(&report.output_path).unwrap(),
            ImageFormat::Jpeg
        );
    }

    #[test]
    fn test_both_dimensions_are_exact() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.child("wide.png");
        write_png(input.path(), 90, 30);

        let report = ImageProcessor::new(config(&temp_dir, 25, 40))
            .resize(input.path())
            .unwrap();

        let written = image::open(&report.output_path).unwrap();
        assert_eq!(written.dimensions(), (25, 40));
    }

    #[test]
    fn test_width_only_truncates_twice() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.child("frame.png");
        write_png(input.path(), 640, 480);

        let report = ImageProcessor::new(config(&temp_dir, 100, 0))
            .resize(input.path())
            .unwrap();

        assert_eq!(image::image_dimensions(&report.output_path).unwrap(), (100, 72));
    }

    #[test]
    fn test_png_output_is_lossless() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.child("icon.png");
        let original = write_png(input.path(), 16, 12);

        // Same size: the pixels go through encode and decode untouched.
        let report = ImageProcessor::new(config(&temp_dir, 16, 12))
            .resize(input.path())
            .unwrap();

        let written = image::open(&report.output_path).unwrap();
        assert_eq!(written.to_rgba8(), original);
    }

    #[test]
    fn test_scaled_png_matches_resizer_output() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.child("chart.png");
        write_png(input.path(), 64, 48);

        let report = ImageProcessor::new(config(&temp_dir, 32, 0))
            .resize(input.path())
            .unwrap();
        assert_eq!((report.target.width, report.target.height), (32, 24));

        let source = image::open(input.path()).unwrap();
        let expected = Resizer::new()
            .resize(&source, TargetDimensions::new(32, 24))
            .to_rgba8();
        let written = image::open(&report.output_path).unwrap();
        assert_eq!(written.to_rgba8(), expected);
    }

    #[test]
    fn test_optimized_png_matches_plain_png() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.child("chart.png");
        write_png(input.path(), 64, 48);

        let plain = ImageProcessor::new(ResizeConfig {
            output_dir: temp_dir.path().join("plain"),
            ..config(&temp_dir, 32, 0)
        })
        .resize(input.path())
        .unwrap();

        let optimized = ImageProcessor::new(ResizeConfig {
            output_dir: temp_dir.path().join("optimized"),
            optimize_png: true,
            ..config(&temp_dir, 32, 0)
        })
        .resize(input.path())
        .unwrap();

        let plain_pixels = image::open(&plain.output_path).unwrap().to_rgba8();
        let optimized_pixels = image::open(&optimized.output_path).unwrap().to_rgba8();
        assert_eq!(plain_pixels, optimized_pixels);
    }

    #[test]
    fn test_format_is_sniffed_not_guessed_from_extension() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.child("actually-a-jpeg.png");
        let img = RgbImage::new(40, 20);
        img.save_with_format(input.path(), ImageFormat::Jpeg).unwrap();

        let report = ImageProcessor::new(config(&temp_dir, 20, 0))
            .resize(input.path())
            .unwrap();

        assert_eq!(report.format, SourceFormat::Jpeg);
        let bytes = fs::read(&report.output_path).unwrap();
        assert_eq!(image::guess_format(&bytes).unwrap(), ImageFormat::Jpeg);
    }

    #[test]
    fn test_unsupported_format_writes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.child("anim.gif");
        input.write_binary(b"GIF89a\x01\x00\x01\x00\x00\x00\x00;").unwrap();

        let result = ImageProcessor::new(config(&temp_dir, 10, 10)).resize(input.path());

        assert!(matches!(result, Err(ImageToolError::UnsupportedFormat { .. })));
        assert!(!temp_dir.path().join("output").exists());
    }

    #[test]
    fn test_unrecognized_format_writes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.child("notes.jpg");
        input.write_str("just some text, not pixels").unwrap();

        let result = ImageProcessor::new(config(&temp_dir, 10, 10)).resize(input.path());

        assert!(matches!(result, Err(ImageToolError::UnrecognizedFormat { .. })));
        assert!(!temp_dir.path().join("output").exists());
    }

    #[test]
    fn test_zero_dimensions_are_rejected_before_output() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.child("photo.jpg");
        write_jpeg(input.path(), 80, 60);

        let result = ImageProcessor::new(config(&temp_dir, 0, 0)).resize(input.path());

        assert!(matches!(
            result,
            Err(ImageToolError::InvalidDimensions { width: 0, height: 0 })
        ));
        assert!(!temp_dir.path().join("output").exists());
    }

    #[test]
    fn test_oversized_target_is_rejected_before_output() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.child("strip.png");
        write_png(input.path(), 1000, 10);

        // 1000 * (100000 * 100 / 10) / 100 = 10,000,000 wide
        let result = ImageProcessor::new(config(&temp_dir, 0, 100_000)).resize(input.path());

        assert!(matches!(
            result,
            Err(ImageToolError::InvalidDimensions { width: 10_000_000, height: 100_000 })
        ));
        assert!(!temp_dir.path().join("output").exists());
    }

    #[test]
    fn test_directory_at_output_path_is_remove_failure() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.child("photo.png");
        write_png(input.path(), 20, 20);
        temp_dir.child("output/photo.png").create_dir_all().unwrap();

        let result = ImageProcessor::new(config(&temp_dir, 10, 0)).resize(input.path());

        assert!(matches!(
            result,
            Err(ImageToolError::OutputFileRemoveFailure { .. })
        ));
    }

    #[test]
    fn test_second_run_replaces_output() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.child("photo.jpg");
        write_jpeg(input.path(), 120, 90);
        let processor = ImageProcessor::new(config(&temp_dir, 60, 0));

        let first = processor.resize(input.path()).unwrap();
        let first_bytes = fs::read(&first.output_path).unwrap();

        let second = processor.resize(input.path()).unwrap();
        let second_bytes = fs::read(&second.output_path).unwrap();

        assert_eq!(first.output_path, second.output_path);
        assert_eq!(first_bytes, second_bytes);
    }

    #[test]
    fn test_stale_output_is_fully_replaced() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.child("photo.png");
        write_png(input.path(), 50, 50);

        let output_dir = temp_dir.child("output");
        output_dir.create_dir_all().unwrap();
        let stale = output_dir.child("photo.png");
        stale.write_binary(&vec![0xAB; 64 * 1024]).unwrap();

        let report = ImageProcessor::new(config(&temp_dir, 10, 0))
            .resize(input.path())
            .unwrap();

        let bytes = fs::read(&report.output_path).unwrap();
        assert_eq!(report.size_after, bytes.len() as u64);
        assert_eq!(image::load_from_memory(&bytes).unwrap().dimensions(), (10, 10));
    }

    #[test]
    fn test_legacy_suffix_naming() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.child("A01.jpg");
        write_jpeg(input.path(), 40, 40);

        let report = resize_image(input.path(), 20, 0, temp_dir.path().join("output"), "_resized")
            .unwrap();

        assert_eq!(
            report.output_path,
            temp_dir.path().join("output").join("[A01 jpg]_resized.jpg")
        );
        assert!(report.output_path.exists());
    }

    #[test]
    fn test_suffix_before_extension() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.child("A01.jpg");
        write_jpeg(input.path(), 40, 40);

        let report = ImageProcessor::new(ResizeConfig {
            suffix: "_resized".to_string(),
            suffix_style: SuffixStyle::BeforeExtension,
            ..config(&temp_dir, 20, 0)
        })
        .resize(input.path())
        .unwrap();

        assert!(temp_dir.child("output/A01_resized.jpg").path().exists());
        assert_eq!(report.output_path.file_name().unwrap(), "A01_resized.jpg");
    }

    #[test]
    fn test_output_dir_is_created_one_level_only() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.child("photo.jpg");
        write_jpeg(input.path(), 40, 40);

        let result = ImageProcessor::new(ResizeConfig {
            output_dir: temp_dir.path().join("a/b/c"),
            ..config(&temp_dir, 20, 0)
        })
        .resize(input.path());

        assert!(matches!(
            result,
            Err(ImageToolError::OutputDirCreateFailure { .. })
        ));
    }

    #[test]
    fn test_batch_continues_past_failures() {
        let temp_dir = TempDir::new().unwrap();
        let inputs = temp_dir.child("in");
        inputs.create_dir_all().unwrap();
        write_jpeg(inputs.child("one.jpg").path(), 200, 100);
        write_png(inputs.child("two.png").path(), 100, 200);
        inputs.child("three.gif").write_binary(b"GIF89a").unwrap();

        let absolute = temp_dir.child("elsewhere.png");
        write_png(absolute.path(), 30, 30);

        let entries = vec![
            "one.jpg".to_string(),
            "missing.jpg".to_string(),
            "two.png".to_string(),
            "three.gif".to_string(),
            absolute.path().to_string_lossy().into_owned(),
        ];

        let stats = BatchProcessor::new(config(&temp_dir, 0, 50), Some(inputs.path().to_path_buf()))
            .with_progress(false)
            .process_files(&entries);

        assert_eq!(stats.processed_count, 3);
        let failed: Vec<&str> = stats.errors.iter().map(|(entry, _)| entry.as_str()).collect();
        assert_eq!(failed, vec!["missing.jpg", "three.gif"]);

        let output = temp_dir.child("output");
        assert_eq!(image::image_dimensions(output.child("one.jpg").path()).unwrap(), (100, 50));
        assert_eq!(image::image_dimensions(output.child("two.png").path()).unwrap(), (25, 50));
        // 5000 / 30 truncates to 166 percent
        assert_eq!(
            image::image_dimensions(output.child("elsewhere.png").path()).unwrap(),
            (49, 50)
        );
    }

    #[test]
    fn test_invalid_file() {
        let temp_dir = TempDir::new().unwrap();
        let processor = ImageProcessor::new(config(&temp_dir, 10, 10));

        let result = processor.resize("nonexistent.jpg");

        assert!(matches!(result, Err(ImageToolError::UnreadableSource { .. })));
    }
}
