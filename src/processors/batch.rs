// batch-resize/src/processors/batch.rs
use crate::core::{ImageProcessor, ProcessingStats, ResizeConfig};
use crate::utils::resolve_input_path;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::path::PathBuf;

/// Runs the pipeline over a list of entries, one file at a time.
pub struct BatchProcessor {
    processor: ImageProcessor,
    base_dir: Option<PathBuf>,
    show_progress: bool,
}

impl BatchProcessor {
    pub fn new(config: ResizeConfig, base_dir: Option<PathBuf>) -> Self {
        Self {
            processor: ImageProcessor::new(config),
            base_dir,
            show_progress: true,
        }
    }

    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Processes every entry in order. A failing entry is reported on stderr
    /// as `[ERROR] <entry>: <message>` and recorded in the stats; the rest of
    /// the batch still runs.
    pub fn process_files(&self, entries: &[String]) -> ProcessingStats {
        log::info!(
            "Processing {} images into {}",
            entries.len(),
            self.processor.config().output_dir.display()
        );

        let pb = self.create_progress_bar(entries.len());
        let mut stats = ProcessingStats::default();

        for entry in entries {
            let input_path = resolve_input_path(self.base_dir.as_deref(), entry);
            pb.set_message(entry.clone());

            match self.processor.resize(&input_path) {
                Ok(report) => {
                    log::debug!(
                        "{}: {}x{} -> {} ({})",
                        entry,
                        report.source_dimensions.0,
                        report.source_dimensions.1,
                        report.target,
                        report.output_path.display()
                    );
                    stats.processed_count += 1;
                    stats.total_size_before += report.size_before;
                    stats.total_size_after += report.size_after;
                }
                Err(e) => {
                    pb.suspend(|| eprintln!("[ERROR] {}: {}", entry, e));
                    stats.errors.push((entry.clone(), e.to_string()));
                }
            }

            pb.inc(1);
        }

        pb.finish_with_message(format!(
            "Processed {} images ({:.1}% size reduction)",
            stats.processed_count,
            calculate_overall_savings(&stats)
        ));

        stats
    }

    fn create_progress_bar(&self, total: usize) -> ProgressBar {
        if !self.show_progress {
            return ProgressBar::with_draw_target(Some(total as u64), ProgressDrawTarget::hidden());
        }

        let pb = ProgressBar::new(total as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        {
            pb.set_style(style.progress_chars("#>-"));
        }
        pb
    }
}

pub fn calculate_overall_savings(stats: &ProcessingStats) -> f64 {
    if stats.total_size_before == 0 {
        return 0.0;
    }

    let savings = (stats.total_size_before as f64 - stats.total_size_after as f64)
        / stats.total_size_before as f64
        * 100.0;
    savings.clamp(0.0, 100.0)
}
