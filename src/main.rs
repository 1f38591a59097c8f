use batch_resize::{parse_input_files, BatchProcessor, Cli};
use clap::Parser;
use log::LevelFilter;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logger
    env_logger::Builder::new()
        .filter_level(if cli.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        })
        .parse_default_env()
        .init();

    let entries = parse_input_files(&cli.input_files)?;

    let config = cli.to_config();
    config.validate()?;

    let output_dir = config.output_dir.clone();
    let processor = BatchProcessor::new(config, cli.base_dir.clone());
    let stats = processor.process_files(&entries);

    println!(
        "Batch processing complete. Processed {} of {} images to: {}",
        stats.processed_count,
        entries.len(),
        output_dir.display()
    );

    Ok(())
}
