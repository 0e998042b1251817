// cargo run --release -- --group stations --output output
// cargo run --release -- stations.txt --no-render

use clap::Parser;
use std::error::Error;
use std::path::PathBuf;
use tlescope::catalog::{self, CatalogManager};
use tlescope::config::PipelineConfig;
use tlescope::logging::init_logging;
use tlescope::pipeline::Pipeline;
use tlescope::report::{CsvOrbitTrack, ElementReport, OrbitRenderer};
use tracing::info;

/// Decode two-line element sets and derive their orbital elements
#[derive(Parser, Debug)]
#[command(version)]
struct Opts {
    /// Configuration toml file.
    ///
    /// Defaults are used when not provided.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// CelesTrak group to fetch (e.g. stations, visual)
    #[arg(short, long)]
    group: Option<String>,

    /// Orbit track output directory, overrides the config
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Skip writing orbit tracks
    #[arg(long)]
    no_render: bool,

    /// Skip the per-satellite console report
    #[arg(short, long)]
    quiet: bool,

    /// Local catalog files. The bundled samples are used when no source is given.
    files: Vec<PathBuf>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let opts = Opts::parse();

    let mut config = match &opts.config {
        Some(path) => PipelineConfig::from_file(path)?,
        None => PipelineConfig::default(),
    };
    if let Some(output) = opts.output {
        config.output_dir = output;
    }
    init_logging(&config.log_level);

    let manager = CatalogManager::new(&config);
    let group = opts.group.as_deref().map(|g| (&manager, g));
    let blocks = catalog::gather(&opts.files, group);

    let mut track = if opts.no_render {
        None
    } else {
        Some(CsvOrbitTrack::create(&config.output_dir, config.track_samples)?)
    };

    let pipeline = Pipeline::new(config.kepler_solver());
    let run = pipeline.process(
        &blocks,
        track.as_mut().map(|t| t as &mut dyn OrbitRenderer),
    );

    if !opts.quiet {
        for (record, derived) in &run.elements {
            println!("{}", ElementReport::new(record, derived));
        }
    }

    let summary = run.summary;
    info!(
        processed = summary.processed,
        skipped = summary.skipped(),
        render_failures = summary.render_failures,
        "Catalog run complete"
    );
    if track.is_some() {
        println!(
            "Orbit tracks have been written to {}",
            config.output_dir.join("orbit_tracks.csv").display()
        );
    }

    Ok(())
}
