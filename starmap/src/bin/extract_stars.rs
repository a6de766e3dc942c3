//! Star catalog extractor
//!
//! Reads a hand-labeled Inkscape star chart, resolves every named star to
//! RA/Dec, and writes the catalog as compact and pretty-printed JSON. A per-tile
//! star count is printed at the end.
//!
//! Usage:
//!   cargo run --bin extract_stars -- [--input data/stars.svg] [--output-dir data]

use clap::Parser;
use starmap::extract::Extractor;
use starmap::{format_histogram, tile_histogram, write_catalog, ExtractError, ExtractionConfig};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "Star Extractor",
    about = "Extracts named stars from a labeled SVG star chart into JSON catalogs",
    long_about = None
)]
struct Args {
    /// Source star chart
    #[arg(long, default_value = "data/stars.svg")]
    input: PathBuf,

    /// Directory receiving stars.json and stars_pretty.json
    #[arg(long, default_value = "data")]
    output_dir: PathBuf,

    /// JSON extraction config overriding canvas, grid, and label settings
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => ExtractionConfig::load_from_file(path)?,
        None => ExtractionConfig::default(),
    };
    let grid = config.grid;
    let extractor = Extractor::new(config)?;

    let text =
        std::fs::read_to_string(&args.input).map_err(|e| ExtractError::io(&args.input, e))?;
    let lines: Vec<&str> = text.lines().collect();

    println!("Scanning for star names...");
    let labels = extractor.scan_labels(&lines);
    println!("Found {} unique star names", labels.len());

    let stars = extractor.resolve(&lines, &labels)?;
    println!("Extracted {} stars with coordinates", stars.len());

    let paths = write_catalog(&stars, &args.output_dir)?;
    println!("Saved {} stars to {}", stars.len(), paths.compact.display());
    println!("Saved to {}", paths.pretty.display());

    let histogram = tile_histogram(&stars, &grid);
    println!();
    println!("Stars per tile ({} rows x {} cols):", grid.rows, grid.cols);
    for line in format_histogram(&histogram, &grid) {
        println!("{line}");
    }

    Ok(())
}
