//! Place feature summary.
//!
//! Loads saved Overpass responses for a geocoded place and prints the
//! per-category aggregation as JSON.

mod config;

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use osmlf::report::{build_report, Batches};

use crate::config::Config;

#[derive(Parser, Debug)]
#[command(name = "summarize")]
#[command(about = "Aggregate OSM location features for a place")]
struct Args {
    /// TOML config describing the place and its response files
    #[arg(short, long)]
    config: PathBuf,

    /// Write the report here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Pretty-print JSON
    #[arg(long)]
    pretty: bool,

    /// Debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging; stdout is reserved for the report
    let subscriber = FmtSubscriber::builder()
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::INFO })
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Config: {}", args.config.display());
    let config = Config::load_from_file(&args.config)?;
    let place = config.place()?;
    info!(
        "Place: {} (relation {}) at {:.4}, {:.4}",
        place.name, place.osm_id, place.reference.lat, place.reference.lon
    );

    let source = config.file_source();
    let start = Instant::now();
    let batches = Batches::fetch(&place, &source).context("Failed to load entity batches")?;
    let report = build_report(&place, &batches);
    info!("Report built in {:.2?}", start.elapsed());

    let writer: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(
            File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?,
        ),
        None => Box::new(io::stdout().lock()),
    };
    let mut writer = BufWriter::new(writer);

    if args.pretty {
        serde_json::to_writer_pretty(&mut writer, &report)?;
    } else {
        serde_json::to_writer(&mut writer, &report)?;
    }
    writeln!(writer)?;
    writer.flush()?;

    if let Some(path) = &args.output {
        info!("Wrote report to {}", path.display());
    }

    Ok(())
}
