//! Reitti CLI - travel-time line analysis

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use geo::{Euclidean, Geometry, Length};
use reitti_core::geometry::centroid;
use reitti_core::travel::{od_lines, read_travel_times, TravelRecord};

// ─── CLI structure ──────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "reitti")]
#[command(author, version, about = "Travel-time line analysis", long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show information about a travel-time table
    Info {
        /// Input table (semicolon-delimited, latin-1)
        input: PathBuf,
        /// Number of leading records to print
        #[arg(short = 'n', long, default_value = "5")]
        head: usize,
    },
    /// Build origin-destination lines and report length statistics
    MeanLength {
        /// Input table (semicolon-delimited, latin-1)
        input: PathBuf,
    },
}

// ─── Helpers ────────────────────────────────────────────────────────────

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");
}

fn spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}

fn read_table(path: &PathBuf) -> Result<Vec<TravelRecord>> {
    let pb = spinner("Reading travel-time table...");
    let records = read_travel_times(path).context("Failed to read travel-time table")?;
    pb.finish_and_clear();
    info!("Input: {} records", records.len());
    Ok(records)
}

fn print_record(record: &TravelRecord) {
    print!(
        "  {} -> {}: ({:.1}, {:.1}) -> ({:.1}, {:.1})",
        record.from_id, record.to_id, record.from_x, record.from_y, record.to_x, record.to_y
    );
    if let Some(t) = record.total_route_time {
        print!("  time: {:.1} min", t);
    }
    if let Some(d) = record.route_distance {
        print!("  distance: {:.0} m", d);
    }
    println!();
}

// ─── Main ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    match cli.command {
        Commands::Info { input, head } => {
            let records = read_table(&input)?;

            println!("File: {}", input.display());
            println!("Records: {}", records.len());
            println!("\nFirst {} records:", head.min(records.len()));
            for record in records.iter().take(head) {
                print_record(record);
            }
        }

        Commands::MeanLength { input } => {
            let records = read_table(&input)?;
            let lines = od_lines(&records);
            if lines.is_empty() {
                anyhow::bail!("No valid origin-destination pairs in {}", input.display());
            }

            let lengths: Vec<f64> = lines.iter().map(|ls| ls.length::<Euclidean>()).collect();
            let mean = lengths.iter().sum::<f64>() / lengths.len() as f64;
            let min = lengths.iter().cloned().fold(f64::INFINITY, f64::min);
            let max = lengths.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

            println!("Lines: {} (of {} records)", lines.len(), records.len());
            println!("Mean length: {:.6}", mean);
            println!("Min length:  {:.6}", min);
            println!("Max length:  {:.6}", max);

            if let Some(c) = centroid(&Geometry::LineString(lines[0].clone())) {
                info!("First line centroid: ({:.4}, {:.4})", c.x(), c.y());
            }
        }
    }

    Ok(())
}
