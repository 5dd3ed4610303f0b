//! CLI for generating the seed data artifact.
//!
//! Usage:
//!   shop-seeder                          # writes mock_data.sql
//!   shop-seeder -o seed.sql --seed 42 -p # reproducible run with progress

use clap::Parser;
use rand::Rng;
use serde::Serialize;
use shop_seeder::generator::{Counts, Generator};
use shop_seeder::writer;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "shop-seeder")]
#[command(version)]
#[command(about = "Generate FK-consistent Vietnamese e-commerce seed data as SQL INSERT statements", long_about = None)]
struct Args {
    /// Output SQL file
    #[arg(short, long, default_value = "mock_data.sql")]
    output: PathBuf,

    /// Random seed for reproducibility (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Show progress while writing
    #[arg(short, long)]
    progress: bool,

    /// Print the run summary as JSON
    #[arg(long)]
    json: bool,
}

/// JSON output for the run summary
#[derive(Serialize)]
struct RunJsonOutput {
    output_file: String,
    seed: u64,
    statistics: RunStatistics,
    tables: Vec<TableCount>,
}

#[derive(Serialize)]
struct RunStatistics {
    statements: usize,
    bytes_written: u64,
    elapsed_secs: f64,
}

#[derive(Serialize)]
struct TableCount {
    name: String,
    rows: usize,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(|| rand::rng().random());
    let counts = Counts::default();

    if !args.json {
        println!("Generating Vietnamese mock data for the ecommerce schema...");
        println!("Dataset size:");
        println!("  Customers: {}", counts.customers);
        println!("  Sellers: {}", counts.sellers);
        println!("  Admins: {}", counts.admins);
        println!("  Shippers: {}", counts.shippers);
        println!("  Products: {}", counts.products);
        println!("  Orders: {}", counts.orders);
        println!("  Customers with carts: {}", counts.carts_max);
        println!();
    }

    let start = Instant::now();

    let mut generator = Generator::new(seed, counts);
    let dataset = generator.generate()?;
    let stats = writer::write_to_path(&dataset, &args.output, args.progress && !args.json)?;

    let elapsed = start.elapsed();

    if args.json {
        let output = RunJsonOutput {
            output_file: args.output.display().to_string(),
            seed,
            statistics: RunStatistics {
                statements: stats.statements,
                bytes_written: stats.bytes_written,
                elapsed_secs: elapsed.as_secs_f64(),
            },
            tables: stats
                .table_counts
                .iter()
                .map(|(name, rows)| TableCount {
                    name: name.clone(),
                    rows: *rows,
                })
                .collect(),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("\n✓ Mock data generated successfully!");
        println!("\nStatistics:");
        for (name, rows) in &stats.table_counts {
            println!("  {}: {} rows", name, rows);
        }
        println!("  Total statements: {}", stats.statements);
        println!(
            "  Bytes written: {:.1} MB",
            stats.bytes_written as f64 / 1024.0 / 1024.0
        );
        println!("  Elapsed time: {:.3?}", elapsed);
        println!("\nOutput file: {}", args.output.display());
    }

    Ok(())
}
