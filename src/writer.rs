//! Writes the rendered dataset to a single SQL artifact.

use crate::generator::Dataset;
use crate::renderer;
use anyhow::{Context, Result};
use chrono::Local;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

const WRITER_BUFFER_SIZE: usize = 256 * 1024;

/// Statistics from a completed write
#[derive(Debug, Default)]
pub struct WriteStats {
    pub statements: usize,
    pub bytes_written: u64,
    /// Per-table row counts, in emission order
    pub table_counts: Vec<(String, usize)>,
}

/// Write the dataset to `path`, creating parent directories as needed.
///
/// Any failure to create or write the artifact is fatal; no partial output
/// is considered valid.
pub fn write_to_path(dataset: &Dataset, path: &Path, show_progress: bool) -> Result<WriteStats> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).with_context(|| {
                format!("failed to create output directory: {}", parent.display())
            })?;
        }
    }
    let file = File::create(path)
        .with_context(|| format!("failed to create output file: {}", path.display()))?;
    let writer = BufWriter::with_capacity(WRITER_BUFFER_SIZE, file);
    write_dataset(dataset, writer, show_progress)
        .with_context(|| format!("failed to write output file: {}", path.display()))
}

/// Stream every statement, grouped by table in emission order.
pub fn write_dataset<W: Write>(
    dataset: &Dataset,
    mut writer: W,
    show_progress: bool,
) -> Result<WriteStats> {
    let mut stats = WriteStats::default();

    let pb = if show_progress {
        let pb = ProgressBar::new(dataset.total_rows() as u64);
        pb.set_style(
            ProgressStyle::with_template(
                "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)",
            )
            .unwrap()
            .progress_chars("█▓▒░  "),
        );
        Some(pb)
    } else {
        None
    };

    let header = render_header(dataset);
    writer.write_all(header.as_bytes())?;
    stats.bytes_written += header.len() as u64;

    for table in &dataset.tables {
        let separator = format!(
            "\n-- ============================================================\n-- Table: {}\n-- ============================================================\n\n",
            table.table.name
        );
        writer.write_all(separator.as_bytes())?;
        stats.bytes_written += separator.len() as u64;

        for row in &table.rows {
            let stmt = renderer::render_insert(table.table, row)?;
            writer.write_all(stmt.as_bytes())?;
            writer.write_all(b"\n")?;
            stats.bytes_written += stmt.len() as u64 + 1;
            stats.statements += 1;
            if let Some(ref pb) = pb {
                pb.inc(1);
            }
        }

        stats
            .table_counts
            .push((table.table.name.to_string(), table.rows.len()));
    }

    writer.flush()?;

    if let Some(pb) = pb {
        pb.finish_with_message("done");
    }

    Ok(stats)
}

/// Header comment block: timestamp, the SERIAL assumption, and the planned
/// user_id ranges.
fn render_header(dataset: &Dataset) -> String {
    let plan = &dataset.plan;
    format!(
        "-- Vietnamese mock data for the ecommerce schema\n\
         -- Generated on: {}\n\
         -- SERIAL columns are assumed to start at 1 and assign ids in insertion order\n\
         --\n\
         -- Expected user_id ranges:\n\
         --   Customers: {}-{}\n\
         --   Sellers: {}-{}\n\
         --   Admins: {}-{}\n\
         --   Shippers: {}-{}\n",
        Local::now().format("%Y-%m-%d %H:%M:%S"),
        plan.customers.start,
        plan.customers.end,
        plan.sellers.start,
        plan.sellers.end,
        plan.admins.start,
        plan.admins.end,
        plan.shippers.start,
        plan.shippers.end,
    )
}
