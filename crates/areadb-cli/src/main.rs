//! areadb-cli — Command-line interface for areadb-core
//!
//! This binary normalizes flat geographic reference tables into
//! hierarchical record sets from your terminal.
//!
//! Usage examples
//! --------------
//!
//! - Normalize an administrative-division code table
//!   $ areadb divisions --input cn-raw.csv --output cn.csv
//!
//! - Normalize a postal-code table (quoted KEN_ALL layout)
//!   $ areadb postal --input utf_ken_all.csv --output jp.csv
//!
//! - Inspect a table without writing output
//!   $ areadb stats postal --input utf_ken_all.csv
//!
//! Gzip-compressed inputs (`.gz`) are decoded transparently when the
//! `compact` feature is enabled (the default).
mod args;

use crate::args::{CliArgs, Commands, TableKind};
use areadb_core::{common, division, emit, loader, postal};
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    match args.command {
        Commands::Divisions { input, output } => {
            let rows = loader::division::from_path(&input)?;
            println!("Loaded {} division rows from {input}", rows.len());
            let records = division::normalize(&rows);
            emit::save_to_path(&records, &output)?;
            println!("Wrote {} records to {output}", records.len());
        }

        Commands::Postal { input, output } => {
            let rows = loader::postal::from_path(&input)?;
            println!("Loaded {} postal rows from {input}", rows.len());
            let records = postal::normalize(&rows)?;
            emit::save_to_path(&records, &output)?;
            println!("Wrote {} records to {output}", records.len());
        }

        Commands::Stats { kind, input } => {
            let stats = match kind {
                TableKind::Divisions => {
                    let rows = loader::division::from_path(&input)?;
                    common::stats(&division::normalize(&rows))
                }
                TableKind::Postal => {
                    let rows = loader::postal::from_path(&input)?;
                    common::stats(&postal::normalize(&rows)?)
                }
            };
            println!("Table statistics:");
            println!("  Records: {}", stats.records);
            println!("  Roots: {}", stats.roots);
            println!("  Max depth: {}", stats.max_depth);
        }
    }

    Ok(())
}
