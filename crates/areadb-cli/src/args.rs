use clap::{Parser, Subcommand, ValueEnum};

/// CLI arguments for areadb-cli
#[derive(Debug, Parser)]
#[command(
    name = "areadb",
    version,
    about = "Normalize flat administrative-division and postal-code tables into hierarchical reference data"
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Normalize an administrative-division code table (e.g. cn-raw.csv)
    Divisions {
        /// Path to the raw division table (.csv or .csv.gz)
        #[arg(short = 'i', long = "input")]
        input: String,

        /// Path for the normalized output table
        #[arg(short = 'o', long = "output")]
        output: String,
    },

    /// Normalize a postal-code table (e.g. the published KEN_ALL layout)
    Postal {
        /// Path to the raw postal table (.csv or .csv.gz)
        #[arg(short = 'i', long = "input")]
        input: String,

        /// Path for the normalized output table
        #[arg(short = 'o', long = "output")]
        output: String,
    },

    /// Normalize a table and print summary statistics instead of writing it
    Stats {
        /// Which table layout the input uses
        #[arg(value_enum)]
        kind: TableKind,

        /// Path to the raw table
        #[arg(short = 'i', long = "input")]
        input: String,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum TableKind {
    Divisions,
    Postal,
}
