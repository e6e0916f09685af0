//! areadb-cli
//! ==========
//!
//! Command-line interface for the `areadb-core` table normalizer.
//!
//! This crate primarily provides a binary (`areadb-cli`). We include a
//! small library target so that docs.rs renders a documentation page and
//! shows this overview. See the README for full usage examples.
//!
//! Basic usage:
//!
//! ```text
//! areadb-cli --help
//! areadb-cli divisions --input cn-raw.csv --output cn.csv
//! areadb-cli postal --input utf_ken_all.csv --output jp.csv
//! areadb-cli stats postal --input utf_ken_all.csv
//! ```
//!
//! For programmatic access to the resolvers, use the `areadb-core` crate
//! directly.

// This library target intentionally exposes no API; the binary is the
// primary deliverable.
