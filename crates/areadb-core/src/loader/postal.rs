// crates/areadb-core/src/loader/postal.rs

//! Postal-table parsing.
//!
//! Expected columns follow the published table layout: 2 = postal code,
//! 3..=5 = phonetic readings, 6..=8 = prefecture/city/town labels. Fields
//! arrive quoted in the source; the CSV reader unquotes them. Policy: a
//! row too short to carry the label columns is fatal — unlike division
//! loading there is no per-row validity filter to fall back on, and a
//! silently skipped row would shift every synthesized level-3 id after it.

use super::open_stream;
use crate::error::{AreaError, Result};
use crate::postal::PostalRow;
use csv::ReaderBuilder;
use std::io::Read;
use std::path::Path;

pub fn from_reader<R: Read>(reader: R) -> Result<Vec<PostalRow>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut rows = Vec::new();
    for record in rdr.records() {
        let record = record?;
        if record.len() < 9 {
            let line = record.position().map(|p| p.line()).unwrap_or(0);
            return Err(AreaError::MalformedRow {
                line,
                reason: format!("expected at least 9 fields, found {}", record.len()),
            });
        }
        rows.push(PostalRow {
            post: record[2].to_string(),
            pref_kana: record[3].to_string(),
            city_kana: record[4].to_string(),
            town_kana: record[5].to_string(),
            pref: record[6].to_string(),
            city: record[7].to_string(),
            town: record[8].to_string(),
        });
    }
    Ok(rows)
}

pub fn from_path(path: impl AsRef<Path>) -> Result<Vec<PostalRow>> {
    from_reader(open_stream(path.as_ref())?)
}
