// crates/areadb-core/src/loader/division.rs

//! Division-table parsing.
//!
//! Expected columns: 0 = code, 1 = name, 3 = stated parent, 4 = reading.
//! Policy: malformed rows are dropped here rather than aborting the run —
//! a row with fewer than five fields, or whose code is not exactly twelve
//! ASCII digits, never reaches the resolver.

use super::open_stream;
use crate::division::{RawDivision, CODE_LEN};
use crate::error::Result;
use csv::ReaderBuilder;
use std::io::Read;
use std::path::Path;

pub fn from_reader<R: Read>(reader: R) -> Result<Vec<RawDivision>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut rows = Vec::new();
    for record in rdr.records() {
        let record = record?;
        if record.len() < 5 {
            continue;
        }
        let code = &record[0];
        if code.len() != CODE_LEN || !code.bytes().all(|b| b.is_ascii_digit()) {
            continue;
        }
        rows.push(RawDivision {
            code: code.to_string(),
            name: record[1].to_string(),
            parent: record[3].to_string(),
            reading: record[4].to_string(),
        });
    }
    Ok(rows)
}

pub fn from_path(path: impl AsRef<Path>) -> Result<Vec<RawDivision>> {
    from_reader(open_stream(path.as_ref())?)
}
