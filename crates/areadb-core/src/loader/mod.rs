// crates/areadb-core/src/loader/mod.rs

//! # Table loaders
//!
//! Handles the physical layer (file access, decompression) and delegates
//! to the per-dataset CSV parsers.

use crate::error::{AreaError, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

pub mod division;
pub mod postal;

/// Opens a source table, buffers it, and transparently decodes gzip when
/// the path ends in `.gz`. Returns a generic reader so callers don't care
/// about the compression.
pub fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| {
        AreaError::NotFound(format!("dataset not found at {}: {}", path.display(), e))
    })?;

    let reader = BufReader::new(file);

    if path.extension().is_some_and(|ext| ext == "gz") {
        #[cfg(feature = "compact")]
        {
            use flate2::read::GzDecoder;
            return Ok(Box::new(GzDecoder::new(reader)));
        }

        #[cfg(not(feature = "compact"))]
        return Err(AreaError::InvalidData(
            "gzip input requires the 'compact' feature".into(),
        ));
    }

    Ok(Box::new(reader))
}
