// crates/areadb-core/src/error.rs
use thiserror::Error;

/// Unified error type for loading and normalizing reference tables.
#[derive(Error, Debug)]
pub enum AreaError {
    #[error("dataset not found: {0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A source row too short to carry the expected columns.
    /// Postal loading treats this as fatal; division loading drops the row
    /// before this error can arise (see the loader docs for the policy).
    #[error("malformed row at line {line}: {reason}")]
    MalformedRow { line: u64, reason: String },

    /// A level-2 or level-3 record referenced a level ancestor that was
    /// never assigned an id. Indicates the passes ran out of order or the
    /// input mutated between passes; the run aborts before any output.
    #[error("missing level-{level} ancestor for {key:?}")]
    MissingAncestor { level: u8, key: String },

    #[error("invalid data: {0}")]
    InvalidData(String),
}

pub type Result<T> = std::result::Result<T, AreaError>;
