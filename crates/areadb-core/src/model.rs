// crates/areadb-core/src/model.rs
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::hash::Hash;

/// Id key of a normalized record.
///
/// This abstraction controls how record identity is stored per dataset
/// without changing the resolver or emitter code paths:
///
/// - Division tables key by the 12-digit administrative code (`String`).
/// - Postal tables key by a synthesized, range-partitioned integer (`u64`).
///
/// `ROOT` is the textual form of an absent parent reference in emitted
/// rows. Division rows leave the field empty; postal rows write `0`,
/// matching the layouts consumers of these tables already parse.
pub trait RecordKey: Clone + Eq + Hash + Display {
    const ROOT: &'static str;
}

impl RecordKey for String {
    const ROOT: &'static str = "";
}

impl RecordKey for u64 {
    const ROOT: &'static str = "0";
}

/// A normalized reference record.
///
/// One output row of either pipeline. `address` is the concatenation of
/// ancestor names from the root down to this record, no separator,
/// computed once during normalization.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record<K: RecordKey> {
    pub id: K,
    /// `None` marks a root. A `Some` parent always resolves within the
    /// same output set.
    pub parent: Option<K>,
    pub name: String,
    /// Phonetic reading, passed through from the source table unchanged.
    pub reading: String,
    pub address: String,
    /// Postal code; only present for postal-table records. `None` emits as
    /// an empty trailing field.
    pub post: Option<String>,
}
