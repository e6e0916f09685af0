// crates/areadb-core/src/division.rs

//! Division-table resolver.
//!
//! Source rows already carry a fixed-width hierarchical code and a stated
//! parent code, but the stated parent frequently points at a code the
//! table does not contain (the upstream table omits intermediate levels).
//! The resolver repairs such links structurally: the code itself encodes
//! its position in the hierarchy through trailing zero-padding, so the
//! expected ancestor can be derived from the code shape alone.

use crate::compose::compose;
use crate::model::Record;
use std::collections::HashMap;

/// Width of a valid administrative code.
pub const CODE_LEN: usize = 12;

/// A raw division-table row, as produced by the loader.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawDivision {
    /// 12-digit administrative code.
    pub code: String,
    pub name: String,
    /// Stated parent code; may be empty or dangling.
    pub parent: String,
    /// Phonetic reading, passed through.
    pub reading: String,
}

/// Hierarchy depth encoded by a code's trailing-zero pattern.
///
/// Declaration order is root-first, so the derived ordering ranks a level
/// above every level beneath it (`Province < Village`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum DivisionLevel {
    Province,
    Prefecture,
    County,
    Township,
    Village,
}

impl DivisionLevel {
    /// Classifies a code by its trailing-zero pattern.
    pub fn of(code: &str) -> DivisionLevel {
        if code.ends_with("0000000000") {
            DivisionLevel::Province
        } else if code.ends_with("00000000") {
            DivisionLevel::Prefecture
        } else if code.ends_with("000000") {
            DivisionLevel::County
        } else if code.ends_with("000") {
            DivisionLevel::Township
        } else {
            DivisionLevel::Village
        }
    }
}

/// Derives the structurally expected ancestor code.
///
/// - province (10 trailing zeros): no ancestor
/// - prefecture (8): first 2 digits + 10 zeros
/// - county (6): first 4 digits + 8 zeros
/// - township (3): first 6 digits + 6 zeros
/// - village (anything else): first 9 digits + 3 zeros
///
/// Assumes the strict five-level scheme; codes for municipalities or
/// special regions that deviate from it are not special-cased. A candidate
/// that is not exactly [`CODE_LEN`] ASCII digits yields `None`.
pub fn parent_of(code: &str) -> Option<String> {
    if code.len() != CODE_LEN || !code.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    match DivisionLevel::of(code) {
        DivisionLevel::Province => None,
        DivisionLevel::Prefecture => Some(format!("{}0000000000", &code[..2])),
        DivisionLevel::County => Some(format!("{}00000000", &code[..4])),
        DivisionLevel::Township => Some(format!("{}000000", &code[..6])),
        DivisionLevel::Village => Some(format!("{}000", &code[..9])),
    }
}

/// Walks a stated parent code upward until one present in `index` is found.
///
/// A candidate only counts as found when it ranks strictly above `code`'s
/// own level; a stated parent pointing at the record itself or a sibling
/// is walked past instead of accepted, which keeps the emitted parent
/// links acyclic. Each derivation step strictly shortens the populated
/// suffix of the candidate, so the walk terminates within the five-level
/// depth bound.
///
/// Returns `None` for an empty stated parent or when derivation exhausts
/// at the province level without a match; the record then becomes a root.
/// Demoting an unresolvable parent to a root is the chosen policy, not an
/// accident: the alternative (aborting a national table over one gap)
/// loses the whole run to upstream data entropy.
pub fn resolve_parent(
    code: &str,
    stated: &str,
    index: &HashMap<String, Record<String>>,
) -> Option<String> {
    let level = DivisionLevel::of(code);
    let mut candidate = stated.to_owned();
    while !candidate.is_empty() {
        if DivisionLevel::of(&candidate) < level && index.contains_key(&candidate) {
            return Some(candidate);
        }
        match parent_of(&candidate) {
            Some(next) => candidate = next,
            None => return None,
        }
    }
    None
}

/// Normalizes a division table.
///
/// Three fixed passes: build the code index, resolve every parent, then
/// compose every address against the repaired index, so ancestor chains
/// walk repaired links rather than stated ones. Output preserves input row
/// order. Rows repeating an earlier code are skipped; the first occurrence
/// wins, keeping output ids unique.
pub fn normalize(rows: &[RawDivision]) -> Vec<Record<String>> {
    let mut order: Vec<&RawDivision> = Vec::with_capacity(rows.len());
    let mut index: HashMap<String, Record<String>> = HashMap::with_capacity(rows.len());

    for row in rows {
        if index.contains_key(&row.code) {
            continue;
        }
        index.insert(
            row.code.clone(),
            Record {
                id: row.code.clone(),
                parent: None,
                name: row.name.clone(),
                reading: row.reading.clone(),
                address: String::new(),
                post: None,
            },
        );
        order.push(row);
    }

    let resolved: Vec<Option<String>> = order
        .iter()
        .map(|row| resolve_parent(&row.code, &row.parent, &index))
        .collect();
    for (row, parent) in order.iter().zip(&resolved) {
        if let Some(rec) = index.get_mut(&row.code) {
            rec.parent = parent.clone();
        }
    }

    let mut out = Vec::with_capacity(order.len());
    for row in &order {
        if let Some(rec) = index.get(&row.code) {
            let mut rec = rec.clone();
            rec.address = compose(&rec, &index);
            out.push(rec);
        }
    }
    out
}
