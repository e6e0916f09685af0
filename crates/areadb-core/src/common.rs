/// Simple aggregate statistics for a normalized set.
///
/// Returned by [`stats`]; the depth walk doubles as a termination check
/// over the emitted parent links.
use crate::model::{Record, RecordKey};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TableStats {
    pub records: usize,
    pub roots: usize,
    pub max_depth: usize,
}

pub fn stats<K: RecordKey>(records: &[Record<K>]) -> TableStats {
    let index: HashMap<&K, &Record<K>> = records.iter().map(|r| (&r.id, r)).collect();

    let mut roots = 0;
    let mut max_depth = 0;
    for rec in records {
        if rec.parent.is_none() {
            roots += 1;
        }
        let mut depth = 1;
        let mut cursor = rec.parent.as_ref().and_then(|id| index.get(id));
        while let Some(node) = cursor {
            depth += 1;
            // A well-formed set is acyclic; bail out rather than spin if fed
            // a hand-built cyclic one.
            if depth > records.len() {
                break;
            }
            cursor = node.parent.as_ref().and_then(|id| index.get(id));
        }
        max_depth = max_depth.max(depth);
    }

    TableStats {
        records: records.len(),
        roots,
        max_depth,
    }
}
