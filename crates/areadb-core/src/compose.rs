// crates/areadb-core/src/compose.rs

//! Address composition shared by both resolvers.
//!
//! An address is the concatenation of ancestor names from the root down to
//! the record itself, with no separator. Composition walks the parent
//! chain through an id-keyed index and stops at the first id that is
//! either absent (`None`) or not present in the index. Both resolvers
//! construct acyclic chains, so the walk terminates within the level
//! depth of the dataset.

use crate::model::{Record, RecordKey};
use std::collections::HashMap;

/// Composes the address for `record` against `index`.
///
/// Pure function of its inputs; `record.address` itself is ignored.
///
/// # Examples
///
/// ```rust
/// use areadb_core::model::Record;
/// use areadb_core::compose::compose;
/// use std::collections::HashMap;
///
/// let root = Record {
///     id: "110000000000".to_string(),
///     parent: None,
///     name: "北京市".to_string(),
///     reading: String::new(),
///     address: String::new(),
///     post: None,
/// };
/// let leaf = Record {
///     id: "110100000000".to_string(),
///     parent: Some(root.id.clone()),
///     name: "市辖区".to_string(),
///     reading: String::new(),
///     address: String::new(),
///     post: None,
/// };
///
/// let mut index = HashMap::new();
/// index.insert(root.id.clone(), root);
///
/// assert_eq!(compose(&leaf, &index), "北京市市辖区");
/// ```
pub fn compose<K: RecordKey>(record: &Record<K>, index: &HashMap<K, Record<K>>) -> String {
    compose_leaf(&record.name, record.parent.as_ref(), index)
}

/// Composes an address for an explicit leaf name and starting parent.
///
/// The postal resolver needs this split: the emitted `name` keeps the raw
/// town label while the address uses a cleaned variant (or, for sentinel
/// rows, no town at all).
pub fn compose_leaf<K: RecordKey>(
    name: &str,
    parent: Option<&K>,
    index: &HashMap<K, Record<K>>,
) -> String {
    let mut address = name.to_owned();
    let mut cursor = parent.and_then(|id| index.get(id));
    while let Some(node) = cursor {
        address.insert_str(0, &node.name);
        cursor = node.parent.as_ref().and_then(|id| index.get(id));
    }
    address
}
