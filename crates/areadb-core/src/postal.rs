// crates/areadb-core/src/postal.rs

//! Postal-table resolver.
//!
//! Source rows are flat: three textual hierarchy labels (prefecture, city,
//! town), their phonetic readings, and a postal code. No ids, no parent
//! links. The resolver synthesizes the hierarchy in three passes over the
//! rows in source order: levels 1 and 2 deduplicate labels first-seen,
//! level 3 emits one record per row. Ids are drawn from disjoint ranges so
//! consumers recover a record's level from the id alone.

use crate::compose::compose_leaf;
use crate::error::{AreaError, Result};
use crate::model::Record;
use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;
use std::collections::HashMap;
use std::hash::Hash;
use std::ops::Range;

/// A raw postal-table row, as produced by the loader.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PostalRow {
    pub post: String,
    pub pref_kana: String,
    pub city_kana: String,
    pub town_kana: String,
    pub pref: String,
    pub city: String,
    pub town: String,
}

/// Town label meaning "no more specific entry exists below this city".
///
/// Rows carrying it keep the label as their `name`, but the reading is
/// forced to `#` and the address omits the town entirely.
pub const NO_TOWN_SENTINEL: &str = "以下に掲載がない場合";

/// Id range of level-1 (prefecture) records.
pub const LEVEL1_IDS: Range<u64> = 1..1_000;
/// Id range of level-2 (city) records.
pub const LEVEL2_IDS: Range<u64> = 1_000..100_000;
/// First id of level-3 (town) records; the range is unbounded above.
pub const LEVEL3_START: u64 = 100_000;

/// Recovers a record's level from the id-range partition.
pub fn level_of_id(id: u64) -> Option<u8> {
    if LEVEL1_IDS.contains(&id) {
        Some(1)
    } else if LEVEL2_IDS.contains(&id) {
        Some(2)
    } else if id >= LEVEL3_START {
        Some(3)
    } else {
        None
    }
}

static ANNOTATION: Lazy<Regex> =
    Lazy::new(|| Regex::new("（.*）").expect("annotation pattern compiles"));

/// Strips a parenthesized annotation (`（…）`) from a town label.
///
/// Only the address uses the stripped form; the emitted `name` keeps the
/// label as-is.
pub fn strip_annotation(town: &str) -> Cow<'_, str> {
    ANNOTATION.replace_all(town, "")
}

/// Id allocator for one hierarchy level: a first-seen map plus a counter,
/// scoped to a single `normalize` call.
struct LevelIds<K> {
    level: u8,
    assigned: HashMap<K, u64>,
    next: u64,
    end: u64,
}

impl<K: Eq + Hash> LevelIds<K> {
    fn new(level: u8, ids: Range<u64>) -> Self {
        LevelIds {
            level,
            assigned: HashMap::new(),
            next: ids.start,
            end: ids.end,
        }
    }

    fn get(&self, key: &K) -> Option<u64> {
        self.assigned.get(key).copied()
    }

    fn insert(&mut self, key: K) -> Result<u64> {
        if self.next >= self.end {
            return Err(AreaError::InvalidData(format!(
                "level-{} id range exhausted at {}",
                self.level, self.end
            )));
        }
        let id = self.next;
        self.next += 1;
        self.assigned.insert(key, id);
        Ok(id)
    }
}

/// Normalizes a postal table.
///
/// Output order is all level-1 records (first-seen order), then level-2,
/// then level-3 (one per source row). Any failure aborts the run before
/// anything is emitted; a missing level ancestor in pass 2 or 3 means the
/// pass ordering invariant was violated and is fatal.
pub fn normalize(rows: &[PostalRow]) -> Result<Vec<Record<u64>>> {
    let mut index: HashMap<u64, Record<u64>> = HashMap::new();
    let mut prefs: LevelIds<String> = LevelIds::new(1, LEVEL1_IDS);
    let mut cities: LevelIds<(String, String)> = LevelIds::new(2, LEVEL2_IDS);

    // Pass 1: prefectures.
    let mut level1 = Vec::new();
    for row in rows {
        if prefs.get(&row.pref).is_some() {
            continue;
        }
        let id = prefs.insert(row.pref.clone())?;
        let rec = Record {
            id,
            parent: None,
            name: row.pref.clone(),
            reading: row.pref_kana.clone(),
            address: row.pref.clone(),
            post: None,
        };
        index.insert(id, rec.clone());
        level1.push(rec);
    }

    // Pass 2: cities, deduplicated per (pref, city) pair.
    let mut level2 = Vec::new();
    for row in rows {
        let key = (row.pref.clone(), row.city.clone());
        if cities.get(&key).is_some() {
            continue;
        }
        let parent = prefs.get(&row.pref).ok_or_else(|| AreaError::MissingAncestor {
            level: 1,
            key: row.pref.clone(),
        })?;
        let id = cities.insert(key)?;
        let rec = Record {
            id,
            parent: Some(parent),
            name: row.city.clone(),
            reading: row.city_kana.clone(),
            address: compose_leaf(&row.city, Some(&parent), &index),
            post: None,
        };
        index.insert(id, rec.clone());
        level2.push(rec);
    }

    // Pass 3: towns, one record per row.
    let mut level3 = Vec::with_capacity(rows.len());
    let mut next = LEVEL3_START;
    for row in rows {
        let key = (row.pref.clone(), row.city.clone());
        let parent = cities.get(&key).ok_or_else(|| AreaError::MissingAncestor {
            level: 2,
            key: format!("{}{}", row.pref, row.city),
        })?;
        let (reading, address) = if row.town == NO_TOWN_SENTINEL {
            ("#".to_string(), compose_leaf("", Some(&parent), &index))
        } else {
            (
                row.town_kana.clone(),
                compose_leaf(&strip_annotation(&row.town), Some(&parent), &index),
            )
        };
        level3.push(Record {
            id: next,
            parent: Some(parent),
            name: row.town.clone(),
            reading,
            address,
            post: Some(row.post.clone()),
        });
        next += 1;
    }

    let mut out = level1;
    out.extend(level2);
    out.extend(level3);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(post: &str, pref: &str, city: &str, town: &str) -> PostalRow {
        PostalRow {
            post: post.to_string(),
            pref_kana: format!("{pref}-kana"),
            city_kana: format!("{city}-kana"),
            town_kana: format!("{town}-kana"),
            pref: pref.to_string(),
            city: city.to_string(),
            town: town.to_string(),
        }
    }

    fn sample() -> Vec<PostalRow> {
        vec![
            row("1000001", "東京都", "千代田区", "千代田"),
            row("1000002", "東京都", "千代田区", "皇居外苑"),
            row("1500000", "東京都", "渋谷区", NO_TOWN_SENTINEL),
            row("0600000", "北海道", "札幌市中央区", "大通西（１〜１９丁目）"),
        ]
    }

    #[test]
    fn level_counts_match_distinct_labels() {
        let out = normalize(&sample()).unwrap();
        let l1 = out.iter().filter(|r| level_of_id(r.id) == Some(1)).count();
        let l2 = out.iter().filter(|r| level_of_id(r.id) == Some(2)).count();
        let l3 = out.iter().filter(|r| level_of_id(r.id) == Some(3)).count();
        assert_eq!(l1, 2);
        assert_eq!(l2, 3);
        assert_eq!(l3, 4);
    }

    #[test]
    fn ids_partition_and_parents_sit_one_range_below() {
        let out = normalize(&sample()).unwrap();
        for rec in &out {
            let level = level_of_id(rec.id).expect("id outside every range");
            match rec.parent {
                None => assert_eq!(level, 1),
                Some(parent) => {
                    assert_eq!(level_of_id(parent), Some(level - 1));
                }
            }
        }
    }

    #[test]
    fn first_seen_order_assigns_ids() {
        let out = normalize(&sample()).unwrap();
        assert_eq!(out[0].id, 1);
        assert_eq!(out[0].name, "東京都");
        assert_eq!(out[1].id, 2);
        assert_eq!(out[1].name, "北海道");
        assert_eq!(out[2].id, 1_000);
        assert_eq!(out[2].name, "千代田区");
    }

    #[test]
    fn town_addresses_compose_through_both_ancestors() {
        let out = normalize(&sample()).unwrap();
        let town = out.iter().find(|r| r.name == "千代田").unwrap();
        assert_eq!(town.address, "東京都千代田区千代田");
        assert_eq!(town.post.as_deref(), Some("1000001"));
    }

    #[test]
    fn sentinel_row_forces_reading_and_short_address() {
        let out = normalize(&sample()).unwrap();
        let sentinel = out.iter().find(|r| r.name == NO_TOWN_SENTINEL).unwrap();
        assert_eq!(sentinel.reading, "#");
        assert_eq!(sentinel.address, "東京都渋谷区");
        assert_eq!(level_of_id(sentinel.id), Some(3));
    }

    #[test]
    fn annotation_stripped_from_address_but_not_name() {
        let out = normalize(&sample()).unwrap();
        let town = out
            .iter()
            .find(|r| r.name == "大通西（１〜１９丁目）")
            .unwrap();
        assert_eq!(town.address, "北海道札幌市中央区大通西");
    }

    #[test]
    fn strip_annotation_spans_first_to_last_bracket() {
        assert_eq!(strip_annotation("大通西（１〜１９丁目）"), "大通西");
        assert_eq!(strip_annotation("甲（乙）丙（丁）"), "甲");
        assert_eq!(strip_annotation("丸の内"), "丸の内");
    }

    #[test]
    fn level1_range_exhaustion_is_an_error() {
        let rows: Vec<PostalRow> = (0..LEVEL1_IDS.end)
            .map(|i| row("0000000", &format!("pref{i}"), "city", "town"))
            .collect();
        let err = normalize(&rows).unwrap_err();
        assert!(matches!(err, AreaError::InvalidData(_)));
    }

    #[test]
    fn level_of_id_rejects_zero() {
        assert_eq!(level_of_id(0), None);
        assert_eq!(level_of_id(1), Some(1));
        assert_eq!(level_of_id(999), Some(1));
        assert_eq!(level_of_id(1_000), Some(2));
        assert_eq!(level_of_id(LEVEL3_START), Some(3));
    }
}
