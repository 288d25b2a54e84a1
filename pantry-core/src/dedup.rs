//! Collapse raw pantry entries to one entry per lookup key.

use serde::Serialize;
use std::collections::HashSet;

use crate::models::RawItem;

/// The representative item for one lookup key.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct NormalizedItem {
    /// Catalog lookup key (see [`RawItem::lookup_key`]).
    pub key: String,
    /// Name as submitted.
    pub name: String,
    /// Text the user originally entered.
    pub original_name: String,
}

/// Keep the first item for every distinct lookup key, in input order.
pub fn dedupe_items(items: &[RawItem]) -> Vec<NormalizedItem> {
    let mut seen = HashSet::new();
    let mut distinct = Vec::new();

    for item in items {
        let key = item.lookup_key();
        if seen.insert(key.clone()) {
            distinct.push(NormalizedItem {
                key,
                name: item.name.clone(),
                original_name: item.original().to_string(),
            });
        }
    }

    distinct
}
