//! Small collection helpers used by query generation.

use std::collections::HashSet;
use std::hash::Hash;

/// Deduplicate while preserving first-seen order.
#[inline]
pub fn unique_ordered<T: Eq + Hash + Clone>(items: Vec<T>) -> Vec<T> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}
