//! Grouping a sequence into a map of per-key runs.

use std::collections::HashMap;
use std::hash::Hash;

use itertools::Itertools;

/// Groups items under the key `key_of` computes for each of them.
///
/// Relative input order is preserved within each group's `Vec`; the emission
/// order of the groups themselves follows `HashMap` and is unspecified.
/// Never fails.
pub fn group_by<I, K, T, F>(items: I, key_of: F) -> HashMap<K, Vec<T>>
where
    I: IntoIterator<Item = T>,
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    items.into_iter().into_group_map_by(key_of)
}
