//! Sequence-to-map construction with explicit duplicate-key policies.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use crate::error::FxError;
use crate::outcome::Outcome;

/// Builds a key-to-item map by applying `key_of` to every item in sequence
/// order.
///
/// Fails fast with [`FxError::DuplicateKey`] on the first key already present
/// in the partially built map; the partial map is discarded and the caller
/// receives no partial result. Tuple or boolean forms derive from the
/// returned [`Outcome`] via [`Outcome::split`] or
/// [`Outcome::is_failure`].
pub fn to_map<I, K, V, F>(items: I, mut key_of: F) -> Outcome<HashMap<K, V>>
where
    I: IntoIterator<Item = V>,
    K: Eq + Hash + Debug,
    F: FnMut(&V) -> K,
{
    let iter = items.into_iter();
    let mut result = HashMap::with_capacity(iter.size_hint().0);
    for item in iter {
        let key = key_of(&item);
        match result.entry(key) {
            Entry::Occupied(occupied) => {
                let key = occupied.key();
                log::debug!("to_map: duplicate key encountered: {key:?}");
                return Outcome::failure(FxError::duplicate_key(key));
            }
            Entry::Vacant(vacant) => {
                vacant.insert(item);
            }
        }
    }
    Outcome::success(result)
}

/// Like [`to_map`], but total: a later item whose key collides silently
/// replaces the earlier one (last write wins in sequence order).
pub fn to_map_override<I, K, V, F>(items: I, mut key_of: F) -> HashMap<K, V>
where
    I: IntoIterator<Item = V>,
    K: Eq + Hash,
    F: FnMut(&V) -> K,
{
    items
        .into_iter()
        .map(|item| (key_of(&item), item))
        .collect()
}

/// Curries `key_of` into a reusable [`to_map`] closure.
pub fn to_map_fn<I, K, V, F>(key_of: F) -> impl Fn(I) -> Outcome<HashMap<K, V>>
where
    I: IntoIterator<Item = V>,
    K: Eq + Hash + Debug,
    F: Fn(&V) -> K + Clone,
{
    move |items| to_map(items, key_of.clone())
}

/// Curries `key_of` into a reusable [`to_map_override`] closure.
pub fn to_map_override_fn<I, K, V, F>(key_of: F) -> impl Fn(I) -> HashMap<K, V>
where
    I: IntoIterator<Item = V>,
    K: Eq + Hash,
    F: Fn(&V) -> K + Clone,
{
    move |items| to_map_override(items, key_of.clone())
}
