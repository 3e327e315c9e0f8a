//! Filtering, mapping and snapshot helpers over maps.
//!
//! The `map_apply` family deliberately differs from
//! [`to_map`](crate::collections::to_map) in its duplicate policy: mapped
//! entries whose new keys collide silently override each other instead of
//! failing. Per-entry mapper errors are accumulated in a side list next to a
//! best-effort output map; since `HashMap` iteration order is unspecified, no
//! correspondence between error order and any input order is promised.

use std::collections::HashMap;
use std::hash::Hash;

/// Returns a new map with only the entries `predicate` accepts. The input is
/// untouched; kept entries are cloned.
pub fn filter<K, V, F>(m: &HashMap<K, V>, mut predicate: F) -> HashMap<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
    F: FnMut(&K, &V) -> bool,
{
    m.iter()
        .filter(|&(k, v)| predicate(k, v))
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect()
}

/// Removes entries failing `predicate` in place. Destructive: this mutates
/// the caller's map, and the caller must hold exclusive access for the
/// duration of the call (the `&mut` borrow enforces this).
pub fn filter_mut<K, V, F>(m: &mut HashMap<K, V>, mut predicate: F)
where
    K: Eq + Hash,
    F: FnMut(&K, &V) -> bool,
{
    m.retain(|k, v| predicate(k, v));
}

/// Applies `mapper` to every entry. Successful mappings populate the output
/// map (colliding new keys silently override earlier ones); failures are
/// collected into the returned error list and excluded from the output.
pub fn map_apply<K1, V1, K2, V2, E, F>(
    m: &HashMap<K1, V1>,
    mut mapper: F,
) -> (HashMap<K2, V2>, Vec<E>)
where
    K1: Eq + Hash,
    K2: Eq + Hash,
    F: FnMut(&K1, &V1) -> Result<(K2, V2), E>,
{
    let mut result = HashMap::with_capacity(m.len());
    let mut errors = Vec::new();

    for (k, v) in m {
        match mapper(k, v) {
            Ok((k2, v2)) => {
                result.insert(k2, v2);
            }
            Err(err) => errors.push(err),
        }
    }
    (result, errors)
}

/// Like [`map_apply`], but `predicate` gates entries before the mapper runs;
/// rejected entries are simply skipped (they are neither mapped nor counted
/// as errors).
pub fn filter_then_apply<K1, V1, K2, V2, E, P, F>(
    m: &HashMap<K1, V1>,
    mut predicate: P,
    mut mapper: F,
) -> (HashMap<K2, V2>, Vec<E>)
where
    K1: Eq + Hash,
    K2: Eq + Hash,
    P: FnMut(&K1, &V1) -> bool,
    F: FnMut(&K1, &V1) -> Result<(K2, V2), E>,
{
    let mut result = HashMap::with_capacity(m.len());
    let mut errors = Vec::new();

    for (k, v) in m {
        if !predicate(k, v) {
            continue;
        }
        match mapper(k, v) {
            Ok((k2, v2)) => {
                result.insert(k2, v2);
            }
            Err(err) => errors.push(err),
        }
    }
    (result, errors)
}

/// Cloned snapshot of the map's keys, in unspecified order.
pub fn keys<K, V>(m: &HashMap<K, V>) -> Vec<K>
where
    K: Clone,
{
    m.keys().cloned().collect()
}

/// Cloned snapshot of the map's values, in unspecified order.
pub fn values<K, V>(m: &HashMap<K, V>) -> Vec<V>
where
    V: Clone,
{
    m.values().cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FxError;

    fn sample() -> HashMap<i32, &'static str> {
        HashMap::from([(1, "one"), (2, "two"), (3, "three")])
    }

    #[test]
    fn filter_keeps_matching_entries_and_leaves_input_alone() {
        let input = sample();
        let filtered = filter(&input, |k, _| *k % 2 == 1);

        assert_eq!(filtered, HashMap::from([(1, "one"), (3, "three")]));
        assert_eq!(input.len(), 3);
    }

    #[test]
    fn filter_mut_removes_in_place() {
        let mut input = sample();
        filter_mut(&mut input, |_, v| v.len() > 3);

        assert_eq!(input, HashMap::from([(3, "three")]));
    }

    #[test]
    fn map_apply_collects_errors_beside_a_best_effort_map() {
        let input = sample();
        let (mapped, errors) = map_apply(&input, |k, v| {
            if *k == 2 {
                Err(FxError::duplicate_key(k))
            } else {
                Ok((v.to_string(), *k))
            }
        });

        assert_eq!(
            mapped,
            HashMap::from([("one".to_string(), 1), ("three".to_string(), 3)])
        );
        assert_eq!(errors, vec![FxError::DuplicateKey("2".to_string())]);
    }

    #[test]
    fn map_apply_silently_overrides_colliding_new_keys() {
        let input = sample();
        // Every entry maps to the same output key; exactly one survives.
        let (mapped, errors) =
            map_apply(&input, |k, _| Ok::<_, FxError>(("same", *k)));

        assert_eq!(mapped.len(), 1);
        assert!(errors.is_empty());
        assert!(input.keys().any(|k| *k == mapped["same"]));
    }

    #[test]
    fn filter_then_apply_skips_rejected_entries_without_erroring() {
        let input = sample();
        let (mapped, errors) = filter_then_apply(
            &input,
            |k, _| *k != 2,
            |k, v| {
                if *k == 3 {
                    Err(FxError::duplicate_key(k))
                } else {
                    Ok((*k * 10, v.to_string()))
                }
            },
        );

        assert_eq!(mapped, HashMap::from([(10, "one".to_string())]));
        assert_eq!(errors, vec![FxError::DuplicateKey("3".to_string())]);
    }

    #[test]
    fn keys_and_values_snapshot_the_map() {
        let input = sample();

        let mut ks = keys(&input);
        ks.sort_unstable();
        assert_eq!(ks, vec![1, 2, 3]);

        let mut vs = values(&input);
        vs.sort_unstable();
        assert_eq!(vs, vec!["one", "three", "two"]);
    }
}
