//! Map reversal (key/value swap) with explicit duplicate-value policies.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use crate::error::FxError;
use crate::outcome::Outcome;

/// Swaps keys and values, consuming the input map.
///
/// Fails with [`FxError::DuplicateValue`] the first time two distinct keys
/// map to the same value; no partial result escapes. `HashMap` iteration
/// order is unspecified, so when an input holds several colliding values
/// *which* collision is detected first, and which original key survives up to
/// that point, is nondeterministic. Callers needing a deterministic winner
/// should use [`reverse_map_override`] or normalize the input themselves.
pub fn reverse_map<K, V>(m: HashMap<K, V>) -> Outcome<HashMap<V, K>>
where
    K: Eq + Hash,
    V: Eq + Hash + Debug,
{
    let mut result = HashMap::with_capacity(m.len());
    for (k, v) in m {
        match result.entry(v) {
            Entry::Occupied(occupied) => {
                let value = occupied.key();
                log::debug!("reverse_map: duplicate value encountered: {value:?}");
                return Outcome::failure(FxError::duplicate_value(value));
            }
            Entry::Vacant(vacant) => {
                vacant.insert(k);
            }
        }
    }
    Outcome::success(result)
}

/// Swaps keys and values, consuming the input map; total. Value collisions
/// resolve last-write-wins in the (unspecified) iteration order, so the
/// surviving key for a duplicated value is nondeterministic.
pub fn reverse_map_override<K, V>(m: HashMap<K, V>) -> HashMap<V, K>
where
    K: Eq + Hash,
    V: Eq + Hash,
{
    m.into_iter().map(|(k, v)| (v, k)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_map_reverses_to_empty_map() {
        let out = reverse_map(HashMap::<i32, String>::new());
        assert_eq!(out, Outcome::success(HashMap::new()));
        assert!(reverse_map_override(HashMap::<i32, String>::new()).is_empty());
    }

    #[test]
    fn unique_values_reverse_cleanly() {
        let input = HashMap::from([(1, "a"), (2, "b")]);

        let out = reverse_map(input.clone());
        assert_eq!(out, Outcome::success(HashMap::from([("a", 1), ("b", 2)])));
        assert_eq!(
            reverse_map_override(input),
            HashMap::from([("a", 1), ("b", 2)])
        );
    }

    #[test]
    fn duplicate_value_fails_with_the_offender() {
        let input = HashMap::from([(1, "a"), (2, "a")]);

        let out = reverse_map(input);
        assert_eq!(
            out.into_error(),
            crate::Optional::present(FxError::DuplicateValue("\"a\"".to_string()))
        );
    }

    #[test]
    fn override_resolves_duplicates_to_one_of_the_keys() {
        let input = HashMap::from([(1, "item1"), (2, "item2"), (3, "item2")]);

        let reversed = reverse_map_override(input);
        assert_eq!(reversed.len(), 2);
        assert_eq!(reversed["item1"], 1);
        // Which key wins for "item2" depends on HashMap iteration order.
        assert!(reversed["item2"] == 2 || reversed["item2"] == 3);
    }

    #[test]
    fn double_reversal_loses_information_on_duplicate_values() {
        let input = HashMap::from([(1, "x"), (2, "x"), (3, "y")]);

        let round_tripped = reverse_map_override(reverse_map_override(input.clone()));
        // One of the "x" keys was overridden away; the round trip cannot
        // restore the original three-entry map.
        assert_eq!(round_tripped.len(), 2);
        assert_ne!(round_tripped, input);
    }
}
