//! Combinators over associative collections
//!
//! Mirrors [`crate::seq`] for `HashMap`s. Entries are visited in the map's
//! own iteration order, which is unspecified: any combining function passed
//! to [`reduce`] must be commutative and associative if the caller needs a
//! deterministic result, and the `Vec`-producing transforms make no ordering
//! promise at all.
//!
//! # Example
//!
//! ```rust
//! use std::collections::HashMap;
//! use tidepool::assoc;
//!
//! let ages = HashMap::from([("ada", 36), ("grace", 45)]);
//! let total = assoc::reduce(|acc, _, v| acc + v, 0, &ages);
//! assert_eq!(total, 81);
//! ```

use std::collections::HashMap;
use std::hash::Hash;

/// Fold over `(key, value)` entries in unspecified order.
///
/// Returns `seed` unchanged for an empty map. Deterministic only when `f`
/// is commutative and associative over the entries.
pub fn reduce<K, V, B, F>(mut f: F, seed: B, map: &HashMap<K, V>) -> B
where
    F: FnMut(B, &K, &V) -> B,
{
    let mut acc = seed;
    for (k, v) in map {
        acc = f(acc, k, v);
    }
    acc
}

/// Transform each `(key, value)` entry into a sequence element. The output
/// order is unspecified.
pub fn map_with_keys<K, V, U, F>(mut f: F, map: &HashMap<K, V>) -> Vec<U>
where
    F: FnMut(&K, &V) -> U,
{
    reduce(
        |mut acc: Vec<U>, k, v| {
            acc.push(f(k, v));
            acc
        },
        Vec::with_capacity(map.len()),
        map,
    )
}

/// Transform each value into a sequence element, ignoring keys. The output
/// order is unspecified.
pub fn map_values<K, V, U, F>(mut f: F, map: &HashMap<K, V>) -> Vec<U>
where
    F: FnMut(&V) -> U,
{
    map_with_keys(|_, v| f(v), map)
}

/// Transform each entry into an entry of a new map.
///
/// When two source entries produce the same target key, the last write in
/// iteration order wins -- and iteration order is unspecified, so a
/// non-injective key function makes the surviving value nondeterministic.
/// Callers needing determinism must keep the key transform injective.
///
/// # Example
///
/// ```rust
/// use std::collections::HashMap;
/// use tidepool::assoc;
///
/// let m = HashMap::from([(1, "a"), (2, "b")]);
/// let swapped = assoc::map_entries(|k, v| (*v, *k), &m);
/// assert_eq!(swapped, HashMap::from([("a", 1), ("b", 2)]));
/// ```
pub fn map_entries<K, V, K2, V2, F>(mut f: F, map: &HashMap<K, V>) -> HashMap<K2, V2>
where
    K2: Eq + Hash,
    F: FnMut(&K, &V) -> (K2, V2),
{
    reduce(
        |mut acc: HashMap<K2, V2>, k, v| {
            let (nk, nv) = f(k, v);
            acc.insert(nk, nv);
            acc
        },
        HashMap::with_capacity(map.len()),
        map,
    )
}

/// Transform the values of a map, keeping its keys.
///
/// # Example
///
/// ```rust
/// use std::collections::HashMap;
/// use tidepool::assoc;
///
/// let m = HashMap::from([("a", 1), ("b", 2)]);
/// let doubled = assoc::map_to_map(|v| v * 2, &m);
/// assert_eq!(doubled, HashMap::from([("a", 2), ("b", 4)]));
/// ```
pub fn map_to_map<K, V, U, F>(mut f: F, map: &HashMap<K, V>) -> HashMap<K, U>
where
    K: Eq + Hash + Clone,
    F: FnMut(&V) -> U,
{
    map_entries(|k, v| (k.clone(), f(v)), map)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> HashMap<&'static str, i32> {
        HashMap::from([("a", 1), ("b", 2), ("c", 3)])
    }

    #[test]
    fn test_reduce_order_independent() {
        let total = reduce(|acc, _, v| acc + v, 0, &sample());
        assert_eq!(total, 6);
    }

    #[test]
    fn test_reduce_empty() {
        let empty: HashMap<&str, i32> = HashMap::new();
        assert_eq!(reduce(|acc, _, v| acc + v, 42, &empty), 42);
    }

    #[test]
    fn test_map_values() {
        let mut doubled = map_values(|v| v * 2, &sample());
        doubled.sort_unstable();
        assert_eq!(doubled, vec![2, 4, 6]);
    }

    #[test]
    fn test_map_with_keys() {
        let mut rendered = map_with_keys(|k, v| format!("{k}={v}"), &sample());
        rendered.sort_unstable();
        assert_eq!(rendered, vec!["a=1", "b=2", "c=3"]);
    }

    #[test]
    fn test_map_to_map_keeps_keys() {
        let squared = map_to_map(|v| v * v, &sample());
        assert_eq!(squared, HashMap::from([("a", 1), ("b", 4), ("c", 9)]));
    }

    #[test]
    fn test_map_entries_swap() {
        let swapped = map_entries(|k, v| (*v, *k), &sample());
        assert_eq!(swapped, HashMap::from([(1, "a"), (2, "b"), (3, "c")]));
    }

    #[test]
    fn test_map_entries_collision_keeps_one() {
        // Collapsing every key: exactly one entry survives, which one is
        // unspecified.
        let collapsed = map_entries(|_, v| ((), *v), &sample());
        assert_eq!(collapsed.len(), 1);
        assert!([1, 2, 3].contains(&collapsed[&()]));
    }
}
