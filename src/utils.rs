//! Utility functions and traits for `ChainedMap`.

use crate::ChainedMap;
use crate::hasher::DigestBytes;

/// Extension trait providing snapshot views of a map's contents.
///
/// Each call walks the table anew in bucket-index order, then within-bucket
/// insertion order, so `keys`, `values`, and `entries` line up position by
/// position when taken from an unmodified map.
pub trait MapExtensions<K, V> {
    /// Returns the keys of the map as a Vec.
    fn keys(&self) -> Vec<K>;

    /// Returns the values of the map as a Vec.
    fn values(&self) -> Vec<V>;

    /// Returns the key-value pairs of the map as a Vec.
    fn entries(&self) -> Vec<(K, V)>;
}

impl<K, V> MapExtensions<K, V> for ChainedMap<K, V>
where
    K: Eq + DigestBytes + Clone,
    V: Clone,
{
    fn keys(&self) -> Vec<K> {
        self.iter().map(|(key, _)| key.clone()).collect()
    }

    fn values(&self) -> Vec<V> {
        self.iter().map(|(_, value)| value.clone()).collect()
    }

    fn entries(&self) -> Vec<(K, V)> {
        self.iter().map(|(key, value)| (key.clone(), value.clone())).collect()
    }
}

/// Creates a `ChainedMap` from an iterator of key-value pairs.
#[allow(dead_code)]
pub fn from_iter<K, V, I>(iter: I) -> ChainedMap<K, V>
where
    K: Eq + DigestBytes,
    I: IntoIterator<Item = (K, V)>,
{
    let mut map = ChainedMap::new();

    for (key, value) in iter {
        map.insert(key, value);
    }

    map
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ChainedMap;

    #[test]
    fn test_from_iter() {
        let data = vec![("a".to_string(), 1), ("b".to_string(), 2), ("c".to_string(), 3)];

        let map = from_iter(data);

        assert_eq!(map.get("a"), Some(&1));
        assert_eq!(map.get("b"), Some(&2));
        assert_eq!(map.get("c"), Some(&3));
        assert_eq!(map.len(), 3);
    }

    #[test]
    fn test_keys_and_values() {
        let mut map = ChainedMap::new();
        map.insert("a".to_string(), 1);
        map.insert("b".to_string(), 2);
        map.insert("c".to_string(), 3);

        let mut keys = map.keys();
        keys.sort(); // Sort for predictable comparison

        let mut values = map.values();
        values.sort_unstable();

        assert_eq!(keys, vec!["a".to_string(), "b".to_string(), "c".to_string()]);
        assert_eq!(values, vec![1, 2, 3]);
    }

    #[test]
    fn test_entries_single_pair() {
        let mut map = ChainedMap::new();
        map.insert("Username".to_string(), "Chelsea".to_string());

        assert_eq!(map.get("Username"), Some(&"Chelsea".to_string()));
        assert_eq!(map.entries(), vec![("Username".to_string(), "Chelsea".to_string())]);
    }

    #[test]
    fn test_snapshots_align_position_by_position() {
        let mut map = ChainedMap::new();
        map.insert("Username".to_string(), "Harry".to_string());
        map.insert("Password".to_string(), "Nimbus2000".to_string());

        let keys = map.keys();
        let values = map.values();
        let entries = map.entries();

        assert_eq!(entries.len(), 2);
        for (position, (key, value)) in entries.iter().enumerate() {
            assert_eq!(keys.get(position), Some(key));
            assert_eq!(values.get(position), Some(value));
        }
        assert!(keys.contains(&"Username".to_string()));
        assert!(keys.contains(&"Password".to_string()));
    }

    #[test]
    fn test_snapshots_are_restartable() {
        let mut map = ChainedMap::new();
        map.insert("a".to_string(), 1);
        map.insert("b".to_string(), 2);

        assert_eq!(map.entries(), map.entries());
        assert_eq!(map.keys(), map.keys());
    }
}
