//! Bucket storage for the chained hash table.

use std::borrow::Borrow;
use std::mem;

use crate::error::MapError;

/// An owned key-value pair, reachable through exactly one bucket.
#[derive(Debug, Clone)]
pub(crate) struct Entry<K, V> {
    /// The key the pair is addressed by.
    pub(crate) key: K,
    /// The value associated with the key.
    pub(crate) value: V,
}

/// A chain of entries whose keys hashed to the same bucket index.
///
/// Entries are kept in insertion order and keys are unique within a chain:
/// [`Bucket::insert`] overwrites in place instead of appending a duplicate.
#[derive(Debug, Clone)]
pub(crate) struct Bucket<K, V> {
    /// The entries chained into this bucket, oldest first.
    pub(crate) entries: Vec<Entry<K, V>>,
}

impl<K, V> Bucket<K, V> {
    /// Creates an empty chain.
    const fn new() -> Self {
        Self { entries: Vec::new() }
    }
}

impl<K: Eq, V> Bucket<K, V> {
    /// Position of the entry matching `key`, if any.
    fn position<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.entries.iter().position(|entry| entry.key.borrow() == key)
    }

    /// Returns a reference to the value stored under `key`.
    pub(crate) fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.entries.iter().find(|entry| entry.key.borrow() == key).map(|entry| &entry.value)
    }

    /// Returns a mutable reference to the value stored under `key`.
    pub(crate) fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.entries
            .iter_mut()
            .find(|entry| entry.key.borrow() == key)
            .map(|entry| &mut entry.value)
    }

    /// Inserts `value` under `key`, overwriting in place when the key is
    /// already chained. Returns the previous value on overwrite.
    pub(crate) fn insert(&mut self, key: K, value: V) -> Option<V> {
        if let Some(index) = self.position(&key) {
            self.entries.get_mut(index).map(|entry| mem::replace(&mut entry.value, value))
        } else {
            self.entries.push(Entry { key, value });
            None
        }
    }

    /// Appends an entry without scanning for a duplicate key.
    ///
    /// Used while rehashing, where every key is already known to be unique.
    pub(crate) fn push_unchecked(&mut self, key: K, value: V) {
        self.entries.push(Entry { key, value });
    }

    /// Removes the entry matching `key`, preserving the relative order of
    /// the remaining entries. Returns `None` if the key was not chained
    /// here.
    pub(crate) fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        let index = self.position(key)?;
        Some(self.entries.remove(index).value)
    }
}

/// Owns the table's buckets and guards indexed access to them.
///
/// The store never has zero buckets; construction rejects that outright.
#[derive(Debug, Clone)]
pub(crate) struct BucketStore<K, V> {
    /// The buckets, allocated empty and eagerly at construction.
    buckets: Vec<Bucket<K, V>>,
}

impl<K, V> BucketStore<K, V> {
    /// Creates a store with `capacity` empty buckets.
    pub(crate) fn new(capacity: usize) -> Result<Self, MapError> {
        if capacity == 0 {
            return Err(MapError::InvalidCapacity);
        }
        let mut buckets = Vec::with_capacity(capacity);
        buckets.resize_with(capacity, Bucket::new);
        Ok(Self { buckets })
    }

    /// Number of buckets owned by the store.
    pub(crate) fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Borrows the bucket at `index`.
    ///
    /// Indexes are produced by reducing digests modulo the capacity, so an
    /// out-of-range error here signals a broken digest contract rather than
    /// a caller mistake.
    pub(crate) fn bucket(&self, index: usize) -> Result<&Bucket<K, V>, MapError> {
        let capacity = self.capacity();
        self.buckets.get(index).ok_or(MapError::IndexOutOfRange { index, capacity })
    }

    /// Mutably borrows the bucket at `index`.
    pub(crate) fn bucket_mut(&mut self, index: usize) -> Result<&mut Bucket<K, V>, MapError> {
        let capacity = self.capacity();
        self.buckets.get_mut(index).ok_or(MapError::IndexOutOfRange { index, capacity })
    }

    /// The buckets in index order, for iteration.
    pub(crate) fn as_slice(&self) -> &[Bucket<K, V>] {
        &self.buckets
    }

    /// Consumes the store, yielding every entry in bucket order.
    pub(crate) fn into_entries(self) -> impl Iterator<Item = (K, V)> {
        self.buckets
            .into_iter()
            .flat_map(|bucket| bucket.entries.into_iter().map(|entry| (entry.key, entry.value)))
    }

    /// Empties every bucket, keeping the capacity.
    pub(crate) fn clear(&mut self) {
        for bucket in &mut self.buckets {
            bucket.entries.clear();
        }
    }
}
