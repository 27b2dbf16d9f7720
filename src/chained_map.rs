//! The public chained hash map.

use std::borrow::Borrow;
use std::mem;

use crate::bucket_store::{Bucket, BucketStore, Entry};
use crate::error::MapError;
use crate::hasher::{DigestBytes, HashStrategy};

/// Bucket count used by [`ChainedMap::new`].
const DEFAULT_CAPACITY: usize = 10;
/// Load factor percentage at which [`ChainedMap::new`] tables resize.
const DEFAULT_LOAD_FACTOR_THRESHOLD: usize = 75;
/// Upper bound applied to configured resize thresholds.
const MAX_LOAD_FACTOR_THRESHOLD: usize = 95;

/// A hash table mapping unique keys to values, with collision resolution
/// via separate chaining.
///
/// Keys are placed by digesting their [`DigestBytes`] projection with the
/// injected [`HashStrategy`] and reducing the digest modulo the bucket
/// count. Keys whose digests land on the same bucket are chained there in
/// insertion order, so operations stay O(1) expected while the load factor
/// is low and degrade to O(n) when every key collides into one bucket.
///
/// When resizing is enabled (the default), crossing the configured load
/// factor doubles the bucket count and rehashes every entry, since bucket
/// placement is a function of the capacity.
///
/// Note: this is a single-threaded, synchronous structure. For shared use,
/// guard the whole table with a mutex; per-bucket locking is only sound
/// with resizing disabled.
#[derive(Debug, Clone)]
pub struct ChainedMap<K, V> {
    /// The buckets storing the chained key-value entries.
    store: BucketStore<K, V>,
    /// Current number of entries in the table.
    size: usize,
    /// The digest strategy used to place keys, fixed at construction.
    strategy: HashStrategy,
    /// Threshold for load factor before resizing - stored as percentage
    /// (0-100); zero disables resizing.
    load_factor_threshold: usize,
}

impl<K, V> Default for ChainedMap<K, V>
where
    K: Eq + DigestBytes,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Extend<(K, V)> for ChainedMap<K, V>
where
    K: Eq + DigestBytes,
{
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K, V> ChainedMap<K, V>
where
    K: Eq + DigestBytes,
{
    /// Creates a table with the default capacity, the polynomial digest
    /// strategy, and resizing at 75% load.
    #[must_use]
    pub fn new() -> Self {
        Self {
            store: Self::resolve(BucketStore::new(DEFAULT_CAPACITY)),
            size: 0,
            strategy: HashStrategy::default(),
            load_factor_threshold: DEFAULT_LOAD_FACTOR_THRESHOLD,
        }
    }

    /// Creates a table with `capacity` buckets and the default strategy and
    /// resize threshold.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::InvalidCapacity`] if `capacity` is zero.
    pub fn with_capacity(capacity: usize) -> Result<Self, MapError> {
        Self::with_config(capacity, HashStrategy::default(), DEFAULT_LOAD_FACTOR_THRESHOLD)
    }

    /// Creates a table with an explicit capacity, digest strategy, and
    /// resize threshold.
    ///
    /// The threshold is a load factor percentage: zero disables resizing
    /// entirely, values above 95 are clamped down to keep chains from
    /// saturating before the table grows.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::InvalidCapacity`] if `capacity` is zero.
    pub fn with_config(
        capacity: usize,
        strategy: HashStrategy,
        load_factor_threshold: usize,
    ) -> Result<Self, MapError> {
        let store = BucketStore::new(capacity)?;
        Ok(Self {
            store,
            size: 0,
            strategy,
            load_factor_threshold: load_factor_threshold.min(MAX_LOAD_FACTOR_THRESHOLD),
        })
    }

    /// Unwraps a store access, aborting on a contract violation.
    ///
    /// Digests are reduced modulo the store capacity before indexing, so a
    /// failed access means the digest contract is broken; continuing would
    /// corrupt the table, so fail loudly instead of recovering silently.
    #[allow(clippy::panic)]
    fn resolve<T>(access: Result<T, MapError>) -> T {
        match access {
            Ok(resolved) => resolved,
            Err(error) => panic!("chained map invariant violated: {error}"),
        }
    }

    /// Resolves the bucket `key` hashes to under the current capacity.
    fn bucket_for<Q>(&self, key: &Q) -> &Bucket<K, V>
    where
        Q: DigestBytes + ?Sized,
    {
        let index = self.strategy.bucket_index(key, self.store.capacity());
        Self::resolve(self.store.bucket(index))
    }

    /// Mutable counterpart of [`Self::bucket_for`].
    fn bucket_for_mut<Q>(&mut self, key: &Q) -> &mut Bucket<K, V>
    where
        Q: DigestBytes + ?Sized,
    {
        let index = self.strategy.bucket_index(key, self.store.capacity());
        Self::resolve(self.store.bucket_mut(index))
    }

    /// Inserts a key-value pair, returning the previous value when the key
    /// was already present.
    ///
    /// An existing entry is overwritten in place, preserving its position
    /// in the chain, so the table never holds two entries for equal keys.
    /// When resizing is enabled, the table grows and rehashes after the
    /// load factor crosses the configured threshold.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let previous = self.bucket_for_mut(&key).insert(key, value);
        if previous.is_none() {
            self.size = self.size.saturating_add(1);
        }
        if self.should_resize() {
            self.resize();
        }
        previous
    }

    /// Retrieves the value stored under `key`.
    ///
    /// An absent key is a normal outcome reported as `None`, never a
    /// sentinel value that could collide with a stored one.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Eq + DigestBytes + ?Sized,
    {
        self.bucket_for(key).get(key)
    }

    /// Retrieves a mutable reference to the value stored under `key`.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Eq + DigestBytes + ?Sized,
    {
        self.bucket_for_mut(key).get_mut(key)
    }

    /// Reports whether `key` is present, without mutating the table.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Eq + DigestBytes + ?Sized,
    {
        self.get(key).is_some()
    }

    /// Removes the entry stored under `key` and returns its value.
    ///
    /// Removing an absent key is a no-op reported as `None`. The remaining
    /// entries in the affected bucket keep their relative order.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Eq + DigestBytes + ?Sized,
    {
        let removed = self.bucket_for_mut(key).remove(key);
        if removed.is_some() {
            self.size = self.size.saturating_sub(1);
        }
        removed
    }

    /// Returns the number of entries in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns true if the table holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the number of buckets in the table.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.store.capacity()
    }

    /// The digest strategy this table was constructed with.
    #[must_use]
    pub const fn strategy(&self) -> HashStrategy {
        self.strategy
    }

    /// Current ratio of stored entries to bucket count.
    #[must_use]
    #[allow(clippy::arithmetic_side_effects, clippy::cast_precision_loss)]
    pub fn load_factor(&self) -> f64 {
        self.size as f64 / self.store.capacity() as f64
    }

    /// Reconfigures the resize threshold (a load factor percentage).
    ///
    /// Zero disables resizing; values above 95 are clamped.
    pub fn set_load_factor_threshold(&mut self, threshold: usize) {
        self.load_factor_threshold = threshold.min(MAX_LOAD_FACTOR_THRESHOLD);
    }

    /// Removes every entry, keeping the capacity and strategy.
    pub fn clear(&mut self) {
        self.store.clear();
        self.size = 0;
    }

    /// Returns an iterator over the stored entries.
    ///
    /// Traversal order is bucket-index order, then within-bucket insertion
    /// order - not global insertion order.
    #[must_use]
    #[allow(clippy::iter_without_into_iter)]
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter { buckets: self.store.as_slice().iter(), entries: std::slice::Iter::default() }
    }

    /// Whether the configured load factor threshold has been crossed.
    #[allow(clippy::arithmetic_side_effects, clippy::cast_precision_loss)]
    fn should_resize(&self) -> bool {
        if self.load_factor_threshold == 0 {
            return false;
        }
        self.load_factor() >= self.load_factor_threshold as f64 / 100.0
    }

    /// Doubles the capacity and rehashes every entry under the new bucket
    /// count.
    ///
    /// Required whenever the capacity changes: bucket placement is a
    /// function of the capacity, so stale indexes would orphan entries.
    fn resize(&mut self) {
        let new_capacity = self.store.capacity().saturating_mul(2);
        let old_store =
            mem::replace(&mut self.store, Self::resolve(BucketStore::new(new_capacity)));
        for (key, value) in old_store.into_entries() {
            let index = self.strategy.bucket_index(&key, new_capacity);
            // Keys were unique before the rebuild, so append directly.
            Self::resolve(self.store.bucket_mut(index)).push_unchecked(key, value);
        }
    }
}

/// Iterator over the entries of a [`ChainedMap`], in bucket order.
#[derive(Debug, Clone)]
pub struct Iter<'a, K, V> {
    /// Remaining buckets, in index order.
    buckets: std::slice::Iter<'a, Bucket<K, V>>,
    /// Remaining entries of the bucket currently being walked.
    entries: std::slice::Iter<'a, Entry<K, V>>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.entries.next() {
                return Some((&entry.key, &entry.value));
            }
            self.entries = self.buckets.next()?.entries.iter();
        }
    }
}
