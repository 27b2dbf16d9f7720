//! Digest strategies and the key byte projection they hash.

use std::borrow::Cow;

/// Fixed multiplier for the polynomial digest.
pub const POLYNOMIAL_PRIME: u64 = 37;

/// At most this many bytes of a key participate in a digest.
///
/// Bounds the cost of hashing pathologically long keys, keeping digests
/// O(1) amortized instead of O(k) in the key length.
pub const MAX_DIGEST_BYTES: usize = 100;

/// The byte projection of a key, used as digest input.
///
/// Implementations must be deterministic and consistent with the key's
/// equality: keys that compare equal must project to identical bytes,
/// otherwise equal keys can land in different buckets and lookups will
/// miss stored entries. Returning a [`Cow`] lets normalizing key types
/// (for example case-insensitive keys) allocate a canonical form.
pub trait DigestBytes {
    /// Returns the bytes the digest strategies hash for this key.
    fn digest_bytes(&self) -> Cow<'_, [u8]>;
}

impl DigestBytes for str {
    fn digest_bytes(&self) -> Cow<'_, [u8]> {
        Cow::Borrowed(self.as_bytes())
    }
}

impl DigestBytes for String {
    fn digest_bytes(&self) -> Cow<'_, [u8]> {
        Cow::Borrowed(self.as_bytes())
    }
}

impl DigestBytes for [u8] {
    fn digest_bytes(&self) -> Cow<'_, [u8]> {
        Cow::Borrowed(self)
    }
}

impl DigestBytes for Vec<u8> {
    fn digest_bytes(&self) -> Cow<'_, [u8]> {
        Cow::Borrowed(self.as_slice())
    }
}

impl<T: DigestBytes + ?Sized> DigestBytes for &T {
    fn digest_bytes(&self) -> Cow<'_, [u8]> {
        (**self).digest_bytes()
    }
}

/// Digest strategy used to place keys into buckets.
///
/// Both strategies are pure functions of the key bytes, optimized for
/// speed and distribution rather than adversarial resistance. The digest
/// is unsigned and the arithmetic wraps, so reduction by modulo can never
/// produce a negative or out-of-range index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HashStrategy {
    /// Wrapping sum of the key's byte values.
    ///
    /// Cheap but order-blind: anagram keys such as `"ab"` and `"ba"`
    /// produce identical digests and always share a bucket.
    Additive,
    /// Horner-style polynomial accumulation with multiplier
    /// [`POLYNOMIAL_PRIME`], left to right over the key bytes.
    ///
    /// Spreads anagrams to different digests; the recommended default.
    #[default]
    Polynomial,
}

impl HashStrategy {
    /// Computes the raw digest of `key`, before range reduction.
    ///
    /// At most [`MAX_DIGEST_BYTES`] bytes of the projection are read.
    #[must_use]
    pub fn digest<K>(self, key: &K) -> u64
    where
        K: DigestBytes + ?Sized,
    {
        let bytes = key.digest_bytes();
        let bytes = bytes.iter().take(MAX_DIGEST_BYTES);
        match self {
            Self::Additive => bytes.fold(0_u64, |accum, &byte| accum.wrapping_add(u64::from(byte))),
            Self::Polynomial => bytes.fold(0_u64, |accum, &byte| {
                accum.wrapping_mul(POLYNOMIAL_PRIME).wrapping_add(u64::from(byte))
            }),
        }
    }

    /// Reduces the digest of `key` into a bucket index in `[0, capacity)`.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero. The table never constructs a store
    /// without buckets, so calls routed through it cannot hit this.
    #[must_use]
    pub fn bucket_index<K>(self, key: &K, capacity: usize) -> usize
    where
        K: DigestBytes + ?Sized,
    {
        assert_ne!(capacity, 0, "bucket index requested for a zero-capacity store");
        let digest = self.digest(key);
        #[allow(clippy::cast_possible_truncation)]
        {
            (digest % (capacity as u64)) as usize
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digest_is_deterministic() {
        for strategy in [HashStrategy::Additive, HashStrategy::Polynomial] {
            assert_eq!(strategy.digest("Username"), strategy.digest("Username"));
        }
    }

    #[test]
    fn test_empty_key_digests_to_zero() {
        assert_eq!(HashStrategy::Additive.digest(""), 0);
        assert_eq!(HashStrategy::Polynomial.digest(""), 0);
        assert_eq!(HashStrategy::Polynomial.bucket_index("", 10), 0);
    }

    #[test]
    fn test_additive_digest_collides_anagrams() {
        assert_eq!(HashStrategy::Additive.digest("ab"), HashStrategy::Additive.digest("ba"));
        assert_eq!(
            HashStrategy::Additive.bucket_index("ab", 64),
            HashStrategy::Additive.bucket_index("ba", 64)
        );
    }

    #[test]
    fn test_polynomial_digest_separates_anagrams() {
        // "ab" accumulates to 97 * 37 + 98 = 3687, "ba" to 98 * 37 + 97 = 3723
        assert_eq!(HashStrategy::Polynomial.digest("ab"), 3687);
        assert_eq!(HashStrategy::Polynomial.digest("ba"), 3723);
        // Reduced into 64 buckets they stay apart: 39 vs 11
        assert_ne!(
            HashStrategy::Polynomial.bucket_index("ab", 64),
            HashStrategy::Polynomial.bucket_index("ba", 64)
        );
    }

    #[test]
    fn test_bucket_index_stays_in_range() {
        for capacity in [1, 2, 10, 64, 1000] {
            for key in ["", "a", "Username", "Password", "Nimbus2000"] {
                assert!(HashStrategy::Additive.bucket_index(key, capacity) < capacity);
                assert!(HashStrategy::Polynomial.bucket_index(key, capacity) < capacity);
            }
        }
    }

    #[test]
    fn test_digest_reads_at_most_the_byte_cap() {
        let capped = "x".repeat(MAX_DIGEST_BYTES);
        let long = "x".repeat(MAX_DIGEST_BYTES.saturating_mul(3));
        assert_eq!(
            HashStrategy::Polynomial.digest(capped.as_str()),
            HashStrategy::Polynomial.digest(long.as_str())
        );
        assert_eq!(
            HashStrategy::Additive.digest(capped.as_str()),
            HashStrategy::Additive.digest(long.as_str())
        );
    }

    /// Key type with case-insensitive equality and a matching normalized
    /// projection.
    #[derive(Debug)]
    struct CaseFold(String);

    impl PartialEq for CaseFold {
        fn eq(&self, other: &Self) -> bool {
            self.0.eq_ignore_ascii_case(&other.0)
        }
    }

    impl Eq for CaseFold {}

    impl DigestBytes for CaseFold {
        fn digest_bytes(&self) -> Cow<'_, [u8]> {
            Cow::Owned(self.0.to_ascii_lowercase().into_bytes())
        }
    }

    #[test]
    fn test_normalizing_projection_keeps_equal_keys_together() {
        let upper = CaseFold("USERNAME".to_string());
        let lower = CaseFold("username".to_string());
        assert_eq!(upper, lower);
        for strategy in [HashStrategy::Additive, HashStrategy::Polynomial] {
            assert_eq!(strategy.digest(&upper), strategy.digest(&lower));
            assert_eq!(strategy.bucket_index(&upper, 10), strategy.bucket_index(&lower, 10));
        }
    }
}
