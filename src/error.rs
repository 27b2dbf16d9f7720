//! Error types for the chained hash table.

use thiserror::Error;

/// Errors surfaced by table construction and bucket-store access.
///
/// An absent key is never an error: lookups report it as a value-level
/// `Option::None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MapError {
    /// Construction was attempted with zero buckets.
    #[error("invalid configuration: capacity must be greater than zero")]
    InvalidCapacity,

    /// A computed bucket index fell outside the store bounds.
    ///
    /// Every digest is reduced modulo the store capacity before being used
    /// as an index, so this variant is unreachable while the table upholds
    /// its capacity invariant. If it surfaces, the digest contract was
    /// violated and the operation aborts rather than recovering silently.
    #[error("bucket index {index} out of range for capacity {capacity}")]
    IndexOutOfRange {
        /// The offending bucket index.
        index: usize,
        /// The store capacity at the time of the access.
        capacity: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            MapError::InvalidCapacity.to_string(),
            "invalid configuration: capacity must be greater than zero"
        );
        assert_eq!(
            MapError::IndexOutOfRange { index: 7, capacity: 4 }.to_string(),
            "bucket index 7 out of range for capacity 4"
        );
    }
}
