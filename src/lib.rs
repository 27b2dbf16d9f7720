//! # Chained Hash Map
//!
//! A Rust implementation of a hash table with separate chaining.
//!
//! This crate provides a dictionary built on an explicit hash pipeline:
//!
//! - `ChainedMap`: the container itself - insert, lookup, presence check,
//!   removal, and iteration over chained buckets
//! - `HashStrategy`: two digest strategies, an additive byte sum and the
//!   default Horner-style polynomial with multiplier 37
//! - `DigestBytes`: the byte projection keys are hashed through
//! - `MapExtensions`: snapshot views (`keys`, `values`, `entries`)
//!
//! Keys are digested, the digest is reduced modulo the bucket count, and
//! colliding keys chain inside their bucket in insertion order. Operations
//! stay O(1) expected while the load factor is low and degrade to O(n)
//! when every key lands in one bucket. The digests are optimized for speed
//! and distribution, not for adversarial resistance.
//!
//! ## Basic Usage
//!
//! ```rust
//! use chainmap::ChainedMap;
//!
//! let mut map = ChainedMap::new();
//!
//! map.insert("Username".to_string(), "Chelsea".to_string());
//! assert_eq!(map.get("Username"), Some(&"Chelsea".to_string()));
//!
//! // Overwriting keeps a single entry per key
//! map.insert("Username".to_string(), "Harry".to_string());
//! assert_eq!(map.len(), 1);
//!
//! // Removing an absent key is a no-op, not an error
//! assert_eq!(map.remove("Password"), None);
//! ```
//!
//! ## Choosing a digest strategy
//!
//! ```rust
//! use chainmap::{ChainedMap, HashStrategy};
//!
//! // The additive digest collides anagrams; the polynomial one spreads them
//! assert_eq!(
//!     HashStrategy::Additive.digest("ab"),
//!     HashStrategy::Additive.digest("ba"),
//! );
//! assert_ne!(
//!     HashStrategy::Polynomial.digest("ab"),
//!     HashStrategy::Polynomial.digest("ba"),
//! );
//!
//! // Capacity, strategy, and resize threshold are fixed at construction;
//! // a threshold of zero disables resizing
//! let mut map = ChainedMap::with_config(16, HashStrategy::Additive, 0)?;
//! map.insert("ab".to_string(), 1);
//! map.insert("ba".to_string(), 2);
//! assert_eq!(map.get("ab"), Some(&1));
//! assert_eq!(map.get("ba"), Some(&2));
//! # Ok::<(), chainmap::MapError>(())
//! ```

/// Module implementing the bucket store backing the table
mod bucket_store;
/// Module implementing the public chained hash map
mod chained_map;
/// Error types for construction and bucket access
mod error;
/// Digest strategies and the key byte projection trait
mod hasher;
/// Utility functions and traits for the map
mod utils;

pub use chained_map::{ChainedMap, Iter};
pub use error::MapError;
pub use hasher::{DigestBytes, HashStrategy, MAX_DIGEST_BYTES, POLYNOMIAL_PRIME};
pub use utils::MapExtensions;
