// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Hash types and functions for colplug.
//!
//! Provides xxHash3 hashing using the pure Rust implementation. The hashes
//! carry no per-process random state, so the same bytes produce the same hash
//! in every run, on every thread and on every platform.

use core::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};
use xxhash_rust::xxh3;

#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Hash64(pub u64);

impl Hash64 {
	/// Reduces the hash into `[0, buckets)`. `buckets` must not be zero.
	#[inline]
	pub fn bucket(self, buckets: u64) -> u64 {
		debug_assert!(buckets > 0);
		self.0 % buckets
	}
}

impl From<u64> for Hash64 {
	fn from(value: u64) -> Self {
		Hash64(value)
	}
}

impl From<Hash64> for u64 {
	fn from(hash: Hash64) -> Self {
		hash.0
	}
}

impl Hash for Hash64 {
	fn hash<H: Hasher>(&self, state: &mut H) {
		state.write_u64(self.0)
	}
}

/// Compute xxHash3 64-bit hash of data.
#[inline]
pub fn xxh3_64(data: &[u8]) -> Hash64 {
	Hash64(xxh3::xxh3_64(data))
}

/// Compute xxHash3 64-bit hash of data with an explicit seed.
#[inline]
pub fn xxh3_64_with_seed(data: &[u8], seed: u64) -> Hash64 {
	Hash64(xxh3::xxh3_64_with_seed(data, seed))
}

#[cfg(test)]
mod tests {
	mod xxh3_64 {
		use crate::{Hash64, xxh3_64};

		#[test]
		fn test_empty_input() {
			let result = xxh3_64(b"");
			assert_eq!(result, Hash64(0x2d06800538d394c2));
		}

		#[test]
		fn test_simple_string() {
			let result = xxh3_64(b"hello");
			assert_eq!(result, Hash64(10760762337991515389));
		}

		#[test]
		fn test_longer_input() {
			let data = b"The quick brown fox jumps over the lazy dog";
			let result = xxh3_64(data);
			assert_eq!(result, Hash64(14879076941462221669));
		}

		#[test]
		fn test_deterministic() {
			let data = b"hello world";
			assert_eq!(xxh3_64(data), xxh3_64(data));
			assert_ne!(xxh3_64(data), xxh3_64(b"different data"));
		}
	}

	mod xxh3_64_with_seed {
		use crate::{xxh3_64, xxh3_64_with_seed};

		#[test]
		fn test_zero_seed_matches_unseeded() {
			assert_eq!(xxh3_64_with_seed(b"hello", 0), xxh3_64(b"hello"));
		}

		#[test]
		fn test_seed_changes_hash() {
			assert_ne!(xxh3_64_with_seed(b"hello", 42), xxh3_64_with_seed(b"hello", 43));
		}
	}

	mod bucket {
		use crate::Hash64;

		#[test]
		fn test_in_range() {
			for raw in [0u64, 1, 7, 1 << 40, u64::MAX] {
				assert!(Hash64(raw).bucket(7) < 7);
			}
		}

		#[test]
		fn test_single_bucket() {
			assert_eq!(Hash64(u64::MAX).bucket(1), 0);
		}
	}

	#[test]
	fn test_hash64_conversions() {
		let value: u64 = 12345;
		let hash = crate::Hash64::from(value);
		assert_eq!(u64::from(hash), value);
	}
}
