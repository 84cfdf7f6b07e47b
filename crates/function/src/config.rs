// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use serde::Deserialize;

const DEFAULT_PARALLEL_THRESHOLD: usize = 65_536;
const DEFAULT_CHUNK_LEN: usize = 16_384;

/// Tuning for elementwise functions. Scans ignore it.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ExecutionConfig {
	/// Columns with at least this many rows are processed on the rayon pool.
	pub parallel_threshold: usize,
	/// Rows handed to one rayon task.
	pub chunk_len: usize,
}

impl Default for ExecutionConfig {
	fn default() -> Self {
		Self {
			parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
			chunk_len: DEFAULT_CHUNK_LEN,
		}
	}
}

impl ExecutionConfig {
	pub fn new() -> Self {
		Self::default()
	}

	/// Never go parallel.
	pub fn sequential() -> Self {
		Self {
			parallel_threshold: usize::MAX,
			..Self::default()
		}
	}

	pub fn parallel_threshold(mut self, rows: usize) -> Self {
		self.parallel_threshold = rows;
		self
	}

	pub fn chunk_len(mut self, rows: usize) -> Self {
		self.chunk_len = rows;
		self
	}

	pub(crate) fn effective_chunk_len(&self) -> usize {
		self.chunk_len.max(1)
	}

	pub(crate) fn is_parallel(&self, rows: usize) -> bool {
		rows >= self.parallel_threshold && rows > self.effective_chunk_len()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_default() {
		let config = ExecutionConfig::default();
		assert_eq!(config.parallel_threshold, 65_536);
		assert_eq!(config.chunk_len, 16_384);
	}

	#[test]
	fn test_builder() {
		let config = ExecutionConfig::new().parallel_threshold(10).chunk_len(0);
		assert_eq!(config.parallel_threshold, 10);
		assert_eq!(config.effective_chunk_len(), 1);
		assert!(config.is_parallel(10));
		assert!(!config.is_parallel(9));
	}

	#[test]
	fn test_single_chunk_stays_sequential() {
		let config = ExecutionConfig::new().parallel_threshold(0).chunk_len(100);
		assert!(!config.is_parallel(100));
		assert!(config.is_parallel(101));
	}

	#[test]
	fn test_sequential() {
		assert!(!ExecutionConfig::sequential().is_parallel(usize::MAX - 1));
	}

	#[test]
	fn test_deserialize_partial() {
		let config: ExecutionConfig = serde_json::from_str(r#"{"chunk_len": 8}"#).unwrap();
		assert_eq!(config.chunk_len, 8);
		assert_eq!(config.parallel_threshold, 65_536);
	}
}
