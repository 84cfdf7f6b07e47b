// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

/// A run of nulls whose element type is not known.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct UndefinedContainer {
	len: usize,
}

impl UndefinedContainer {
	pub fn new(len: usize) -> Self {
		Self {
			len,
		}
	}

	pub fn len(&self) -> usize {
		self.len
	}

	pub fn is_empty(&self) -> bool {
		self.len == 0
	}

	pub fn push_undefined(&mut self) {
		self.len += 1;
	}

	pub fn is_defined(&self, _idx: usize) -> bool {
		false
	}

	pub fn extend(&mut self, other: &Self) {
		self.len += other.len;
	}

	pub fn slice(&self, offset: usize, len: usize) -> Self {
		assert!(offset + len <= self.len, "undefined slice {offset}..{} out of bounds", offset + len);
		Self {
			len,
		}
	}
}
