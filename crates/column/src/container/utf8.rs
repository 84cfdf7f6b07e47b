// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use crate::BitVec;

/// Owned strings plus their validity mask. Null slots hold an empty string.
#[derive(Clone, Debug, PartialEq)]
pub struct Utf8Container {
	data: Vec<String>,
	bitvec: BitVec,
}

impl Utf8Container {
	pub fn new(data: Vec<String>, bitvec: BitVec) -> Self {
		debug_assert_eq!(data.len(), bitvec.len());
		Self {
			data,
			bitvec,
		}
	}

	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			data: Vec::with_capacity(capacity),
			bitvec: BitVec::with_capacity(capacity),
		}
	}

	pub fn from_vec(data: Vec<String>) -> Self {
		let len = data.len();
		Self {
			data,
			bitvec: BitVec::repeat(len, true),
		}
	}

	pub fn len(&self) -> usize {
		self.data.len()
	}

	pub fn is_empty(&self) -> bool {
		self.data.is_empty()
	}

	pub fn push(&mut self, value: String) {
		self.data.push(value);
		self.bitvec.push(true);
	}

	pub fn push_undefined(&mut self) {
		self.data.push(String::new());
		self.bitvec.push(false);
	}

	pub fn get(&self, index: usize) -> Option<&str> {
		if index < self.len() && self.bitvec.get(index) {
			Some(self.data[index].as_str())
		} else {
			None
		}
	}

	pub fn is_defined(&self, idx: usize) -> bool {
		idx < self.len() && self.bitvec.get(idx)
	}

	pub fn data(&self) -> &[String] {
		&self.data
	}

	pub fn bitvec(&self) -> &BitVec {
		&self.bitvec
	}

	pub fn extend(&mut self, other: &Self) {
		self.data.extend_from_slice(&other.data);
		self.bitvec.extend(&other.bitvec);
	}

	pub fn slice(&self, offset: usize, len: usize) -> Self {
		Self {
			data: self.data[offset..offset + len].to_vec(),
			bitvec: self.bitvec.slice(offset, len),
		}
	}
}
