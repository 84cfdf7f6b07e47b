// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{self, Debug, Formatter},
	sync::Arc,
};

/// Packed bitmap, least significant bit first. Shared between clones and
/// copied on the first mutation.
///
/// Used as the validity mask of every container: a set bit marks a present
/// value, an unset bit marks a null.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct BitVec {
	inner: Arc<BitVecInner>,
}

#[derive(Clone, PartialEq, Eq, Default)]
pub struct BitVecInner {
	bits: Vec<u8>,
	len: usize,
}

impl BitVec {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			inner: Arc::new(BitVecInner {
				bits: Vec::with_capacity(capacity.div_ceil(8)),
				len: 0,
			}),
		}
	}

	pub fn repeat(len: usize, value: bool) -> Self {
		let byte = if value {
			0xFF
		} else {
			0x00
		};
		let mut bits = vec![byte; len.div_ceil(8)];

		// trailing bits past `len` stay zero so equality is by content
		if value && len % 8 != 0 {
			if let Some(last) = bits.last_mut() {
				*last = (1u8 << (len % 8)) - 1;
			}
		}

		Self {
			inner: Arc::new(BitVecInner {
				bits,
				len,
			}),
		}
	}

	pub fn from_fn(len: usize, mut f: impl FnMut(usize) -> bool) -> Self {
		let mut result = Self::with_capacity(len);
		for i in 0..len {
			result.push(f(i));
		}
		result
	}

	pub fn len(&self) -> usize {
		self.inner.len
	}

	pub fn is_empty(&self) -> bool {
		self.inner.len == 0
	}

	pub fn get(&self, idx: usize) -> bool {
		assert!(idx < self.inner.len, "bitvec index {idx} out of bounds for length {}", self.inner.len);
		self.inner.bits[idx / 8] & (1 << (idx % 8)) != 0
	}

	pub fn push(&mut self, bit: bool) {
		let inner = Arc::make_mut(&mut self.inner);
		if inner.len % 8 == 0 {
			inner.bits.push(0);
		}
		if bit {
			let idx = inner.len;
			inner.bits[idx / 8] |= 1 << (idx % 8);
		}
		inner.len += 1;
	}

	pub fn extend(&mut self, other: &BitVec) {
		for bit in other.iter() {
			self.push(bit);
		}
	}

	pub fn count_ones(&self) -> usize {
		self.inner.bits.iter().map(|b| b.count_ones() as usize).sum()
	}

	pub fn count_zeros(&self) -> usize {
		self.len() - self.count_ones()
	}

	pub fn all_ones(&self) -> bool {
		self.count_ones() == self.len()
	}

	/// Copies `len` bits starting at `offset` into a new bitvec.
	pub fn slice(&self, offset: usize, len: usize) -> BitVec {
		assert!(offset + len <= self.len(), "bitvec slice {offset}..{} out of bounds", offset + len);
		BitVec::from_fn(len, |i| self.get(offset + i))
	}

	pub fn iter(&self) -> BitVecIter<'_> {
		BitVecIter {
			bitvec: self,
			pos: 0,
		}
	}

	pub fn to_vec(&self) -> Vec<bool> {
		self.iter().collect()
	}
}

impl Debug for BitVec {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.write_str("BitVec[")?;
		for bit in self.iter() {
			f.write_str(if bit {
				"1"
			} else {
				"0"
			})?;
		}
		f.write_str("]")
	}
}

pub struct BitVecIter<'a> {
	bitvec: &'a BitVec,
	pos: usize,
}

impl Iterator for BitVecIter<'_> {
	type Item = bool;

	fn next(&mut self) -> Option<Self::Item> {
		if self.pos >= self.bitvec.len() {
			return None;
		}
		let bit = self.bitvec.get(self.pos);
		self.pos += 1;
		Some(bit)
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		let remaining = self.bitvec.len() - self.pos;
		(remaining, Some(remaining))
	}
}

impl ExactSizeIterator for BitVecIter<'_> {}

impl From<Vec<bool>> for BitVec {
	fn from(value: Vec<bool>) -> Self {
		BitVec::from_fn(value.len(), |i| value[i])
	}
}

impl From<&[bool]> for BitVec {
	fn from(value: &[bool]) -> Self {
		BitVec::from_fn(value.len(), |i| value[i])
	}
}

impl<const N: usize> From<[bool; N]> for BitVec {
	fn from(value: [bool; N]) -> Self {
		BitVec::from_fn(N, |i| value[i])
	}
}

impl FromIterator<bool> for BitVec {
	fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
		let iter = iter.into_iter();
		let mut result = BitVec::with_capacity(iter.size_hint().0);
		for bit in iter {
			result.push(bit);
		}
		result
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_push_and_get() {
		let mut bv = BitVec::new();
		for i in 0..20 {
			bv.push(i % 3 == 0);
		}
		assert_eq!(bv.len(), 20);
		for i in 0..20 {
			assert_eq!(bv.get(i), i % 3 == 0, "bit {i}");
		}
	}

	#[test]
	fn test_repeat() {
		let ones = BitVec::repeat(13, true);
		assert_eq!(ones.len(), 13);
		assert_eq!(ones.count_ones(), 13);
		assert!(ones.all_ones());

		let zeros = BitVec::repeat(9, false);
		assert_eq!(zeros.count_zeros(), 9);
	}

	#[test]
	fn test_repeat_equals_pushed() {
		let mut pushed = BitVec::new();
		for _ in 0..11 {
			pushed.push(true);
		}
		assert_eq!(pushed, BitVec::repeat(11, true));
	}

	#[test]
	fn test_push_copies_on_write() {
		let original = BitVec::repeat(4, true);
		let mut copy = original.clone();
		copy.push(false);

		assert_eq!(original.to_vec(), vec![true, true, true, true]);
		assert_eq!(copy.to_vec(), vec![true, true, true, true, false]);
	}

	#[test]
	fn test_slice() {
		let bv = BitVec::from(vec![true, false, true, true, false]);
		assert_eq!(bv.slice(1, 3).to_vec(), vec![false, true, true]);
		assert!(bv.slice(5, 0).is_empty());
	}

	#[test]
	fn test_extend() {
		let mut bv = BitVec::from([true, false]);
		bv.extend(&BitVec::from([false, true, true]));
		assert_eq!(bv.to_vec(), vec![true, false, false, true, true]);
	}

	#[test]
	#[should_panic(expected = "out of bounds")]
	fn test_get_out_of_bounds() {
		BitVec::repeat(3, true).get(3);
	}

	#[test]
	fn test_debug() {
		assert_eq!(format!("{:?}", BitVec::from([true, false, true])), "BitVec[101]");
	}
}
