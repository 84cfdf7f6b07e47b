// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use colplug_type::{Type, Value};
use num_traits::AsPrimitive;

use crate::ColumnData;

/// A non-null element borrowed from a chunk.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ValueRef<'a> {
	Boolean(bool),
	Float4(f32),
	Float8(f64),
	Int1(i8),
	Int2(i16),
	Int4(i32),
	Int8(i64),
	Int16(i128),
	Uint1(u8),
	Uint2(u16),
	Uint4(u32),
	Uint8(u64),
	Uint16(u128),
	Utf8(&'a str),
}

impl<'a> ValueRef<'a> {
	pub fn get_type(&self) -> Type {
		match self {
			ValueRef::Boolean(_) => Type::Boolean,
			ValueRef::Float4(_) => Type::Float4,
			ValueRef::Float8(_) => Type::Float8,
			ValueRef::Int1(_) => Type::Int1,
			ValueRef::Int2(_) => Type::Int2,
			ValueRef::Int4(_) => Type::Int4,
			ValueRef::Int8(_) => Type::Int8,
			ValueRef::Int16(_) => Type::Int16,
			ValueRef::Uint1(_) => Type::Uint1,
			ValueRef::Uint2(_) => Type::Uint2,
			ValueRef::Uint4(_) => Type::Uint4,
			ValueRef::Uint8(_) => Type::Uint8,
			ValueRef::Uint16(_) => Type::Uint16,
			ValueRef::Utf8(_) => Type::Utf8,
		}
	}

	/// Widens a number to `f64` with `as` semantics. `None` for text and
	/// booleans.
	pub fn as_f64(&self) -> Option<f64> {
		match *self {
			ValueRef::Float4(v) => Some(v.as_()),
			ValueRef::Float8(v) => Some(v),
			ValueRef::Int1(v) => Some(v.as_()),
			ValueRef::Int2(v) => Some(v.as_()),
			ValueRef::Int4(v) => Some(v.as_()),
			ValueRef::Int8(v) => Some(v.as_()),
			ValueRef::Int16(v) => Some(v.as_()),
			ValueRef::Uint1(v) => Some(v.as_()),
			ValueRef::Uint2(v) => Some(v.as_()),
			ValueRef::Uint4(v) => Some(v.as_()),
			ValueRef::Uint8(v) => Some(v.as_()),
			ValueRef::Uint16(v) => Some(v.as_()),
			ValueRef::Boolean(_) | ValueRef::Utf8(_) => None,
		}
	}

	pub fn to_value(&self) -> Value {
		match *self {
			ValueRef::Boolean(v) => Value::Boolean(v),
			ValueRef::Float4(v) => Value::Float4(v),
			ValueRef::Float8(v) => Value::Float8(v),
			ValueRef::Int1(v) => Value::Int1(v),
			ValueRef::Int2(v) => Value::Int2(v),
			ValueRef::Int4(v) => Value::Int4(v),
			ValueRef::Int8(v) => Value::Int8(v),
			ValueRef::Int16(v) => Value::Int16(v),
			ValueRef::Uint1(v) => Value::Uint1(v),
			ValueRef::Uint2(v) => Value::Uint2(v),
			ValueRef::Uint4(v) => Value::Uint4(v),
			ValueRef::Uint8(v) => Value::Uint8(v),
			ValueRef::Uint16(v) => Value::Uint16(v),
			ValueRef::Utf8(v) => Value::Utf8(v.to_string()),
		}
	}
}

/// Walks every logical position of a chunked column in order, yielding
/// `Some(value)` for present values and `None` for nulls. Chunk boundaries,
/// including empty chunks, are not observable.
pub struct ColumnIter<'a> {
	chunks: &'a [ColumnData],
	chunk: usize,
	row: usize,
	remaining: usize,
}

impl<'a> ColumnIter<'a> {
	pub(crate) fn new(chunks: &'a [ColumnData]) -> Self {
		Self {
			chunks,
			chunk: 0,
			row: 0,
			remaining: chunks.iter().map(ColumnData::len).sum(),
		}
	}

	/// Positions the iterator on logical row `offset` and stops after `len`
	/// rows, without copying any chunk.
	pub(crate) fn range(chunks: &'a [ColumnData], offset: usize, len: usize) -> Self {
		let total: usize = chunks.iter().map(ColumnData::len).sum();
		assert!(offset + len <= total, "range {offset}..{} out of bounds for column of length {total}", offset + len);

		let mut chunk = 0;
		let mut row = offset;
		while let Some(data) = chunks.get(chunk) {
			if row < data.len() {
				break;
			}
			row -= data.len();
			chunk += 1;
		}

		Self {
			chunks,
			chunk,
			row,
			remaining: len,
		}
	}
}

impl<'a> Iterator for ColumnIter<'a> {
	type Item = Option<ValueRef<'a>>;

	fn next(&mut self) -> Option<Self::Item> {
		if self.remaining == 0 {
			return None;
		}
		while let Some(data) = self.chunks.get(self.chunk) {
			if self.row < data.len() {
				let value = data.get_ref(self.row);
				self.row += 1;
				self.remaining -= 1;
				return Some(value);
			}
			self.chunk += 1;
			self.row = 0;
		}
		None
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		(self.remaining, Some(self.remaining))
	}
}

impl ExactSizeIterator for ColumnIter<'_> {}

/// [`ColumnIter`] with every number widened to `f64`.
///
/// Non-numeric values come out as `None`; callers check the column type
/// before reading.
pub struct F64Iter<'a> {
	inner: ColumnIter<'a>,
}

impl<'a> F64Iter<'a> {
	pub(crate) fn new(inner: ColumnIter<'a>) -> Self {
		Self {
			inner,
		}
	}
}

impl Iterator for F64Iter<'_> {
	type Item = Option<f64>;

	fn next(&mut self) -> Option<Self::Item> {
		self.inner.next().map(|value| value.and_then(|v| v.as_f64()))
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		self.inner.size_hint()
	}
}

impl ExactSizeIterator for F64Iter<'_> {}
