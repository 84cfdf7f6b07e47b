// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use colplug_type::{Fragment, FunctionError, Result, Type, Value, return_error};
use tracing::trace;

use crate::{ColumnData, ColumnIter, F64Iter};

/// A named column made of one or more chunks of the same element type.
///
/// `Undefined` chunks are all-null runs and fit into a column of any type.
#[derive(Clone, Debug, PartialEq)]
pub struct Column {
	name: Fragment,
	chunks: Vec<ColumnData>,
}

impl Column {
	pub fn new(name: impl Into<Fragment>, chunks: Vec<ColumnData>) -> Result<Self> {
		let name = name.into();

		let mut expected: Option<Type> = None;
		for chunk in &chunks {
			let actual = chunk.get_type();
			if actual == Type::Undefined {
				continue;
			}
			let Some(first) = expected else {
				expected = Some(actual);
				continue;
			};
			if first != actual {
				return_error!(FunctionError::ChunkTypeMismatch {
					column: name,
					expected: first,
					actual,
				});
			}
		}

		trace!(column = name.text(), chunks = chunks.len(), "column assembled");

		Ok(Self {
			name,
			chunks,
		})
	}

	pub fn single(name: impl Into<Fragment>, data: ColumnData) -> Self {
		Self {
			name: name.into(),
			chunks: vec![data],
		}
	}

	pub fn empty(name: impl Into<Fragment>, target: Type) -> Self {
		Self::single(name, ColumnData::with_capacity(target, 0))
	}

	pub fn name(&self) -> &Fragment {
		&self.name
	}

	pub fn chunks(&self) -> &[ColumnData] {
		&self.chunks
	}

	pub fn len(&self) -> usize {
		self.chunks.iter().map(ColumnData::len).sum()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Element type of the first typed chunk, `Undefined` if every chunk is
	/// all-null or there are no chunks.
	pub fn get_type(&self) -> Type {
		self.chunks.iter().map(ColumnData::get_type).find(|t| *t != Type::Undefined).unwrap_or(Type::Undefined)
	}

	pub fn null_count(&self) -> usize {
		self.iter().filter(Option::is_none).count()
	}

	pub fn iter(&self) -> ColumnIter<'_> {
		ColumnIter::new(&self.chunks)
	}

	/// Iterates logical rows `offset..offset + len` without copying.
	pub fn iter_range(&self, offset: usize, len: usize) -> ColumnIter<'_> {
		ColumnIter::range(&self.chunks, offset, len)
	}

	/// Numbers widened to `f64`. Check [`Type::is_number`] on
	/// [`Column::get_type`] first: other element types read as null.
	pub fn iter_f64(&self) -> F64Iter<'_> {
		F64Iter::new(self.iter())
	}

	pub fn get_value(&self, idx: usize) -> Value {
		let mut offset = idx;
		for chunk in &self.chunks {
			if offset < chunk.len() {
				return chunk.get_value(offset);
			}
			offset -= chunk.len();
		}
		Value::Undefined
	}

	pub fn to_values(&self) -> Vec<Value> {
		self.iter().map(|v| v.map(|v| v.to_value()).unwrap_or(Value::Undefined)).collect()
	}

	/// Copies logical positions `offset..offset + len` into a column of
	/// one or more chunks, keeping the name.
	pub fn slice(&self, offset: usize, len: usize) -> Column {
		assert!(offset + len <= self.len(), "slice {offset}..{} out of bounds for column of length {}", offset + len, self.len());

		let mut chunks = Vec::new();
		let mut skip = offset;
		let mut take = len;

		for chunk in &self.chunks {
			if take == 0 {
				break;
			}
			if skip >= chunk.len() {
				skip -= chunk.len();
				continue;
			}
			let n = (chunk.len() - skip).min(take);
			chunks.push(chunk.slice(skip, n));
			take -= n;
			skip = 0;
		}

		Column {
			name: self.name.clone(),
			chunks,
		}
	}

	/// Merges all chunks into one.
	pub fn rechunk(&self) -> Column {
		let mut merged = ColumnData::with_capacity(self.get_type(), self.len());
		for chunk in &self.chunks {
			merged.extend(chunk);
		}
		Column::single(self.name.clone(), merged)
	}
}

#[cfg(test)]
mod tests {
	use colplug_type::{Type, Value};

	use crate::{Column, ColumnData};

	#[test]
	fn test_new_rejects_mixed_chunks() {
		let err = Column::new("x", vec![ColumnData::float8([1.0]), ColumnData::int4([1])]).unwrap_err();
		assert_eq!(err.code(), "FUNCTION_012");
	}

	#[test]
	fn test_new_accepts_undefined_chunks() {
		let column =
			Column::new("x", vec![ColumnData::undefined(2), ColumnData::utf8(["a"]), ColumnData::undefined(1)])
				.unwrap();
		assert_eq!(column.get_type(), Type::Utf8);
		assert_eq!(column.len(), 4);
		assert_eq!(column.null_count(), 3);
	}

	#[test]
	fn test_no_chunks() {
		let column = Column::new("x", vec![]).unwrap();
		assert!(column.is_empty());
		assert_eq!(column.get_type(), Type::Undefined);
		assert_eq!(column.iter().count(), 0);
	}

	#[test]
	fn test_get_value_across_chunks() {
		let column = Column::new("x", vec![ColumnData::int2([1, 2]), ColumnData::int2_optional([None, Some(4)])])
			.unwrap();
		assert_eq!(column.get_value(1), Value::Int2(2));
		assert_eq!(column.get_value(2), Value::Undefined);
		assert_eq!(column.get_value(3), Value::Int2(4));
		assert_eq!(column.get_value(4), Value::Undefined);
	}

	#[test]
	fn test_slice_spans_chunks() {
		let column = Column::new(
			"x",
			vec![ColumnData::uint4([1, 2, 3]), ColumnData::uint4([4]), ColumnData::uint4([5, 6])],
		)
		.unwrap();

		let slice = column.slice(2, 3);
		assert_eq!(slice.to_values(), vec![Value::Uint4(3), Value::Uint4(4), Value::Uint4(5)]);
		assert_eq!(slice.chunks().len(), 3);
		assert_eq!(slice.name().text(), "x");
	}

	#[test]
	fn test_iter_range_matches_slice() {
		let column = Column::new(
			"x",
			vec![ColumnData::int8([1, 2]), ColumnData::int8_optional([None, Some(4), Some(5)])],
		)
		.unwrap();

		let ranged: Vec<Value> =
			column.iter_range(1, 3).map(|v| v.map(|v| v.to_value()).unwrap_or(Value::Undefined)).collect();
		assert_eq!(ranged, column.slice(1, 3).to_values());
	}

	#[test]
	fn test_rechunk() {
		let column =
			Column::new("x", vec![ColumnData::float8([1.0]), ColumnData::undefined(1), ColumnData::float8([3.0])])
				.unwrap();
		let merged = column.rechunk();
		assert_eq!(merged.chunks().len(), 1);
		assert_eq!(merged.to_values(), column.to_values());
	}
}
