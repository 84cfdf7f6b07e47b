// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use crate::ColumnData;

impl ColumnData {
	/// Copies positions `offset..offset + len` into a new chunk.
	pub fn slice(&self, offset: usize, len: usize) -> ColumnData {
		assert!(
			offset + len <= self.len(),
			"slice {offset}..{} out of bounds for chunk of length {}",
			offset + len,
			self.len()
		);
		match self {
			ColumnData::Bool(container) => ColumnData::Bool(container.slice(offset, len)),
			ColumnData::Float4(container) => ColumnData::Float4(container.slice(offset, len)),
			ColumnData::Float8(container) => ColumnData::Float8(container.slice(offset, len)),
			ColumnData::Int1(container) => ColumnData::Int1(container.slice(offset, len)),
			ColumnData::Int2(container) => ColumnData::Int2(container.slice(offset, len)),
			ColumnData::Int4(container) => ColumnData::Int4(container.slice(offset, len)),
			ColumnData::Int8(container) => ColumnData::Int8(container.slice(offset, len)),
			ColumnData::Int16(container) => ColumnData::Int16(container.slice(offset, len)),
			ColumnData::Uint1(container) => ColumnData::Uint1(container.slice(offset, len)),
			ColumnData::Uint2(container) => ColumnData::Uint2(container.slice(offset, len)),
			ColumnData::Uint4(container) => ColumnData::Uint4(container.slice(offset, len)),
			ColumnData::Uint8(container) => ColumnData::Uint8(container.slice(offset, len)),
			ColumnData::Uint16(container) => ColumnData::Uint16(container.slice(offset, len)),
			ColumnData::Utf8(container) => ColumnData::Utf8(container.slice(offset, len)),
			ColumnData::Undefined(container) => ColumnData::Undefined(container.slice(offset, len)),
		}
	}
}
