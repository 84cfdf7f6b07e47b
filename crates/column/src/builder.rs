// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use colplug_type::{Fragment, Type};

use crate::{Column, ColumnData};

/// Appends a typed value to a chunk of the matching type.
pub trait Push<T> {
	fn push(&mut self, value: T);
}

macro_rules! impl_push {
	($($ty:ty => $variant:ident),* $(,)?) => {
		$(
			impl Push<$ty> for ColumnData {
				fn push(&mut self, value: $ty) {
					match self {
						ColumnData::$variant(container) => container.push(value),
						ColumnData::Undefined(container) => {
							let mut upgraded = ColumnData::with_capacity(Type::$variant, container.len() + 1);
							for _ in 0..container.len() {
								upgraded.push_undefined();
							}
							upgraded.push(value);
							*self = upgraded;
						}
						other => {
							panic!(
								"called `push::<{}>()` on incompatible ColumnData::{}",
								stringify!($ty),
								other.get_type()
							);
						}
					}
				}
			}
		)*
	};
}

impl_push! {
	f32 => Float4,
	f64 => Float8,
	i8 => Int1,
	i16 => Int2,
	i32 => Int4,
	i64 => Int8,
	i128 => Int16,
	u8 => Uint1,
	u16 => Uint2,
	u32 => Uint4,
	u64 => Uint8,
	u128 => Uint16,
	String => Utf8,
}

impl Push<bool> for ColumnData {
	fn push(&mut self, value: bool) {
		match self {
			ColumnData::Bool(container) => container.push(value),
			ColumnData::Undefined(container) => {
				let mut upgraded = ColumnData::with_capacity(Type::Boolean, container.len() + 1);
				for _ in 0..container.len() {
					upgraded.push_undefined();
				}
				upgraded.push(value);
				*self = upgraded;
			}
			other => {
				panic!("called `push::<bool>()` on incompatible ColumnData::{}", other.get_type());
			}
		}
	}
}

/// Writes a function's output column, one position at a time.
///
/// The builder owns its buffer until [`ColumnBuilder::finish`]; an early
/// return drops it together with everything pushed so far.
#[derive(Debug)]
pub struct ColumnBuilder {
	name: Fragment,
	data: ColumnData,
}

impl ColumnBuilder {
	pub fn new(name: impl Into<Fragment>, target: Type, capacity: usize) -> Self {
		Self {
			name: name.into(),
			data: ColumnData::with_capacity(target, capacity),
		}
	}

	pub fn push<T>(&mut self, value: T)
	where
		ColumnData: Push<T>,
	{
		self.data.push(value);
	}

	pub fn push_undefined(&mut self) {
		self.data.push_undefined();
	}

	pub fn push_option<T>(&mut self, value: Option<T>)
	where
		ColumnData: Push<T>,
	{
		match value {
			Some(v) => self.data.push(v),
			None => self.data.push_undefined(),
		}
	}

	/// Appends a chunk produced elsewhere, e.g. by a worker thread.
	pub fn append(&mut self, data: &ColumnData) {
		self.data.extend(data);
	}

	pub fn len(&self) -> usize {
		self.data.len()
	}

	pub fn is_empty(&self) -> bool {
		self.data.is_empty()
	}

	pub fn finish(self) -> Column {
		Column::single(self.name, self.data)
	}
}
