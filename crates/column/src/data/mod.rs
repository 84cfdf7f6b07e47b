// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use colplug_type::{Type, Value};

use crate::{
	BitVec,
	container::{BoolContainer, NumberContainer, UndefinedContainer, Utf8Container},
	iter::ValueRef,
};

mod slice;

/// One typed chunk of a column.
#[derive(Clone, Debug, PartialEq)]
pub enum ColumnData {
	Bool(BoolContainer),
	Float4(NumberContainer<f32>),
	Float8(NumberContainer<f64>),
	Int1(NumberContainer<i8>),
	Int2(NumberContainer<i16>),
	Int4(NumberContainer<i32>),
	Int8(NumberContainer<i64>),
	Int16(NumberContainer<i128>),
	Uint1(NumberContainer<u8>),
	Uint2(NumberContainer<u16>),
	Uint4(NumberContainer<u32>),
	Uint8(NumberContainer<u64>),
	Uint16(NumberContainer<u128>),
	Utf8(Utf8Container),
	// special case: all undefined
	Undefined(UndefinedContainer),
}

/// Runs `$body` against whichever container `$self` holds.
macro_rules! with_container {
	($self:expr, |$c:ident| $body:expr) => {
		match $self {
			ColumnData::Bool($c) => $body,
			ColumnData::Float4($c) => $body,
			ColumnData::Float8($c) => $body,
			ColumnData::Int1($c) => $body,
			ColumnData::Int2($c) => $body,
			ColumnData::Int4($c) => $body,
			ColumnData::Int8($c) => $body,
			ColumnData::Int16($c) => $body,
			ColumnData::Uint1($c) => $body,
			ColumnData::Uint2($c) => $body,
			ColumnData::Uint4($c) => $body,
			ColumnData::Uint8($c) => $body,
			ColumnData::Uint16($c) => $body,
			ColumnData::Utf8($c) => $body,
			ColumnData::Undefined($c) => $body,
		}
	};
}

macro_rules! number_constructors {
	($($variant:ident, $ty:ty, $name:ident, $with_bitvec:ident, $optional:ident);* $(;)?) => {
		impl ColumnData {
			$(
				pub fn $name(data: impl IntoIterator<Item = $ty>) -> Self {
					ColumnData::$variant(NumberContainer::from_vec(data.into_iter().collect()))
				}

				pub fn $with_bitvec(data: impl IntoIterator<Item = $ty>, bitvec: impl Into<BitVec>) -> Self {
					let data: Vec<$ty> = data.into_iter().collect();
					let bitvec = bitvec.into();
					assert_eq!(data.len(), bitvec.len(), "data and bitvec length differ");
					ColumnData::$variant(NumberContainer::new(data, bitvec))
				}

				pub fn $optional(data: impl IntoIterator<Item = Option<$ty>>) -> Self {
					let iter = data.into_iter();
					let mut container = NumberContainer::with_capacity(iter.size_hint().0);
					for value in iter {
						match value {
							Some(v) => container.push(v),
							None => container.push_undefined(),
						}
					}
					ColumnData::$variant(container)
				}
			)*
		}
	};
}

number_constructors! {
	Float4, f32, float4, float4_with_bitvec, float4_optional;
	Float8, f64, float8, float8_with_bitvec, float8_optional;
	Int1, i8, int1, int1_with_bitvec, int1_optional;
	Int2, i16, int2, int2_with_bitvec, int2_optional;
	Int4, i32, int4, int4_with_bitvec, int4_optional;
	Int8, i64, int8, int8_with_bitvec, int8_optional;
	Int16, i128, int16, int16_with_bitvec, int16_optional;
	Uint1, u8, uint1, uint1_with_bitvec, uint1_optional;
	Uint2, u16, uint2, uint2_with_bitvec, uint2_optional;
	Uint4, u32, uint4, uint4_with_bitvec, uint4_optional;
	Uint8, u64, uint8, uint8_with_bitvec, uint8_optional;
	Uint16, u128, uint16, uint16_with_bitvec, uint16_optional;
}

impl ColumnData {
	pub fn bool(data: impl IntoIterator<Item = bool>) -> Self {
		ColumnData::Bool(BoolContainer::from_vec(data.into_iter().collect()))
	}

	pub fn bool_optional(data: impl IntoIterator<Item = Option<bool>>) -> Self {
		let iter = data.into_iter();
		let mut container = BoolContainer::with_capacity(iter.size_hint().0);
		for value in iter {
			match value {
				Some(v) => container.push(v),
				None => container.push_undefined(),
			}
		}
		ColumnData::Bool(container)
	}

	pub fn utf8(data: impl IntoIterator<Item = impl Into<String>>) -> Self {
		ColumnData::Utf8(Utf8Container::from_vec(data.into_iter().map(Into::into).collect()))
	}

	pub fn utf8_with_bitvec(data: impl IntoIterator<Item = impl Into<String>>, bitvec: impl Into<BitVec>) -> Self {
		let data: Vec<String> = data.into_iter().map(Into::into).collect();
		let bitvec = bitvec.into();
		assert_eq!(data.len(), bitvec.len(), "data and bitvec length differ");
		ColumnData::Utf8(Utf8Container::new(data, bitvec))
	}

	pub fn utf8_optional<S: Into<String>>(data: impl IntoIterator<Item = Option<S>>) -> Self {
		let iter = data.into_iter();
		let mut container = Utf8Container::with_capacity(iter.size_hint().0);
		for value in iter {
			match value {
				Some(v) => container.push(v.into()),
				None => container.push_undefined(),
			}
		}
		ColumnData::Utf8(container)
	}

	pub fn undefined(len: usize) -> Self {
		ColumnData::Undefined(UndefinedContainer::new(len))
	}

	/// An empty chunk of the given type, ready to be pushed into.
	pub fn with_capacity(target: Type, capacity: usize) -> Self {
		match target {
			Type::Boolean => ColumnData::Bool(BoolContainer::with_capacity(capacity)),
			Type::Float4 => ColumnData::Float4(NumberContainer::with_capacity(capacity)),
			Type::Float8 => ColumnData::Float8(NumberContainer::with_capacity(capacity)),
			Type::Int1 => ColumnData::Int1(NumberContainer::with_capacity(capacity)),
			Type::Int2 => ColumnData::Int2(NumberContainer::with_capacity(capacity)),
			Type::Int4 => ColumnData::Int4(NumberContainer::with_capacity(capacity)),
			Type::Int8 => ColumnData::Int8(NumberContainer::with_capacity(capacity)),
			Type::Int16 => ColumnData::Int16(NumberContainer::with_capacity(capacity)),
			Type::Uint1 => ColumnData::Uint1(NumberContainer::with_capacity(capacity)),
			Type::Uint2 => ColumnData::Uint2(NumberContainer::with_capacity(capacity)),
			Type::Uint4 => ColumnData::Uint4(NumberContainer::with_capacity(capacity)),
			Type::Uint8 => ColumnData::Uint8(NumberContainer::with_capacity(capacity)),
			Type::Uint16 => ColumnData::Uint16(NumberContainer::with_capacity(capacity)),
			Type::Utf8 => ColumnData::Utf8(Utf8Container::with_capacity(capacity)),
			Type::Undefined => ColumnData::undefined(0),
		}
	}
}

impl ColumnData {
	pub fn get_type(&self) -> Type {
		match self {
			ColumnData::Bool(_) => Type::Boolean,
			ColumnData::Float4(_) => Type::Float4,
			ColumnData::Float8(_) => Type::Float8,
			ColumnData::Int1(_) => Type::Int1,
			ColumnData::Int2(_) => Type::Int2,
			ColumnData::Int4(_) => Type::Int4,
			ColumnData::Int8(_) => Type::Int8,
			ColumnData::Int16(_) => Type::Int16,
			ColumnData::Uint1(_) => Type::Uint1,
			ColumnData::Uint2(_) => Type::Uint2,
			ColumnData::Uint4(_) => Type::Uint4,
			ColumnData::Uint8(_) => Type::Uint8,
			ColumnData::Uint16(_) => Type::Uint16,
			ColumnData::Utf8(_) => Type::Utf8,
			ColumnData::Undefined(_) => Type::Undefined,
		}
	}

	pub fn len(&self) -> usize {
		with_container!(self, |c| c.len())
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	pub fn is_defined(&self, idx: usize) -> bool {
		with_container!(self, |c| c.is_defined(idx))
	}

	pub fn push_undefined(&mut self) {
		with_container!(self, |c| c.push_undefined())
	}

	/// Borrowed view of position `idx`, `None` when null or out of range.
	pub fn get_ref(&self, idx: usize) -> Option<ValueRef<'_>> {
		match self {
			ColumnData::Bool(c) => c.get(idx).map(ValueRef::Boolean),
			ColumnData::Float4(c) => c.get(idx).map(|v| ValueRef::Float4(*v)),
			ColumnData::Float8(c) => c.get(idx).map(|v| ValueRef::Float8(*v)),
			ColumnData::Int1(c) => c.get(idx).map(|v| ValueRef::Int1(*v)),
			ColumnData::Int2(c) => c.get(idx).map(|v| ValueRef::Int2(*v)),
			ColumnData::Int4(c) => c.get(idx).map(|v| ValueRef::Int4(*v)),
			ColumnData::Int8(c) => c.get(idx).map(|v| ValueRef::Int8(*v)),
			ColumnData::Int16(c) => c.get(idx).map(|v| ValueRef::Int16(*v)),
			ColumnData::Uint1(c) => c.get(idx).map(|v| ValueRef::Uint1(*v)),
			ColumnData::Uint2(c) => c.get(idx).map(|v| ValueRef::Uint2(*v)),
			ColumnData::Uint4(c) => c.get(idx).map(|v| ValueRef::Uint4(*v)),
			ColumnData::Uint8(c) => c.get(idx).map(|v| ValueRef::Uint8(*v)),
			ColumnData::Uint16(c) => c.get(idx).map(|v| ValueRef::Uint16(*v)),
			ColumnData::Utf8(c) => c.get(idx).map(ValueRef::Utf8),
			ColumnData::Undefined(_) => None,
		}
	}

	pub fn get_value(&self, idx: usize) -> Value {
		self.get_ref(idx).map(|v| v.to_value()).unwrap_or(Value::Undefined)
	}

	/// Appends `other`. Both chunks must have the same type, except that an
	/// `Undefined` chunk may be appended to anything and upgrades into the
	/// other side's type when it is the receiver.
	pub fn extend(&mut self, other: &ColumnData) {
		match (&mut *self, other) {
			(ColumnData::Bool(l), ColumnData::Bool(r)) => l.extend(r),
			(ColumnData::Float4(l), ColumnData::Float4(r)) => l.extend(r),
			(ColumnData::Float8(l), ColumnData::Float8(r)) => l.extend(r),
			(ColumnData::Int1(l), ColumnData::Int1(r)) => l.extend(r),
			(ColumnData::Int2(l), ColumnData::Int2(r)) => l.extend(r),
			(ColumnData::Int4(l), ColumnData::Int4(r)) => l.extend(r),
			(ColumnData::Int8(l), ColumnData::Int8(r)) => l.extend(r),
			(ColumnData::Int16(l), ColumnData::Int16(r)) => l.extend(r),
			(ColumnData::Uint1(l), ColumnData::Uint1(r)) => l.extend(r),
			(ColumnData::Uint2(l), ColumnData::Uint2(r)) => l.extend(r),
			(ColumnData::Uint4(l), ColumnData::Uint4(r)) => l.extend(r),
			(ColumnData::Uint8(l), ColumnData::Uint8(r)) => l.extend(r),
			(ColumnData::Uint16(l), ColumnData::Uint16(r)) => l.extend(r),
			(ColumnData::Utf8(l), ColumnData::Utf8(r)) => l.extend(r),
			(ColumnData::Undefined(l), ColumnData::Undefined(r)) => l.extend(r),
			(_, ColumnData::Undefined(r)) => {
				for _ in 0..r.len() {
					self.push_undefined();
				}
			}
			(ColumnData::Undefined(l), r) => {
				let mut upgraded = ColumnData::with_capacity(r.get_type(), l.len() + r.len());
				for _ in 0..l.len() {
					upgraded.push_undefined();
				}
				upgraded.extend(r);
				*self = upgraded;
			}
			(l, r) => {
				panic!("cannot extend ColumnData::{} with ColumnData::{}", l.get_type(), r.get_type())
			}
		}
	}
}
