// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::value::Type;

pub trait GetType {
	fn get_type() -> Type;
}

impl GetType for bool {
	fn get_type() -> Type {
		Type::Boolean
	}
}

impl GetType for f32 {
	fn get_type() -> Type {
		Type::Float4
	}
}

impl GetType for f64 {
	fn get_type() -> Type {
		Type::Float8
	}
}

impl GetType for i8 {
	fn get_type() -> Type {
		Type::Int1
	}
}

impl GetType for i16 {
	fn get_type() -> Type {
		Type::Int2
	}
}

impl GetType for i32 {
	fn get_type() -> Type {
		Type::Int4
	}
}

impl GetType for i64 {
	fn get_type() -> Type {
		Type::Int8
	}
}

impl GetType for i128 {
	fn get_type() -> Type {
		Type::Int16
	}
}

impl GetType for u8 {
	fn get_type() -> Type {
		Type::Uint1
	}
}

impl GetType for u16 {
	fn get_type() -> Type {
		Type::Uint2
	}
}

impl GetType for u32 {
	fn get_type() -> Type {
		Type::Uint4
	}
}

impl GetType for u64 {
	fn get_type() -> Type {
		Type::Uint8
	}
}

impl GetType for u128 {
	fn get_type() -> Type {
		Type::Uint16
	}
}

impl GetType for String {
	fn get_type() -> Type {
		Type::Utf8
	}
}
