// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{Debug, Display};

use num_traits::AsPrimitive;

use crate::value::GetType;

/// Primitive numbers a `NumberContainer` can store. Every number widens to
/// `f64` with `as` semantics.
pub trait IsNumber:
	Display + Copy + Debug + PartialEq + PartialOrd + GetType + Default + AsPrimitive<f64> + Send + Sync + 'static
{
}

macro_rules! impl_is_number {
	($($ty:ty),*) => {
		$(impl IsNumber for $ty {})*
	};
}

impl_is_number!(f32, f64, i8, i16, i32, i64, i128, u8, u16, u32, u64, u128);
