// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Storage-independent byte encoding of scalar values.
//!
//! Equal logical values encode to equal bytes whatever width they were stored
//! in: `Int1(7)`, `Uint8(7)` and `Int16(7)` all encode the same way, as do
//! `Float4(0.5)` and `Float8(0.5)`. Integers, floats and text carry distinct
//! tags so `7`, `7.0` and `"7"` never collide by construction.

use colplug_column::ValueRef;

const TAG_INTEGER: u8 = 0x01;
const TAG_FLOAT: u8 = 0x02;
const TAG_UTF8: u8 = 0x03;
/// Unsigned integers above `i128::MAX`, which have no `i128` form.
const TAG_WIDE_UNSIGNED: u8 = 0x04;

/// Clears `buf` and writes the canonical encoding of `value` into it.
///
/// Returns `false` without writing for booleans, which have no canonical form.
pub fn encode(value: ValueRef<'_>, buf: &mut Vec<u8>) -> bool {
	buf.clear();
	match value {
		ValueRef::Int1(v) => integer(v as i128, buf),
		ValueRef::Int2(v) => integer(v as i128, buf),
		ValueRef::Int4(v) => integer(v as i128, buf),
		ValueRef::Int8(v) => integer(v as i128, buf),
		ValueRef::Int16(v) => integer(v, buf),
		ValueRef::Uint1(v) => integer(v as i128, buf),
		ValueRef::Uint2(v) => integer(v as i128, buf),
		ValueRef::Uint4(v) => integer(v as i128, buf),
		ValueRef::Uint8(v) => integer(v as i128, buf),
		ValueRef::Uint16(v) => match i128::try_from(v) {
			Ok(v) => integer(v, buf),
			Err(_) => {
				buf.push(TAG_WIDE_UNSIGNED);
				buf.extend_from_slice(&v.to_le_bytes());
			}
		},
		ValueRef::Float4(v) => float(v as f64, buf),
		ValueRef::Float8(v) => float(v, buf),
		ValueRef::Utf8(v) => {
			buf.push(TAG_UTF8);
			buf.extend_from_slice(v.as_bytes());
		}
		ValueRef::Boolean(_) => return false,
	}
	true
}

fn integer(value: i128, buf: &mut Vec<u8>) {
	buf.push(TAG_INTEGER);
	buf.extend_from_slice(&value.to_le_bytes());
}

fn float(value: f64, buf: &mut Vec<u8>) {
	let value = if value.is_nan() {
		f64::NAN
	} else if value == 0.0 {
		// folds -0.0 into 0.0
		0.0
	} else {
		value
	};
	buf.push(TAG_FLOAT);
	buf.extend_from_slice(&value.to_bits().to_le_bytes());
}
