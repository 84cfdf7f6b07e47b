// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use colplug_column::{Column, ColumnBuilder, ColumnData, ColumnIter, Push};
use colplug_hash::xxh3_64;
use colplug_type::{Fragment, FunctionError, Result, Type, return_error};
use rayon::prelude::*;
use serde::Deserialize;
use tracing::{debug, instrument};

use super::canonical;
use crate::{
	ColumnFunction, ExecutionConfig, FunctionContext, FunctionDescriptor, FunctionKind,
	kwargs::{self, Kwargs},
};

const NAME: &str = "feature_hasher";

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct FeatureHasherKwargs {
	pub num_buckets: u64,
}

impl Kwargs for FeatureHasherKwargs {
	const REQUIRED: &'static [&'static str] = &["num_buckets"];
}

fn supported() -> Vec<Type> {
	let mut types = Type::numbers();
	types.push(Type::Utf8);
	types
}

/// Maps every present value to a bucket in `[0, num_buckets)` by hashing its
/// canonical bytes with xxHash3. Nulls stay null.
///
/// The mapping depends only on the value, so the output is the same whether
/// the column is processed in one piece, in several calls, or on the rayon
/// pool.
#[instrument(name = "function::feature_hasher::call", level = "debug", skip(input, config), fields(rows = input.len()))]
pub fn feature_hasher(input: &Column, num_buckets: u64, config: &ExecutionConfig) -> Result<Column> {
	if num_buckets == 0 {
		return_error!(FunctionError::InvalidParameter {
			function: Fragment::internal(NAME),
			parameter: "num_buckets".to_string(),
			reason: "must be at least 1".to_string(),
		});
	}

	let actual = input.get_type();
	if !actual.is_number() && !actual.is_utf8() && !actual.is_undefined() {
		return_error!(FunctionError::InvalidArgumentType {
			function: Fragment::internal(NAME),
			index: 0,
			expected: supported(),
			actual,
		});
	}

	let rows = input.len();
	let mut builder = ColumnBuilder::new(input.name().clone(), Type::Uint8, rows);

	if config.is_parallel(rows) {
		let chunk_len = config.effective_chunk_len();
		let ranges: Vec<(usize, usize)> =
			(0..rows).step_by(chunk_len).map(|offset| (offset, chunk_len.min(rows - offset))).collect();

		debug!(tasks = ranges.len(), chunk_len, "bucketing in parallel");

		let parts: Vec<ColumnData> = ranges
			.into_par_iter()
			.map(|(offset, len)| bucket(input.iter_range(offset, len), num_buckets))
			.collect();

		for part in &parts {
			builder.append(part);
		}
	} else {
		builder.append(&bucket(input.iter(), num_buckets));
	}

	Ok(builder.finish())
}

fn bucket(values: ColumnIter<'_>, num_buckets: u64) -> ColumnData {
	let mut result = ColumnData::with_capacity(Type::Uint8, values.len());
	let mut buf = Vec::with_capacity(32);

	for value in values {
		match value {
			Some(value) if canonical::encode(value, &mut buf) => {
				result.push(xxh3_64(&buf).bucket(num_buckets));
			}
			_ => result.push_undefined(),
		}
	}

	result
}

pub struct FeatureHasher {
	descriptor: FunctionDescriptor,
}

impl FeatureHasher {
	pub fn new() -> Self {
		Self {
			descriptor: FunctionDescriptor {
				name: NAME,
				kind: FunctionKind::Elementwise,
				arity: 1,
				output: Type::Uint8,
			},
		}
	}
}

impl Default for FeatureHasher {
	fn default() -> Self {
		Self::new()
	}
}

impl ColumnFunction for FeatureHasher {
	fn descriptor(&self) -> &FunctionDescriptor {
		&self.descriptor
	}

	fn call<'a>(&'a self, ctx: FunctionContext<'a>) -> Result<Column> {
		let [input] = ctx.inputs else {
			return_error!(FunctionError::ArityMismatch {
				function: Fragment::internal(NAME),
				expected: 1,
				actual: ctx.inputs.len(),
			});
		};
		let FeatureHasherKwargs {
			num_buckets,
		} = kwargs::parse(NAME, ctx.kwargs)?;
		feature_hasher(input, num_buckets, ctx.config)
	}
}
