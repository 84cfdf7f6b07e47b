// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use colplug_column::{Column, ColumnBuilder};
use colplug_type::{Fragment, FunctionError, Result, Type, return_error};
use serde::Deserialize;
use tracing::{instrument, trace, warn};

use crate::{
	ColumnFunction, FunctionContext, FunctionDescriptor, FunctionKind,
	kwargs::{self, Kwargs},
};

const NAME: &str = "discounted_cum_sum";

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct DiscountedCumSumKwargs {
	pub gamma: f64,
}

impl Kwargs for DiscountedCumSumKwargs {
	const REQUIRED: &'static [&'static str] = &["gamma"];
}

/// Decayed running total: `y[i] = x[i] + gamma * y[prev]`.
///
/// `prev` is the last non-null row before `i`; the accumulator starts at 0.
/// A null row yields null and leaves the accumulator untouched, so the decay
/// chain continues across it as if the row were absent. Any integer or float
/// input is widened to `f64`; the output is always `Float8` and keeps the
/// input's name.
///
/// `gamma` is not range checked. Values of 1 or above make the sum grow
/// without bound, negative values make it alternate; both follow plain IEEE
/// arithmetic, including overflow to infinity.
#[instrument(name = "function::discounted_cum_sum::call", level = "debug", skip(input), fields(rows = input.len()))]
pub fn discounted_cum_sum(input: &Column, gamma: f64) -> Result<Column> {
	let actual = input.get_type();
	if !actual.is_number() && !actual.is_undefined() {
		return_error!(FunctionError::InvalidArgumentType {
			function: Fragment::internal(NAME),
			index: 0,
			expected: Type::numbers(),
			actual,
		});
	}

	if !(0.0..1.0).contains(&gamma) {
		warn!(gamma, "gamma outside [0, 1); the discounted sum will not converge");
	}

	trace!(chunks = input.chunks().len(), "scanning");

	let mut builder = ColumnBuilder::new(input.name().clone(), Type::Float8, input.len());
	let mut acc = 0.0f64;

	for value in input.iter_f64() {
		match value {
			Some(x) => {
				acc = x + gamma * acc;
				builder.push(acc);
			}
			None => builder.push_undefined(),
		}
	}

	Ok(builder.finish())
}

pub struct DiscountedCumSum {
	descriptor: FunctionDescriptor,
}

impl DiscountedCumSum {
	pub fn new() -> Self {
		Self {
			descriptor: FunctionDescriptor {
				name: NAME,
				kind: FunctionKind::Scan,
				arity: 1,
				output: Type::Float8,
			},
		}
	}
}

impl Default for DiscountedCumSum {
	fn default() -> Self {
		Self::new()
	}
}

impl ColumnFunction for DiscountedCumSum {
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
		let DiscountedCumSumKwargs {
			gamma,
		} = kwargs::parse(NAME, ctx.kwargs)?;
		discounted_cum_sum(input, gamma)
	}
}
