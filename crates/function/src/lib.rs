// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use colplug_column::Column;
use colplug_type::{Result, Type};

pub mod config;
pub mod hash;
pub mod kwargs;
pub mod registry;
pub mod series;

pub use config::ExecutionConfig;
pub use hash::{FeatureHasher, FeatureHasherKwargs, feature_hasher};
pub use registry::Functions;
pub use series::{DiscountedCumSum, DiscountedCumSumKwargs, discounted_cum_sum};

/// How the host may schedule a function over a column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FunctionKind {
	/// Row `i` of the output depends only on row `i` of the input. The host
	/// may split, reorder and parallelize calls freely.
	Elementwise,
	/// Output depends on every earlier row. The host must pass the whole
	/// column, in order, in one call.
	Scan,
}

impl FunctionKind {
	pub fn is_elementwise(&self) -> bool {
		matches!(self, FunctionKind::Elementwise)
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct FunctionDescriptor {
	pub name: &'static str,
	pub kind: FunctionKind,
	pub arity: usize,
	pub output: Type,
}

pub struct FunctionContext<'a> {
	pub inputs: &'a [Column],
	pub kwargs: &'a serde_json::Value,
	pub config: &'a ExecutionConfig,
}

pub trait ColumnFunction: Send + Sync {
	fn descriptor(&self) -> &FunctionDescriptor;

	fn call<'a>(&'a self, ctx: FunctionContext<'a>) -> Result<Column>;
}
