// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use colplug_column::Column;
use colplug_type::{Fragment, FunctionError, Result, return_error};
use tracing::{debug, instrument};

use crate::{
	ColumnFunction, DiscountedCumSum, ExecutionConfig, FeatureHasher, FunctionContext, FunctionDescriptor,
};

/// The fixed set of functions this crate exports, looked up by name.
pub struct Functions {
	functions: Vec<Box<dyn ColumnFunction>>,
}

impl Default for Functions {
	fn default() -> Self {
		Self {
			functions: vec![Box::new(DiscountedCumSum::new()), Box::new(FeatureHasher::new())],
		}
	}
}

impl Functions {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn get(&self, name: &str) -> Option<&dyn ColumnFunction> {
		self.functions.iter().find(|f| f.descriptor().name == name).map(|f| f.as_ref())
	}

	pub fn descriptors(&self) -> impl Iterator<Item = &FunctionDescriptor> {
		self.functions.iter().map(|f| f.descriptor())
	}

	/// `None` for unknown names.
	pub fn is_elementwise(&self, name: &str) -> Option<bool> {
		self.get(name).map(|f| f.descriptor().kind.is_elementwise())
	}

	#[instrument(name = "function::registry::call", level = "debug", skip(self, inputs, kwargs, config))]
	pub fn call(
		&self,
		name: &str,
		inputs: &[Column],
		kwargs: &serde_json::Value,
		config: &ExecutionConfig,
	) -> Result<Column> {
		let Some(function) = self.get(name) else {
			return_error!(FunctionError::UnknownFunction {
				function: Fragment::host(name),
			});
		};

		let descriptor = function.descriptor();
		if inputs.len() != descriptor.arity {
			return_error!(FunctionError::ArityMismatch {
				function: Fragment::host(name),
				expected: descriptor.arity,
				actual: inputs.len(),
			});
		}

		debug!(kind = ?descriptor.kind, "dispatching");

		function.call(FunctionContext {
			inputs,
			kwargs,
			config,
		})
	}
}

#[cfg(test)]
mod tests {
	use colplug_column::{Column, ColumnData};
	use colplug_type::{Type, Value};
	use serde_json::json;

	use super::Functions;
	use crate::{ColumnFunction, ExecutionConfig, FunctionContext, FunctionKind};

	#[test]
	fn test_descriptors() {
		let functions = Functions::default();
		let names: Vec<_> = functions.descriptors().map(|d| (d.name, d.kind, d.output)).collect();
		assert_eq!(
			names,
			vec![
				("discounted_cum_sum", FunctionKind::Scan, Type::Float8),
				("feature_hasher", FunctionKind::Elementwise, Type::Uint8),
			]
		);
	}

	#[test]
	fn test_is_elementwise() {
		let functions = Functions::default();
		assert_eq!(functions.is_elementwise("discounted_cum_sum"), Some(false));
		assert_eq!(functions.is_elementwise("feature_hasher"), Some(true));
		assert_eq!(functions.is_elementwise("cum_sum"), None);
	}

	#[test]
	fn test_call_discounted_cum_sum() {
		let input = Column::single("x", ColumnData::float8([1.0, 2.0, 3.0]));
		let result = Functions::default()
			.call("discounted_cum_sum", &[input], &json!({"gamma": 0.5}), &ExecutionConfig::default())
			.unwrap();
		assert_eq!(result.to_values(), vec![Value::Float8(1.0), Value::Float8(2.5), Value::Float8(4.25)]);
	}

	#[test]
	fn test_call_feature_hasher() {
		let input = Column::single("x", ColumnData::utf8(["a", "b"]));
		let result = Functions::default()
			.call("feature_hasher", &[input], &json!({"num_buckets": 3}), &ExecutionConfig::default())
			.unwrap();
		assert_eq!(result.len(), 2);
		assert_eq!(result.get_type(), Type::Uint8);
	}

	#[test]
	fn test_unknown_function() {
		let err = Functions::default().call("nope", &[], &json!({}), &ExecutionConfig::default()).unwrap_err();
		assert_eq!(err.code(), "FUNCTION_001");
	}

	#[test]
	fn test_arity_mismatch() {
		let input = Column::single("x", ColumnData::float8([1.0]));
		let err = Functions::default()
			.call("discounted_cum_sum", &[input.clone(), input], &json!({"gamma": 0.5}), &ExecutionConfig::default())
			.unwrap_err();
		assert_eq!(err.code(), "FUNCTION_002");
	}

	#[test]
	fn test_direct_call_checks_arity() {
		let functions = Functions::default();
		let function = functions.get("feature_hasher").unwrap();
		let err = function
			.call(FunctionContext {
				inputs: &[],
				kwargs: &json!({"num_buckets": 2}),
				config: &ExecutionConfig::default(),
			})
			.unwrap_err();
		assert_eq!(err.code(), "FUNCTION_002");
	}

	#[test]
	fn test_missing_kwarg() {
		let input = Column::single("x", ColumnData::float8([1.0]));
		let err =
			Functions::default().call("feature_hasher", &[input], &json!({}), &ExecutionConfig::default()).unwrap_err();
		assert_eq!(err.code(), "FUNCTION_011");
	}

	#[test]
	fn test_invalid_kwarg() {
		let input = Column::single("x", ColumnData::float8([1.0]));
		let err = Functions::default()
			.call("feature_hasher", &[input], &json!({"num_buckets": -3}), &ExecutionConfig::default())
			.unwrap_err();
		assert_eq!(err.code(), "FUNCTION_010");
	}
}
