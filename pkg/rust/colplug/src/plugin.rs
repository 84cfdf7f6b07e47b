// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use colplug_column::Column;
use colplug_function::{ExecutionConfig, FunctionDescriptor, Functions};
use colplug_type::Result;
use tracing::debug;

/// Entry point for a host: the function table plus the execution settings
/// every call runs with.
///
/// Holds no per-call state; one instance can serve concurrent calls.
#[derive(Default)]
pub struct Plugin {
	functions: Functions,
	config: ExecutionConfig,
}

impl Plugin {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_config(config: ExecutionConfig) -> Self {
		debug!(?config, "plugin configured");
		Self {
			functions: Functions::default(),
			config,
		}
	}

	pub fn config(&self) -> &ExecutionConfig {
		&self.config
	}

	pub fn functions(&self) -> impl Iterator<Item = &FunctionDescriptor> {
		self.functions.descriptors()
	}

	/// Whether the host may split the input of `name` across calls. `None`
	/// for unknown names.
	pub fn is_elementwise(&self, name: &str) -> Option<bool> {
		self.functions.is_elementwise(name)
	}

	pub fn call(&self, name: &str, inputs: &[Column], kwargs: &serde_json::Value) -> Result<Column> {
		self.functions.call(name, inputs, kwargs, &self.config)
	}
}

#[cfg(test)]
mod tests {
	use colplug_column::{Column, ColumnData};
	use colplug_function::ExecutionConfig;
	use serde_json::json;

	use super::Plugin;

	#[test]
	fn test_functions() {
		let plugin = Plugin::new();
		let names: Vec<_> = plugin.functions().map(|d| d.name).collect();
		assert_eq!(names, vec!["discounted_cum_sum", "feature_hasher"]);
		assert_eq!(plugin.is_elementwise("feature_hasher"), Some(true));
	}

	#[test]
	fn test_with_config() {
		let config = ExecutionConfig::new().parallel_threshold(2).chunk_len(1);
		let plugin = Plugin::with_config(config.clone());
		assert_eq!(plugin.config(), &config);

		let input = Column::single("x", ColumnData::int4([1, 2, 3]));
		let output = plugin.call("feature_hasher", &[input], &json!({"num_buckets": 5})).unwrap();
		assert_eq!(output.len(), 3);
	}
}
