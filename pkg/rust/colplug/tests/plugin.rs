// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use colplug::{Column, ColumnData, ExecutionConfig, Plugin, TracingBuilder, TracingError, Type, Value};
use serde_json::json;

fn floats(column: &Column) -> Vec<Option<f64>> {
	column.iter_f64().collect()
}

#[test]
fn test_gamma_zero_is_identity() {
	let plugin = Plugin::new();
	let input = Column::single("x", ColumnData::float8_optional([Some(3.0), None, Some(-1.0)]));
	let output = plugin.call("discounted_cum_sum", &[input.clone()], &json!({"gamma": 0.0})).unwrap();
	assert_eq!(floats(&output), floats(&input));
}

#[test]
fn test_gamma_one_is_cumulative_sum() {
	let plugin = Plugin::new();
	let input = Column::single("x", ColumnData::int4([1, 2, 3, 4]));
	let output = plugin.call("discounted_cum_sum", &[input], &json!({"gamma": 1})).unwrap();
	assert_eq!(floats(&output), vec![Some(1.0), Some(3.0), Some(6.0), Some(10.0)]);
}

#[test]
fn test_half_decay_with_null() {
	let plugin = Plugin::new();
	let input = Column::single("x", ColumnData::float8_optional([Some(1.0), None, Some(3.0)]));
	let output = plugin.call("discounted_cum_sum", &[input], &json!({"gamma": 0.5})).unwrap();
	assert_eq!(floats(&output), vec![Some(1.0), None, Some(3.5)]);
}

#[test]
fn test_missing_gamma() {
	let plugin = Plugin::new();
	let input = Column::single("x", ColumnData::float8([1.0]));
	let err = plugin.call("discounted_cum_sum", &[input], &json!({})).unwrap_err();
	assert_eq!(err.code(), "FUNCTION_011");
}

#[test]
fn test_feature_hasher_deterministic_across_plugins() {
	let input = Column::single("w", ColumnData::utf8(["red", "green", "blue"]));
	let kwargs = json!({"num_buckets": 100});

	let first = Plugin::new().call("feature_hasher", &[input.clone()], &kwargs).unwrap();
	let second = Plugin::with_config(ExecutionConfig::new().parallel_threshold(0).chunk_len(1))
		.call("feature_hasher", &[input], &kwargs)
		.unwrap();
	assert_eq!(first.to_values(), second.to_values());
}

#[test]
fn test_feature_hasher_zero_buckets() {
	let input = Column::single("w", ColumnData::utf8(["red"]));
	let err = Plugin::new().call("feature_hasher", &[input], &json!({"num_buckets": 0})).unwrap_err();
	assert_eq!(err.code(), "FUNCTION_010");
	assert!(err.to_string().contains("num_buckets"));
}

#[test]
fn test_feature_hasher_empty_input() {
	let input = Column::empty("w", Type::Utf8);
	let output = Plugin::new().call("feature_hasher", &[input], &json!({"num_buckets": 4})).unwrap();
	assert!(output.is_empty());
	assert_eq!(output.name().text(), "w");
}

#[test]
fn test_feature_hasher_null_passthrough() {
	let input = Column::single("w", ColumnData::undefined(3));
	let output = Plugin::new().call("feature_hasher", &[input], &json!({"num_buckets": 4})).unwrap();
	assert_eq!(output.to_values(), vec![Value::Undefined; 3]);
}

#[test]
fn test_tracing_installs_once() {
	TracingBuilder::new().with_filter("colplug=debug").try_init().unwrap();

	let again = TracingBuilder::new().try_init().unwrap_err();
	assert!(matches!(again, TracingError::Install(_)));

	// spans and events flow through the installed subscriber
	let input = Column::single("x", ColumnData::float8([1.0]));
	Plugin::new().call("discounted_cum_sum", &[input], &json!({"gamma": 2.0})).unwrap();
}
