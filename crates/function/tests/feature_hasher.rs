// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use colplug_column::{Column, ColumnData};
use colplug_function::{ExecutionConfig, Functions, feature_hasher};
use colplug_hash::xxh3_64;
use colplug_type::Value;
use serde_json::json;

fn ids(len: usize) -> Vec<Option<i64>> {
	(0..len)
		.map(|i| {
			let h = xxh3_64(&(i as u64).to_le_bytes()).0;
			if h % 9 == 0 { None } else { Some(h as i64) }
		})
		.collect()
}

#[test]
fn test_every_bucket_in_range() {
	let input = Column::single("id", ColumnData::int8_optional(ids(2_000)));
	for num_buckets in [1, 2, 7, 1024, u64::MAX] {
		let output = feature_hasher(&input, num_buckets, &ExecutionConfig::default()).unwrap();
		for value in output.to_values() {
			match value {
				Value::Uint8(b) => assert!(b < num_buckets),
				Value::Undefined => {}
				other => panic!("unexpected {other:?}"),
			}
		}
	}
}

#[test]
fn test_buckets_are_spread() {
	let input = Column::single("id", ColumnData::int8_optional(ids(2_000)));
	let output = feature_hasher(&input, 8, &ExecutionConfig::default()).unwrap();

	let mut seen = [false; 8];
	for value in output.to_values() {
		if let Value::Uint8(b) = value {
			seen[b as usize] = true;
		}
	}
	assert!(seen.iter().all(|s| *s));
}

#[test]
fn test_split_calls_match_whole() {
	let values = ids(1_000);
	let whole = Column::single("id", ColumnData::int8_optional(values.iter().copied()));
	let config = ExecutionConfig::default();

	let expected = feature_hasher(&whole, 31, &config).unwrap().to_values();

	let mut actual = Vec::new();
	for part in values.chunks(128) {
		let column = Column::single("id", ColumnData::int8_optional(part.iter().copied()));
		actual.extend(feature_hasher(&column, 31, &config).unwrap().to_values());
	}
	assert_eq!(actual, expected);
}

#[test]
fn test_parallel_across_chunks() {
	let values = ids(10_000);
	let chunks = values.chunks(999).map(|c| ColumnData::int8_optional(c.iter().copied())).collect();
	let input = Column::new("id", chunks).unwrap();

	let sequential = feature_hasher(&input, 1_000, &ExecutionConfig::sequential()).unwrap();
	let parallel =
		feature_hasher(&input, 1_000, &ExecutionConfig::new().parallel_threshold(1).chunk_len(512)).unwrap();
	assert_eq!(parallel, sequential);
}

#[test]
fn test_through_registry() {
	let input = Column::single("word", ColumnData::utf8_optional([Some("x"), None, Some("x")]));
	let output = Functions::default()
		.call("feature_hasher", &[input], &json!({"num_buckets": 16}), &ExecutionConfig::default())
		.unwrap();

	let values = output.to_values();
	assert_eq!(values[1], Value::Undefined);
	assert_eq!(values[0], values[2]);
}
