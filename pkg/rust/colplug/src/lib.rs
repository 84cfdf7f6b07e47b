// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Columnar functions for dataframe hosts.
//!
//! Two functions are exported: `discounted_cum_sum`, a decayed running total
//! that must see the whole column in order, and `feature_hasher`, which maps
//! each value into a fixed number of buckets and may be split freely.
//!
//! ```
//! use colplug::{Column, ColumnData, Plugin};
//! use serde_json::json;
//!
//! let plugin = Plugin::new();
//! let rewards = Column::single("reward", ColumnData::float8([1.0, 2.0, 3.0]));
//! let returns = plugin.call("discounted_cum_sum", &[rewards], &json!({"gamma": 0.5})).unwrap();
//! assert_eq!(returns.iter_f64().collect::<Vec<_>>(), vec![Some(1.0), Some(2.5), Some(4.25)]);
//! ```

mod logging;
mod plugin;

pub use colplug_column as column;
pub use colplug_column::{Column, ColumnBuilder, ColumnData, ColumnIter, ValueRef};
pub use colplug_function as function;
pub use colplug_function::{
	ColumnFunction, ExecutionConfig, FunctionDescriptor, FunctionKind, Functions, discounted_cum_sum,
	feature_hasher,
};
pub use colplug_hash as hash;
pub use colplug_type as r#type;
pub use colplug_type::{Error, Fragment, Result, Type, Value};
pub use logging::{TracingBuilder, TracingError};
pub use plugin::Plugin;
