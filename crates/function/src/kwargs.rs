// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Named scalar parameters bound by the host at call time.

use colplug_type::{Fragment, FunctionError, Result, error, return_error};
use serde::de::DeserializeOwned;

pub trait Kwargs: DeserializeOwned {
	/// Parameters the host must always pass.
	const REQUIRED: &'static [&'static str];
}

/// Decodes `kwargs` (a JSON object, or null for none) into `K`.
pub fn parse<K: Kwargs>(function: &'static str, kwargs: &serde_json::Value) -> Result<K> {
	let empty = serde_json::Map::new();
	let object = match kwargs {
		serde_json::Value::Object(object) => object,
		serde_json::Value::Null => &empty,
		other => {
			return_error!(FunctionError::InvalidParameter {
				function: Fragment::internal(function),
				parameter: "kwargs".to_string(),
				reason: format!("expected an object of named parameters, got {}", other),
			});
		}
	};

	for parameter in K::REQUIRED {
		if object.get(*parameter).is_none_or(serde_json::Value::is_null) {
			return_error!(FunctionError::MissingParameter {
				function: Fragment::internal(function),
				parameter: parameter.to_string(),
			});
		}
	}

	serde_json::from_value(serde_json::Value::Object(object.clone())).map_err(|err| {
		error!(FunctionError::InvalidParameter {
			function: Fragment::internal(function),
			parameter: "kwargs".to_string(),
			reason: err.to_string(),
		})
	})
}
