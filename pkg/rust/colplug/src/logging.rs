// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info";

#[derive(Debug, thiserror::Error)]
pub enum TracingError {
	#[error("invalid tracing filter `{filter}`: {reason}")]
	InvalidFilter {
		filter: String,
		reason: String,
	},
	#[error("failed to install tracing subscriber: {0}")]
	Install(String),
}

/// Installs a global `tracing` subscriber for hosts that don't bring their
/// own.
///
/// Without an explicit filter the `RUST_LOG` environment variable is used,
/// falling back to `info`.
#[derive(Debug, Clone, Default)]
pub struct TracingBuilder {
	filter: Option<String>,
	json: bool,
	with_target: bool,
}

impl TracingBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	/// Directive string in `EnvFilter` syntax, e.g. `colplug_function=debug`.
	pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
		self.filter = Some(filter.into());
		self
	}

	pub fn with_json(mut self, json: bool) -> Self {
		self.json = json;
		self
	}

	pub fn with_target(mut self, with_target: bool) -> Self {
		self.with_target = with_target;
		self
	}

	pub(crate) fn env_filter(&self) -> Result<EnvFilter, TracingError> {
		match &self.filter {
			Some(filter) => EnvFilter::try_new(filter).map_err(|err| TracingError::InvalidFilter {
				filter: filter.clone(),
				reason: err.to_string(),
			}),
			None => Ok(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))),
		}
	}

	/// Fails if the filter does not parse or a global subscriber is already
	/// installed.
	pub fn try_init(self) -> Result<(), TracingError> {
		let filter = self.env_filter()?;
		let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(self.with_target);

		let result = if self.json {
			builder.json().try_init()
		} else {
			builder.try_init()
		};

		result.map_err(|err| TracingError::Install(err.to_string()))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_invalid_filter() {
		let err = TracingBuilder::new().with_filter("colplug=verbose").env_filter().unwrap_err();
		assert!(matches!(err, TracingError::InvalidFilter { .. }));
	}

	#[test]
	fn test_valid_filter() {
		assert!(TracingBuilder::new().with_filter("colplug_function=debug,warn").env_filter().is_ok());
	}
}
