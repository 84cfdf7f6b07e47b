// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::{fragment::Fragment, value::Type};

/// Everything a columnar function can reject before (or while) it runs.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FunctionError {
	#[error("Unknown function: {}", .function.text())]
	UnknownFunction {
		function: Fragment,
	},

	#[error("Function {} expects {expected} arguments, got {actual}", .function.text())]
	ArityMismatch {
		function: Fragment,
		expected: usize,
		actual: usize,
	},

	#[error("Function {} argument {} has invalid type: expected one of [{}], got {actual}", .function.text(), .index + 1, join_types(.expected))]
	InvalidArgumentType {
		function: Fragment,
		index: usize,
		expected: Vec<Type>,
		actual: Type,
	},

	#[error("Function {} parameter '{parameter}' is invalid: {reason}", .function.text())]
	InvalidParameter {
		function: Fragment,
		parameter: String,
		reason: String,
	},

	#[error("Function {} requires parameter '{parameter}'", .function.text())]
	MissingParameter {
		function: Fragment,
		parameter: String,
	},

	#[error("Column {} mixes chunk types: expected {expected}, got {actual}", .column.text())]
	ChunkTypeMismatch {
		column: Fragment,
		expected: Type,
		actual: Type,
	},
}

impl FunctionError {
	pub fn fragment(&self) -> &Fragment {
		match self {
			FunctionError::UnknownFunction {
				function,
			}
			| FunctionError::ArityMismatch {
				function,
				..
			}
			| FunctionError::InvalidArgumentType {
				function,
				..
			}
			| FunctionError::InvalidParameter {
				function,
				..
			}
			| FunctionError::MissingParameter {
				function,
				..
			} => function,
			FunctionError::ChunkTypeMismatch {
				column,
				..
			} => column,
		}
	}
}

pub(crate) fn join_types(types: &[Type]) -> String {
	types.iter().map(|t| t.to_string()).collect::<Vec<_>>().join(", ")
}
