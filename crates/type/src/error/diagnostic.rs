// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use super::{Diagnostic, FunctionError, function::join_types};

pub trait IntoDiagnostic {
	fn into_diagnostic(self) -> Diagnostic;
}

impl IntoDiagnostic for Diagnostic {
	fn into_diagnostic(self) -> Diagnostic {
		self
	}
}

impl IntoDiagnostic for FunctionError {
	fn into_diagnostic(self) -> Diagnostic {
		let message = self.to_string();
		let fragment = self.fragment().clone();

		let (code, label, help, notes) = match &self {
			FunctionError::UnknownFunction {
				..
			} => (
				"FUNCTION_001",
				Some("unknown function".to_string()),
				Some("Check the function name and available functions".to_string()),
				vec![],
			),
			FunctionError::ArityMismatch {
				expected,
				..
			} => (
				"FUNCTION_002",
				Some("wrong number of arguments".to_string()),
				Some(format!("Provide exactly {} arguments to function {}", expected, fragment.text())),
				vec![],
			),
			FunctionError::InvalidArgumentType {
				expected,
				..
			} => (
				"FUNCTION_004",
				Some("invalid argument type".to_string()),
				Some(format!("Provide an argument of type: {}", join_types(expected))),
				vec![],
			),
			FunctionError::InvalidParameter {
				parameter,
				..
			} => (
				"FUNCTION_010",
				Some(format!("invalid value for '{}'", parameter)),
				None,
				vec!["parameters are validated before any row is processed".to_string()],
			),
			FunctionError::MissingParameter {
				parameter,
				..
			} => (
				"FUNCTION_011",
				Some("missing parameter".to_string()),
				Some(format!("Pass '{}' as a named parameter", parameter)),
				vec![],
			),
			FunctionError::ChunkTypeMismatch {
				..
			} => (
				"FUNCTION_012",
				Some("mixed chunk types".to_string()),
				Some("Cast every chunk of the column to one type".to_string()),
				vec![],
			),
		};

		Diagnostic {
			code: code.to_string(),
			message,
			fragment,
			label,
			help,
			notes,
		}
	}
}

#[cfg(test)]
mod tests {
	use crate::{Error, Fragment, FunctionError, IntoDiagnostic, Type};

	#[test]
	fn test_unknown_function() {
		let diagnostic = FunctionError::UnknownFunction {
			function: Fragment::internal("cum_sum"),
		}
		.into_diagnostic();

		assert_eq!(diagnostic.code, "FUNCTION_001");
		assert_eq!(diagnostic.message, "Unknown function: cum_sum");
		assert_eq!(diagnostic.fragment.text(), "cum_sum");
	}

	#[test]
	fn test_invalid_argument_type() {
		let diagnostic = FunctionError::InvalidArgumentType {
			function: Fragment::internal("feature_hasher"),
			index: 0,
			expected: vec![Type::Int4, Type::Utf8],
			actual: Type::Boolean,
		}
		.into_diagnostic();

		assert_eq!(diagnostic.code, "FUNCTION_004");
		assert_eq!(
			diagnostic.message,
			"Function feature_hasher argument 1 has invalid type: expected one of [INT4, UTF8], got BOOL"
		);
		assert_eq!(diagnostic.help.as_deref(), Some("Provide an argument of type: INT4, UTF8"));
	}

	#[test]
	fn test_invalid_parameter() {
		let err = Error::from(FunctionError::InvalidParameter {
			function: Fragment::internal("feature_hasher"),
			parameter: "num_buckets".to_string(),
			reason: "must be at least 1".to_string(),
		});

		assert_eq!(err.code(), "FUNCTION_010");
		assert!(err.to_string().contains("num_buckets"));
	}

	#[test]
	fn test_return_error_macro() {
		fn fails() -> crate::Result<()> {
			crate::return_error!(FunctionError::MissingParameter {
				function: Fragment::internal("discounted_cum_sum"),
				parameter: "gamma".to_string(),
			});
		}

		let err = fails().unwrap_err();
		assert_eq!(err.code(), "FUNCTION_011");
	}
}
