// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::fragment::Fragment;

mod diagnostic;
mod function;

pub use diagnostic::IntoDiagnostic;
pub use function::FunctionError;

/// A rendered-ready description of what went wrong and where.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
	pub code: String,
	pub message: String,
	pub fragment: Fragment,
	pub label: Option<String>,
	pub help: Option<String>,
	pub notes: Vec<String>,
}

impl Display for Diagnostic {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		write!(f, "[{}] {}", self.code, self.message)?;
		if !self.fragment.is_none() {
			write!(f, "\n  --> {}", self.fragment.text())?;
		}
		if let Some(label) = &self.label {
			write!(f, "\n  = {}", label)?;
		}
		if let Some(help) = &self.help {
			write!(f, "\n  help: {}", help)?;
		}
		for note in &self.notes {
			write!(f, "\n  note: {}", note)?;
		}
		Ok(())
	}
}

#[derive(Debug, Clone, PartialEq)]
pub struct Error(pub Diagnostic);

impl Error {
	pub fn diagnostic(self) -> Diagnostic {
		self.0
	}

	pub fn code(&self) -> &str {
		&self.0.code
	}
}

impl Display for Error {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		Display::fmt(&self.0, f)
	}
}

impl std::error::Error for Error {}

impl From<Diagnostic> for Error {
	fn from(diagnostic: Diagnostic) -> Self {
		Error(diagnostic)
	}
}

impl From<FunctionError> for Error {
	fn from(err: FunctionError) -> Self {
		Error(err.into_diagnostic())
	}
}

/// Returns early with the given diagnostic-convertible value as an [`Error`].
#[macro_export]
macro_rules! return_error {
	($err:expr) => {
		return Err($crate::error::Error::from($err))
	};
}

/// Builds an [`Error`] from a diagnostic-convertible value.
#[macro_export]
macro_rules! error {
	($err:expr) => {
		$crate::error::Error::from($err)
	};
}
