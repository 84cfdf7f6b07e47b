// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

/// Names the piece of a call an error or a column refers to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Fragment {
	/// No fragment information available
	#[default]
	None,

	/// Fragment supplied by the host, e.g. the name of an input column
	Host {
		text: String,
	},

	/// Fragment from internal code, e.g. a function name
	Internal {
		text: String,
	},
}

impl Fragment {
	pub fn host(text: impl Into<String>) -> Self {
		Fragment::Host {
			text: text.into(),
		}
	}

	pub fn internal(text: impl Into<String>) -> Self {
		Fragment::Internal {
			text: text.into(),
		}
	}

	pub fn text(&self) -> &str {
		match self {
			Fragment::None => "",
			Fragment::Host {
				text,
			}
			| Fragment::Internal {
				text,
			} => text,
		}
	}

	pub fn is_none(&self) -> bool {
		matches!(self, Fragment::None)
	}
}

impl Display for Fragment {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.write_str(self.text())
	}
}

impl From<&str> for Fragment {
	fn from(value: &str) -> Self {
		Fragment::host(value)
	}
}

impl From<String> for Fragment {
	fn from(value: String) -> Self {
		Fragment::host(value)
	}
}
