// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

pub mod error;
pub mod fragment;
pub mod value;

pub use error::{Diagnostic, Error, FunctionError, IntoDiagnostic};
pub use fragment::Fragment;
pub use value::{GetType, Type, Value};

pub type Result<T> = std::result::Result<T, Error>;
