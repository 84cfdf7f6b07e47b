// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Columnar I/O for colplug functions.
//!
//! A [`Column`] is a named sequence of [`ColumnData`] chunks that all carry
//! the same element type. Functions never look at chunk boundaries: they read
//! through [`ColumnIter`], which yields `Some(value)` or `None` (null) for
//! every logical position, and they write through [`ColumnBuilder`].

mod bitvec;
mod builder;
mod column;
pub mod container;
mod data;
mod iter;

pub use bitvec::{BitVec, BitVecInner, BitVecIter};
pub use builder::{ColumnBuilder, Push};
pub use column::Column;
pub use data::ColumnData;
pub use iter::{ColumnIter, F64Iter, ValueRef};
