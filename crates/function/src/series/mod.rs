// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Order-dependent functions that scan a whole column front to back.

mod discounted_cum_sum;

pub use discounted_cum_sum::{DiscountedCumSum, DiscountedCumSumKwargs, discounted_cum_sum};
