// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

pub mod canonical;
mod feature_hasher;

pub use feature_hasher::{FeatureHasher, FeatureHasherKwargs, feature_hasher};
