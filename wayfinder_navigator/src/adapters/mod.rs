// Copyright 2025 the Wayfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adapters to integrate with other Wayfinder crates.
//!
//! Enabled via feature flags to keep the core small and `no_std` by default.

#[cfg(feature = "path_config")]
pub mod path_config;
