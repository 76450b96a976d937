// Copyright 2025 the Wayfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Path lookup backed by Wayfinder Path Config.
//!
//! ## Feature
//!
//! Enable with `path_config`.
//!
//! ## Notes
//!
//! A [`PathConfiguration`] answers lookups directly: properties of every
//! matching rule, merged in file order. Hosts that reload their configuration
//! at runtime can swap it in with [`Navigator::set_paths`](crate::Navigator::set_paths).

use wayfinder_hierarchy::Properties;
use wayfinder_path_config::PathConfiguration;
use wayfinder_stack::Location;

use crate::paths::PathLookup;

impl PathLookup for PathConfiguration {
    fn properties_for(&self, location: &Location) -> Properties {
        Self::properties_for(self, location)
    }
}
