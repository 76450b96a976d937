// Copyright 2025 the Wayfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Path property lookup.

use wayfinder_hierarchy::Properties;
use wayfinder_stack::Location;

/// Supplies routing properties for a destination.
///
/// Implemented for `wayfinder_path_config::PathConfiguration` when the
/// `path_config` feature is enabled.
pub trait PathLookup {
    /// Properties for `location`. Empty properties mean default routing.
    fn properties_for(&self, location: &Location) -> Properties;
}

/// A lookup with no rules: everything routes with default properties.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoPaths;

impl PathLookup for NoPaths {
    #[inline]
    fn properties_for(&self, _location: &Location) -> Properties {
        Properties::new()
    }
}

impl<P: PathLookup> PathLookup for Option<P> {
    fn properties_for(&self, location: &Location) -> Properties {
        match self {
            Some(p) => p.properties_for(location),
            None => Properties::new(),
        }
    }
}

impl<P: PathLookup + ?Sized> PathLookup for &P {
    fn properties_for(&self, location: &Location) -> Properties {
        (**self).properties_for(location)
    }
}
