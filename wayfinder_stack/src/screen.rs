// Copyright 2025 the Wayfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Screen identity.
//!
//! ## Same page
//!
//! Routing decides between replace, push, and pop-back by asking whether the
//! incoming destination is the *same page* as a screen already on a stack.
//! Two screens are the same page iff their locations are equal.
//! Presentation metadata (context, presentation mode, action) plays no part.
//!
//! Screens without a location (for example a native settings screen supplied
//! by the host) never match, so visiting them always pushes.

use crate::location::Location;

/// Something that can sit on a [`NavigationStack`](crate::NavigationStack).
pub trait Screen {
    /// The location this screen shows, if it is web-backed.
    fn location(&self) -> Option<&Location>;

    /// True if this screen shows `location`.
    fn is_same_page(&self, location: &Location) -> bool {
        self.location() == Some(location)
    }
}

/// The default web-backed screen: a location and nothing else.
///
/// Hosts with richer screen types implement [`Screen`] directly.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct WebScreen {
    location: Location,
}

impl WebScreen {
    /// Create a screen for `location`.
    pub fn new(location: impl Into<Location>) -> Self {
        Self {
            location: location.into(),
        }
    }
}

impl Screen for WebScreen {
    fn location(&self) -> Option<&Location> {
        Some(&self.location)
    }
}

impl From<Location> for WebScreen {
    fn from(location: Location) -> Self {
        Self { location }
    }
}

impl<S: Screen + ?Sized> Screen for alloc::boxed::Box<S> {
    fn location(&self) -> Option<&Location> {
        (**self).location()
    }
}
