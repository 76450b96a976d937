// Copyright 2025 the Wayfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Destination locations.

use alloc::string::String;
use core::fmt;

use url::Url;

/// Base that relative locations are resolved against to find their path.
const RELATIVE_BASE: &str = "https://localhost/";

/// A URL-like destination.
///
/// Locations are compared as exact strings. No normalization happens here;
/// callers that want `https://a/x` and `https://a/x/` to be the same page
/// should normalize before constructing the location.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Location {
    raw: String,
    path: String,
}

impl Location {
    /// Create a location from anything string-like.
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let path = parse_path(&raw);
        Self { raw, path }
    }

    /// The location as it was given.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The URL path: scheme and authority stripped, query and fragment removed.
    ///
    /// Relative locations are resolved against a placeholder origin, so they
    /// get the same treatment. The path is percent-encoded and has dot
    /// segments resolved, as URL parsing leaves it.
    ///
    /// ```
    /// use wayfinder_stack::Location;
    /// assert_eq!(Location::from("https://example.com/a/b?x=1#top").path(), "/a/b");
    /// assert_eq!(Location::from("https://example.com").path(), "/");
    /// assert_eq!(Location::from("/relative/only").path(), "/relative/only");
    /// ```
    pub fn path(&self) -> &str {
        &self.path
    }
}

fn parse_path(raw: &str) -> String {
    let parsed = Url::parse(raw).or_else(|_| Url::parse(RELATIVE_BASE)?.join(raw));
    match parsed {
        Ok(url) => String::from(url.path()),
        // Not even a relative reference; keep what precedes any query or fragment.
        Err(_) => String::from(raw.split(['?', '#']).next().unwrap_or_default()),
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl AsRef<str> for Location {
    fn as_ref(&self) -> &str {
        &self.raw
    }
}

impl From<&str> for Location {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for Location {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

impl From<&Location> for Location {
    fn from(location: &Location) -> Self {
        location.clone()
    }
}
