// Copyright 2025 the Wayfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Routing properties attached to a proposal.
//!
//! Properties usually come from a path configuration rule, so they are loosely
//! typed. Only two keys matter to routing, `"context"` and `"presentation"`;
//! everything else is carried along for the host.

use alloc::collections::BTreeMap;
use alloc::string::String;

use crate::proposal::{Context, Presentation};

/// Key read by [`Properties::context`].
pub const CONTEXT_KEY: &str = "context";
/// Key read by [`Properties::presentation`].
pub const PRESENTATION_KEY: &str = "presentation";

/// A single property value.
#[derive(Clone, Debug, PartialEq)]
pub enum PropertyValue {
    /// A boolean flag.
    Bool(bool),
    /// Any JSON-style number.
    Number(f64),
    /// A string.
    String(String),
}

impl PropertyValue {
    /// The string payload, if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// The boolean payload, if this is a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// The numeric payload, if this is a number.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }
}

impl From<bool> for PropertyValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<f64> for PropertyValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<&str> for PropertyValue {
    fn from(s: &str) -> Self {
        Self::String(s.into())
    }
}

impl From<String> for PropertyValue {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

/// String-keyed routing properties.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Properties(BTreeMap<String, PropertyValue>);

impl Properties {
    /// Empty properties: default context and default presentation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key`, returning the previous value.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<PropertyValue>,
    ) -> Option<PropertyValue> {
        self.0.insert(key.into(), value.into())
    }

    /// Builder form of [`Properties::insert`].
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Look up `key`.
    pub fn get(&self, key: &str) -> Option<&PropertyValue> {
        self.0.get(key)
    }

    /// Look up `key` as a string.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(PropertyValue::as_str)
    }

    /// Overlay `other` on top of `self`; keys in `other` win.
    pub fn merge(&mut self, other: &Self) {
        for (k, v) in &other.0 {
            self.0.insert(k.clone(), v.clone());
        }
    }

    /// Number of keys.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if there are no keys.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate keys and values in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropertyValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// The routing context. Absent or unrecognized values mean [`Context::Default`].
    pub fn context(&self) -> Context {
        match self.get(CONTEXT_KEY) {
            None => Context::Default,
            Some(v) => v.as_str().and_then(Context::parse).unwrap_or_else(|| {
                tracing::debug!(value = ?v, "unrecognized context, using default");
                Context::Default
            }),
        }
    }

    /// The presentation mode. Absent or unrecognized values mean [`Presentation::Default`].
    pub fn presentation(&self) -> Presentation {
        match self.get(PRESENTATION_KEY) {
            None => Presentation::Default,
            Some(v) => v
                .as_str()
                .and_then(Presentation::parse)
                .unwrap_or_else(|| {
                    tracing::debug!(value = ?v, "unrecognized presentation, using default");
                    Presentation::Default
                }),
        }
    }
}

impl<K: Into<String>, V: Into<PropertyValue>> FromIterator<(K, V)> for Properties {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl<K: Into<String>, V: Into<PropertyValue>> Extend<(K, V)> for Properties {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_default() {
        let p = Properties::new();
        assert_eq!(p.context(), Context::Default);
        assert_eq!(p.presentation(), Presentation::Default);
    }

    #[test]
    fn malformed_values_default() {
        let p = Properties::new()
            .with(CONTEXT_KEY, true)
            .with(PRESENTATION_KEY, "sideways");
        assert_eq!(p.context(), Context::Default);
        assert_eq!(p.presentation(), Presentation::Default);
    }

    #[test]
    fn recognized_values_parse() {
        let p: Properties = [(CONTEXT_KEY, "modal"), (PRESENTATION_KEY, "clear_all")]
            .into_iter()
            .collect();
        assert_eq!(p.context(), Context::Modal);
        assert_eq!(p.presentation(), Presentation::ClearAll);
    }

    #[test]
    fn merge_overrides_existing_keys() {
        let mut base = Properties::new()
            .with(CONTEXT_KEY, "modal")
            .with("pull_to_refresh_enabled", true);
        base.merge(&Properties::new().with(CONTEXT_KEY, "default"));
        assert_eq!(base.get_str(CONTEXT_KEY), Some("default"));
        assert_eq!(
            base.get("pull_to_refresh_enabled").and_then(PropertyValue::as_bool),
            Some(true)
        );
        assert_eq!(base.len(), 2);
    }
}
