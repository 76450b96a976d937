// Copyright 2025 the Wayfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The path configuration document and its lookup.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_json::{Map, Value};
use wayfinder_hierarchy::Properties;
use wayfinder_stack::Location;

use crate::error::ConfigError;
use crate::rule::PathRule;

#[derive(Deserialize)]
struct RawConfiguration {
    #[serde(default)]
    settings: Map<String, Value>,
    #[serde(default)]
    rules: Vec<RawRule>,
}

#[derive(Deserialize)]
struct RawRule {
    patterns: Vec<String>,
    #[serde(default)]
    properties: Map<String, Value>,
}

/// Where to load a configuration document from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Source {
    /// A JSON file on disk, typically bundled with the app.
    File(PathBuf),
    /// An in-memory JSON document.
    Json(String),
}

/// Ordered path rules plus free-form app settings.
#[derive(Clone, Debug, Default)]
pub struct PathConfiguration {
    settings: Map<String, Value>,
    rules: Vec<PathRule>,
}

impl PathConfiguration {
    /// An empty configuration: every location gets default properties.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let raw: RawConfiguration = serde_json::from_str(json)?;
        let rules = raw
            .rules
            .iter()
            .enumerate()
            .map(|(i, r)| PathRule::compile(i, &r.patterns, &r.properties))
            .collect::<Result<Vec<_>, _>>()?;
        tracing::debug!(rules = rules.len(), "path configuration parsed");
        Ok(Self {
            settings: raw.settings,
            rules,
        })
    }

    /// Read and parse a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Load `sources` in order. Each source that loads replaces the previous one.
    ///
    /// Sources that fail are logged and skipped. An error is returned only when
    /// sources were given and none of them loaded; it is the last failure.
    pub fn load(sources: &[Source]) -> Result<Self, ConfigError> {
        let mut loaded = None;
        let mut last_err = None;
        for source in sources {
            let result = match source {
                Source::File(path) => Self::from_file(path),
                Source::Json(json) => Self::from_json(json),
            };
            match result {
                Ok(config) => loaded = Some(config),
                Err(err) => {
                    tracing::warn!(?source, error = %err, "path configuration source skipped");
                    last_err = Some(err);
                }
            }
        }
        match (loaded, last_err) {
            (Some(config), _) => Ok(config),
            (None, Some(err)) => Err(err),
            (None, None) => Ok(Self::new()),
        }
    }

    /// Properties for `location`.
    ///
    /// Every rule with a pattern matching the location's path contributes its
    /// properties, in rule order; later rules override earlier keys.
    pub fn properties_for(&self, location: &Location) -> Properties {
        let path = location.path();
        let mut out = Properties::new();
        for rule in self.rules.iter().filter(|r| r.matches(path)) {
            out.merge(rule.properties());
        }
        tracing::trace!(path, properties = out.len(), "path properties resolved");
        out
    }

    /// Free-form settings from the document's `settings` object.
    pub fn settings(&self) -> &Map<String, Value> {
        &self.settings
    }

    /// The compiled rules, in document order.
    pub fn rules(&self) -> &[PathRule] {
        &self.rules
    }
}
