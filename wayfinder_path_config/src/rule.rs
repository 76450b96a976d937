// Copyright 2025 the Wayfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A single path rule: patterns plus the properties they grant.

use regex::Regex;
use serde_json::{Map, Value};
use wayfinder_hierarchy::{Properties, PropertyValue};

use crate::error::ConfigError;

/// Properties applied to every location whose path matches one of `patterns`.
#[derive(Clone, Debug)]
pub struct PathRule {
    patterns: Vec<Regex>,
    properties: Properties,
}

impl PathRule {
    /// Compile a rule. `index` is only used to label errors and logs.
    pub(crate) fn compile(
        index: usize,
        patterns: &[String],
        properties: &Map<String, Value>,
    ) -> Result<Self, ConfigError> {
        let patterns = patterns
            .iter()
            .map(|p| {
                Regex::new(p).map_err(|source| ConfigError::Pattern {
                    rule: index,
                    pattern: p.clone(),
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            patterns,
            properties: convert_properties(index, properties),
        })
    }

    /// True if any pattern matches `path`.
    pub fn matches(&self, path: &str) -> bool {
        self.patterns.iter().any(|re| re.is_match(path))
    }

    /// The properties this rule grants.
    pub fn properties(&self) -> &Properties {
        &self.properties
    }

    /// Pattern sources, in declaration order.
    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().map(Regex::as_str)
    }
}

fn convert_properties(rule: usize, raw: &Map<String, Value>) -> Properties {
    let mut out = Properties::new();
    for (key, value) in raw {
        let converted = match value {
            Value::Bool(b) => PropertyValue::Bool(*b),
            Value::String(s) => PropertyValue::String(s.clone()),
            Value::Number(n) => match n.as_f64() {
                Some(n) => PropertyValue::Number(n),
                None => {
                    tracing::warn!(rule, key = %key, "number out of range; property skipped");
                    continue;
                }
            },
            Value::Null | Value::Array(_) | Value::Object(_) => {
                tracing::warn!(rule, key = %key, "unsupported property value; property skipped");
                continue;
            }
        };
        out.insert(key.clone(), converted);
    }
    out
}
