// Copyright 2025 the Wayfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors raised while loading a path configuration.

use std::path::PathBuf;

/// Why a path configuration could not be loaded.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read path configuration from {}", path.display())]
    Io {
        /// File that was being read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// The document is not valid path configuration JSON.
    #[error("invalid path configuration JSON")]
    Json(#[from] serde_json::Error),
    /// A rule pattern is not a valid regular expression.
    #[error("invalid pattern {pattern:?} in rule {rule}")]
    Pattern {
        /// Index of the rule in the `rules` array.
        rule: usize,
        /// The offending pattern.
        pattern: String,
        /// Compiler error.
        #[source]
        source: regex::Error,
    },
}
