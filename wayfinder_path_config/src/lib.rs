// Copyright 2025 the Wayfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=wayfinder_path_config --heading-base-level=0

//! Wayfinder Path Config: server-driven routing properties.
//!
//! A path configuration is a JSON document shipped with the app (and usually
//! refreshed from the server by the host) that tells the navigator how to
//! present each destination without an app release:
//!
//! ```json
//! {
//!   "settings": {},
//!   "rules": [
//!     { "patterns": [".*"], "properties": { "context": "default" } },
//!     { "patterns": ["/new$", "/edit$"], "properties": { "context": "modal" } }
//!   ]
//! }
//! ```
//!
//! Rules are applied in order. Every rule with a pattern matching the
//! location's path contributes its properties, and later rules override
//! earlier keys. Patterns are regular expressions matched anywhere in the
//! path; anchor them with `^`/`$` as needed.
//!
//! # Example
//!
//! ```rust
//! use wayfinder_hierarchy::{Context, Presentation};
//! use wayfinder_path_config::PathConfiguration;
//! use wayfinder_stack::Location;
//!
//! let config = PathConfiguration::from_json(r#"{
//!     "rules": [
//!         { "patterns": ["/new$"], "properties": { "context": "modal" } },
//!         { "patterns": ["^/$"], "properties": { "presentation": "clear_all" } }
//!     ]
//! }"#)?;
//!
//! let new = config.properties_for(&Location::from("https://example.com/posts/new"));
//! assert_eq!(new.context(), Context::Modal);
//!
//! let home = config.properties_for(&Location::from("https://example.com/"));
//! assert_eq!(home.presentation(), Presentation::ClearAll);
//! # Ok::<(), wayfinder_path_config::ConfigError>(())
//! ```

pub mod config;
pub mod error;
pub mod rule;

pub use config::{PathConfiguration, Source};
pub use error::ConfigError;
pub use rule::PathRule;
