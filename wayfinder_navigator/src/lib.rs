// Copyright 2025 the Wayfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=wayfinder_navigator --heading-base-level=0

//! Wayfinder Navigator: routes locations onto a navigation hierarchy.
//!
//! ## Overview
//!
//! [`Navigator`] sits between the host application and
//! [`wayfinder_hierarchy`]. For each destination it:
//!
//! 1. looks up routing properties with a [`PathLookup`];
//! 2. asks the [`NavigatorDelegate`] to accept, customize, or reject the
//!    proposal;
//! 3. routes the resulting screen through the
//!    [`HierarchyController`](wayfinder_hierarchy::HierarchyController);
//! 4. forwards follow-up work to the [`Session`] behind the affected stack.
//!
//! ## Sessions
//!
//! Each stack has its own session. Sessions load web screens, and report
//! failures, authentication challenges, external links, and their own visit
//! proposals back through the navigator's `session_*` methods. Failed
//! requests are never retried automatically: the delegate receives a
//! [`Retry`] token and decides when (or whether) to pass it back.
//!
//! ## Example
//!
//! ```rust
//! use wayfinder_navigator::{DefaultDelegate, Navigator};
//! use wayfinder_stack::{StackKind, WebScreen};
//!
//! let mut nav: Navigator<WebScreen> = Navigator::new(DefaultDelegate);
//! nav.route("https://example.com/");
//! nav.route("https://example.com/posts");
//! assert_eq!(nav.hierarchy().main().len(), 2);
//!
//! // Visiting a page already on the stack goes back to it.
//! nav.route("https://example.com/");
//! assert_eq!(nav.hierarchy().main().len(), 1);
//! assert_eq!(nav.active_stack(), StackKind::Main);
//! ```
//!
//! ## Features
//!
//! - `path_config`: use a `wayfinder_path_config::PathConfiguration` as the
//!   path lookup. Pulls in `std`.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

#[cfg(test)]
extern crate std;

pub mod adapters;
pub mod delegate;
pub mod navigator;
pub mod paths;
pub mod session;
pub mod types;

pub use delegate::{DefaultDelegate, NavigatorDelegate};
pub use navigator::Navigator;
pub use paths::{NoPaths, PathLookup};
pub use session::{NoSession, Session};
pub use types::{
    Alert, AlertKind, AuthChallenge, AuthMethod, ChallengeDisposition, Credential,
    ProposalResult, RequestError, Retry,
};
