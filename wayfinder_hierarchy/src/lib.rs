// Copyright 2025 the Wayfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=wayfinder_hierarchy --heading-base-level=0

//! Wayfinder Hierarchy: a deterministic, `no_std` decision engine for navigation.
//!
//! ## Overview
//!
//! A hybrid web/native app keeps two navigation stacks: *main*, always on
//! screen, and *modal*, presented over main on demand. Each navigation
//! request arrives as a [`VisitProposal`]: a destination, a [`VisitAction`]
//! (advance or replace), and loosely typed [`Properties`] that carry two
//! independent routing axes:
//!
//! - [`Context`]: which stack the proposal targets (`default` or `modal`).
//! - [`Presentation`]: how to mutate it (`default`, `replace`, `pop`,
//!   `refresh`, `clear_all`, `replace_root`, `none`).
//!
//! [`HierarchyController::route`] maps any combination of the two onto the
//! current stack state, applies the mutation, and returns a [`Transition`]
//! listing exactly what it did.
//!
//! ## Inputs
//!
//! The controller never builds screens. Callers pass the screen for each
//! proposal (see `wayfinder_navigator` for a router that builds them) along
//! with a [`HierarchyDelegate`] that receives follow-up work: load the new
//! screen, reload an uncovered screen, note the new active screen.
//!
//! ## Defaults
//!
//! Missing or malformed routing properties never fail a route. They resolve to
//! the `default` context and `default` presentation.
//!
//! ## Example
//!
//! ```rust
//! use wayfinder_hierarchy::{
//!     HierarchyController, NoDelegate, Properties, StackOp, VisitAction, VisitProposal,
//! };
//! use wayfinder_stack::{StackKind, WebScreen};
//!
//! let mut hc = HierarchyController::with_root(WebScreen::new("https://example.com/"));
//!
//! // Plain visits push.
//! let one = VisitProposal::advance("https://example.com/one");
//! hc.route(WebScreen::new("https://example.com/one"), &one, &mut NoDelegate);
//! assert_eq!(hc.main().len(), 2);
//!
//! // A modal proposal presents the modal stack over main.
//! let props = Properties::new().with("context", "modal");
//! let new = VisitProposal::new("https://example.com/new", VisitAction::Advance, props);
//! let t = hc.route(WebScreen::new("https://example.com/new"), &new, &mut NoDelegate);
//! assert_eq!(t.ops(), &[StackOp::Present]);
//! assert_eq!(hc.active_kind(), StackKind::Modal);
//!
//! // Going back to a main page dismisses the modal and pops back to it.
//! let t = hc.route(WebScreen::new("https://example.com/"), &VisitProposal::advance("https://example.com/"), &mut NoDelegate);
//! assert!(t.dismissed_modal());
//! assert_eq!(hc.main().len(), 1);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

#[cfg(test)]
#[macro_use]
extern crate std;

pub mod controller;
pub mod delegate;
pub mod properties;
pub mod proposal;
pub mod transition;

pub use controller::HierarchyController;
pub use delegate::{HierarchyDelegate, NoDelegate};
pub use properties::{CONTEXT_KEY, PRESENTATION_KEY, Properties, PropertyValue};
pub use proposal::{Context, Presentation, VisitAction, VisitProposal};
pub use transition::{Changed, StackOp, Transition};
