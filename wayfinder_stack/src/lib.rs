// Copyright 2025 the Wayfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=wayfinder_stack --heading-base-level=0

//! Wayfinder Stack: screen identity and navigation stacks.
//!
//! This crate is the bottom layer of Wayfinder. It knows nothing about proposals
//! or routing policy; it only models what a navigation hierarchy looks like.
//!
//! - [`Location`] is a URL-like destination. Two screens are the *same page*
//!   when their locations are equal.
//! - [`Screen`] is implemented by whatever the host pushes onto a stack.
//!   Native screens without a location are never the same page as anything.
//! - [`NavigationStack`] is an ordered stack of screens plus a
//!   [`PresentationState`]. The main stack is always the visible base; the
//!   modal stack is either presented over it or dismissed.
//!
//! # Example
//!
//! ```rust
//! use wayfinder_stack::{Location, NavigationStack, StackKind, WebScreen};
//!
//! let mut main: NavigationStack<WebScreen> = NavigationStack::new(StackKind::Main);
//! main.push(WebScreen::new("https://example.com/"));
//! main.push(WebScreen::new("https://example.com/one"));
//! main.push(WebScreen::new("https://example.com/two"));
//!
//! // Going back to "/one" finds it below the top.
//! let one = Location::from("https://example.com/one");
//! assert_eq!(main.position_of(&one), Some(1));
//!
//! // The root is never popped.
//! assert_eq!(main.pop_to_root(), 2);
//! assert!(main.pop().is_none());
//! assert_eq!(main.len(), 1);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod location;
pub mod screen;
pub mod stack;

pub use location::Location;
pub use screen::{Screen, WebScreen};
pub use stack::{NavigationStack, PresentationState, StackKind};
