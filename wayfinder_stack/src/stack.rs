// Copyright 2025 the Wayfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Navigation stacks.
//!
//! ## Overview
//!
//! A [`NavigationStack`] is an ordered list of screens, bottom (root) first,
//! plus a [`PresentationState`]. The hierarchy holds two of them:
//!
//! - the *main* stack, which is the visible base and is never presented or dismissed;
//! - the *modal* stack, which is either presented over main or dismissed.
//!
//! ## Totality
//!
//! Every operation is defined on every state. Popping a single-screen stack,
//! dismissing a stack that is not presented, or presenting the main stack are
//! all no-ops that report what (nothing) happened. Policy about what to do at
//! those boundaries lives one layer up, in the hierarchy controller.

use alloc::vec::Vec;

use crate::location::Location;
use crate::screen::Screen;

/// Which of the two stacks.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum StackKind {
    /// The base stack.
    #[default]
    Main,
    /// The stack presented over main.
    Modal,
}

/// Presentation state of a stack.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PresentationState {
    /// Always-visible base stack. Cannot be presented or dismissed.
    Base,
    /// Presented over the base stack.
    Presented,
    /// Not on screen.
    Dismissed,
}

/// An ordered stack of screens.
///
/// Screens are owned by the stack and dropped when they are popped, replaced, or cleared.
#[derive(Clone)]
pub struct NavigationStack<S> {
    kind: StackKind,
    screens: Vec<S>,
    state: PresentationState,
}

impl<S> core::fmt::Debug for NavigationStack<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("NavigationStack")
            .field("kind", &self.kind)
            .field("len", &self.screens.len())
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl<S> NavigationStack<S> {
    /// Create an empty stack.
    ///
    /// A [`StackKind::Main`] stack starts as [`PresentationState::Base`], a
    /// [`StackKind::Modal`] stack as [`PresentationState::Dismissed`].
    pub fn new(kind: StackKind) -> Self {
        let state = match kind {
            StackKind::Main => PresentationState::Base,
            StackKind::Modal => PresentationState::Dismissed,
        };
        Self {
            kind,
            screens: Vec::new(),
            state,
        }
    }

    /// Which stack this is.
    pub fn kind(&self) -> StackKind {
        self.kind
    }

    /// Number of screens.
    pub fn len(&self) -> usize {
        self.screens.len()
    }

    /// True if the stack holds no screens.
    pub fn is_empty(&self) -> bool {
        self.screens.is_empty()
    }

    /// The top-most screen.
    pub fn top(&self) -> Option<&S> {
        self.screens.last()
    }

    /// The bottom-most screen.
    pub fn root(&self) -> Option<&S> {
        self.screens.first()
    }

    /// Screen at `index`, counted from the root.
    pub fn get(&self, index: usize) -> Option<&S> {
        self.screens.get(index)
    }

    /// All screens, root first.
    pub fn screens(&self) -> &[S] {
        &self.screens
    }

    /// Current presentation state.
    pub fn presentation_state(&self) -> PresentationState {
        self.state
    }

    /// True if this stack is presented over another one.
    pub fn is_presented(&self) -> bool {
        self.state == PresentationState::Presented
    }

    /// Append `screen` on top.
    pub fn push(&mut self, screen: S) {
        self.screens.push(screen);
    }

    /// Replace the top screen with `screen`, returning the old top.
    ///
    /// On an empty stack this is a push and returns `None`.
    pub fn replace_top(&mut self, screen: S) -> Option<S> {
        let old = self.screens.pop();
        self.screens.push(screen);
        old
    }

    /// Remove the top screen.
    ///
    /// Returns `None` and leaves the stack alone when it holds one screen or none;
    /// the root is never popped this way.
    pub fn pop(&mut self) -> Option<S> {
        if self.screens.len() <= 1 {
            return None;
        }
        self.screens.pop()
    }

    /// Keep only the root screen. Returns how many screens were dropped.
    pub fn pop_to_root(&mut self) -> usize {
        self.truncate(1)
    }

    /// Keep the first `len` screens. Returns how many screens were dropped.
    pub fn truncate(&mut self, len: usize) -> usize {
        let dropped = self.screens.len().saturating_sub(len);
        self.screens.truncate(len);
        dropped
    }

    /// Replace the whole stack with `screen`.
    pub fn replace_root(&mut self, screen: S) {
        self.screens.clear();
        self.screens.push(screen);
    }

    /// Replace the whole stack with `screens`, root first.
    pub fn set_screens(&mut self, screens: impl IntoIterator<Item = S>) {
        self.screens.clear();
        self.screens.extend(screens);
    }

    /// Drop every screen. The presentation state is left alone.
    pub fn clear(&mut self) {
        self.screens.clear();
    }

    /// Present this stack fresh with `screen` as its only content.
    ///
    /// Returns `false` and does nothing for a base stack.
    pub fn present(&mut self, screen: S) -> bool {
        if self.state == PresentationState::Base {
            return false;
        }
        self.replace_root(screen);
        self.state = PresentationState::Presented;
        true
    }

    /// Mark a presented stack as dismissed. Contents are not cleared.
    ///
    /// Returns `true` if the stack was presented.
    pub fn dismiss(&mut self) -> bool {
        if self.state != PresentationState::Presented {
            return false;
        }
        self.state = PresentationState::Dismissed;
        true
    }
}

impl<S: Screen> NavigationStack<S> {
    /// Index of the top-most screen showing `location`.
    pub fn position_of(&self, location: &Location) -> Option<usize> {
        self.screens.iter().rposition(|s| s.is_same_page(location))
    }
}
