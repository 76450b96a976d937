// Copyright 2025 the Wayfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Callbacks the controller issues after mutating the hierarchy.

use wayfinder_stack::StackKind;

use crate::proposal::VisitAction;

/// Receives follow-up work from the [`HierarchyController`](crate::HierarchyController).
///
/// The delegate is passed to each [`route`](crate::HierarchyController::route)
/// call rather than stored, so a caller can lend out state it owns (for
/// example one web session per stack) for the duration of the call.
pub trait HierarchyDelegate<S> {
    /// A new screen was placed on `stack` and should be loaded.
    fn visit(&mut self, stack: StackKind, screen: &S, action: VisitAction) {
        let _ = (stack, screen, action);
    }

    /// The screen now on top of `stack` was uncovered and should be reloaded.
    fn refresh(&mut self, stack: StackKind) {
        let _ = stack;
    }

    /// `screen` is now the active screen, on top of the front-most `stack`.
    fn activated(&mut self, stack: StackKind, screen: &S) {
        let _ = (stack, screen);
    }
}

/// A delegate that ignores every callback.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoDelegate;

impl<S> HierarchyDelegate<S> for NoDelegate {}
