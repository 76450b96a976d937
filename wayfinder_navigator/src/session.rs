// Copyright 2025 the Wayfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The web session seam.
//!
//! A session owns the web view (or equivalent) behind one stack and loads
//! whatever screen the navigator tells it to. The navigator keeps one session
//! per stack and forwards hierarchy follow-ups to the matching one:
//!
//! - a new screen placed on a stack → [`Session::visit`];
//! - a screen uncovered by a pop or clear → [`Session::reload`].
//!
//! Sessions report back through the `session_*` methods on
//! [`Navigator`](crate::Navigator).

use wayfinder_hierarchy::{HierarchyDelegate, VisitAction};
use wayfinder_stack::{Screen, StackKind};

use crate::delegate::NavigatorDelegate;

/// A web session backing one stack.
pub trait Session<S> {
    /// Load `screen`.
    ///
    /// `action` is the routed proposal's action. `Replace` should replace the
    /// session's current history entry rather than add one.
    fn visit(&mut self, screen: &S, action: VisitAction);

    /// Reload the current screen.
    fn reload(&mut self);

    /// Drop cached page snapshots so the next visit refetches.
    fn clear_snapshot_cache(&mut self) {}
}

/// A session that does nothing, for hosts that load screens themselves.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoSession;

impl<S> Session<S> for NoSession {
    fn visit(&mut self, _screen: &S, _action: VisitAction) {}

    fn reload(&mut self) {}
}

/// Lends the navigator's sessions and delegate to the hierarchy for one route.
pub(crate) struct SessionDriver<'a, D, X> {
    pub(crate) main: &'a mut X,
    pub(crate) modal: &'a mut X,
    pub(crate) delegate: &'a mut D,
}

impl<D, X> SessionDriver<'_, D, X> {
    fn session(&mut self, stack: StackKind) -> &mut X {
        match stack {
            StackKind::Main => &mut *self.main,
            StackKind::Modal => &mut *self.modal,
        }
    }
}

impl<S, D, X> HierarchyDelegate<S> for SessionDriver<'_, D, X>
where
    S: Screen,
    D: NavigatorDelegate<S>,
    X: Session<S>,
{
    fn visit(&mut self, stack: StackKind, screen: &S, action: VisitAction) {
        // Native screens have nothing to load.
        if screen.location().is_some() {
            self.session(stack).visit(screen, action);
        }
    }

    fn refresh(&mut self, stack: StackKind) {
        self.session(stack).reload();
    }

    fn activated(&mut self, stack: StackKind, screen: &S) {
        self.delegate.did_activate(stack, screen);
    }
}
