// Copyright 2025 the Wayfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The hierarchy controller: the routing state machine.
//!
//! ## State
//!
//! Two owned [`NavigationStack`]s, *main* and *modal*, and the modal's
//! presentation state. There are no back-references between them; the
//! controller queries and mutates both directly.
//!
//! ## Transition order
//!
//! [`HierarchyController::route`] evaluates a proposal in a fixed order:
//!
//! 1. `None` does nothing.
//! 2. `ClearAll` and `ReplaceRoot` are global: they dismiss the modal (if
//!    presented) and then reset main, whatever the proposal's context.
//! 3. `Pop` and `Refresh` remove from the presented modal if there is one,
//!    whatever the context. With no modal up, a `Default` context removes from
//!    main and a `Modal` context does nothing. Popping the modal's last screen
//!    dismisses it.
//! 4. Otherwise the context picks the target stack. A `Default` context
//!    dismisses a presented modal first. A `Modal` context presents the modal
//!    fresh when it is not already up.
//! 5. The presentation mode is applied to the target stack.
//! 6. The delegate is told which screen is now active.
//!
//! Every step is total. Boundaries such as popping main at its root are
//! no-ops, never errors.

use wayfinder_stack::{NavigationStack, Screen, StackKind};

use crate::delegate::HierarchyDelegate;
use crate::proposal::{Context, Presentation, VisitAction, VisitProposal};
use crate::transition::{StackOp, Transition};

/// Applies visit proposals to a main + modal navigation hierarchy.
///
/// ## Usage
///
/// - Construct with [`HierarchyController::new`] or
///   [`HierarchyController::with_root`].
/// - Call [`HierarchyController::route`] with the screen built for each
///   accepted proposal. Mirror the returned [`Transition`] into your widgets.
/// - Read state back with [`main`](Self::main), [`modal`](Self::modal), and
///   [`active_screen`](Self::active_screen).
pub struct HierarchyController<S> {
    main: NavigationStack<S>,
    modal: NavigationStack<S>,
}

impl<S> core::fmt::Debug for HierarchyController<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("HierarchyController")
            .field("main", &self.main)
            .field("modal", &self.modal)
            .finish()
    }
}

impl<S> Default for HierarchyController<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> HierarchyController<S> {
    /// Create a controller with two empty stacks and the modal dismissed.
    pub fn new() -> Self {
        Self {
            main: NavigationStack::new(StackKind::Main),
            modal: NavigationStack::new(StackKind::Modal),
        }
    }

    /// Create a controller whose main stack starts with `root`.
    pub fn with_root(root: S) -> Self {
        let mut this = Self::new();
        this.main.push(root);
        this
    }

    /// The main stack.
    pub fn main(&self) -> &NavigationStack<S> {
        &self.main
    }

    /// The modal stack.
    pub fn modal(&self) -> &NavigationStack<S> {
        &self.modal
    }

    /// Mutable access to the main stack, for host-side setup.
    pub fn main_mut(&mut self) -> &mut NavigationStack<S> {
        &mut self.main
    }

    /// Mutable access to the modal stack, for host-side setup.
    ///
    /// Callers must not leave a presented modal empty.
    pub fn modal_mut(&mut self) -> &mut NavigationStack<S> {
        &mut self.modal
    }

    /// The stack of the given kind.
    pub fn stack(&self, kind: StackKind) -> &NavigationStack<S> {
        match kind {
            StackKind::Main => &self.main,
            StackKind::Modal => &self.modal,
        }
    }

    fn stack_mut(&mut self, kind: StackKind) -> &mut NavigationStack<S> {
        match kind {
            StackKind::Main => &mut self.main,
            StackKind::Modal => &mut self.modal,
        }
    }

    /// The front-most stack: modal if presented, else main.
    pub fn active_kind(&self) -> StackKind {
        if self.modal.is_presented() {
            StackKind::Modal
        } else {
            StackKind::Main
        }
    }

    /// The front-most stack.
    pub fn active_stack(&self) -> &NavigationStack<S> {
        self.stack(self.active_kind())
    }

    /// Top of the front-most stack.
    pub fn active_screen(&self) -> Option<&S> {
        self.active_stack().top()
    }

    /// Dismiss the modal and drop its screens.
    ///
    /// The returned transition is empty when the modal was not presented.
    pub fn dismiss_modal(&mut self) -> Transition {
        let mut t = Transition::default();
        self.dismiss_into(&mut t);
        t.finish(self.active_kind())
    }

    fn dismiss_into(&mut self, t: &mut Transition) -> bool {
        if !self.modal.dismiss() {
            return false;
        }
        self.modal.clear();
        t.record(StackOp::Dismiss);
        true
    }
}

impl<S: Screen> HierarchyController<S> {
    /// Apply `proposal`, using `screen` wherever the proposal places a new screen.
    ///
    /// `screen` is dropped unused by modes that only remove screens
    /// (`Pop`, `Refresh`, `ClearAll`, `None`).
    pub fn route<D: HierarchyDelegate<S>>(
        &mut self,
        screen: S,
        proposal: &VisitProposal,
        delegate: &mut D,
    ) -> Transition {
        let context = proposal.context();
        let presentation = proposal.presentation();
        let action = proposal.action();
        tracing::debug!(
            location = %proposal.location(),
            context = context.as_str(),
            presentation = presentation.as_str(),
            ?action,
            "routing proposal"
        );

        let mut t = Transition::default();
        match presentation {
            Presentation::None => {}
            Presentation::ClearAll => self.clear_all(&mut t, delegate),
            Presentation::ReplaceRoot => self.replace_root(screen, &mut t, delegate),
            Presentation::Pop | Presentation::Refresh => {
                if let Some(target) = self.removal_target(context) {
                    let removed = self.pop(target, &mut t);
                    if presentation == Presentation::Refresh && removed {
                        delegate.refresh(self.active_kind());
                    }
                }
            }
            Presentation::Replace | Presentation::Default => {
                self.place(screen, proposal, presentation, &mut t, delegate);
            }
        }

        let front = self.active_kind();
        if !t.is_empty()
            && let Some(top) = self.stack(front).top()
        {
            delegate.activated(front, top);
        }
        tracing::debug!(
            main = self.main.len(),
            modal = self.modal.len(),
            modal_presented = self.modal.is_presented(),
            ops = t.ops().len(),
            "routed"
        );
        t.finish(front)
    }

    fn clear_all<D: HierarchyDelegate<S>>(&mut self, t: &mut Transition, delegate: &mut D) {
        self.dismiss_into(t);
        if self.main.pop_to_root() > 0 {
            t.record(StackOp::PopToRoot);
        }
        delegate.refresh(StackKind::Main);
    }

    fn replace_root<D: HierarchyDelegate<S>>(
        &mut self,
        screen: S,
        t: &mut Transition,
        delegate: &mut D,
    ) {
        self.dismiss_into(t);
        self.main.replace_root(screen);
        t.record(StackOp::ReplaceRoot);
        self.visit_top(StackKind::Main, VisitAction::Replace, delegate);
    }

    /// Resolve the stack a removal applies to. `None` means there is nothing to remove from.
    ///
    /// A presented modal is always the target, whatever the context.
    fn removal_target(&self, context: Context) -> Option<StackKind> {
        if self.modal.is_presented() {
            return Some(StackKind::Modal);
        }
        match context {
            Context::Default => Some(StackKind::Main),
            Context::Modal => {
                tracing::debug!("modal is not presented; nothing to pop");
                None
            }
        }
    }

    /// Pop `target`. A single-screen modal is dismissed instead; main at root is left alone.
    fn pop(&mut self, target: StackKind, t: &mut Transition) -> bool {
        match target {
            StackKind::Modal if self.modal.len() <= 1 => self.dismiss_into(t),
            _ => match self.stack_mut(target).pop() {
                Some(_) => {
                    t.record(StackOp::Pop(target));
                    true
                }
                None => {
                    tracing::debug!(stack = ?target, "stack is at its root; pop ignored");
                    false
                }
            },
        }
    }

    fn place<D: HierarchyDelegate<S>>(
        &mut self,
        screen: S,
        proposal: &VisitProposal,
        presentation: Presentation,
        t: &mut Transition,
        delegate: &mut D,
    ) {
        let action = proposal.action();
        let target = match proposal.context() {
            Context::Default => {
                self.dismiss_into(t);
                StackKind::Main
            }
            Context::Modal if self.modal.is_presented() => StackKind::Modal,
            Context::Modal => {
                self.modal.present(screen);
                t.record(StackOp::Present);
                self.visit_top(StackKind::Modal, action, delegate);
                return;
            }
        };

        if presentation == Presentation::Replace || action == VisitAction::Replace {
            self.stack_mut(target).replace_top(screen);
            t.record(StackOp::ReplaceTop(target));
        } else {
            self.advance(target, screen, t);
        }
        self.visit_top(target, action, delegate);
    }

    /// Push, unless the screen is already on `target`: then replace it in place,
    /// dropping everything above it.
    fn advance(&mut self, target: StackKind, screen: S, t: &mut Transition) {
        let stack = self.stack_mut(target);
        let found = screen.location().and_then(|l| stack.position_of(l));
        match found {
            Some(i) if i + 1 == stack.len() => {
                stack.replace_top(screen);
                t.record(StackOp::ReplaceTop(target));
            }
            Some(i) => {
                let len = i + 1;
                stack.truncate(len);
                t.record(StackOp::Truncate { stack: target, len });
                stack.replace_top(screen);
                t.record(StackOp::ReplaceTop(target));
            }
            None => {
                stack.push(screen);
                t.record(StackOp::Push(target));
            }
        }
    }

    fn visit_top<D: HierarchyDelegate<S>>(
        &self,
        kind: StackKind,
        action: VisitAction,
        delegate: &mut D,
    ) {
        if let Some(top) = self.stack(kind).top() {
            delegate.visit(kind, top, action);
        }
    }
}
