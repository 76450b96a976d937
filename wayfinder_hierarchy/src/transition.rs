// Copyright 2025 the Wayfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reports of what a routing decision did.
//!
//! The controller mutates its own stacks directly. A [`Transition`] lists the
//! same mutations, in order, so a host can mirror them into real widgets and
//! animate them.

use alloc::vec::Vec;

use wayfinder_stack::StackKind;

/// One stack mutation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StackOp {
    /// The modal stack was presented fresh with a single screen.
    Present,
    /// The modal stack was dismissed and its screens dropped.
    Dismiss,
    /// A screen was pushed.
    Push(StackKind),
    /// The top screen was replaced (pushed, if the stack was empty).
    ReplaceTop(StackKind),
    /// The top screen was popped.
    Pop(StackKind),
    /// Screens above the first `len` were dropped.
    Truncate {
        /// Stack that was truncated.
        stack: StackKind,
        /// Length after truncation.
        len: usize,
    },
    /// Main was reduced to its root screen.
    PopToRoot,
    /// Main's contents were replaced by a single screen.
    ReplaceRoot,
}

impl StackOp {
    fn changed(self) -> Changed {
        match self {
            Self::Present | Self::Dismiss => Changed::MODAL | Changed::PRESENTATION,
            Self::PopToRoot | Self::ReplaceRoot => Changed::MAIN,
            Self::Push(k) | Self::ReplaceTop(k) | Self::Pop(k) | Self::Truncate { stack: k, .. } => {
                match k {
                    StackKind::Main => Changed::MAIN,
                    StackKind::Modal => Changed::MODAL,
                }
            }
        }
    }
}

bitflags::bitflags! {
    /// Which parts of the hierarchy a transition touched.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Changed: u8 {
        /// Main stack contents.
        const MAIN         = 0b0000_0001;
        /// Modal stack contents.
        const MODAL        = 0b0000_0010;
        /// Whether the modal is presented.
        const PRESENTATION = 0b0000_0100;
    }
}

/// The result of routing one proposal.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Transition {
    ops: Vec<StackOp>,
    changed: Changed,
    front: StackKind,
}

impl Transition {
    pub(crate) fn record(&mut self, op: StackOp) {
        tracing::trace!(?op, "stack op");
        self.changed |= op.changed();
        self.ops.push(op);
    }

    pub(crate) fn finish(mut self, front: StackKind) -> Self {
        self.front = front;
        self
    }

    /// Applied mutations, in order.
    pub fn ops(&self) -> &[StackOp] {
        &self.ops
    }

    /// Summary of what changed.
    pub fn changed(&self) -> Changed {
        self.changed
    }

    /// True if nothing was mutated.
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// The stack that is front-most after the transition.
    pub fn front(&self) -> StackKind {
        self.front
    }

    /// True if the modal was dismissed during this transition.
    pub fn dismissed_modal(&self) -> bool {
        self.ops.contains(&StackOp::Dismiss)
    }
}
