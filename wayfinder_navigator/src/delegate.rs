// Copyright 2025 the Wayfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The host application's customization points.
//!
//! Every method has a default, so a host implements only what it needs.
//! [`DefaultDelegate`] implements none of them: it accepts every proposal
//! with the default screen and ignores failures, challenges, and alerts.

use wayfinder_hierarchy::VisitProposal;
use wayfinder_stack::{Location, StackKind};

use crate::types::{
    Alert, AuthChallenge, ChallengeDisposition, ProposalResult, RequestError, Retry,
};

/// Customizes how a [`Navigator`](crate::Navigator) builds screens and reports problems.
pub trait NavigatorDelegate<S> {
    /// Decide whether to route `proposal`, and with which screen.
    fn handle(&mut self, proposal: &VisitProposal) -> ProposalResult<S> {
        let _ = proposal;
        ProposalResult::Accept
    }

    /// A session failed to load `location`.
    ///
    /// Pass `retry` to [`Navigator::retry`](crate::Navigator::retry) to reload.
    fn visitable_did_fail_request(
        &mut self,
        location: &Location,
        error: &RequestError,
        retry: Retry,
    ) {
        let _ = (location, error, retry);
    }

    /// A session needs credentials.
    fn did_receive_authentication_challenge(
        &mut self,
        challenge: &AuthChallenge,
    ) -> ChallengeDisposition {
        let _ = challenge;
        ChallengeDisposition::PerformDefaultHandling
    }

    /// Show `alert` over the stack `on`.
    fn present_alert(&mut self, alert: Alert, on: StackKind) {
        let _ = (alert, on);
    }

    /// A session asked to open `location` outside the app, from stack `from`.
    fn open_external(&mut self, location: &Location, from: StackKind) {
        let _ = (location, from);
    }

    /// `screen` became the active screen, on top of `stack`.
    fn did_activate(&mut self, stack: StackKind, screen: &S) {
        let _ = (stack, screen);
    }
}

/// Accepts every proposal and ignores everything else.
#[derive(Copy, Clone, Debug, Default)]
pub struct DefaultDelegate;

impl<S> NavigatorDelegate<S> for DefaultDelegate {}
