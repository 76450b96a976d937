// Copyright 2025 the Wayfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Values exchanged between the navigator, its delegate, and its sessions.

use alloc::string::String;

use wayfinder_stack::StackKind;

/// A delegate's answer to a visit proposal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProposalResult<S> {
    /// Route it, with the default screen built from the proposal's location.
    Accept,
    /// Route it, with a screen the host built itself.
    AcceptCustom(S),
    /// Drop it. No stack is touched.
    Reject,
}

/// Permission to reload a session after a failed request.
///
/// Handed to [`NavigatorDelegate::visitable_did_fail_request`](crate::NavigatorDelegate::visitable_did_fail_request).
/// Nothing is retried until the host passes it back to
/// [`Navigator::retry`](crate::Navigator::retry), which may happen at any later time.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Retry {
    stack: StackKind,
}

impl Retry {
    pub(crate) fn new(stack: StackKind) -> Self {
        Self { stack }
    }

    /// The stack whose session failed.
    pub fn stack(&self) -> StackKind {
        self.stack
    }
}

/// Why a session failed to load a screen.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RequestError {
    /// The server answered with a non-success status.
    #[error("request failed with HTTP status {status}")]
    Http {
        /// HTTP status code.
        status: u16,
    },
    /// The network was unreachable or the connection dropped.
    #[error("network failure: {0}")]
    Network(String),
    /// The request did not complete in time.
    #[error("request timed out")]
    Timeout,
    /// The response was not HTML.
    #[error("response content type is not HTML")]
    ContentTypeMismatch,
    /// The page loaded but failed to render.
    #[error("page failed to load")]
    PageLoad,
}

/// Authentication scheme of a challenge.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthMethod {
    /// HTTP basic authentication.
    HttpBasic,
    /// HTTP digest authentication.
    HttpDigest,
    /// Server certificate evaluation.
    ServerTrust,
    /// Client certificate request.
    ClientCertificate,
    /// Anything else, by name.
    Other(String),
}

/// An authentication challenge raised while loading a screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthChallenge {
    /// Host that issued the challenge.
    pub host: String,
    /// Port of the protection space.
    pub port: u16,
    /// Realm, when the scheme has one.
    pub realm: Option<String>,
    /// Authentication scheme.
    pub method: AuthMethod,
    /// How many times this challenge already failed.
    pub previous_failure_count: u32,
}

/// A username/password credential.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    /// User name.
    pub user: String,
    /// Password.
    pub password: String,
}

impl core::fmt::Debug for Credential {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Credential")
            .field("user", &self.user)
            .finish_non_exhaustive()
    }
}

/// How to answer an [`AuthChallenge`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ChallengeDisposition {
    /// Answer with this credential.
    UseCredential(Credential),
    /// Let the session apply its default handling.
    #[default]
    PerformDefaultHandling,
    /// Cancel the request.
    Cancel,
    /// Reject this protection space and try the next one.
    RejectProtectionSpace,
}

/// Kind of transient dialog requested by web content.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AlertKind {
    /// A message with a single dismiss button.
    Alert,
    /// A message with confirm and cancel buttons.
    Confirm,
    /// A message with a text field.
    Prompt {
        /// Initial text for the field.
        default_text: Option<String>,
    },
}

/// A transient dialog to show over the active stack.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alert {
    /// Dialog kind.
    pub kind: AlertKind,
    /// Message body.
    pub message: String,
}

impl Alert {
    /// A plain alert.
    pub fn alert(message: impl Into<String>) -> Self {
        Self {
            kind: AlertKind::Alert,
            message: message.into(),
        }
    }

    /// A confirm dialog.
    pub fn confirm(message: impl Into<String>) -> Self {
        Self {
            kind: AlertKind::Confirm,
            message: message.into(),
        }
    }
}
