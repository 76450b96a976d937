// Copyright 2025 the Wayfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The navigator: location → proposal → screen → hierarchy.
//!
//! ## Routing
//!
//! 1. Look up properties for the location with the [`PathLookup`].
//! 2. Build an `Advance` [`VisitProposal`].
//! 3. Ask the [`NavigatorDelegate`] whether to accept it, and with which screen.
//! 4. Hand the screen to the [`HierarchyController`], lending it the sessions
//!    so new screens get visited and uncovered screens get reloaded.
//!
//! ## Session events
//!
//! Sessions report back through the `session_*` methods. They never mutate
//! the stacks on their own except by proposing a visit, which is routed like
//! any other proposal.

use wayfinder_hierarchy::{HierarchyController, Transition, VisitAction, VisitProposal};
use wayfinder_stack::{Location, Screen, StackKind};

use crate::delegate::{DefaultDelegate, NavigatorDelegate};
use crate::paths::{NoPaths, PathLookup};
use crate::session::{NoSession, Session, SessionDriver};
use crate::types::{Alert, AuthChallenge, ChallengeDisposition, ProposalResult, RequestError, Retry};

/// Routes locations onto a main + modal navigation hierarchy.
///
/// ## Usage
///
/// - Construct with [`Navigator::new`] when the path lookup and sessions have
///   usable defaults, or with [`Navigator::with_parts`] to supply them.
/// - Seed the main stack through [`Navigator::hierarchy_mut`] if the host
///   starts with a root screen.
/// - Call [`Navigator::route`] for each navigation request. Mirror the
///   returned [`Transition`] into your widgets.
pub struct Navigator<S, D = DefaultDelegate, P = NoPaths, X = NoSession> {
    hierarchy: HierarchyController<S>,
    delegate: D,
    paths: P,
    session: X,
    modal_session: X,
}

impl<S, D, P, X> core::fmt::Debug for Navigator<S, D, P, X> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Navigator")
            .field("hierarchy", &self.hierarchy)
            .finish_non_exhaustive()
    }
}

impl<S, D, P: Default, X: Default> Navigator<S, D, P, X> {
    /// Create a navigator with default path lookup and sessions.
    pub fn new(delegate: D) -> Self {
        Self::with_parts(delegate, P::default(), X::default(), X::default())
    }
}

impl<S, D, P, X> Navigator<S, D, P, X> {
    /// Create a navigator from explicit parts.
    pub fn with_parts(delegate: D, paths: P, session: X, modal_session: X) -> Self {
        Self {
            hierarchy: HierarchyController::new(),
            delegate,
            paths,
            session,
            modal_session,
        }
    }

    /// The navigation hierarchy.
    pub fn hierarchy(&self) -> &HierarchyController<S> {
        &self.hierarchy
    }

    /// Mutable access to the hierarchy, for host-side setup.
    pub fn hierarchy_mut(&mut self) -> &mut HierarchyController<S> {
        &mut self.hierarchy
    }

    /// The delegate.
    pub fn delegate(&self) -> &D {
        &self.delegate
    }

    /// Mutable access to the delegate.
    pub fn delegate_mut(&mut self) -> &mut D {
        &mut self.delegate
    }

    /// The path lookup.
    pub fn paths(&self) -> &P {
        &self.paths
    }

    /// Replace the path lookup, e.g. after the host refreshed its configuration.
    pub fn set_paths(&mut self, paths: P) {
        self.paths = paths;
    }

    /// The session backing `stack`.
    pub fn session(&self, stack: StackKind) -> &X {
        match stack {
            StackKind::Main => &self.session,
            StackKind::Modal => &self.modal_session,
        }
    }

    /// Mutable access to the session backing `stack`.
    pub fn session_mut(&mut self, stack: StackKind) -> &mut X {
        match stack {
            StackKind::Main => &mut self.session,
            StackKind::Modal => &mut self.modal_session,
        }
    }

    /// The front-most stack.
    pub fn active_stack(&self) -> StackKind {
        self.hierarchy.active_kind()
    }
}

impl<S, D, P, X> Navigator<S, D, P, X>
where
    S: Screen + From<Location>,
    D: NavigatorDelegate<S>,
    P: PathLookup,
    X: Session<S>,
{
    /// Route `location`.
    ///
    /// Returns `None` if the delegate rejected the proposal; nothing changed.
    pub fn route(&mut self, location: impl Into<Location>) -> Option<Transition> {
        let location = location.into();
        let properties = self.paths.properties_for(&location);
        let proposal = VisitProposal::new(location, VisitAction::Advance, properties);
        self.route_proposal(&proposal)
    }

    /// Route an already-built proposal.
    ///
    /// Returns `None` if the delegate rejected it.
    pub fn route_proposal(&mut self, proposal: &VisitProposal) -> Option<Transition> {
        let screen = match self.delegate.handle(proposal) {
            ProposalResult::Accept => S::from(proposal.location().clone()),
            ProposalResult::AcceptCustom(screen) => screen,
            ProposalResult::Reject => {
                tracing::debug!(location = %proposal.location(), "proposal rejected");
                return None;
            }
        };
        let mut driver = SessionDriver {
            main: &mut self.session,
            modal: &mut self.modal_session,
            delegate: &mut self.delegate,
        };
        Some(self.hierarchy.route(screen, proposal, &mut driver))
    }

    /// A session proposed a visit, e.g. after a link tap or a redirect.
    pub fn session_did_propose_visit(
        &mut self,
        from: StackKind,
        proposal: &VisitProposal,
    ) -> Option<Transition> {
        tracing::debug!(?from, location = %proposal.location(), "session proposed visit");
        self.route_proposal(proposal)
    }
}

impl<S, D, P, X> Navigator<S, D, P, X>
where
    D: NavigatorDelegate<S>,
    X: Session<S>,
{
    /// A session finished submitting a form.
    ///
    /// A submission from the modal usually changes what main shows, so main's
    /// snapshot cache is dropped.
    pub fn session_did_finish_form_submission(&mut self, from: StackKind) {
        if from == StackKind::Modal {
            self.session.clear_snapshot_cache();
        }
    }

    /// A session wants to open `location` outside the app.
    pub fn session_open_external(&mut self, from: StackKind, location: &Location) {
        self.delegate.open_external(location, from);
    }

    /// A session failed to load `location`. The delegate decides whether to retry.
    pub fn session_did_fail_request(
        &mut self,
        from: StackKind,
        location: &Location,
        error: &RequestError,
    ) {
        tracing::debug!(?from, %location, %error, "request failed");
        self.delegate
            .visitable_did_fail_request(location, error, Retry::new(from));
    }

    /// A session's web content process died; reload it.
    pub fn session_process_did_terminate(&mut self, from: StackKind) {
        tracing::debug!(?from, "web content process terminated; reloading");
        self.session_mut(from).reload();
    }

    /// A session received an authentication challenge. Returns the delegate's answer.
    pub fn session_did_receive_authentication_challenge(
        &mut self,
        from: StackKind,
        challenge: &AuthChallenge,
    ) -> ChallengeDisposition {
        tracing::debug!(?from, host = %challenge.host, "authentication challenge");
        self.delegate.did_receive_authentication_challenge(challenge)
    }

    /// Reload the session a [`Retry`] was issued for.
    pub fn retry(&mut self, retry: Retry) {
        self.session_mut(retry.stack()).reload();
    }

    /// Show `alert` over the front-most stack.
    pub fn present_alert(&mut self, alert: Alert) {
        let on = self.hierarchy.active_kind();
        self.delegate.present_alert(alert, on);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AuthMethod, Credential};
    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;
    use wayfinder_hierarchy::{Properties, StackOp};

    #[derive(Clone, Debug, PartialEq)]
    enum Page {
        Web(Location),
        Native(&'static str),
    }

    impl Screen for Page {
        fn location(&self) -> Option<&Location> {
            match self {
                Self::Web(l) => Some(l),
                Self::Native(_) => None,
            }
        }
    }

    impl From<Location> for Page {
        fn from(location: Location) -> Self {
            Self::Web(location)
        }
    }

    #[derive(Debug, Default, PartialEq)]
    struct Log {
        visits: Vec<(String, VisitAction)>,
        reloads: usize,
        snapshot_clears: usize,
    }

    impl Session<Page> for Log {
        fn visit(&mut self, screen: &Page, action: VisitAction) {
            let path = screen.location().map(|l| String::from(l.path()));
            self.visits.push((path.unwrap_or_default(), action));
        }
        fn reload(&mut self) {
            self.reloads += 1;
        }
        fn clear_snapshot_cache(&mut self) {
            self.snapshot_clears += 1;
        }
    }

    #[derive(Default)]
    struct Host {
        reject: Vec<&'static str>,
        native: Vec<(&'static str, &'static str)>,
        failures: Vec<(String, RequestError, Retry)>,
        alerts: Vec<(Alert, StackKind)>,
        external: Vec<(String, StackKind)>,
        activated: Vec<(StackKind, Page)>,
    }

    impl NavigatorDelegate<Page> for Host {
        fn handle(&mut self, proposal: &VisitProposal) -> ProposalResult<Page> {
            let path = proposal.location().path();
            if self.reject.iter().any(|r| *r == path) {
                return ProposalResult::Reject;
            }
            match self.native.iter().find(|(p, _)| *p == path) {
                Some((_, name)) => ProposalResult::AcceptCustom(Page::Native(name)),
                None => ProposalResult::Accept,
            }
        }
        fn visitable_did_fail_request(
            &mut self,
            location: &Location,
            error: &RequestError,
            retry: Retry,
        ) {
            self.failures
                .push((String::from(location.path()), error.clone(), retry));
        }
        fn did_receive_authentication_challenge(
            &mut self,
            challenge: &AuthChallenge,
        ) -> ChallengeDisposition {
            if challenge.previous_failure_count > 0 {
                return ChallengeDisposition::Cancel;
            }
            ChallengeDisposition::UseCredential(Credential {
                user: "user".into(),
                password: "pass".into(),
            })
        }
        fn present_alert(&mut self, alert: Alert, on: StackKind) {
            self.alerts.push((alert, on));
        }
        fn open_external(&mut self, location: &Location, from: StackKind) {
            self.external.push((String::from(location.as_str()), from));
        }
        fn did_activate(&mut self, stack: StackKind, screen: &Page) {
            self.activated.push((stack, screen.clone()));
        }
    }

    struct Modals;

    impl PathLookup for Modals {
        fn properties_for(&self, location: &Location) -> Properties {
            let path = location.path();
            let mut p = Properties::new();
            if path.ends_with("/new") {
                p.insert("context", "modal");
            }
            if path == "/" {
                p.insert("presentation", "clear_all");
            }
            p
        }
    }

    type TestNavigator = Navigator<Page, Host, Modals, Log>;

    fn url(path: &str) -> Location {
        Location::new(alloc::format!("https://example.com{path}"))
    }

    fn navigator() -> TestNavigator {
        let mut n = Navigator::with_parts(Host::default(), Modals, Log::default(), Log::default());
        n.hierarchy_mut().main_mut().push(Page::Native("root"));
        n
    }

    #[test]
    fn accepted_route_builds_default_screen_and_visits_main() {
        let mut n = navigator();
        let t = n.route(url("/one")).unwrap();
        assert_eq!(t.ops(), &[StackOp::Push(StackKind::Main)]);
        assert_eq!(n.hierarchy().main().top(), Some(&Page::Web(url("/one"))));
        assert_eq!(
            n.session(StackKind::Main).visits,
            vec![(String::from("/one"), VisitAction::Advance)]
        );
        assert_eq!(
            n.delegate().activated,
            vec![(StackKind::Main, Page::Web(url("/one")))]
        );
    }

    #[test]
    fn custom_screen_is_routed_but_not_visited() {
        let mut n = navigator();
        n.delegate_mut().native.push(("/settings", "settings"));
        n.route(url("/settings")).unwrap();
        assert_eq!(n.hierarchy().main().top(), Some(&Page::Native("settings")));
        assert!(n.session(StackKind::Main).visits.is_empty());
    }

    #[test]
    fn rejected_route_changes_nothing() {
        let mut n = navigator();
        n.delegate_mut().reject.push("/blocked");
        assert!(n.route(url("/blocked")).is_none());
        assert_eq!(n.hierarchy().main().len(), 1);
        assert!(n.session(StackKind::Main).visits.is_empty());
        assert!(n.delegate().activated.is_empty());
    }

    #[test]
    fn path_properties_send_proposal_to_modal_session() {
        let mut n = navigator();
        let t = n.route(url("/posts/new")).unwrap();
        assert_eq!(t.ops(), &[StackOp::Present]);
        assert_eq!(n.active_stack(), StackKind::Modal);
        assert_eq!(n.session(StackKind::Modal).visits.len(), 1);
        assert!(n.session(StackKind::Main).visits.is_empty());

        // A default-context visit dismisses the modal and pushes on main.
        let t = n.route(url("/posts/1")).unwrap();
        assert!(t.dismissed_modal());
        assert_eq!(n.hierarchy().main().len(), 2);
        assert_eq!(n.active_stack(), StackKind::Main);
    }

    #[test]
    fn clear_all_reloads_main_session() {
        let mut n = navigator();
        n.route(url("/a"));
        n.route(url("/b"));
        n.route(url("/"));
        assert_eq!(n.hierarchy().main().len(), 1);
        assert_eq!(n.session(StackKind::Main).reloads, 1);
    }

    #[test]
    fn proposals_from_sessions_are_routed() {
        let mut n = navigator();
        n.route(url("/one"));
        let proposal = VisitProposal::new(url("/two"), VisitAction::Replace, Properties::new());
        n.session_did_propose_visit(StackKind::Main, &proposal)
            .unwrap();
        assert_eq!(n.hierarchy().main().len(), 2);
        assert_eq!(n.hierarchy().main().top(), Some(&Page::Web(url("/two"))));
        assert_eq!(
            n.session(StackKind::Main).visits.last(),
            Some(&(String::from("/two"), VisitAction::Replace))
        );
    }

    #[test]
    fn sessions_see_the_proposal_action() {
        let mut n = navigator();
        n.route(url("/posts/new"));
        let props = Properties::new().with("context", "modal");
        let proposal = VisitProposal::new(url("/posts/preview"), VisitAction::Replace, props);
        n.session_did_propose_visit(StackKind::Modal, &proposal)
            .unwrap();
        assert_eq!(n.hierarchy().modal().len(), 1);
        assert_eq!(
            n.session(StackKind::Modal).visits,
            vec![
                (String::from("/posts/new"), VisitAction::Advance),
                (String::from("/posts/preview"), VisitAction::Replace),
            ]
        );
    }

    #[test]
    fn modal_form_submission_clears_main_snapshots() {
        let mut n = navigator();
        n.session_did_finish_form_submission(StackKind::Main);
        assert_eq!(n.session(StackKind::Main).snapshot_clears, 0);
        n.session_did_finish_form_submission(StackKind::Modal);
        assert_eq!(n.session(StackKind::Main).snapshot_clears, 1);
        assert_eq!(n.session(StackKind::Modal).snapshot_clears, 0);
    }

    #[test]
    fn failed_request_waits_for_host_retry() {
        let mut n = navigator();
        n.session_did_fail_request(
            StackKind::Modal,
            &url("/posts/new"),
            &RequestError::Http { status: 500 },
        );
        assert_eq!(n.session(StackKind::Modal).reloads, 0);

        let (path, error, retry) = n.delegate_mut().failures.pop().unwrap();
        assert_eq!(path, "/posts/new");
        assert_eq!(error, RequestError::Http { status: 500 });
        assert_eq!(retry.stack(), StackKind::Modal);

        n.retry(retry);
        assert_eq!(n.session(StackKind::Modal).reloads, 1);
        assert_eq!(n.session(StackKind::Main).reloads, 0);
    }

    #[test]
    fn terminated_process_reloads_its_session() {
        let mut n = navigator();
        n.session_process_did_terminate(StackKind::Main);
        assert_eq!(n.session(StackKind::Main).reloads, 1);
    }

    #[test]
    fn challenge_answer_comes_from_delegate() {
        let mut n = navigator();
        let mut challenge = AuthChallenge {
            host: "example.com".into(),
            port: 443,
            realm: Some("staff".into()),
            method: AuthMethod::HttpBasic,
            previous_failure_count: 0,
        };
        let answer = n.session_did_receive_authentication_challenge(StackKind::Main, &challenge);
        assert!(matches!(answer, ChallengeDisposition::UseCredential(_)));

        challenge.previous_failure_count = 1;
        let answer = n.session_did_receive_authentication_challenge(StackKind::Main, &challenge);
        assert_eq!(answer, ChallengeDisposition::Cancel);
    }

    #[test]
    fn alerts_go_over_the_active_stack() {
        let mut n = navigator();
        n.present_alert(Alert::alert("saved"));
        n.route(url("/posts/new"));
        n.present_alert(Alert::confirm("discard?"));
        let on: Vec<StackKind> = n.delegate().alerts.iter().map(|(_, k)| *k).collect();
        assert_eq!(on, vec![StackKind::Main, StackKind::Modal]);
    }

    #[test]
    fn external_urls_go_to_delegate() {
        let mut n = navigator();
        n.session_open_external(StackKind::Modal, &Location::from("https://other.example/"));
        assert_eq!(
            n.delegate().external,
            vec![(String::from("https://other.example/"), StackKind::Modal)]
        );
    }

    #[test]
    fn defaults_accept_and_push() {
        let mut n: Navigator<Page> = Navigator::new(DefaultDelegate);
        n.route(url("/one"));
        n.route(url("/one"));
        assert_eq!(n.hierarchy().main().len(), 1);
        n.route(url("/two"));
        assert_eq!(n.hierarchy().main().len(), 2);
    }
}
