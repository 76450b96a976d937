// Copyright 2025 the Wayfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Navigator with path configuration.
//!
//! Routing properties come from a path configuration document; a host
//! delegate swaps in a native screen for one path and rejects another.
//! Failed requests are retried through the delegate's `Retry` token.
//! Set `RUST_LOG=debug` to see the router's decisions.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p wayfinder_demos --example navigator_path_config`

use tracing_subscriber::EnvFilter;
use wayfinder_hierarchy::{VisitAction, VisitProposal};
use wayfinder_navigator::{
    Navigator, NavigatorDelegate, ProposalResult, RequestError, Retry, Session,
};
use wayfinder_path_config::{PathConfiguration, Source};
use wayfinder_stack::{Location, Screen, StackKind};

const PATHS: &str = r#"{
    "settings": { "tabs": ["home", "posts"] },
    "rules": [
        { "patterns": ["/new$", "/edit$"], "properties": { "context": "modal" } },
        { "patterns": ["^/$"], "properties": { "presentation": "clear_all" } },
        { "patterns": ["^/settings$"], "properties": { "native": true } }
    ]
}"#;

#[derive(Clone, Debug)]
enum AppScreen {
    Web(Location),
    Settings,
}

impl Screen for AppScreen {
    fn location(&self) -> Option<&Location> {
        match self {
            Self::Web(l) => Some(l),
            Self::Settings => None,
        }
    }
}

impl From<Location> for AppScreen {
    fn from(location: Location) -> Self {
        Self::Web(location)
    }
}

#[derive(Default)]
struct App {
    pending_retry: Option<Retry>,
}

impl NavigatorDelegate<AppScreen> for App {
    fn handle(&mut self, proposal: &VisitProposal) -> ProposalResult<AppScreen> {
        if proposal.properties().get("native").and_then(|v| v.as_bool()) == Some(true) {
            return ProposalResult::AcceptCustom(AppScreen::Settings);
        }
        if proposal.location().path().starts_with("/admin") {
            return ProposalResult::Reject;
        }
        ProposalResult::Accept
    }

    fn visitable_did_fail_request(&mut self, location: &Location, error: &RequestError, retry: Retry) {
        println!("  failed {location}: {error}; will retry {:?}", retry.stack());
        self.pending_retry = Some(retry);
    }

    fn did_activate(&mut self, stack: StackKind, screen: &AppScreen) {
        println!("  active on {stack:?}: {screen:?}");
    }
}

/// Stands in for a web view.
struct Web {
    name: &'static str,
}

impl Session<AppScreen> for Web {
    fn visit(&mut self, screen: &AppScreen, action: VisitAction) {
        if let Some(l) = screen.location() {
            println!("  [{}] visit {} ({action:?})", self.name, l.path());
        }
    }
    fn reload(&mut self) {
        println!("  [{}] reload", self.name);
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let paths = match PathConfiguration::load(&[Source::Json(PATHS.into())]) {
        Ok(paths) => paths,
        Err(err) => {
            eprintln!("path configuration failed to load: {err}");
            return;
        }
    };
    let mut nav: Navigator<AppScreen, App, PathConfiguration, Web> = Navigator::with_parts(
        App::default(),
        paths,
        Web { name: "main" },
        Web { name: "modal" },
    );

    for path in ["/", "/posts", "/posts/new", "/posts/2", "/settings", "/admin", "/"] {
        println!("route {path}");
        let t = nav.route(format!("https://example.com{path}"));
        match t {
            Some(t) => println!("  ops={:?}", t.ops()),
            None => println!("  rejected"),
        }
    }

    // A session failure; the host decides to retry right away.
    nav.session_did_fail_request(
        StackKind::Main,
        &Location::from("https://example.com/"),
        &RequestError::Timeout,
    );
    if let Some(retry) = nav.delegate_mut().pending_retry.take() {
        nav.retry(retry);
    }
}
