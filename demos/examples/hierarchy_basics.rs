// Copyright 2025 the Wayfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hierarchy basics.
//!
//! This minimal example drives the routing state machine directly: pushes on
//! main, a modal flow, and the global `clear_all` reset. Each transition's
//! stack operations are printed.
//!
//! Run:
//! - `cargo run -p wayfinder_demos --example hierarchy_basics`

use wayfinder_hierarchy::{
    HierarchyController, HierarchyDelegate, Properties, Transition, VisitAction, VisitProposal,
};
use wayfinder_stack::{Screen, StackKind, WebScreen};

/// Prints what a host would do in response to the hierarchy's follow-ups.
struct Printer;

impl HierarchyDelegate<WebScreen> for Printer {
    fn visit(&mut self, stack: StackKind, screen: &WebScreen, action: VisitAction) {
        println!("  load {:?} on {:?} ({:?})", screen.location().map(|l| l.path()), stack, action);
    }
    fn refresh(&mut self, stack: StackKind) {
        println!("  reload {:?}", stack);
    }
}

fn show(label: &str, hc: &HierarchyController<WebScreen>, t: &Transition) {
    let paths = |kind: StackKind| {
        hc.stack(kind)
            .screens()
            .iter()
            .filter_map(|s| s.location().map(|l| l.path().to_string()))
            .collect::<Vec<_>>()
    };
    println!(
        "{label}: ops={:?} front={:?}\n  main={:?} modal={:?}",
        t.ops(),
        t.front(),
        paths(StackKind::Main),
        paths(StackKind::Modal)
    );
}

fn go(hc: &mut HierarchyController<WebScreen>, path: &str, props: Properties) {
    let url = format!("https://example.com{path}");
    let proposal = VisitProposal::new(url.as_str(), VisitAction::Advance, props);
    let t = hc.route(WebScreen::new(url.as_str()), &proposal, &mut Printer);
    show(path, hc, &t);
}

fn main() {
    let mut hc = HierarchyController::with_root(WebScreen::new("https://example.com/"));
    let modal = || Properties::new().with("context", "modal");

    go(&mut hc, "/posts", Properties::new());
    go(&mut hc, "/posts/1", Properties::new());
    go(&mut hc, "/posts/1/comments/new", modal());
    go(&mut hc, "/posts/1/comments/preview", modal());
    go(
        &mut hc,
        "/posts/1/comments/preview",
        modal().with("presentation", "pop"),
    );
    go(&mut hc, "/posts", Properties::new());
    go(
        &mut hc,
        "/",
        Properties::new().with("presentation", "clear_all"),
    );
}
