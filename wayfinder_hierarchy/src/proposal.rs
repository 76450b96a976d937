// Copyright 2025 the Wayfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Visit proposals and the routing axes they carry.

use wayfinder_stack::Location;

use crate::properties::Properties;

/// History semantics of a visit, like push vs. replace in a browser.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum VisitAction {
    /// Add a history entry.
    #[default]
    Advance,
    /// Replace the current history entry.
    Replace,
}

/// Which stack a proposal targets.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Context {
    /// The main stack.
    #[default]
    Default,
    /// The modal stack.
    Modal,
}

impl Context {
    /// Parse a property value. Returns `None` for anything unrecognized.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "default" => Some(Self::Default),
            "modal" => Some(Self::Modal),
            _ => None,
        }
    }

    /// The property value for this context.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Modal => "modal",
        }
    }
}

/// How to mutate the target stack.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Presentation {
    /// Push, replace, or pop back depending on the action and page identity.
    #[default]
    Default,
    /// Replace the top of the target stack.
    Replace,
    /// Remove the top of the target stack.
    Pop,
    /// Pop, then reload whatever screen becomes visible.
    Refresh,
    /// Dismiss the modal and return main to its root.
    ClearAll,
    /// Dismiss the modal and make the new screen main's only screen.
    ReplaceRoot,
    /// Accept the proposal without touching either stack.
    None,
}

impl Presentation {
    /// Parse a property value. Returns `None` for anything unrecognized.
    ///
    /// Both `snake_case` and `camelCase` spellings of the two-word modes are accepted.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "default" => Some(Self::Default),
            "replace" => Some(Self::Replace),
            "pop" => Some(Self::Pop),
            "refresh" => Some(Self::Refresh),
            "clear_all" | "clearAll" => Some(Self::ClearAll),
            "replace_root" | "replaceRoot" => Some(Self::ReplaceRoot),
            "none" => Some(Self::None),
            _ => None,
        }
    }

    /// The property value for this mode.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Replace => "replace",
            Self::Pop => "pop",
            Self::Refresh => "refresh",
            Self::ClearAll => "clear_all",
            Self::ReplaceRoot => "replace_root",
            Self::None => "none",
        }
    }
}

/// A request to navigate.
///
/// Proposals are immutable once built. The routing axes are read from
/// [`Properties`], so a proposal built from a path configuration lookup and one
/// built by hand behave the same.
#[derive(Clone, Debug, PartialEq)]
pub struct VisitProposal {
    location: Location,
    action: VisitAction,
    properties: Properties,
}

impl VisitProposal {
    /// Create a proposal.
    pub fn new(location: impl Into<Location>, action: VisitAction, properties: Properties) -> Self {
        Self {
            location: location.into(),
            action,
            properties,
        }
    }

    /// An advance proposal with no properties.
    pub fn advance(location: impl Into<Location>) -> Self {
        Self::new(location, VisitAction::Advance, Properties::new())
    }

    /// Destination.
    pub fn location(&self) -> &Location {
        &self.location
    }

    /// History semantics.
    pub fn action(&self) -> VisitAction {
        self.action
    }

    /// Raw routing properties.
    pub fn properties(&self) -> &Properties {
        &self.properties
    }

    /// Target stack, defaulting safely.
    pub fn context(&self) -> Context {
        self.properties.context()
    }

    /// Presentation mode, defaulting safely.
    pub fn presentation(&self) -> Presentation {
        self.properties.presentation()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::properties::{CONTEXT_KEY, PRESENTATION_KEY};

    #[test]
    fn presentation_names_round_trip_through_parse() {
        for p in [
            Presentation::Default,
            Presentation::Replace,
            Presentation::Pop,
            Presentation::Refresh,
            Presentation::ClearAll,
            Presentation::ReplaceRoot,
            Presentation::None,
        ] {
            assert_eq!(Presentation::parse(p.as_str()), Some(p));
        }
    }

    #[test]
    fn camel_case_aliases_are_accepted() {
        assert_eq!(Presentation::parse("clearAll"), Some(Presentation::ClearAll));
        assert_eq!(
            Presentation::parse("replaceRoot"),
            Some(Presentation::ReplaceRoot)
        );
        assert_eq!(Presentation::parse("Replace"), None);
    }

    #[test]
    fn proposal_reads_axes_from_properties() {
        let props = Properties::new()
            .with(CONTEXT_KEY, "modal")
            .with(PRESENTATION_KEY, "replace");
        let p = VisitProposal::new("https://example.com/new", VisitAction::Replace, props);
        assert_eq!(p.context(), Context::Modal);
        assert_eq!(p.presentation(), Presentation::Replace);
        assert_eq!(p.action(), VisitAction::Replace);
        assert_eq!(p.location().path(), "/new");
    }

    #[test]
    fn advance_proposal_defaults_everything() {
        let p = VisitProposal::advance("https://example.com/");
        assert_eq!(p.action(), VisitAction::Advance);
        assert_eq!(p.context(), Context::Default);
        assert_eq!(p.presentation(), Presentation::Default);
    }
}
