//! Outcomes of resolving and navigating.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::routing::definition::ViewId;
use crate::routing::location::Query;

/// Parameter name to extracted value.
pub type Params = BTreeMap<String, String>;

/// A path that resolved to a renderable view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedRoute {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// The pattern that matched.
    pub pattern: String,
    /// The concrete path that was matched.
    pub path: String,
    pub view: ViewId,
    /// Every named segment bound by the match.
    pub params: Params,
    /// Inputs handed to the view; empty unless the route forwards props.
    pub props: Params,
    pub query: Query,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
}

/// Navigation should restart at `to`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RedirectInstruction {
    pub from: String,
    pub to: String,
}

/// Result of a single resolution step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Resolution {
    Matched(ResolvedRoute),
    Redirect(RedirectInstruction),
    NotFound { path: String },
}

impl Resolution {
    pub fn route(&self) -> Option<&ResolvedRoute> {
        match self {
            Resolution::Matched(route) => Some(route),
            _ => None,
        }
    }

    pub fn redirect(&self) -> Option<&RedirectInstruction> {
        match self {
            Resolution::Redirect(instruction) => Some(instruction),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Resolution::NotFound { .. })
    }

    /// Short label for logs and metrics.
    pub fn outcome(&self) -> &'static str {
        match self {
            Resolution::Matched(_) => "matched",
            Resolution::Redirect(_) => "redirect",
            Resolution::NotFound { .. } => "not_found",
        }
    }
}

/// Where a navigation finally landed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum NavigationOutcome {
    Render(ResolvedRoute),
    NotFound { path: String },
}

/// A navigation with every redirect it followed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Navigation {
    pub requested: String,
    pub redirects: Vec<RedirectInstruction>,
    #[serde(flatten)]
    pub outcome: NavigationOutcome,
}

impl Navigation {
    pub fn route(&self) -> Option<&ResolvedRoute> {
        match &self.outcome {
            NavigationOutcome::Render(route) => Some(route),
            NavigationOutcome::NotFound { .. } => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self.outcome, NavigationOutcome::NotFound { .. })
    }

    pub fn was_redirected(&self) -> bool {
        !self.redirects.is_empty()
    }

    pub fn outcome(&self) -> &'static str {
        match self.outcome {
            NavigationOutcome::Render(_) => "matched",
            NavigationOutcome::NotFound { .. } => "not_found",
        }
    }
}
