//! Route definitions as declared in configuration.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a view in the presentation layer. Opaque to the router.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ViewId(String);

impl ViewId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ViewId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// One entry of the route table.
///
/// Exactly one of `view` and `redirect` must be set; this is checked when the
/// table is built, not when the definition is deserialized, so that every
/// problem in a table can be reported together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteDefinition {
    /// Stable name used for reverse URL generation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Pattern such as `/user/attempt/:quiz_id`.
    pub path: String,

    /// View activated when the route matches.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub view: Option<ViewId>,

    /// Forward extracted path parameters to the view as its inputs.
    #[serde(default, rename = "props")]
    pub forward_params_as_props: bool,

    /// Navigate here instead of rendering.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirect: Option<String>,
}

impl RouteDefinition {
    /// A route rendering `view`.
    pub fn view(path: impl Into<String>, view: impl Into<ViewId>) -> Self {
        Self {
            name: None,
            path: path.into(),
            view: Some(view.into()),
            forward_params_as_props: false,
            redirect: None,
        }
    }

    /// A route redirecting to `to`.
    pub fn redirect(path: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            name: None,
            path: path.into(),
            view: None,
            forward_params_as_props: false,
            redirect: Some(to.into()),
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_props(mut self) -> Self {
        self.forward_params_as_props = true;
        self
    }
}
