//! Routing errors.
//!
//! Construction problems are collected into a [`TableError`] so a bad table
//! reports everything wrong with it at once. Navigation-time failures are
//! separate: an unmatched path is not an error, it is `Resolution::NotFound`.

use thiserror::Error;

/// A single problem found while compiling the route table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("malformed pattern '{path}': {reason}")]
    MalformedPattern { path: String, reason: String },

    #[error("parameter ':{name}' appears more than once in '{path}'")]
    DuplicateParam { path: String, name: String },

    #[error("route path '{path}' is declared more than once")]
    DuplicatePath { path: String },

    #[error("pattern '{path}' matches exactly the same paths as '{existing}'")]
    AmbiguousPattern { path: String, existing: String },

    #[error("route name '{name}' is declared more than once")]
    DuplicateName { name: String },

    #[error("route '{path}' must declare exactly one of `view` or `redirect`")]
    InvalidTarget { path: String },

    #[error("route '{path}' is a redirect and cannot forward params as props")]
    PropsOnRedirect { path: String },

    #[error("route '{path}' redirects to '{to}', which is not an absolute path")]
    InvalidRedirect { path: String, to: String },

    #[error("route '{path}' redirects to '{to}', which matches no route")]
    UnresolvableRedirect { path: String, to: String },

    #[error("redirect cycle: {}", .chain.join(" -> "))]
    RedirectCycle { chain: Vec<String> },

    #[error("no root route '/' is declared")]
    MissingRoot,

    #[error("root route '/' must be a redirect")]
    RootNotRedirect,

    #[error("not-found fallback '{to}' does not lead to a view")]
    InvalidFallback { to: String },

    #[error("route '{path}' needs {hops} redirects to reach a view, over the limit of {limit}")]
    RedirectChainTooLong {
        path: String,
        hops: usize,
        limit: usize,
    },

    #[error("not-found fallback '{to}' needs {hops} redirects to reach a view, over the limit of {limit}")]
    FallbackTooLong { to: String, hops: usize, limit: usize },
}

/// Every problem found while compiling a route table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("route table rejected: {}", join_errors(.errors))]
pub struct TableError {
    pub errors: Vec<RouteError>,
}

impl TableError {
    /// Returns true if any collected error matches the predicate.
    pub fn contains(&self, predicate: impl Fn(&RouteError) -> bool) -> bool {
        self.errors.iter().any(predicate)
    }
}

fn join_errors(errors: &[RouteError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Failure while following redirects.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    #[error("navigation to '{path}' exceeded {limit} redirects")]
    TooManyRedirects { path: String, limit: usize },
}

/// Failure while building a path from a named route.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HrefError {
    #[error("no route is named '{name}'")]
    UnknownRoute { name: String },

    #[error("route '{route}' needs a value for ':{param}'")]
    MissingParam { route: String, param: String },

    #[error("route '{route}' got an empty value for ':{param}'")]
    EmptyParam { route: String, param: String },
}
