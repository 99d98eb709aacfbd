//! Navigation targets as they arrive from links, the address bar, or code.
//!
//! A raw target such as `/user/quizzes/4?page=2#top` is split into path, query
//! and fragment before matching. Only the path takes part in matching.

use serde::Serialize;

use crate::config::TrailingSlash;

/// Decoded query string pairs, in the order they appeared.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Query(Vec<(String, String)>);

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode an `application/x-www-form-urlencoded` query string.
    pub fn parse(raw: &str) -> Self {
        Self(
            url::form_urlencoded::parse(raw.as_bytes())
                .into_owned()
                .collect(),
        )
    }

    /// First value for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.push((key.into(), value.into()));
    }

    pub fn extend(&mut self, other: Query) {
        self.0.extend(other.0);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Encode back into a query string, without the leading `?`.
    pub fn encode(&self) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(&self.0)
            .finish()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Query {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// A navigation target split into its parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    path: String,
    query: Query,
    hash: Option<String>,
}

impl Location {
    pub fn parse(input: &str, trailing_slash: TrailingSlash) -> Self {
        let (rest, hash) = match input.split_once('#') {
            Some((rest, hash)) => (rest, Some(hash.to_string())),
            None => (input, None),
        };
        let (path, query) = match rest.split_once('?') {
            Some((path, query)) => (path, Query::parse(query)),
            None => (rest, Query::new()),
        };

        let path = match trailing_slash {
            TrailingSlash::Strict => path,
            TrailingSlash::Lenient => {
                let trimmed = path.trim_end_matches('/');
                if trimmed.is_empty() && path.starts_with('/') {
                    "/"
                } else {
                    trimmed
                }
            }
        };

        Self {
            path: path.to_string(),
            query,
            hash,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn query(&self) -> &Query {
        &self.query
    }

    pub fn hash(&self) -> Option<&str> {
        self.hash.as_deref()
    }

    pub fn query_mut(&mut self) -> &mut Query {
        &mut self.query
    }

    pub fn into_parts(self) -> (String, Query, Option<String>) {
        (self.path, self.query, self.hash)
    }

    /// Path segments, or `None` for a relative path (which never matches).
    pub fn segments(&self) -> Option<Vec<&str>> {
        let rest = self.path.strip_prefix('/')?;
        if rest.is_empty() {
            return Some(Vec::new());
        }
        Some(rest.split('/').collect())
    }
}
