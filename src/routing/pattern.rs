//! Path pattern tokenizer.
//!
//! Patterns are parsed once, when the table is built, into a sequence of
//! literal and named segments. The root pattern `/` has zero segments.

use std::collections::HashSet;
use std::fmt;

use crate::routing::error::RouteError;

/// One `/`-separated piece of a pattern.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    /// Must equal the input segment exactly (case-sensitive).
    Literal(String),
    /// Binds any non-empty input segment to the parameter name.
    Param(String),
}

/// A pre-parsed route pattern such as `/user/chapters/:subject_id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPattern {
    raw: String,
    segments: Vec<Segment>,
}

impl PathPattern {
    /// Parse a pattern string.
    ///
    /// Rejects patterns that do not start with `/`, contain empty segments
    /// (including a trailing slash), carry a query or fragment, use an invalid
    /// parameter name, or repeat a parameter name.
    pub fn parse(raw: &str) -> Result<Self, RouteError> {
        let rest = raw
            .strip_prefix('/')
            .ok_or_else(|| malformed(raw, "must start with '/'"))?;

        let mut segments = Vec::new();
        let mut seen = HashSet::new();

        if !rest.is_empty() {
            for part in rest.split('/') {
                if part.is_empty() {
                    return Err(malformed(raw, "empty segment"));
                }
                if part.contains(['?', '#']) {
                    return Err(malformed(raw, "query or fragment in pattern"));
                }

                match part.strip_prefix(':') {
                    Some(name) => {
                        if !is_valid_param_name(name) {
                            return Err(malformed(
                                raw,
                                &format!("invalid parameter name '{name}'"),
                            ));
                        }
                        if !seen.insert(name) {
                            return Err(RouteError::DuplicateParam {
                                path: raw.to_string(),
                                name: name.to_string(),
                            });
                        }
                        segments.push(Segment::Param(name.to_string()));
                    }
                    None => segments.push(Segment::Literal(part.to_string())),
                }
            }
        }

        Ok(Self {
            raw: raw.to_string(),
            segments,
        })
    }

    /// The pattern as written.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// True when the pattern has no named segments.
    pub fn is_static(&self) -> bool {
        self.segments
            .iter()
            .all(|s| matches!(s, Segment::Literal(_)))
    }

    /// Number of literal segments, used to rank competing dynamic patterns.
    pub fn literal_count(&self) -> usize {
        self.segments
            .iter()
            .filter(|s| matches!(s, Segment::Literal(_)))
            .count()
    }

    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|s| match s {
            Segment::Param(name) => Some(name.as_str()),
            Segment::Literal(_) => None,
        })
    }

    /// The matchable shape of the pattern: parameter names are erased, so
    /// `/a/:x` and `/a/:y` share a shape.
    pub fn shape(&self) -> Vec<Option<&str>> {
        self.segments
            .iter()
            .map(|s| match s {
                Segment::Literal(lit) => Some(lit.as_str()),
                Segment::Param(_) => None,
            })
            .collect()
    }
}

impl fmt::Display for PathPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

fn malformed(raw: &str, reason: &str) -> RouteError {
    RouteError::MalformedPattern {
        path: raw.to_string(),
        reason: reason.to_string(),
    }
}

fn is_valid_param_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}
