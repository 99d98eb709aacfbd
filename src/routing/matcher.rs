//! Segment-wise path matching.
//!
//! # Responsibilities
//! - Compare input path segments against a pre-parsed pattern
//! - Bind named segments to their (percent-decoded) values
//!
//! # Design Decisions
//! - Segment counts must be equal: `/user/chapters/7/extra` never matches
//!   `/user/chapters/:subject_id`
//! - Literal segments are compared exactly (case-sensitive, still encoded)
//! - Empty segments never bind a parameter
//! - No regex, matching is O(segments)

use std::borrow::Cow;

use crate::routing::pattern::{PathPattern, Segment};
use crate::routing::resolution::Params;

/// Something that can match a tokenized input path.
pub trait Matcher: Send + Sync + std::fmt::Debug {
    /// Returns the bound parameters if the segments match.
    fn matches(&self, segments: &[&str]) -> Option<Params>;
}

impl Matcher for PathPattern {
    fn matches(&self, segments: &[&str]) -> Option<Params> {
        if self.segments().len() != segments.len() {
            return None;
        }

        let mut params = Params::new();
        for (expected, actual) in self.segments().iter().zip(segments) {
            match expected {
                Segment::Literal(lit) => {
                    if lit != actual {
                        return None;
                    }
                }
                Segment::Param(name) => {
                    if actual.is_empty() {
                        return None;
                    }
                    params.insert(name.clone(), decode_segment(actual).into_owned());
                }
            }
        }
        Some(params)
    }
}

/// Percent-decode a path segment, keeping it verbatim if it is not valid UTF-8
/// once decoded.
fn decode_segment(raw: &str) -> Cow<'_, str> {
    urlencoding::decode(raw).unwrap_or(Cow::Borrowed(raw))
}
