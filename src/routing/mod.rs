//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Navigation target ("/user/chapters/7?tab=all")
//!     → location.rs (split path / query / hash)
//!     → router.rs (static lookup, then ranked dynamic scan)
//!     → matcher.rs (segment comparison, param binding)
//!     → Resolution: Matched | Redirect | NotFound
//!
//! Table Compilation (at startup):
//!     RouteDefinition[]
//!     → pattern.rs (tokenize into literal / named segments)
//!     → Reject duplicates, ambiguity, bad redirects, cycles
//!     → Freeze as immutable RouteTable
//! ```
//!
//! # Design Decisions
//! - Routes compiled at startup, immutable at runtime
//! - No regex (segment comparison only)
//! - Deterministic: same input always resolves to the same outcome
//! - Static paths win over dynamic patterns

pub mod catalog;
pub mod definition;
pub mod error;
pub mod location;
pub mod matcher;
pub mod pattern;
pub mod resolution;
pub mod router;

pub use definition::{RouteDefinition, ViewId};
pub use error::{HrefError, NavigationError, RouteError, TableError};
pub use location::{Location, Query};
pub use resolution::{
    Navigation, NavigationOutcome, Params, RedirectInstruction, Resolution, ResolvedRoute,
};
pub use router::RouteTable;
