//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware)
//!     → request.rs (assign request ID)
//!     → /_nav/*   → handlers.rs (health, route table, navigation JSON)
//!     → any other → shell.rs (resolve path, serve shell / redirect / 404)
//! ```

pub mod handlers;
pub mod request;
pub mod server;
pub mod shell;

pub use request::{RequestIdExt, UuidRequestId, X_REQUEST_ID};
pub use server::{AppState, HttpServer, ServerError};
pub use shell::{ShellDocument, X_NAVIGATOR_VIEW};
