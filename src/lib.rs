//! Client-side navigation for the quiz management application.
//!
//! The route table maps URL paths to views, extracts named path segments as
//! view inputs, and resolves the root redirect. It is built once at startup,
//! never mutated, and shared freely between threads.
//!
//! ```
//! use quiz_navigator::{NavigatorConfig, RouteTable};
//!
//! let table = RouteTable::from_config(&NavigatorConfig::default()).unwrap();
//! let route = table.navigate("/user/chapters/7").unwrap();
//! assert_eq!(route.route().unwrap().view.as_str(), "UserChapters");
//! assert_eq!(route.route().unwrap().props["subject_id"], "7");
//! ```

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod routing;

pub use config::NavigatorConfig;
pub use http::HttpServer;
pub use lifecycle::{Shutdown, ShutdownListener};
pub use routing::{Navigation, Resolution, RouteDefinition, RouteTable};
