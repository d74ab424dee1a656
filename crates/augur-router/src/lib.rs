//! # augur-router
//!
//! URI pattern matching and route resolution.
//!
//! This crate provides:
//! - Pattern segments: literals, `{name}` required parameters, `{name?}`
//!   optional parameters and the `*` trailing wildcard
//! - [`Route`]: matching, parameter extraction and reverse routing
//! - [`Router`]: a first-match, registration-ordered registry with an
//!   optional [`Fallback`]
//! - [`RouteGroup`]: prefix-scoped registration sugar
//!
//! ## Quick Start
//!
//! ```
//! use augur_http::Request;
//! use augur_router::Router;
//!
//! let router = Router::new()
//!     .get("/", "home")
//!     .get("/users/{id}", "show_user")
//!     .with_fallback("not_found");
//!
//! let mut request = Request::get("/users/42");
//! let dispatched = router.handle_request(&mut request).unwrap();
//! assert_eq!(*dispatched.handler(), "show_user");
//! assert_eq!(request.param("id"), Some("42"));
//! ```
//!
//! ## Matching Rules
//!
//! Resolution iterates routes in registration order and returns the first
//! whose pattern accepts the URI; overlapping patterns are disambiguated
//! purely by registration order, so register literal routes before
//! parameterized ones. A matched route that rejects the request method is
//! an error even when a fallback exists; the fallback only covers the
//! no-route-matched case.

mod error;
mod pattern;
mod route;
mod router;

pub use error::{Result, RouterError};
pub use pattern::{param, Param, WILDCARD};
pub use route::{Fallback, Route};
pub use router::{Dispatched, RouteGroup, Router};
