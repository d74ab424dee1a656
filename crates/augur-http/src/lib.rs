//! # augur-http
//!
//! HTTP value objects shared by the routing, container and serving crates.
//!
//! This crate provides:
//! - [`Method`]: the accepted request methods, including the custom `INFO`
//!   method
//! - [`Uri`]: a path wrapper with `/`-segmentation
//! - [`Params`]: a string parameter map with typed access and merging
//! - [`Request`]: method, URI, parameters, cookies and body
//! - [`Header`], [`Content`], [`Response`]: the outgoing side
//! - [`Communicable`]: the capability of a value to transmit itself to an
//!   output channel
//!
//! ## Quick Start
//!
//! ```
//! use augur_http::{Request, Response, Communicable};
//!
//! let request = Request::get("/users/42");
//! assert_eq!(request.uri().segments(), vec!["users", "42"]);
//!
//! let response = Response::text("Hello, World!");
//! let mut wire = Vec::new();
//! response.send(&mut wire).unwrap();
//! assert!(wire.starts_with(b"HTTP/1.1 200 OK\r\n"));
//! ```

mod communicable;
mod content;
mod header;
mod method;
mod params;
mod request;
mod response;
mod uri;

pub use communicable::Communicable;
pub use content::Content;
pub use header::Header;
pub use method::Method;
pub use params::Params;
pub use request::Request;
pub use response::Response;
pub use uri::Uri;
