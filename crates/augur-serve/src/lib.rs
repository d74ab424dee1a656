//! # augur-serve
//!
//! Request capture, dispatch glue and TCP serving.
//!
//! This crate ties the other pieces together:
//! - [`capture`]: one raw HTTP/1.1 request into a
//!   [`Request`](augur_http::Request) with its method, decoded path,
//!   merged query/form parameters, cookies and body
//! - [`dispatch`]: the provider sequence of resolving the route, invoking
//!   the handler through the container and transmitting a communicable
//!   reply
//! - [`Server`]: a tokio accept loop reading one request per connection
//!
//! ## Quick Start
//!
//! ```no_run
//! use augur_container::{reply, Container, HandlerRef};
//! use augur_http::Response;
//! use augur_router::Router;
//! use augur_serve::Server;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), augur_serve::ServeError> {
//!     let router = Router::new().get(
//!         "/hello/{name?}",
//!         HandlerRef::func(|_container, request| async move {
//!             let name = request.param("name").unwrap_or("world").to_string();
//!             reply(Response::text(format!("hello, {name}")))
//!         }),
//!     );
//!
//!     Server::new(router, Container::new())
//!         .listen("127.0.0.1:8080")
//!         .await
//! }
//! ```

mod capture;
mod dispatch;
mod error;
mod server;

pub use capture::capture;
pub use dispatch::dispatch;
pub use error::{CaptureError, Result, ServeError};
pub use server::Server;
