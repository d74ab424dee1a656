//! # augur-container
//!
//! A service container with singleton resolution and handler invocation.
//!
//! This crate provides:
//! - [`Container`]: an explicit, `TypeId`-keyed factory registry with a
//!   singleton instance cache and a named-handler registry
//! - [`HandlerRef`]: a handler reference, either a callable or a
//!   registered name resolved at call time
//! - [`Reply`]: a handler's outcome, a communicable value or nothing
//!
//! Dependency resolution is explicit: handlers receive the container and
//! resolve the services they need from it. Nothing is inferred from
//! signatures.
//!
//! ## Quick Start
//!
//! ```
//! use augur_container::{reply, Container, HandlerRef};
//! use augur_http::{Request, Response};
//!
//! struct Greeter {
//!     greeting: &'static str,
//! }
//!
//! let container = Container::new();
//! container.bind::<Greeter, _>(|_| Greeter { greeting: "hello" });
//!
//! let handler = HandlerRef::func(|container: Container, request: Request| async move {
//!     let greeter = container.resolve::<Greeter>().unwrap();
//!     reply(Response::text(format!("{} {}", greeter.greeting, request.uri())))
//! });
//! # let _ = handler;
//! ```

mod container;
mod error;
mod handler;

pub use container::Container;
pub use error::{ContainerError, Result};
pub use handler::{reply, Handler, HandlerRef, Reply};
