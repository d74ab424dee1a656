//! Handler references and invocation types.

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use augur_http::{Communicable, Request};
use futures::future::BoxFuture;

use crate::Container;

/// A handler's return value: a communicable reply, or nothing.
///
/// The dispatch glue sends a `Some` reply to the output channel and
/// discards `None`.
pub type Reply = Option<Box<dyn Communicable + Send>>;

/// A boxed async handler, invoked with the container and the request.
pub type Handler = Arc<dyn Fn(Container, Request) -> BoxFuture<'static, Reply> + Send + Sync>;

/// Wraps a value in a communicable reply.
pub fn reply(value: impl Communicable + Send + 'static) -> Reply {
    Some(Box::new(value))
}

/// A handler reference: a callable, or a name resolved through the
/// container's handler registry at call time.
#[derive(Clone)]
pub enum HandlerRef {
    /// A directly callable handler.
    Func(Handler),
    /// The name of a registered handler.
    Named(String),
}

impl HandlerRef {
    /// Wraps an async closure.
    pub fn func<F, Fut>(f: F) -> Self
    where
        F: Fn(Container, Request) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Reply> + Send + 'static,
    {
        Self::Func(Arc::new(move |container, request| {
            Box::pin(f(container, request))
        }))
    }

    /// Refers to a handler registered by name.
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }
}

impl fmt::Debug for HandlerRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Func(_) => f.write_str("HandlerRef::Func"),
            Self::Named(name) => write!(f, "HandlerRef::Named({name})"),
        }
    }
}
