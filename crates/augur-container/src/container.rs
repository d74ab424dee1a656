//! The service container.

use std::any::{type_name, Any, TypeId};
use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, RwLock};

use augur_http::Request;

use crate::error::{ContainerError, Result};
use crate::handler::{Handler, HandlerRef, Reply};

type Factory = Arc<dyn Fn(&Container) -> Arc<dyn Any + Send + Sync> + Send + Sync>;

/// An explicit service registry with singleton-cache resolution.
///
/// Factories are registered per type; the first [`resolve`](Self::resolve)
/// for a type runs its factory and caches the instance, and every later
/// resolution returns the cached one. The container also carries the
/// named-handler registry consulted by [`call`](Self::call).
///
/// Cloning is cheap; clones share the same registry and cache. All
/// registration happens at bootstrap, reads happen during dispatch.
#[derive(Clone, Default)]
pub struct Container {
    inner: Arc<Inner>,
}

#[derive(Default)]
struct Inner {
    bindings: RwLock<HashMap<TypeId, Factory>>,
    instances: RwLock<HashMap<TypeId, Arc<dyn Any + Send + Sync>>>,
    handlers: RwLock<HashMap<String, Handler>>,
}

impl Container {
    /// Creates an empty container.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a factory for `T`, replacing any previous binding.
    pub fn bind<T, F>(&self, factory: F)
    where
        T: Send + Sync + 'static,
        F: Fn(&Self) -> T + Send + Sync + 'static,
    {
        let factory: Factory = Arc::new(move |container| Arc::new(factory(container)));
        self.inner
            .bindings
            .write()
            .expect("container lock poisoned")
            .insert(TypeId::of::<T>(), factory);
    }

    /// Seeds an already-built singleton of `T`.
    pub fn instance<T: Send + Sync + 'static>(&self, value: T) {
        self.inner
            .instances
            .write()
            .expect("container lock poisoned")
            .insert(TypeId::of::<T>(), Arc::new(value));
    }

    /// Returns whether `T` has a registered binding.
    pub fn bound<T: 'static>(&self) -> bool {
        self.inner
            .bindings
            .read()
            .expect("container lock poisoned")
            .contains_key(&TypeId::of::<T>())
    }

    /// Returns whether `T` has already been resolved or seeded.
    pub fn resolved<T: 'static>(&self) -> bool {
        self.inner
            .instances
            .read()
            .expect("container lock poisoned")
            .contains_key(&TypeId::of::<T>())
    }

    /// Resolves `T`, constructing and caching it on first resolution.
    ///
    /// Fails with [`ContainerError::Unbound`] when `T` has neither a
    /// binding nor a seeded instance.
    pub fn resolve<T: Send + Sync + 'static>(&self) -> Result<Arc<T>> {
        let key = TypeId::of::<T>();

        let cached = self
            .inner
            .instances
            .read()
            .expect("container lock poisoned")
            .get(&key)
            .cloned();
        if let Some(instance) = cached {
            return Self::downcast(instance);
        }

        let factory = self
            .inner
            .bindings
            .read()
            .expect("container lock poisoned")
            .get(&key)
            .cloned()
            .ok_or_else(|| ContainerError::Unbound(type_name::<T>()))?;

        // No lock is held while the factory runs, so factories may resolve
        // other services.
        let instance = factory(self);

        let mut instances = self.inner.instances.write().expect("container lock poisoned");
        let instance = instances.entry(key).or_insert(instance).clone();
        Self::downcast(instance)
    }

    /// Registers a named handler, replacing any previous one.
    pub fn handler<F, Fut>(&self, name: impl Into<String>, handler: F)
    where
        F: Fn(Self, Request) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Reply> + Send + 'static,
    {
        let handler: Handler = Arc::new(move |container, request| {
            Box::pin(handler(container, request))
        });
        self.inner
            .handlers
            .write()
            .expect("container lock poisoned")
            .insert(name.into(), handler);
    }

    /// Invokes a handler with this container and the request.
    ///
    /// Named references resolve through the handler registry at call time;
    /// an unknown name fails with [`ContainerError::UnknownHandler`].
    pub async fn call(&self, handler: &HandlerRef, request: Request) -> Result<Reply> {
        let callable = match handler {
            HandlerRef::Func(func) => func.clone(),
            HandlerRef::Named(name) => self
                .inner
                .handlers
                .read()
                .expect("container lock poisoned")
                .get(name)
                .cloned()
                .ok_or_else(|| ContainerError::UnknownHandler(name.clone()))?,
        };

        Ok(callable(self.clone(), request).await)
    }

    fn downcast<T: Send + Sync + 'static>(instance: Arc<dyn Any + Send + Sync>) -> Result<Arc<T>> {
        instance
            .downcast()
            .map_err(|_| ContainerError::Unbound(type_name::<T>()))
    }
}
