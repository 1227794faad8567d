//! Adapter for pairing unit-context stores with context-carrying ones.
//!
//! Built-in backends take `Context = ()`. When a wiring needs one of them
//! next to a store whose operations require real call parameters (a session
//! token, a tenant handle), wrap the built-in in [`IgnoringContext`] so both
//! share the same context shape, typically to feed them into
//! [`replacing`](crate::replacing::replacing).

use std::marker::PhantomData;

use async_trait::async_trait;

use crate::errors::StoreResult;
use crate::traits::store::ValueStore;

/// Wrapper that accepts any context and discards it before delegating.
pub struct IgnoringContext<S, C> {
    inner: S,
    _context: PhantomData<fn(C)>,
}

/// Lift a `Context = ()` store into an arbitrary context shape.
///
/// # Examples
///
/// ```rust,ignore
/// let legacy = remote_store(session_endpoint);             // Context = Session
/// let local = backend.value_store::<Theme>(PrefKey::Theme);
/// let store = replacing(legacy, ignoring_context::<_, Session>(local));
/// ```
pub fn ignoring_context<S, C>(store: S) -> IgnoringContext<S, C>
where
    S: ValueStore<Context = ()>,
{
    IgnoringContext {
        inner: store,
        _context: PhantomData,
    }
}

impl<S: Clone, C> Clone for IgnoringContext<S, C> {
    fn clone(&self) -> Self {
        IgnoringContext {
            inner: self.inner.clone(),
            _context: PhantomData,
        }
    }
}

#[async_trait]
impl<S, C> ValueStore for IgnoringContext<S, C>
where
    S: ValueStore<Context = ()>,
    C: Send + Sync,
{
    type Context = C;
    type Value = S::Value;

    async fn load(&self, _cx: &C) -> StoreResult<Self::Value> {
        self.inner.load(&()).await
    }

    async fn save(&self, _cx: &C, value: Self::Value) -> StoreResult<Self::Value> {
        self.inner.save(&(), value).await
    }

    async fn remove(&self, _cx: &C) -> StoreResult<()> {
        self.inner.remove(&()).await
    }

    fn identity(&self) -> &str {
        self.inner.identity()
    }
}
