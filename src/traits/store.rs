//! The core store contract: typed access to one logical persisted value.
//!
//! A [`ValueStore`] bundles the three operations (`load`, `save`, `remove`)
//! over exactly one value, with the value's identity fixed when the store is
//! constructed. There is no keyed map at this level: a store *is* the key,
//! which removes the key-typo and key-collision failure class by
//! construction. Whatever dynamic parameters an operation needs (credentials,
//! a tenant handle, a network session) travel through the associated
//! `Context` type, passed explicitly on every call.

use std::sync::Arc;

use async_trait::async_trait;

use crate::errors::StoreResult;

/// Typed, asynchronous access to a single logical persisted value.
///
/// # Type Parameters (associated)
///
/// * `Context` - Caller-supplied dynamic parameters passed to every
///   operation. Use `()` when none are needed.
/// * `Value` - The one value type this store persists. Fixed at
///   construction, so load/save can never disagree about the type.
///
/// # Design
///
/// A store carries no mutable state of its own; any state lives in the
/// backing mechanism the concrete implementation references (a slot map, a
/// file, an embedded database, a remote endpoint). Construction happens once
/// per logical value, typically at application wiring time, and dropping a
/// store has no side effects.
///
/// The trait imposes no ordering or mutual-exclusion guarantees across
/// concurrent calls on the same store; read-after-write consistency is the
/// backend's responsibility. Cancellation propagates through the usual
/// future-drop semantics of the host runtime. There is no retry logic at
/// this layer.
#[async_trait]
pub trait ValueStore: Send + Sync {
    type Context: Send + Sync;
    type Value: Send;

    /// Retrieve the current value.
    ///
    /// # Returns
    ///
    /// * `Ok(value)` if a value is persisted and readable
    /// * `Err(StoreError::NotFound)` if no value exists under this identity
    /// * `Err(StoreError::Decoding)` if the stored representation cannot be
    ///   interpreted as `Value`
    /// * Any backend failure, surfaced verbatim
    async fn load(&self, cx: &Self::Context) -> StoreResult<Self::Value>;

    /// Persist `value` durably under this store's identity.
    ///
    /// # Returns
    ///
    /// The value that was actually stored. Backends that normalize on write
    /// return the normalized form; the rest echo the input. Fails with
    /// `StoreError::Write` when the backing mechanism rejects the write
    /// (permission, capacity, connectivity, encoding).
    async fn save(&self, cx: &Self::Context, value: Self::Value) -> StoreResult<Self::Value>;

    /// Delete any existing value.
    ///
    /// Removal is idempotent: succeeds as a no-op when nothing is persisted.
    /// Fails only on backing-mechanism errors.
    async fn remove(&self, cx: &Self::Context) -> StoreResult<()>;

    /// The construction-time identity of this store, for diagnostics and
    /// error messages (a key name, a file path, a tree entry).
    fn identity(&self) -> &str;
}

/// Shared, type-erased store handle for application wiring.
pub type SharedStore<C, V> = Arc<dyn ValueStore<Context = C, Value = V>>;

#[async_trait]
impl<S> ValueStore for Arc<S>
where
    S: ValueStore + ?Sized,
{
    type Context = S::Context;
    type Value = S::Value;

    async fn load(&self, cx: &Self::Context) -> StoreResult<Self::Value> {
        (**self).load(cx).await
    }

    async fn save(&self, cx: &Self::Context, value: Self::Value) -> StoreResult<Self::Value> {
        (**self).save(cx, value).await
    }

    async fn remove(&self, cx: &Self::Context) -> StoreResult<()> {
        (**self).remove(cx).await
    }

    fn identity(&self) -> &str {
        (**self).identity()
    }
}

#[async_trait]
impl<S> ValueStore for Box<S>
where
    S: ValueStore + ?Sized,
{
    type Context = S::Context;
    type Value = S::Value;

    async fn load(&self, cx: &Self::Context) -> StoreResult<Self::Value> {
        (**self).load(cx).await
    }

    async fn save(&self, cx: &Self::Context, value: Self::Value) -> StoreResult<Self::Value> {
        (**self).save(cx, value).await
    }

    async fn remove(&self, cx: &Self::Context) -> StoreResult<()> {
        (**self).remove(cx).await
    }

    fn identity(&self) -> &str {
        (**self).identity()
    }
}
