// Common test utilities and helpers

use std::marker::PhantomData;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use strum::{AsRefStr, EnumIter};
use valet_store::errors::{BackendError, StoreError, StoreResult};
use valet_store::traits::store::ValueStore;

/// Key enumeration shared by the integration tests.
#[derive(AsRefStr, EnumIter, Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum PrefKey {
    Greeting,
    Theme,
    AccentColor,
}

/// Route log output through the test harness.
#[allow(dead_code)]
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Wrapper that counts every operation passed to the inner store.
pub struct CountingStore<S> {
    inner: S,
    loads: Arc<AtomicUsize>,
    saves: Arc<AtomicUsize>,
    removes: Arc<AtomicUsize>,
}

#[allow(dead_code)]
impl<S> CountingStore<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            loads: Arc::new(AtomicUsize::new(0)),
            saves: Arc::new(AtomicUsize::new(0)),
            removes: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn load_count(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }

    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    pub fn remove_count(&self) -> usize {
        self.removes.load(Ordering::SeqCst)
    }

    /// Handles to the counters, usable after the store is moved away.
    pub fn counters(&self) -> (Arc<AtomicUsize>, Arc<AtomicUsize>, Arc<AtomicUsize>) {
        (self.loads.clone(), self.saves.clone(), self.removes.clone())
    }
}

#[async_trait]
impl<S> ValueStore for CountingStore<S>
where
    S: ValueStore,
{
    type Context = S::Context;
    type Value = S::Value;

    async fn load(&self, cx: &Self::Context) -> StoreResult<Self::Value> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        self.inner.load(cx).await
    }

    async fn save(&self, cx: &Self::Context, value: Self::Value) -> StoreResult<Self::Value> {
        self.saves.fetch_add(1, Ordering::SeqCst);
        self.inner.save(cx, value).await
    }

    async fn remove(&self, cx: &Self::Context) -> StoreResult<()> {
        self.removes.fetch_add(1, Ordering::SeqCst);
        self.inner.remove(cx).await
    }

    fn identity(&self) -> &str {
        self.inner.identity()
    }
}

/// Store whose every operation fails with a backend error.
pub struct FailingStore<V> {
    identity: String,
    _value: PhantomData<fn() -> V>,
}

#[allow(dead_code)]
impl<V> FailingStore<V> {
    pub fn new(identity: &str) -> Self {
        Self {
            identity: identity.to_string(),
            _value: PhantomData,
        }
    }
}

#[async_trait]
impl<V> ValueStore for FailingStore<V>
where
    V: Send,
{
    type Context = ();
    type Value = V;

    async fn load(&self, _cx: &()) -> StoreResult<V> {
        Err(StoreError::Backend(BackendError::other("backend offline")))
    }

    async fn save(&self, _cx: &(), _value: V) -> StoreResult<V> {
        Err(StoreError::Backend(BackendError::other("backend offline")))
    }

    async fn remove(&self, _cx: &()) -> StoreResult<()> {
        Err(StoreError::Backend(BackendError::other("backend offline")))
    }

    fn identity(&self) -> &str {
        &self.identity
    }
}

/// Wrapper that reads through to the inner store but rejects every write.
pub struct WriteRejectingStore<S> {
    inner: S,
}

#[allow(dead_code)]
impl<S> WriteRejectingStore<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<S> ValueStore for WriteRejectingStore<S>
where
    S: ValueStore,
{
    type Context = S::Context;
    type Value = S::Value;

    async fn load(&self, cx: &Self::Context) -> StoreResult<Self::Value> {
        self.inner.load(cx).await
    }

    async fn save(&self, _cx: &Self::Context, _value: Self::Value) -> StoreResult<Self::Value> {
        Err(StoreError::write(
            self.inner.identity().to_string(),
            BackendError::other("store is read only"),
        ))
    }

    async fn remove(&self, _cx: &Self::Context) -> StoreResult<()> {
        Err(StoreError::write(
            self.inner.identity().to_string(),
            BackendError::other("store is read only"),
        ))
    }

    fn identity(&self) -> &str {
        self.inner.identity()
    }
}
