//! In-memory backend.
//!
//! A [`MemoryBackend`] owns a shared slot map; [`MemoryBackend::value_store`]
//! hands out typed stores over individual slots. Handles are cheap clones of
//! the same map, so two stores built from one backend with the same key see
//! each other's writes. The backend is bound to a single key enum, so every
//! slot name is drawn from one closed set and keys from unrelated enums
//! cannot address its slots. Values pass through the bincode codec like any
//! byte backend, so the memory backend exercises the same encode/decode
//! paths as the persistent ones.
//!
//! # Examples
//!
//! ```
//! use strum::{AsRefStr, EnumIter};
//! use valet_store::backends::memory::MemoryBackend;
//! use valet_store::traits::store::ValueStore;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, EnumIter)]
//! enum PrefKey {
//!     Greeting,
//! }
//!
//! # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
//! let backend = MemoryBackend::<PrefKey>::new();
//! let store = backend.value_store::<String>(PrefKey::Greeting);
//!
//! store.save(&(), "hello".to_string()).await?;
//! assert_eq!(store.load(&()).await?, "hello");
//! # Ok::<(), valet_store::errors::StoreError>(())
//! # }).unwrap();
//! ```

use std::collections::HashMap;
use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::config::MemoryConfig;
use crate::errors::{BackendError, StoreError, StoreResult};
use crate::traits::convert::ToBytes;
use crate::traits::key::StoreKey;
use crate::traits::store::ValueStore;

type SlotMap = Arc<RwLock<HashMap<String, Vec<u8>>>>;

/// Shared in-memory slot map from which typed stores are created.
///
/// The backend is bound to one key enum. A key from a different enum does
/// not compile, even when a variant name matches:
///
/// ```compile_fail
/// use strum::{AsRefStr, EnumIter};
/// use valet_store::backends::memory::MemoryBackend;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, EnumIter)]
/// enum ThemeKey {
///     Accent,
/// }
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, EnumIter)]
/// enum EditorKey {
///     Accent,
/// }
///
/// let backend = MemoryBackend::<ThemeKey>::new();
/// let store = backend.value_store::<String>(EditorKey::Accent);
/// ```
#[derive(Clone)]
pub struct MemoryBackend<K>
where
    K: StoreKey,
{
    slots: SlotMap,
    _keys: PhantomData<K>,
}

impl<K> MemoryBackend<K>
where
    K: StoreKey,
{
    pub fn new() -> Self {
        Self::with_config(MemoryConfig::default())
    }

    pub fn with_config(config: MemoryConfig) -> Self {
        Self {
            slots: Arc::new(RwLock::new(HashMap::with_capacity(config.initial_capacity))),
            _keys: PhantomData,
        }
    }

    /// Create a typed store over the slot named by `key`.
    ///
    /// The value type must be representable by the bincode codec; anything
    /// else is rejected at compile time.
    pub fn value_store<V>(&self, key: K) -> MemoryStore<V>
    where
        V: ToBytes + Send + Sync,
    {
        MemoryStore {
            slots: self.slots.clone(),
            identity: key.as_ref().to_owned(),
            _value: PhantomData,
        }
    }

    /// Number of occupied slots.
    pub async fn len(&self) -> usize {
        self.slots.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.slots.read().await.is_empty()
    }

    /// Drop every slot. Mostly useful between test cases.
    pub async fn clear(&self) {
        self.slots.write().await.clear();
    }
}

impl<K> Default for MemoryBackend<K>
where
    K: StoreKey,
{
    fn default() -> Self {
        Self::new()
    }
}

/// Typed store over one slot of a [`MemoryBackend`].
pub struct MemoryStore<V> {
    slots: SlotMap,
    identity: String,
    _value: PhantomData<fn() -> V>,
}

impl<V> Clone for MemoryStore<V> {
    fn clone(&self) -> Self {
        MemoryStore {
            slots: self.slots.clone(),
            identity: self.identity.clone(),
            _value: PhantomData,
        }
    }
}

#[async_trait]
impl<V> ValueStore for MemoryStore<V>
where
    V: ToBytes + Send + Sync,
{
    type Context = ();
    type Value = V;

    async fn load(&self, _cx: &()) -> StoreResult<V> {
        let slots = self.slots.read().await;
        let bytes = slots
            .get(&self.identity)
            .ok_or_else(|| StoreError::not_found(self.identity.clone()))?;
        V::from_bytes(bytes).map_err(|err| StoreError::decoding(self.identity.clone(), err))
    }

    async fn save(&self, _cx: &(), value: V) -> StoreResult<V> {
        let bytes = value
            .to_bytes()
            .map_err(|err| StoreError::write(self.identity.clone(), BackendError::Codec(err)))?;
        self.slots.write().await.insert(self.identity.clone(), bytes);
        Ok(value)
    }

    async fn remove(&self, _cx: &()) -> StoreResult<()> {
        self.slots.write().await.remove(&self.identity);
        Ok(())
    }

    fn identity(&self) -> &str {
        &self.identity
    }
}
