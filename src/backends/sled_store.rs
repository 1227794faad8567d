//! Persistent backend on top of the [sled](https://docs.rs/sled) embedded database.
//!
//! One tree per backend, named by the configured namespace. The backend is
//! bound to a single key enum and each value store handed out by
//! [`SledBackend::value_store`] owns a single key in that tree, so stores for
//! different keys never collide and keys from unrelated enums never reach the
//! tree. Sled's API is synchronous, so every tree operation runs on the
//! blocking pool.

use std::marker::PhantomData;

use async_trait::async_trait;
use tokio::task::spawn_blocking;

use crate::config::SledConfig;
use crate::errors::{BackendError, StoreError, StoreResult};
use crate::traits::convert::ToBytes;
use crate::traits::key::StoreKey;
use crate::traits::store::ValueStore;

/// Handle to an open sled database plus the tree holding the values.
///
/// Cloning is cheap and clones share the same database. The backend is bound
/// to one key enum; a key from a different enum does not compile.
///
/// # Examples
///
/// ```rust,ignore
/// let backend = SledBackend::<SettingsKey>::new(SledConfig::new("data/settings.db"))?;
/// let store = backend.value_store::<Theme>(SettingsKey::Theme);
/// ```
#[derive(Clone)]
pub struct SledBackend<K>
where
    K: StoreKey,
{
    db: sled::Db,
    tree: sled::Tree,
    namespace: String,
    flush_on_write: bool,
    _keys: PhantomData<K>,
}

impl<K> SledBackend<K>
where
    K: StoreKey,
{
    /// Open the database described by `config`.
    pub fn new(config: SledConfig) -> Result<Self, BackendError> {
        let db = sled::Config::new()
            .path(&config.path)
            .cache_capacity((config.cache_size_mb as u64) * 1024 * 1024)
            .temporary(config.temporary)
            .open()?;
        Self::with_db(db, config.namespace, config.flush_on_write)
    }

    /// Open a throwaway database at a fresh path, deleted on drop (useful
    /// for testing).
    pub fn temp() -> Result<Self, BackendError> {
        let db = sled::Config::new().temporary(true).open()?;
        Self::with_db(db, String::from("values"), true)
    }

    fn with_db(
        db: sled::Db,
        namespace: String,
        flush_on_write: bool,
    ) -> Result<Self, BackendError> {
        let tree = db.open_tree(namespace.as_bytes())?;
        Ok(Self {
            db,
            tree,
            namespace,
            flush_on_write,
            _keys: PhantomData,
        })
    }

    /// Get direct access to the underlying sled database
    pub fn db(&self) -> &sled::Db {
        &self.db
    }

    /// Typed store for one enumerated key.
    pub fn value_store<V>(&self, key: K) -> SledValueStore<V>
    where
        V: ToBytes + Send + Sync,
    {
        let key = key.as_ref().to_string();
        SledValueStore {
            tree: self.tree.clone(),
            identity: format!("{}/{}", self.namespace, key),
            key,
            flush_on_write: self.flush_on_write,
            _value: PhantomData,
        }
    }

    /// Flush the database to disk
    pub fn flush(&self) -> Result<usize, BackendError> {
        Ok(self.db.flush()?)
    }
}

/// Store for a single key inside a [`SledBackend`] tree.
pub struct SledValueStore<V> {
    tree: sled::Tree,
    identity: String,
    key: String,
    flush_on_write: bool,
    _value: PhantomData<fn() -> V>,
}

impl<V> Clone for SledValueStore<V> {
    fn clone(&self) -> Self {
        SledValueStore {
            tree: self.tree.clone(),
            identity: self.identity.clone(),
            key: self.key.clone(),
            flush_on_write: self.flush_on_write,
            _value: PhantomData,
        }
    }
}

#[async_trait]
impl<V> ValueStore for SledValueStore<V>
where
    V: ToBytes + Send + Sync,
{
    type Context = ();
    type Value = V;

    async fn load(&self, _cx: &()) -> StoreResult<V> {
        let tree = self.tree.clone();
        let key = self.key.clone();
        let found = spawn_blocking(move || tree.get(key.as_bytes()))
            .await
            .map_err(BackendError::from)?
            .map_err(BackendError::from)?;
        let bytes = found.ok_or_else(|| StoreError::not_found(self.identity.clone()))?;
        V::from_bytes(&bytes).map_err(|err| StoreError::decoding(self.identity.clone(), err))
    }

    async fn save(&self, _cx: &(), value: V) -> StoreResult<V> {
        let bytes = value.to_bytes().map_err(|err| {
            StoreError::write(self.identity.clone(), BackendError::Codec(err))
        })?;
        let tree = self.tree.clone();
        let key = self.key.clone();
        let flush = self.flush_on_write;
        let outcome = spawn_blocking(move || {
            tree.insert(key.as_bytes(), bytes)?;
            if flush {
                tree.flush()?;
            }
            Ok::<(), sled::Error>(())
        })
        .await;
        match outcome {
            Ok(Ok(())) => Ok(value),
            Ok(Err(err)) => Err(StoreError::write(self.identity.clone(), err)),
            Err(err) => Err(StoreError::write(self.identity.clone(), err)),
        }
    }

    async fn remove(&self, _cx: &()) -> StoreResult<()> {
        let tree = self.tree.clone();
        let key = self.key.clone();
        let flush = self.flush_on_write;
        let outcome = spawn_blocking(move || {
            let previous = tree.remove(key.as_bytes())?;
            if flush && previous.is_some() {
                tree.flush()?;
            }
            Ok::<(), sled::Error>(())
        })
        .await;
        match outcome {
            Ok(Ok(())) => Ok(()),
            Ok(Err(err)) => Err(StoreError::Backend(err.into())),
            Err(err) => Err(StoreError::Backend(err.into())),
        }
    }

    fn identity(&self) -> &str {
        &self.identity
    }
}
