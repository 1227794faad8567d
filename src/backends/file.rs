//! JSON file backend.
//!
//! One value per file: the configured path is the store's identity, and the
//! file holds the value as JSON. Suited to configuration-sized data where a
//! database is overkill and a human-readable representation on disk helps.

use std::io;
use std::marker::PhantomData;
use std::path::PathBuf;

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::fs;

use crate::config::FileConfig;
use crate::errors::{BackendError, CodecError, StoreError, StoreResult};
use crate::traits::store::ValueStore;

/// Typed store persisting its value as one JSON file.
///
/// # Examples
///
/// ```rust,ignore
/// let store = FileStore::<Theme>::new(
///     FileConfig::builder().path("config/theme.json").pretty(true).build(),
/// );
/// let theme = store.load(&()).await?;
/// ```
pub struct FileStore<V> {
    config: FileConfig,
    identity: String,
    _value: PhantomData<fn() -> V>,
}

impl<V> FileStore<V>
where
    V: Serialize + DeserializeOwned + Send + Sync,
{
    pub fn new(config: FileConfig) -> Self {
        let identity = config.path.display().to_string();
        Self {
            config,
            identity,
            _value: PhantomData,
        }
    }

    /// Shorthand for a store at `path` with default options.
    pub fn at<P: Into<PathBuf>>(path: P) -> Self {
        Self::new(FileConfig::new(path))
    }

    pub fn config(&self) -> &FileConfig {
        &self.config
    }
}

impl<V> Clone for FileStore<V> {
    fn clone(&self) -> Self {
        FileStore {
            config: self.config.clone(),
            identity: self.identity.clone(),
            _value: PhantomData,
        }
    }
}

#[async_trait]
impl<V> ValueStore for FileStore<V>
where
    V: Serialize + DeserializeOwned + Send + Sync,
{
    type Context = ();
    type Value = V;

    async fn load(&self, _cx: &()) -> StoreResult<V> {
        let bytes = match fs::read(&self.config.path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Err(StoreError::not_found(self.identity.clone()));
            }
            Err(err) => return Err(StoreError::Backend(err.into())),
        };
        serde_json::from_slice(&bytes)
            .map_err(|err| StoreError::decoding(self.identity.clone(), err))
    }

    async fn save(&self, _cx: &(), value: V) -> StoreResult<V> {
        let bytes = if self.config.pretty {
            serde_json::to_vec_pretty(&value)
        } else {
            serde_json::to_vec(&value)
        }
        .map_err(|err| {
            StoreError::write(self.identity.clone(), BackendError::Codec(CodecError::Json(err)))
        })?;

        if self.config.create_dirs {
            if let Some(parent) = self.config.path.parent() {
                // A bare file name has an empty parent, nothing to create.
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)
                        .await
                        .map_err(|err| StoreError::write(self.identity.clone(), err))?;
                }
            }
        }

        fs::write(&self.config.path, bytes)
            .await
            .map_err(|err| StoreError::write(self.identity.clone(), err))?;
        Ok(value)
    }

    async fn remove(&self, _cx: &()) -> StoreResult<()> {
        match fs::remove_file(&self.config.path).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(StoreError::Backend(err.into())),
        }
    }

    fn identity(&self) -> &str {
        &self.identity
    }
}
