//! Zero-downtime migration between two stores of the same shape.
//!
//! [`replacing`] composes a legacy store and its replacement into one store
//! that reads through to the legacy data and opportunistically copies it
//! forward on first access. No synchronous bulk migration step is needed, and
//! no data is lost if the forward copy fails: the read still succeeds and
//! the copy is simply attempted again on the next load.
//!
//! # Policy
//!
//! The `new` store is authoritative:
//!
//! - `load` consults `old` only when `new` reports [`NotFound`]; any other
//!   failure from `new` propagates untouched, without reading `old`.
//! - `save` and `remove` go to `new` alone. The legacy store is never
//!   written to and never cleared, so clients that have not switched over
//!   yet keep working against intact data.
//! - When both stores come up empty, the failure reported is `new`'s, since
//!   it describes the authoritative target.
//!
//! The forward copy during `load` is best-effort: its failure is logged and
//! discarded, never surfaced to the caller, never retried inline. The value
//! returned is always the one that was read.
//!
//! # Examples
//!
//! ```rust,ignore
//! use valet_store::replacing::replacing;
//!
//! // Settings used to live in a flat file; they are moving into sled.
//! let legacy = FileStore::<Settings>::new(FileConfig::new("settings.json"));
//! let target = sled_backend.value_store::<Settings>(ConfigKey::Settings);
//!
//! let settings = replacing(legacy, target);
//! // First load copies the file contents into sled; later loads hit sled only.
//! let current = settings.load(&()).await?;
//! ```
//!
//! Combinators nest: `replacing(replacing(oldest, older), newest)` walks
//! three generations, copying one hop forward per level on each load.
//!
//! [`NotFound`]: crate::errors::StoreError::NotFound

use async_trait::async_trait;
use log::{debug, warn};

use crate::errors::StoreResult;
use crate::traits::store::ValueStore;

/// Compose `old` and `new` into a store that migrates data forward on read.
///
/// Both stores must share the same `(Context, Value)` shape. The returned
/// store reports `new`'s identity.
pub fn replacing<Old, New>(old: Old, new: New) -> Replacing<Old, New>
where
    Old: ValueStore,
    New: ValueStore<Context = Old::Context, Value = Old::Value>,
    Old::Value: Clone,
{
    Replacing { old, new }
}

/// Store produced by [`replacing`]. See the module docs for the policy.
pub struct Replacing<Old, New> {
    old: Old,
    new: New,
}

impl<Old: Clone, New: Clone> Clone for Replacing<Old, New> {
    fn clone(&self) -> Self {
        Replacing {
            old: self.old.clone(),
            new: self.new.clone(),
        }
    }
}

#[async_trait]
impl<Old, New> ValueStore for Replacing<Old, New>
where
    Old: ValueStore,
    New: ValueStore<Context = Old::Context, Value = Old::Value>,
    Old::Value: Clone,
{
    type Context = New::Context;
    type Value = New::Value;

    async fn load(&self, cx: &Self::Context) -> StoreResult<Self::Value> {
        let absent = match self.new.load(cx).await {
            Ok(value) => return Ok(value),
            Err(err) if err.is_not_found() => err,
            Err(err) => return Err(err),
        };

        debug!(
            "no value in `{}`, falling back to legacy `{}`",
            self.new.identity(),
            self.old.identity()
        );

        let value = match self.old.load(cx).await {
            Ok(value) => value,
            Err(err) => {
                debug!("legacy `{}` has no usable value: {err}", self.old.identity());
                // The authoritative store's failure is the one callers see.
                return Err(absent);
            }
        };

        // Best-effort forward copy. A failure never fails the read; the
        // copy runs again on the next load.
        if let Err(err) = self.new.save(cx, value.clone()).await {
            warn!(
                "forward copy into `{}` failed, will retry on next load: {err}",
                self.new.identity()
            );
        }

        Ok(value)
    }

    async fn save(&self, cx: &Self::Context, value: Self::Value) -> StoreResult<Self::Value> {
        self.new.save(cx, value).await
    }

    async fn remove(&self, cx: &Self::Context) -> StoreResult<()> {
        self.new.remove(cx).await
    }

    fn identity(&self) -> &str {
        self.new.identity()
    }
}
