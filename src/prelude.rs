//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and traits,
//! allowing users to get started quickly with a single import.
//!
//! # Usage
//!
//! ```rust,ignore
//! use valet_store::prelude::*;
//! ```
//!
//! # What's Included
//!
//! ## Core Traits
//!
//! - [`ValueStore`]: The load/save/remove capability bundle
//! - [`StoreKey`]: Marker for enumerated key types
//! - [`ToBytes`]: Byte codec used by the binary backends
//!
//! ## Combinators and Adapters
//!
//! - [`replacing`]: Compose an old and a new store into a migrating one
//! - [`ignoring_context`]: Use a context-free store where a context is expected
//!
//! ## Backends
//!
//! - [`MemoryBackend`] / [`MemoryStore`]: Process-local map, mainly for tests
//! - [`FileStore`]: One JSON file per value
//! - [`SledBackend`] / [`SledValueStore`]: Embedded database (feature `sled`)
//!
//! ## Error Handling
//!
//! - [`StoreError`]: Error type for all store operations
//! - [`StoreResult`]: Result alias (`Result<T, StoreError>`)
//!
//! # Common Patterns
//!
//! ## Saving and loading one value
//!
//! ```rust,ignore
//! use valet_store::prelude::*;
//!
//! let backend = MemoryBackend::<SettingsKey>::new();
//! let store = backend.value_store::<Theme>(SettingsKey::Theme);
//!
//! store.save(&(), theme).await?;
//! let theme = store.load(&()).await?;
//! store.remove(&()).await?;
//! ```
//!
//! ## Migrating between backends
//!
//! ```rust,ignore
//! use valet_store::prelude::*;
//!
//! let old = FileStore::<Theme>::at("legacy/theme.json");
//! let new = backend.value_store::<Theme>(SettingsKey::Theme);
//!
//! // Reads fall back to the file once, then the database wins.
//! let store = replacing(old, new);
//! let theme = store.load(&()).await?;
//! ```
//!
//! # Not Included
//!
//! Backend configuration structs ([`FileConfig`](crate::config::FileConfig)
//! and friends) and the value models stay out of the prelude to avoid
//! namespace pollution. Import these explicitly when needed from their
//! respective modules.

// Core traits
pub use crate::traits::convert::ToBytes;
pub use crate::traits::key::StoreKey;
pub use crate::traits::store::{SharedStore, ValueStore};

// Combinators and adapters
pub use crate::replacing::{Replacing, replacing};
pub use crate::traits::context::{IgnoringContext, ignoring_context};

// Backends
pub use crate::backends::file::FileStore;
pub use crate::backends::memory::{MemoryBackend, MemoryStore};
#[cfg(feature = "sled")]
pub use crate::backends::sled_store::{SledBackend, SledValueStore};

// Error handling
pub use crate::errors::{BackendError, CodecError, StoreError, StoreResult};
