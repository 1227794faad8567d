//! # Valet Store
//!
//! An async, type-safe library for persisting single logical values, with
//! pluggable backends and a read-through migration combinator.
//!
//! ## Features
//!
//! - **One value per store**: Each store handle owns exactly one persisted
//!   value, addressed by a compile-time enumerated key
//! - **Type-Safe**: Values and contexts are associated types, checked at
//!   compile time against the backend's codec bounds
//! - **Pluggable Backends**: In-memory map, JSON files, and an embedded
//!   sled database behind one trait
//! - **Painless Migration**: [`replacing`](replacing::replacing) composes an
//!   old and a new store so reads fall back to the legacy location and data
//!   drifts forward on its own
//! - **Portable Value Models**: Plain-data color and font records with
//!   explicit platform conversions
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use valet_store::prelude::*;
//! use strum::{AsRefStr, EnumIter};
//!
//! #[derive(AsRefStr, EnumIter, Clone, Copy, PartialEq, Eq, Hash, Debug)]
//! enum SettingsKey {
//!     Theme,
//!     AccentColor,
//! }
//!
//! let backend = MemoryBackend::<SettingsKey>::new();
//! let store = backend.value_store::<String>(SettingsKey::Theme);
//!
//! store.save(&(), "dark".to_string()).await?;
//! assert_eq!(store.load(&()).await?, "dark");
//!
//! store.remove(&()).await?;
//! assert!(store.load(&()).await.unwrap_err().is_not_found());
//! ```

pub mod backends;
pub mod config;
pub mod errors;
pub mod models;
pub mod prelude;
pub mod replacing;
pub mod traits;
