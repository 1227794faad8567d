//! Unified configuration for the built-in backends.
//!
//! Every backend takes its options through a builder-pattern struct via
//! `typed-builder`, so call sites only name the options they change.

use std::path::PathBuf;

use typed_builder::TypedBuilder;

/// Configuration for the JSON file backend.
///
/// # Examples
///
/// ```
/// use valet_store::config::FileConfig;
///
/// // Create with defaults
/// let config = FileConfig::builder()
///     .path("settings/theme.json")
///     .build();
///
/// // Customize options
/// let config = FileConfig::builder()
///     .path("/var/lib/app/theme.json")
///     .create_dirs(false)
///     .pretty(true)
///     .build();
/// ```
#[derive(Debug, Clone, TypedBuilder)]
#[builder(doc)]
pub struct FileConfig {
    /// Path of the file holding the value. The path is the store's identity.
    #[builder(setter(into))]
    pub path: PathBuf,

    /// Create missing parent directories on the first save
    #[builder(default = true)]
    pub create_dirs: bool,

    /// Write pretty-printed JSON instead of the compact form
    #[builder(default = false)]
    pub pretty: bool,
}

impl FileConfig {
    /// Create a basic configuration with just a path
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: path.into(),
            create_dirs: true,
            pretty: false,
        }
    }
}

/// Configuration for the sled backend.
///
/// # Examples
///
/// ```
/// use valet_store::config::SledConfig;
///
/// let config = SledConfig::builder()
///     .path("/var/lib/app/store.sled")
///     .namespace("settings")
///     .flush_on_write(false)
///     .build();
/// ```
#[cfg(feature = "sled")]
#[derive(Debug, Clone, TypedBuilder)]
#[builder(doc)]
pub struct SledConfig {
    /// Path to the sled database directory
    #[builder(setter(into))]
    pub path: PathBuf,

    /// Tree name grouping this backend's values
    #[builder(default = String::from("values"), setter(into))]
    pub namespace: String,

    /// Cache size in megabytes
    #[builder(default = 64)]
    pub cache_size_mb: usize,

    /// Delete the database when the backend is dropped (testing)
    #[builder(default = false)]
    pub temporary: bool,

    /// Flush to disk after every save/remove for durability
    #[builder(default = true)]
    pub flush_on_write: bool,
}

#[cfg(feature = "sled")]
impl SledConfig {
    /// Create a basic configuration with just a path
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: path.into(),
            namespace: String::from("values"),
            cache_size_mb: 64,
            temporary: false,
            flush_on_write: true,
        }
    }
}

/// Configuration for the in-memory backend.
///
/// # Examples
///
/// ```
/// use valet_store::config::MemoryConfig;
///
/// let config = MemoryConfig::builder()
///     .initial_capacity(64)
///     .build();
/// ```
#[derive(Debug, Clone, TypedBuilder)]
#[builder(doc)]
pub struct MemoryConfig {
    /// Initial capacity hint for the slot map
    #[builder(default = 16)]
    pub initial_capacity: usize,
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            initial_capacity: 16,
        }
    }
}
