pub mod context;
pub mod convert;
pub mod key;
pub mod store;

// Re-export commonly used types
pub use context::{IgnoringContext, ignoring_context};
pub use convert::ToBytes;
pub use key::StoreKey;
pub use store::{SharedStore, ValueStore};
