pub mod file;
pub mod memory;

#[cfg(feature = "sled")]
pub mod sled_store;
