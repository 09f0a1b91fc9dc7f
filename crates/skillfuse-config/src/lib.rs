//! # skillfuse-config
//!
//! Ownership of the process-wide weight configuration.
//!
//! - [`WeightConfigStore`]: lazy load, validate-then-swap updates, reload.
//! - [`FileConfigBackingStore`]: JSON or TOML documents on disk.

pub mod file_store;
pub mod store;

pub use file_store::FileConfigBackingStore;
pub use store::WeightConfigStore;
