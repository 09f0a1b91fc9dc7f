//! # skillfuse-observability
//!
//! Structured tracing setup and the log events emitted at the engine's
//! degradation and configuration boundaries.

pub mod tracing_setup;

pub use tracing_setup::events;
pub use tracing_setup::{init_tracing, init_tracing_with_default, init_tracing_with_filter};
