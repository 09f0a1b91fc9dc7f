//! # skillfuse-fusion
//!
//! Combines weighted evidence items into one score, one confidence and a
//! ranked evidence trail. Pure and deterministic: no I/O, no shared state.

pub mod engine;
pub mod ranking;

pub use engine::FusionEngine;
pub use ranking::{effective_weight, rank_evidence};
