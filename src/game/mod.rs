//! Game driver
//!
//! Binds the pure [`GameState`](crate::core::GameState) to a word provider
//! and keeps per-session statistics.

mod engine;
mod stats;

pub use engine::GameEngine;
pub use stats::Statistics;
