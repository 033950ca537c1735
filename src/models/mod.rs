//! Shared types used across all modules.
//!
//! Other modules import provider types from here rather than reaching
//! into each other's internals.

pub mod provider;

pub use provider::{Provider, ResolvedProvider};
