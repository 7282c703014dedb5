// anchorpatch-core/src/engines/mod.rs
//! Concrete implementations of the `PatchEngine` trait.
//!
//! License: MIT OR APACHE 2.0

pub mod literal_engine;

pub use literal_engine::{apply_rules, LiteralEngine};
