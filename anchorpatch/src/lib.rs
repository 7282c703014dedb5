// anchorpatch/src/lib.rs
//! # anchorpatch CLI
//!
//! Command-line front end for `anchorpatch-core`: argument parsing, logging
//! setup, themed output, and the `apply`, `list` and `show` commands.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod ui;
