//! Shared utilities for the weft plugin crates.
//!
//! Small, dependency-free helpers used throughout the workspace: newline-aware
//! line splitting, path normalization for map sources and virtual asset paths,
//! and modification-time reads used by cache validity checks.

#![warn(missing_docs)]

pub mod lines;
pub mod mtime;
pub mod paths;

pub use lines::split_lines;
pub use mtime::read_mtime;
pub use paths::{base_name, normalize_slashes};
