//! The in-memory dependency-aware result cache.
//!
//! Results are keyed by source path and gated by the modification times of
//! the file's dependency set: the file itself plus every auxiliary file its
//! preprocessing reported. Validity is a pure read-time check; a stale or
//! unreadable dependency silently forces recompilation. Nothing here is
//! persisted across process runs.

#![warn(missing_docs)]

pub mod cache;
pub mod deps;
pub mod enrich;
pub mod output;
pub mod state;

pub use cache::{CacheEntry, DependencyCache};
pub use deps::DependencySet;
pub use enrich::{enrich_from_import_graph, ImportGraph};
pub use output::CompiledOutput;
pub use state::{CachePolicy, CacheState};
