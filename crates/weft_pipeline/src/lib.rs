//! The compile-and-cache pipeline and its host boundary.
//!
//! [`WeftPlugin`] is the per-instance state object the host build system
//! drives through resolve, load, and build lifecycle hooks. Load dispatch
//! consults the dependency cache, runs the preprocess → compile → map
//! composition → virtual-asset pipeline on a miss, and folds every failure
//! into that file's own load result so one file never aborts its siblings.

#![warn(missing_docs)]

pub mod assets;
pub mod host;
pub mod pipeline;
pub mod plugin;

#[cfg(test)]
mod testing;

pub use assets::{AssetStore, CssAsset, VIRTUAL_CSS_SUFFIX};
pub use host::{
    ImportGraph, LoadResult, Loader, ResolveArgs, ResolveKind, ResolveResult, COMPONENT_NAMESPACE,
    CSS_NAMESPACE,
};
pub use plugin::WeftPlugin;
