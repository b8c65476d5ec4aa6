//! Position maps for multi-stage source transformation.
//!
//! This crate models source-map-v3 documents (the "position map" produced by
//! preprocessors and compilers), provides coordinate tracing from transformed
//! text back to original text, composition of maps across pipeline stages, and
//! inline data-URL encoding for embedding a map in emitted JS or CSS.

#![warn(missing_docs)]

pub mod inline;
pub mod map;
pub mod vlq;

pub use map::{SourceMap, TracedPosition};
