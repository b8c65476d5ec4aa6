//! Structured diagnostics and position remapping.
//!
//! This crate provides the [`Diagnostic`] type handed back to the host build
//! system and the single conversion path that turns raw compiler-reported
//! messages into diagnostics, translating positions back through an optional
//! preprocessing position map to original source coordinates.

#![warn(missing_docs)]

pub mod diagnostic;
pub mod remap;

pub use diagnostic::{Diagnostic, Location, RawSpan};
pub use remap::convert_message;
