//! The compiler collaborator surface.
//!
//! The pipeline does not implement compilation semantics; it orchestrates an
//! external component compiler and preprocessor chain reached through the
//! traits defined here. This crate also owns the option types merged per
//! compile and the raw output shapes the pipeline consumes.

#![warn(missing_docs)]

pub mod chain;
pub mod error;
pub mod options;
pub mod output;
pub mod traits;

pub use chain::run_chain;
pub use error::{CompileFailure, PreprocessFailure};
pub use options::{CompileOptions, CompileOverrides, CssMode, ModuleOptions, ModuleOverrides};
pub use output::{ComponentOutput, EmittedCode, MessageKind, ModuleOutput, PreprocessOutput, RawMessage};
pub use traits::{ComponentCompiler, Preprocessor};
