//! The compiled result stored per source path.

use std::path::PathBuf;

use weft_diagnostics::Diagnostic;

/// The assembled result of compiling one file.
///
/// Immutable once produced; a cache hit hands it back verbatim.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CompiledOutput {
    /// The executable module text, with inline map comment and any synthetic
    /// stylesheet import appended.
    pub contents: String,
    /// Converted, filtered compiler warnings.
    pub warnings: Vec<Diagnostic>,
    /// Errors, when the compile failed. Failed results are never cached.
    pub errors: Vec<Diagnostic>,
    /// Paths the host should watch to re-trigger this file's pipeline.
    pub watch_paths: Vec<PathBuf>,
}
