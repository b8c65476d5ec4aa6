//! Types exchanged with the host build system's hook protocol.

use std::path::PathBuf;

use weft_cache::CompiledOutput;
use weft_diagnostics::Diagnostic;

pub use weft_cache::ImportGraph;

/// Namespace claimed for component and module source files.
pub const COMPONENT_NAMESPACE: &str = "weft";

/// Namespace claimed for virtual stylesheet paths.
pub const CSS_NAMESPACE: &str = "weft-css";

/// Why the host is resolving a path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResolveKind {
    /// The path is a build entry point.
    Entry,
    /// An `import` statement.
    Import,
    /// A `require` call.
    Require,
    /// A `url(...)` or similar asset reference.
    Url,
}

/// A path-resolution request from the host.
#[derive(Clone, Debug)]
pub struct ResolveArgs {
    /// The requested path, as written.
    pub path: String,
    /// The file containing the reference, when resolving an import.
    pub importer: Option<PathBuf>,
    /// Why the path is being resolved.
    pub kind: ResolveKind,
}

/// A claim on a resolved path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolveResult {
    /// The resolved path handed back to the host.
    pub path: String,
    /// The namespace whose load hook should receive the path.
    pub namespace: String,
}

/// How the host should interpret returned contents.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Loader {
    /// An executable JS module.
    #[default]
    Js,
    /// A stylesheet.
    Css,
}

/// The outcome of one load dispatch, returned to the host.
///
/// Failures are carried in `errors`; nothing crosses the load boundary as a
/// panic, so one file's failure never aborts sibling files' builds.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoadResult {
    /// The produced text; `None` defers entirely to other loaders.
    pub contents: Option<String>,
    /// How to interpret `contents`.
    pub loader: Loader,
    /// Base directory for resolving references inside `contents`.
    pub resolve_dir: Option<PathBuf>,
    /// Errors that failed this file's compile.
    pub errors: Vec<Diagnostic>,
    /// Warnings surfaced alongside the contents.
    pub warnings: Vec<Diagnostic>,
    /// Paths whose changes should re-trigger this file's load.
    pub watch_paths: Vec<PathBuf>,
}

impl LoadResult {
    /// An empty result deferring entirely to other loaders.
    pub fn pass_through() -> Self {
        Self::default()
    }

    /// A result carrying exactly one error and no contents.
    pub fn failed(error: Diagnostic, watch_paths: Vec<PathBuf>) -> Self {
        Self {
            errors: vec![error],
            watch_paths,
            ..Self::default()
        }
    }

    /// Returns `true` when the result neither produces contents nor reports
    /// errors.
    pub fn is_pass_through(&self) -> bool {
        self.contents.is_none() && self.errors.is_empty()
    }
}

impl From<CompiledOutput> for LoadResult {
    fn from(output: CompiledOutput) -> Self {
        Self {
            contents: Some(output.contents),
            loader: Loader::Js,
            resolve_dir: None,
            errors: output.errors,
            warnings: output.warnings,
            watch_paths: output.watch_paths,
        }
    }
}
