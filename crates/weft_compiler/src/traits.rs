//! Traits at the collaborator seams.

use crate::error::{CompileFailure, PreprocessFailure};
use crate::options::{CompileOptions, ModuleOptions};
use crate::output::{ComponentOutput, ModuleOutput, PreprocessOutput};

/// The external component compiler.
///
/// Calls are synchronous from the pipeline's point of view; the host may run
/// load dispatch for distinct files concurrently, so implementations must be
/// `Send + Sync`.
pub trait ComponentCompiler: Send + Sync {
    /// Compiles a component source into an executable module plus an optional
    /// separately emitted stylesheet.
    ///
    /// `filename` is the bare file name (no path) recorded in emitted maps.
    fn compile_component(
        &self,
        source: &str,
        options: &CompileOptions,
        filename: &str,
    ) -> Result<ComponentOutput, CompileFailure>;

    /// Compiles a standalone module source.
    fn compile_module(
        &self,
        source: &str,
        options: &ModuleOptions,
        filename: &str,
    ) -> Result<ModuleOutput, CompileFailure>;
}

/// One source-to-source transform in the preprocessor chain.
pub trait Preprocessor: Send + Sync {
    /// A short name used in failure messages.
    fn name(&self) -> &str;

    /// Transforms `source`, optionally reporting a position map and extra
    /// dependency files whose modification times gate cache validity.
    fn process(&self, source: &str, filename: &str)
        -> Result<PreprocessOutput, PreprocessFailure>;
}
