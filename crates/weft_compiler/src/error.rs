//! Failure types for compiler and preprocessor calls.

use thiserror::Error;
use weft_diagnostics::RawSpan;

/// A failed component or module compile.
///
/// Carries the compiler's message and, when the compiler attached one, the
/// position of the offending text. The pipeline converts this into a single
/// error diagnostic; it is never propagated across the load boundary.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct CompileFailure {
    /// The compiler's error message.
    pub message: String,
    /// The reported position in the text the compiler was given.
    pub span: Option<RawSpan>,
}

impl CompileFailure {
    /// A failure with no position.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            span: None,
        }
    }

    /// A failure at the given position.
    pub fn at(message: impl Into<String>, span: RawSpan) -> Self {
        Self {
            message: message.into(),
            span: Some(span),
        }
    }
}

/// A failed preprocessor transform.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("preprocessor `{preprocessor}` failed: {message}")]
pub struct PreprocessFailure {
    /// Name of the transform that failed.
    pub preprocessor: String,
    /// The transform's error message.
    pub message: String,
}

impl PreprocessFailure {
    /// Creates a failure for the named transform.
    pub fn new(preprocessor: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            preprocessor: preprocessor.into(),
            message: message.into(),
        }
    }
}
