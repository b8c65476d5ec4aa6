//! Raw output shapes produced by the compiler collaborator.

use std::path::PathBuf;

use weft_diagnostics::RawSpan;
use weft_srcmap::SourceMap;

use crate::error::CompileFailure;

/// A unit of emitted code with its position map.
#[derive(Clone, Debug, PartialEq)]
pub struct EmittedCode {
    /// The emitted text.
    pub code: String,
    /// Map from the emitted text back to the text the compiler was given.
    pub map: Option<SourceMap>,
}

impl EmittedCode {
    /// Emitted code without a map.
    pub fn bare(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            map: None,
        }
    }
}

/// Result of compiling one component.
#[derive(Clone, Debug, PartialEq)]
pub struct ComponentOutput {
    /// The executable module.
    pub js: EmittedCode,
    /// The separately emitted stylesheet, when the component has styles and
    /// CSS output is externalized.
    pub css: Option<EmittedCode>,
    /// Warnings the compiler reported.
    pub warnings: Vec<RawMessage>,
}

/// Result of compiling one standalone module.
#[derive(Clone, Debug, PartialEq)]
pub struct ModuleOutput {
    /// The executable module.
    pub js: EmittedCode,
    /// Warnings the compiler reported.
    pub warnings: Vec<RawMessage>,
}

/// Result of running a preprocessor (or a whole chain).
#[derive(Clone, Debug, PartialEq)]
pub struct PreprocessOutput {
    /// The transformed source text.
    pub code: String,
    /// Map from the transformed text back to the input text.
    pub map: Option<SourceMap>,
    /// Extra files the transform read; each gates cache validity for the
    /// component that was being preprocessed.
    pub dependencies: Vec<PathBuf>,
}

impl PreprocessOutput {
    /// A pass-through output: unchanged code, no map, no dependencies.
    pub fn unchanged(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            map: None,
            dependencies: Vec::new(),
        }
    }
}

/// Distinguishes how the compiler surfaced a message.
///
/// Compilers report warnings as values and errors by failing the call; both
/// take the same conversion path into a [`weft_diagnostics::Diagnostic`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    /// A non-fatal message reported alongside successful output.
    Warning,
    /// A message recovered from a failed compile call.
    ThrownError,
}

/// A raw, position-bearing message from the compiler collaborator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawMessage {
    /// How the message was surfaced.
    pub kind: MessageKind,
    /// The message text.
    pub message: String,
    /// The reported position, when the compiler attached one.
    pub span: Option<RawSpan>,
}

impl RawMessage {
    /// A warning with a position.
    pub fn warning(message: impl Into<String>, span: RawSpan) -> Self {
        Self {
            kind: MessageKind::Warning,
            message: message.into(),
            span: Some(span),
        }
    }

    /// A warning without a position.
    pub fn bare_warning(message: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Warning,
            message: message.into(),
            span: None,
        }
    }
}

impl From<CompileFailure> for RawMessage {
    fn from(failure: CompileFailure) -> Self {
        Self {
            kind: MessageKind::ThrownError,
            message: failure.message,
            span: failure.span,
        }
    }
}
