//! The diagnostic shapes exchanged with the host and the compiler.

use serde::{Deserialize, Serialize};

/// A resolved source location attached to a diagnostic.
///
/// `line` is 1-based and `column` 0-based, the convention of host build
/// systems. `line_text` carries the full text of the line for display.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// The file the diagnostic refers to.
    pub file: String,
    /// Line number, 1-based.
    pub line: u32,
    /// Column within the line, 0-based.
    pub column: u32,
    /// Length of the highlighted span, in characters of `line_text`.
    pub length: u32,
    /// The full text of the line.
    pub line_text: String,
}

/// A diagnostic message returned to the host as part of a file's load result.
///
/// The location is absent when the originating message carried no position.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// The human-readable message.
    pub text: String,
    /// Where the message points, when known.
    pub location: Option<Location>,
}

impl Diagnostic {
    /// Creates a diagnostic with no location.
    pub fn bare(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            location: None,
        }
    }

    /// Creates a diagnostic at the given location.
    pub fn at(text: impl Into<String>, location: Location) -> Self {
        Self {
            text: text.into(),
            location: Some(location),
        }
    }
}

/// The raw position shape the compiler collaborator reports.
///
/// Lines are 1-based, columns 0-based. The end coordinate is exclusive and
/// may be on a later line than the start.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawSpan {
    /// Start line, 1-based.
    pub start_line: u32,
    /// Start column, 0-based.
    pub start_column: u32,
    /// End line, 1-based.
    pub end_line: u32,
    /// End column, 0-based, exclusive.
    pub end_column: u32,
}

impl RawSpan {
    /// A span covering `[start_column, end_column)` on a single line.
    pub fn on_line(line: u32, start_column: u32, end_column: u32) -> Self {
        Self {
            start_line: line,
            start_column,
            end_line: line,
            end_column,
        }
    }
}
