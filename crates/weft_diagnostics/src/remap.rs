//! The shared conversion path from raw compiler messages to diagnostics.

use weft_common::split_lines;
use weft_srcmap::SourceMap;

use crate::diagnostic::{Diagnostic, Location, RawSpan};

/// Converts a raw compiler message into a structured [`Diagnostic`].
///
/// `source` must be the exact text the compiler was given (the transformed
/// text when preprocessing ran). When a position map is supplied, the start
/// coordinate is traced back through it; if the trace resolves to a known
/// source the reported line/column are overwritten with the traced ones,
/// otherwise the original coordinates are kept. Remapping is best-effort and
/// never fails the build.
///
/// Multi-line spans are truncated to one visual line: the reported length is
/// `end_column - start_column` when start and end lines match, else the
/// remainder of the start line's text.
pub fn convert_message(
    text: &str,
    span: Option<&RawSpan>,
    file_name: &str,
    source: &str,
    map: Option<&SourceMap>,
) -> Diagnostic {
    let Some(span) = span else {
        return Diagnostic::bare(text);
    };

    let lines = split_lines(source);
    let line_text = lines
        .get(span.start_line.saturating_sub(1) as usize)
        .copied()
        .unwrap_or("");

    let length = if span.start_line == span.end_line {
        span.end_column.saturating_sub(span.start_column)
    } else {
        (line_text.chars().count() as u32).saturating_sub(span.start_column)
    };

    let mut line = span.start_line;
    let mut column = span.start_column;
    if let Some(map) = map {
        if let Some(traced) = map.trace(span.start_line, span.start_column) {
            if map.sources.get(traced.source).is_some() {
                line = traced.line;
                column = traced.column;
            }
        }
    }

    Diagnostic::at(
        text,
        Location {
            file: file_name.to_string(),
            line,
            column,
            length,
            line_text: line_text.to_string(),
        },
    )
}
