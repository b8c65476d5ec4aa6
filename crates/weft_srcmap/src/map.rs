//! The source-map-v3 document model with tracing and composition.

use serde::{Deserialize, Serialize};
use weft_common::base_name;

use crate::vlq;

/// A source-map-v3 document.
///
/// Produced by preprocessors (mapping transformed text back to the original
/// component source) and by the compiler (mapping emitted JS/CSS back to the
/// text it was given). Field names follow the JSON wire format.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceMap {
    /// Format version; always 3.
    #[serde(default = "default_version")]
    pub version: u32,
    /// The generated file name, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    /// Names of the original sources referenced by the mappings.
    #[serde(default)]
    pub sources: Vec<String>,
    /// Original source text, parallel to `sources`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sources_content: Vec<Option<String>>,
    /// Symbol names referenced by mapping segments.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub names: Vec<String>,
    /// Base64-VLQ-encoded mapping lines.
    #[serde(default)]
    pub mappings: String,
}

fn default_version() -> u32 {
    3
}

/// An original-source coordinate produced by [`SourceMap::trace`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TracedPosition {
    /// Index into the map's `sources` array.
    pub source: usize,
    /// Original line, 1-based.
    pub line: u32,
    /// Original column, 0-based.
    pub column: u32,
}

/// A decoded mapping segment: a generated column plus an optional original
/// position. Name indices are not tracked; nothing in the pipeline needs them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Segment {
    gen_col: u32,
    /// `(source index, original line 0-based, original column)`.
    src: Option<(u32, u32, u32)>,
}

impl SourceMap {
    /// Creates an empty map for the given generated file name.
    pub fn new(file: Option<String>) -> Self {
        Self {
            version: 3,
            file,
            ..Self::default()
        }
    }

    /// Traces a transformed-text coordinate back to an original position.
    ///
    /// `line` is 1-based, `column` 0-based, matching compiler-reported
    /// positions. Picks the segment with the greatest generated column not
    /// past `column` on the given line. Returns `None` when the line has no
    /// mappings, the chosen segment carries no source info, or the mappings
    /// are malformed; tracing is best-effort and never an error.
    pub fn trace(&self, line: u32, column: u32) -> Option<TracedPosition> {
        if line == 0 {
            return None;
        }
        let lines = self.decode_mappings();
        let segments = lines.get((line - 1) as usize)?;
        let mut best: Option<Segment> = None;
        for seg in segments {
            if seg.gen_col <= column {
                best = Some(*seg);
            } else {
                break;
            }
        }
        let (source, line0, col) = best?.src?;
        Some(TracedPosition {
            source: source as usize,
            line: line0 + 1,
            column: col,
        })
    }

    /// Composes this map with the map of an earlier transform stage.
    ///
    /// `self` maps final text to intermediate text; `earlier` maps that
    /// intermediate text to the original. The result maps final text straight
    /// to the original and carries the earlier map's source list and content.
    /// Segments that do not trace through `earlier` are dropped, as are
    /// symbol names.
    pub fn compose(&self, earlier: &SourceMap) -> SourceMap {
        let mut out_lines = Vec::new();
        for line in self.decode_mappings() {
            let mut out = Vec::new();
            for seg in line {
                if let Some((_, line0, col)) = seg.src {
                    if let Some(t) = earlier.trace(line0 + 1, col) {
                        out.push(Segment {
                            gen_col: seg.gen_col,
                            src: Some((t.source as u32, t.line - 1, t.column)),
                        });
                    }
                }
            }
            out_lines.push(out);
        }
        SourceMap {
            version: 3,
            file: self.file.clone(),
            sources: earlier.sources.clone(),
            sources_content: earlier.sources_content.clone(),
            names: Vec::new(),
            mappings: encode_mappings(&out_lines),
        }
    }

    /// Rewrites any `sources` entry equal to `relative_path` to its base name.
    ///
    /// Downstream compilation and map consumers expect a bare file name in
    /// source entries, not the full relative path a preprocessor may record.
    pub fn rebase_sources(&mut self, relative_path: &str) {
        let base = base_name(relative_path).to_string();
        for source in &mut self.sources {
            if source == relative_path {
                *source = base.clone();
            }
        }
    }

    /// Sets the content slot of every `sources` entry equal to `name`.
    ///
    /// Compilers do not embed the text of the sources they were given; map
    /// consumers need the original, pre-preprocessing text there to show
    /// correct original-source excerpts.
    pub fn fill_sources_content(&mut self, name: &str, content: &str) {
        if self.sources_content.len() < self.sources.len() {
            self.sources_content.resize(self.sources.len(), None);
        }
        for (i, source) in self.sources.iter().enumerate() {
            if source == name {
                self.sources_content[i] = Some(content.to_string());
            }
        }
    }

    /// Serializes the map to its JSON wire form.
    pub fn to_json(&self) -> String {
        // A struct of strings and integers cannot fail to serialize.
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Decodes `mappings` into per-line segment lists.
    ///
    /// Malformed segments are skipped rather than failing the decode.
    fn decode_mappings(&self) -> Vec<Vec<Segment>> {
        let mut lines = Vec::new();
        let mut src: i64 = 0;
        let mut orig_line: i64 = 0;
        let mut orig_col: i64 = 0;
        for group in self.mappings.split(';') {
            let mut segments = Vec::new();
            let mut gen_col: i64 = 0;
            for raw in group.split(',') {
                if raw.is_empty() {
                    continue;
                }
                let Some(fields) = decode_segment(raw) else {
                    continue;
                };
                gen_col += fields[0];
                let segment = if fields.len() >= 4 {
                    src += fields[1];
                    orig_line += fields[2];
                    orig_col += fields[3];
                    if src < 0 || orig_line < 0 || orig_col < 0 || gen_col < 0 {
                        continue;
                    }
                    Segment {
                        gen_col: gen_col as u32,
                        src: Some((src as u32, orig_line as u32, orig_col as u32)),
                    }
                } else {
                    if gen_col < 0 {
                        continue;
                    }
                    Segment {
                        gen_col: gen_col as u32,
                        src: None,
                    }
                };
                segments.push(segment);
            }
            lines.push(segments);
        }
        lines
    }
}

/// Decodes the 1, 4, or 5 VLQ fields of one segment.
fn decode_segment(raw: &str) -> Option<Vec<i64>> {
    let mut fields = Vec::with_capacity(5);
    let mut pos = 0;
    while pos < raw.len() && fields.len() < 5 {
        fields.push(vlq::decode(raw, &mut pos)?);
    }
    match fields.len() {
        1 | 4 | 5 => Some(fields),
        _ => None,
    }
}

/// Delta-encodes per-line segment lists back into a `mappings` string.
fn encode_mappings(lines: &[Vec<Segment>]) -> String {
    let mut out = String::new();
    let mut src: i64 = 0;
    let mut orig_line: i64 = 0;
    let mut orig_col: i64 = 0;
    for (i, line) in lines.iter().enumerate() {
        if i > 0 {
            out.push(';');
        }
        let mut gen_col: i64 = 0;
        for (j, seg) in line.iter().enumerate() {
            if j > 0 {
                out.push(',');
            }
            vlq::encode(i64::from(seg.gen_col) - gen_col, &mut out);
            gen_col = i64::from(seg.gen_col);
            if let Some((s, l, c)) = seg.src {
                vlq::encode(i64::from(s) - src, &mut out);
                vlq::encode(i64::from(l) - orig_line, &mut out);
                vlq::encode(i64::from(c) - orig_col, &mut out);
                src = i64::from(s);
                orig_line = i64::from(l);
                orig_col = i64::from(c);
            }
        }
    }
    out
}
