//! Newline-convention-agnostic line splitting.

/// Splits `text` into lines on any newline convention.
///
/// Handles `\n`, `\r\n`, and lone `\r` terminators. The terminators themselves
/// are not included in the returned slices. A trailing terminator yields a
/// final empty line, matching how editors count lines.
pub fn split_lines(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                lines.push(&text[start..i]);
                i += 1;
                start = i;
            }
            b'\r' => {
                lines.push(&text[start..i]);
                i += 1;
                if i < bytes.len() && bytes[i] == b'\n' {
                    i += 1;
                }
                start = i;
            }
            _ => i += 1,
        }
    }
    lines.push(&text[start..]);
    lines
}
