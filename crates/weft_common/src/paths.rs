//! Path normalization helpers for map sources and virtual asset paths.

use std::path::Path;

/// Normalizes a path to a forward-slash string form.
///
/// Virtual asset paths and source-map `sources` entries use `/` separators
/// regardless of platform, so every path that leaves the plugin boundary goes
/// through this.
pub fn normalize_slashes(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Returns the final component of a path-like string.
///
/// Accepts either separator style. Returns the input unchanged when it
/// contains no separator.
pub fn base_name(name: &str) -> &str {
    name.rsplit(['/', '\\']).next().unwrap_or(name)
}
