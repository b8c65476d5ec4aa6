//! The virtual asset store for separately emitted stylesheets.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use weft_common::normalize_slashes;

/// Reserved suffix marking a synthetic stylesheet path.
///
/// Derived virtual paths replace the component's extension with this suffix,
/// so the resolver can claim them without reading the filesystem.
pub const VIRTUAL_CSS_SUFFIX: &str = ".weft-virtual.css";

/// A stored stylesheet payload.
///
/// The text already carries its inline map comment. `resolve_dir` is the
/// owning component's directory, so relative URLs inside the stylesheet
/// resolve as if it sat next to the component.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CssAsset {
    /// The stylesheet text.
    pub text: String,
    /// Directory of the component that emitted the stylesheet.
    pub resolve_dir: PathBuf,
}

/// In-memory map from synthetic path to stylesheet payload.
///
/// Entries are replaced when the owning component recompiles and never
/// explicitly deleted; a stale entry for a removed component is harmless and
/// only served if its exact path is re-requested.
#[derive(Debug, Default)]
pub struct AssetStore {
    entries: Mutex<HashMap<String, CssAsset>>,
}

impl AssetStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Derives the virtual stylesheet path for a component source path.
    ///
    /// The extension is replaced by [`VIRTUAL_CSS_SUFFIX`] and separators are
    /// normalized to `/`, making the derivation deterministic across
    /// platforms.
    pub fn virtual_css_path(source: &Path) -> String {
        let normalized = normalize_slashes(source);
        let dir_end = normalized.rfind('/').map_or(0, |i| i + 1);
        let stem_end = match normalized[dir_end..].rfind('.') {
            Some(i) => dir_end + i,
            None => normalized.len(),
        };
        format!("{}{}", &normalized[..stem_end], VIRTUAL_CSS_SUFFIX)
    }

    /// Returns `true` when `path` carries the reserved suffix.
    pub fn is_virtual_css(path: &str) -> bool {
        path.ends_with(VIRTUAL_CSS_SUFFIX)
    }

    /// Inserts or replaces the payload for a virtual path.
    pub fn store(&self, path: String, asset: CssAsset) {
        let mut entries = self.entries.lock().unwrap();
        entries.insert(path, asset);
    }

    /// Returns the payload for a virtual path.
    ///
    /// `None` means no component has emitted a stylesheet under this path;
    /// that is a legitimate pass-through signal to the host, not an error.
    pub fn load(&self, path: &str) -> Option<CssAsset> {
        let entries = self.entries.lock().unwrap();
        entries.get(path).cloned()
    }

    /// Number of stored assets.
    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    /// Returns `true` when the store is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
