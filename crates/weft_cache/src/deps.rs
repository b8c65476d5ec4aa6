//! The ordered dependency set gating one cached result.

use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Paths and recorded modification times whose staleness invalidates one
/// cache entry.
///
/// Insertion-ordered; the owning source file is always the first entry.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DependencySet {
    entries: Vec<(PathBuf, SystemTime)>,
}

impl DependencySet {
    /// Creates a set seeded with the owning source file.
    pub fn for_source(path: PathBuf, mtime: SystemTime) -> Self {
        Self {
            entries: vec![(path, mtime)],
        }
    }

    /// Records a dependency's modification time.
    ///
    /// Replaces the stored time in place when the path is already present,
    /// preserving its position.
    pub fn insert(&mut self, path: PathBuf, mtime: SystemTime) {
        if let Some(entry) = self.entries.iter_mut().find(|(p, _)| *p == path) {
            entry.1 = mtime;
        } else {
            self.entries.push((path, mtime));
        }
    }

    /// Returns `true` if the set tracks `path`.
    pub fn contains(&self, path: &Path) -> bool {
        self.entries.iter().any(|(p, _)| p == path)
    }

    /// The tracked paths in insertion order; this is the watch list.
    pub fn paths(&self) -> Vec<PathBuf> {
        self.entries.iter().map(|(p, _)| p.clone()).collect()
    }

    /// Iterates over `(path, recorded mtime)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &(PathBuf, SystemTime)> {
        self.entries.iter()
    }

    /// Number of tracked dependencies.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when nothing is tracked.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
