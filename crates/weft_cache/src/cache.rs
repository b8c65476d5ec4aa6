//! The per-plugin-instance result cache.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::SystemTime;

use tracing::debug;
use weft_common::read_mtime;

use crate::deps::DependencySet;
use crate::output::CompiledOutput;

/// One cached result with the dependency set that gates it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CacheEntry {
    /// The result handed back verbatim on a valid hit.
    pub result: CompiledOutput,
    /// Paths and recorded mtimes gating this entry's validity.
    pub dependencies: DependencySet,
}

/// In-memory map from source path to cached compile result.
///
/// Owned by the plugin instance and shared by reference with every pipeline
/// run. The host loads a given path at most once per build cycle, so the
/// locking here only has to make concurrent access across distinct files
/// safe, not arbitrate writers on one key.
#[derive(Debug, Default)]
pub struct DependencyCache {
    entries: Mutex<HashMap<PathBuf, CacheEntry>>,
}

impl DependencyCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the entry for `path`, if one exists.
    pub fn lookup(&self, path: &Path) -> Option<CacheEntry> {
        let entries = self.entries.lock().unwrap();
        entries.get(path).cloned()
    }

    /// Checks whether an entry's dependency set is still current.
    ///
    /// Every dependency's modification time must be readable and not
    /// strictly newer than the recorded one. Any single failure invalidates
    /// the whole entry; there is no partial trust.
    pub fn is_valid(entry: &CacheEntry) -> bool {
        for (dep, recorded) in entry.dependencies.iter() {
            match read_mtime(dep) {
                Ok(current) if current <= *recorded => {}
                Ok(_) => {
                    debug!(dep = %dep.display(), "dependency modified; entry stale");
                    return false;
                }
                Err(err) => {
                    debug!(dep = %dep.display(), %err, "mtime read failed; entry stale");
                    return false;
                }
            }
        }
        true
    }

    /// Inserts or replaces the entry for `path`.
    pub fn store(&self, path: PathBuf, result: CompiledOutput, dependencies: DependencySet) {
        debug!(path = %path.display(), deps = dependencies.len(), "caching result");
        let mut entries = self.entries.lock().unwrap();
        entries.insert(
            path,
            CacheEntry {
                result,
                dependencies,
            },
        );
    }

    /// Removes the entry for `path`; called when a stale entry is detected,
    /// before recompiling.
    pub fn evict(&self, path: &Path) {
        debug!(path = %path.display(), "evicting stale entry");
        let mut entries = self.entries.lock().unwrap();
        entries.remove(path);
    }

    /// Adds dependencies to an existing entry without touching its result.
    ///
    /// No-op when `path` has no entry.
    pub fn enrich(&self, path: &Path, extra: &[(PathBuf, SystemTime)]) {
        let mut entries = self.entries.lock().unwrap();
        if let Some(entry) = entries.get_mut(path) {
            for (dep, mtime) in extra {
                entry.dependencies.insert(dep.clone(), *mtime);
            }
            debug!(path = %path.display(), added = extra.len(), "enriched dependency set");
        }
    }

    /// The dependency paths recorded for `path`, if an entry exists.
    pub fn dependencies_of(&self, path: &Path) -> Option<Vec<PathBuf>> {
        let entries = self.entries.lock().unwrap();
        entries.get(path).map(|e| e.dependencies.paths())
    }

    /// All source paths with a cache entry.
    pub fn tracked_paths(&self) -> Vec<PathBuf> {
        let entries = self.entries.lock().unwrap();
        entries.keys().cloned().collect()
    }

    /// Number of cached entries.
    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    /// Returns `true` when nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
