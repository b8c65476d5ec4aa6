//! Post-build dependency-set enrichment from the host's import graph.

use std::collections::BTreeMap;
use std::path::PathBuf;

use tracing::debug;
use weft_common::read_mtime;
use weft_config::{FileKind, PluginSettings};

use crate::cache::DependencyCache;

/// The file → imported-files relation the host reports at the end of a build
/// when aggressive caching is requested.
pub type ImportGraph = BTreeMap<PathBuf, Vec<PathBuf>>;

/// Widens tracked dependency sets with imports from the host's graph.
///
/// For every source file with a cache entry, every imported file that also
/// matches the component/module filter is added to that file's dependency
/// set with its current modification time. Editing an imported component
/// then invalidates the importer's entry even though the importer's own
/// preprocessing never reported that file as a dependency.
///
/// Imports whose mtime cannot be read are skipped; virtual asset paths show
/// up in import graphs and have no backing file.
pub fn enrich_from_import_graph(
    cache: &DependencyCache,
    graph: &ImportGraph,
    settings: &PluginSettings,
) {
    for path in cache.tracked_paths() {
        let Some(imports) = graph.get(&path) else {
            continue;
        };
        let mut extra = Vec::new();
        for import in imports {
            if settings.classify(import) == FileKind::Other {
                continue;
            }
            if let Ok(mtime) = read_mtime(import) {
                extra.push((import.clone(), mtime));
            }
        }
        if !extra.is_empty() {
            debug!(path = %path.display(), imports = extra.len(), "widening dependency set");
            cache.enrich(&path, &extra);
        }
    }
}
