//! The plugin instance and its host-facing boundary adapters.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use tracing::debug;
use weft_cache::{enrich_from_import_graph, CachePolicy, DependencyCache};
use weft_common::normalize_slashes;
use weft_compiler::ComponentCompiler;
use weft_config::{FileKind, PluginConfig};
use weft_diagnostics::Diagnostic;

use crate::assets::AssetStore;
use crate::host::{
    ImportGraph, LoadResult, Loader, ResolveArgs, ResolveKind, ResolveResult, COMPONENT_NAMESPACE,
    CSS_NAMESPACE,
};

/// The per-instance plugin state the host drives through its hooks.
///
/// Created at plugin registration and alive for the build session; nothing
/// is persisted across process runs. The dependency cache and the virtual
/// asset store are the only shared mutable state, both keyed by path.
pub struct WeftPlugin {
    pub(crate) config: PluginConfig,
    pub(crate) compiler: Arc<dyn ComponentCompiler>,
    pub(crate) cache: DependencyCache,
    pub(crate) policy: Mutex<CachePolicy>,
    pub(crate) assets: AssetStore,
    pub(crate) watching: AtomicBool,
    /// Last successful watch list per module path. The module branch never
    /// touches the dependency cache, so failure fallback needs its own
    /// record; see the pipeline notes on this asymmetry.
    pub(crate) module_watch_lists: Mutex<HashMap<PathBuf, Vec<PathBuf>>>,
}

impl WeftPlugin {
    /// Creates a plugin instance around a validated configuration and a
    /// compiler collaborator.
    pub fn new(config: PluginConfig, compiler: Arc<dyn ComponentCompiler>) -> Self {
        let policy = CachePolicy::new(config.settings.cache);
        Self {
            config,
            compiler,
            cache: DependencyCache::new(),
            policy: Mutex::new(policy),
            assets: AssetStore::new(),
            watching: AtomicBool::new(false),
            module_watch_lists: Mutex::new(HashMap::new()),
        }
    }

    /// Signals the start of a build; `incremental` is the host's
    /// incremental/watch indication.
    pub fn on_build_start(&self, incremental: bool) {
        let mut policy = self.policy.lock().unwrap();
        if incremental {
            self.watching.store(true, Ordering::Relaxed);
            policy.watch_signal();
        } else {
            policy.build_started();
        }
    }

    /// The path-resolution hook: claims virtual stylesheet paths and source
    /// files matching the configured filters.
    pub fn on_resolve(&self, args: &ResolveArgs) -> Option<ResolveResult> {
        if AssetStore::is_virtual_css(&args.path) {
            return Some(ResolveResult {
                path: args.path.clone(),
                namespace: CSS_NAMESPACE.to_string(),
            });
        }
        match self.config.settings.classify(Path::new(&args.path)) {
            FileKind::Component | FileKind::Module => Some(ResolveResult {
                path: args.path.clone(),
                namespace: COMPONENT_NAMESPACE.to_string(),
            }),
            FileKind::Other => None,
        }
    }

    /// The load hook: serves virtual assets and dispatches source files into
    /// the compile pipeline.
    pub fn on_load(&self, path: &Path, kind: ResolveKind) -> LoadResult {
        let normalized = normalize_slashes(path);
        if AssetStore::is_virtual_css(&normalized) {
            return match self.assets.load(&normalized) {
                Some(asset) => LoadResult {
                    contents: Some(asset.text),
                    loader: Loader::Css,
                    resolve_dir: Some(asset.resolve_dir),
                    ..LoadResult::default()
                },
                None => LoadResult::pass_through(),
            };
        }
        match self.config.settings.classify(path) {
            FileKind::Component => {
                if kind == ResolveKind::Entry {
                    return self.entry_point_result();
                }
                self.load_component(path)
            }
            FileKind::Module => self.load_module(path),
            FileKind::Other => LoadResult::pass_through(),
        }
    }

    /// Signals the end of a build. With aggressive caching and a
    /// host-reported import graph, widens tracked dependency sets; always
    /// arms the repeat-build cache heuristic.
    pub fn on_build_end(&self, graph: Option<&ImportGraph>) {
        if self.policy.lock().unwrap().aggressive() {
            if let Some(graph) = graph {
                debug!(files = graph.len(), "harvesting import graph");
                enrich_from_import_graph(&self.cache, graph, &self.config.settings);
            }
        }
        self.policy.lock().unwrap().build_finished();
    }

    /// The virtual asset store (stylesheets emitted by compiled components).
    pub fn assets(&self) -> &AssetStore {
        &self.assets
    }

    /// The dependency cache.
    pub fn cache(&self) -> &DependencyCache {
        &self.cache
    }

    pub(crate) fn caching_enabled(&self) -> bool {
        self.policy.lock().unwrap().caching_enabled()
    }

    pub(crate) fn watching(&self) -> bool {
        self.watching.load(Ordering::Relaxed)
    }

    /// Entry-point loads of component files are not supported; the flag only
    /// selects the message for now.
    fn entry_point_result(&self) -> LoadResult {
        let text = if self.config.settings.entry_binding {
            "entry binding for component files is not supported yet"
        } else {
            "component files cannot be used as build entry points"
        };
        LoadResult::failed(Diagnostic::bare(text), Vec::new())
    }
}
