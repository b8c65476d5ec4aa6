//! The per-file compile pipeline: preprocess, compile, map composition,
//! virtual-asset synthesis, and cache writes.

use std::path::{Path, PathBuf};
use std::time::SystemTime;

use tracing::debug;
use weft_cache::{CompiledOutput, DependencyCache, DependencySet};
use weft_common::{base_name, normalize_slashes, read_mtime};
use weft_compiler::{run_chain, CompileFailure, CompileOptions, ModuleOptions, RawMessage};
use weft_diagnostics::{convert_message, Diagnostic};
use weft_srcmap::inline;

use crate::assets::{AssetStore, CssAsset};
use crate::host::LoadResult;
use crate::plugin::WeftPlugin;

impl WeftPlugin {
    /// Compiles a component file, serving from the cache when possible.
    pub(crate) fn load_component(&self, path: &Path) -> LoadResult {
        let caching = self.caching_enabled();
        let cached = self.cache.lookup(path);
        if caching {
            if let Some(entry) = &cached {
                if DependencyCache::is_valid(entry) {
                    debug!(path = %path.display(), "cache hit");
                    return entry.result.clone().into();
                }
                self.cache.evict(path);
            }
        }
        // Watch-list fallback for failures: the dependency set of the entry
        // that existed before this run, stale or not, keeps watch coverage
        // over the files that probably caused the failure.
        let previous_watch: Vec<PathBuf> = cached
            .map(|entry| entry.dependencies.paths())
            .unwrap_or_default();

        let original_source = match std::fs::read_to_string(path) {
            Ok(source) => source,
            Err(err) => {
                let diag = Diagnostic::bare(format!("failed to read {}: {err}", path.display()));
                return LoadResult::failed(diag, previous_watch);
            }
        };
        // An unreadable own mtime is recorded as epoch; the entry then fails
        // its first validity check and recompiles.
        let own_mtime = read_mtime(path).unwrap_or(SystemTime::UNIX_EPOCH);
        let mut deps = DependencySet::for_source(path.to_path_buf(), own_mtime);

        let relative = normalize_slashes(path);
        let (transformed, mut map, extra_deps) = if self.config.preprocessors.is_empty() {
            (original_source.clone(), None, Vec::new())
        } else {
            match run_chain(&self.config.preprocessors, &original_source, &relative) {
                Ok(out) => (out.code, out.map, out.dependencies),
                Err(failure) => {
                    return LoadResult::failed(
                        Diagnostic::bare(failure.to_string()),
                        previous_watch,
                    );
                }
            }
        };
        for dep in extra_deps {
            let mtime = read_mtime(&dep).unwrap_or(SystemTime::UNIX_EPOCH);
            deps.insert(dep, mtime);
        }

        let file_name = base_name(&relative).to_string();
        if let Some(map) = map.as_mut() {
            map.rebase_sources(&relative);
        }

        let options = CompileOptions::default().merged_with(&self.config.settings.compiler);
        let output = match self
            .compiler
            .compile_component(&transformed, &options, &file_name)
        {
            Ok(output) => output,
            Err(failure) => {
                return self.compile_failure_result(
                    failure,
                    &file_name,
                    &original_source,
                    previous_watch,
                );
            }
        };

        let mut js = output.js;
        if map.is_some() {
            // Compilers do not embed the text of the sources they were
            // given; map consumers need the pre-preprocessing text there.
            if let Some(js_map) = js.map.as_mut() {
                js_map.fill_sources_content(&file_name, &original_source);
            }
        }

        let mut contents = js.code;
        if let Some(js_map) = &js.map {
            contents.push_str(&inline::js_comment(js_map));
        }

        if let Some(css) = output.css {
            let virtual_path = AssetStore::virtual_css_path(path);
            let mut text = css.code;
            if let Some(css_map) = &css.map {
                text.push_str(&inline::css_comment(css_map));
            }
            let resolve_dir = path.parent().map(Path::to_path_buf).unwrap_or_default();
            debug!(path = %path.display(), virtual_path = %virtual_path, "storing stylesheet");
            self.assets.store(virtual_path.clone(), CssAsset { text, resolve_dir });
            contents.push_str(&format!("\nimport \"{virtual_path}\";"));
        }

        let warnings: Vec<Diagnostic> = output
            .warnings
            .iter()
            .filter(|warning| self.config.keeps_warning(warning))
            .map(|warning| {
                convert_message(
                    &warning.message,
                    warning.span.as_ref(),
                    &file_name,
                    &transformed,
                    map.as_ref(),
                )
            })
            .collect();

        let watch_paths = if caching || self.watching() {
            deps.paths()
        } else {
            Vec::new()
        };
        let result = CompiledOutput {
            contents,
            warnings,
            errors: Vec::new(),
            watch_paths,
        };
        if caching {
            self.cache.store(path.to_path_buf(), result.clone(), deps);
        }
        result.into()
    }

    /// Compiles a standalone module file.
    ///
    /// Vendored paths are passed through untouched. This branch never
    /// consults or populates the dependency cache, an asymmetry preserved
    /// from the plugin's observed behavior; only the last successful watch
    /// list is remembered for failure fallback.
    pub(crate) fn load_module(&self, path: &Path) -> LoadResult {
        if self.config.settings.is_vendored(path) {
            return LoadResult::pass_through();
        }
        let previous_watch = self
            .module_watch_lists
            .lock()
            .unwrap()
            .get(path)
            .cloned()
            .unwrap_or_default();

        let source = match std::fs::read_to_string(path) {
            Ok(source) => source,
            Err(err) => {
                let diag = Diagnostic::bare(format!("failed to read {}: {err}", path.display()));
                return LoadResult::failed(diag, previous_watch);
            }
        };
        let relative = normalize_slashes(path);
        let file_name = base_name(&relative).to_string();
        let options = ModuleOptions::default().merged_with(&self.config.settings.module_compiler);

        match self.compiler.compile_module(&source, &options, &file_name) {
            Ok(output) => {
                let mut contents = output.js.code;
                if let Some(map) = &output.js.map {
                    contents.push_str(&inline::js_comment(map));
                }
                let warnings: Vec<Diagnostic> = output
                    .warnings
                    .iter()
                    .filter(|warning| self.config.keeps_warning(warning))
                    .map(|warning| {
                        convert_message(
                            &warning.message,
                            warning.span.as_ref(),
                            &file_name,
                            &source,
                            None,
                        )
                    })
                    .collect();
                let watch_paths = vec![path.to_path_buf()];
                self.module_watch_lists
                    .lock()
                    .unwrap()
                    .insert(path.to_path_buf(), watch_paths.clone());
                LoadResult {
                    contents: Some(contents),
                    warnings,
                    watch_paths,
                    ..LoadResult::default()
                }
            }
            Err(failure) => {
                self.compile_failure_result(failure, &file_name, &source, previous_watch)
            }
        }
    }

    /// Folds a compile failure into a single-error result.
    ///
    /// The failure is tagged as a thrown message and fed through the same
    /// conversion path as warnings, against the pre-preprocessing source.
    /// The previous watch list is preserved so an active watch session does
    /// not lose track of dependencies it previously knew about.
    fn compile_failure_result(
        &self,
        failure: CompileFailure,
        file_name: &str,
        source: &str,
        previous_watch: Vec<PathBuf>,
    ) -> LoadResult {
        let raw = RawMessage::from(failure);
        let diag = convert_message(&raw.message, raw.span.as_ref(), file_name, source, None);
        LoadResult::failed(diag, previous_watch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{ImportGraph, Loader, ResolveKind};
    use crate::testing::{FailingPreprocessor, FakeCompiler, MappingPreprocessor};
    use std::sync::atomic::Ordering;
    use std::time::Duration;
    use weft_compiler::RawMessage;
    use weft_config::{CacheMode, PluginConfig, PluginSettings};
    use weft_diagnostics::RawSpan;
    use weft_srcmap::SourceMap;

    fn settings_with_cache(mode: CacheMode) -> PluginSettings {
        PluginSettings {
            cache: Some(mode),
            ..PluginSettings::default()
        }
    }

    fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    /// Rewrites a file after a pause long enough for its mtime to move.
    fn edit_file(path: &Path, contents: &str) {
        std::thread::sleep(Duration::from_millis(30));
        std::fs::write(path, contents).unwrap();
    }

    fn load(plugin: &WeftPlugin, path: &Path) -> LoadResult {
        plugin.on_load(path, ResolveKind::Import)
    }

    #[test]
    fn unchanged_file_served_from_cache_without_recompiling() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(dir.path(), "app.weft", "<p>hi</p>");
        let compiler = FakeCompiler::new();
        let plugin = WeftPlugin::new(
            PluginConfig::new(settings_with_cache(CacheMode::On)),
            compiler.clone(),
        );

        let first = load(&plugin, &path);
        assert_eq!(compiler.component_calls.load(Ordering::SeqCst), 1);
        let second = load(&plugin, &path);
        assert_eq!(compiler.component_calls.load(Ordering::SeqCst), 1);
        assert_eq!(first, second);
    }

    #[test]
    fn edited_file_is_recompiled() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(dir.path(), "app.weft", "<p>v1</p>");
        let compiler = FakeCompiler::new();
        let plugin = WeftPlugin::new(
            PluginConfig::new(settings_with_cache(CacheMode::On)),
            compiler.clone(),
        );

        let first = load(&plugin, &path);
        edit_file(&path, "<p>v2</p>");
        let second = load(&plugin, &path);
        assert_eq!(compiler.component_calls.load(Ordering::SeqCst), 2);
        assert_ne!(first, second);
    }

    #[test]
    fn caching_disabled_recompiles_every_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(dir.path(), "app.weft", "<p>hi</p>");
        let compiler = FakeCompiler::new();
        let plugin = WeftPlugin::new(
            PluginConfig::new(PluginSettings::default()),
            compiler.clone(),
        );

        load(&plugin, &path);
        load(&plugin, &path);
        assert_eq!(compiler.component_calls.load(Ordering::SeqCst), 2);
        assert!(plugin.cache().is_empty());
    }

    #[test]
    fn stylesheet_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(dir.path(), "app.weft", "<style>.a{}</style>");
        let compiler = FakeCompiler::new().with_css(".a{color:teal}");
        let plugin = WeftPlugin::new(PluginConfig::new(PluginSettings::default()), compiler);

        let result = load(&plugin, &path);
        let virtual_path = AssetStore::virtual_css_path(&path);
        let contents = result.contents.unwrap();
        assert!(contents.contains(&format!("\nimport \"{virtual_path}\";")));

        let css = plugin.on_load(Path::new(&virtual_path), ResolveKind::Import);
        assert_eq!(css.loader, Loader::Css);
        assert_eq!(css.contents.as_deref(), Some(".a{color:teal}"));
        assert_eq!(css.resolve_dir.as_deref(), path.parent());
    }

    #[test]
    fn recompile_replaces_stored_stylesheet() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(dir.path(), "app.weft", "<style>.a{}</style>");
        let compiler = FakeCompiler::new().with_css(".a{color:teal}");
        let plugin = WeftPlugin::new(
            PluginConfig::new(PluginSettings::default()),
            compiler.clone(),
        );

        load(&plugin, &path);
        compiler.set_css(".a{color:plum}");
        load(&plugin, &path);
        let virtual_path = AssetStore::virtual_css_path(&path);
        assert_eq!(plugin.assets().load(&virtual_path).unwrap().text, ".a{color:plum}");
        assert_eq!(plugin.assets().len(), 1);
    }

    #[test]
    fn warning_positions_remap_through_preprocess_map() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(dir.path(), "app.weft", "<p>short</p>");
        // The preprocessor expands the source; its map sends transformed
        // line 10 back to original line 3.
        let map = SourceMap {
            sources: vec!["app.weft".to_string()],
            mappings: ";;;;;;;;;AAEA".to_string(),
            ..SourceMap::new(None)
        };
        let compiler = FakeCompiler::new()
            .with_warning(RawMessage::warning("unused selector", RawSpan::on_line(10, 0, 4)));
        let config = PluginConfig::new(PluginSettings::default())
            .with_preprocessor(Box::new(MappingPreprocessor::new("x\n".repeat(12), map)));
        let plugin = WeftPlugin::new(config, compiler);

        let result = load(&plugin, &path);
        assert!(result.errors.is_empty());
        let location = result.warnings[0].location.as_ref().unwrap();
        assert_eq!(location.line, 3);
        assert_eq!(location.column, 0);
    }

    #[test]
    fn warnings_surface_without_preprocessing() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(dir.path(), "app.weft", "line one\nline two");
        let compiler = FakeCompiler::new()
            .with_warning(RawMessage::warning("check this", RawSpan::on_line(2, 0, 4)));
        let plugin = WeftPlugin::new(PluginConfig::new(PluginSettings::default()), compiler);

        let result = load(&plugin, &path);
        let location = result.warnings[0].location.as_ref().unwrap();
        assert_eq!(location.line, 2);
        assert_eq!(location.line_text, "line two");
    }

    #[test]
    fn warning_filter_rejecting_all_yields_no_warnings() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(dir.path(), "app.weft", "<p>hi</p>");
        let compiler = FakeCompiler::new()
            .with_warning(RawMessage::bare_warning("w1"))
            .with_warning(RawMessage::bare_warning("w2"))
            .with_warning(RawMessage::bare_warning("w3"));
        let config =
            PluginConfig::new(PluginSettings::default()).with_warning_filter(|_| false);
        let plugin = WeftPlugin::new(config, compiler);

        let result = load(&plugin, &path);
        assert!(result.errors.is_empty());
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn embedded_map_carries_original_source_text() {
        let dir = tempfile::tempdir().unwrap();
        let original = "<p>the original text</p>";
        let path = write_file(dir.path(), "app.weft", original);
        let map = SourceMap {
            sources: vec!["app.weft".to_string()],
            mappings: "AAAA".to_string(),
            ..SourceMap::new(None)
        };
        let compiler = FakeCompiler::new().with_js_map();
        let config = PluginConfig::new(PluginSettings::default())
            .with_preprocessor(Box::new(MappingPreprocessor::new(
                "transformed".to_string(),
                map,
            )));
        let plugin = WeftPlugin::new(config, compiler);

        let result = load(&plugin, &path);
        let embedded = inline::extract(&result.contents.unwrap()).unwrap();
        assert_eq!(embedded.sources, vec!["app.weft"]);
        assert_eq!(embedded.sources_content, vec![Some(original.to_string())]);
    }

    #[test]
    fn preprocessor_dependencies_gate_the_cache() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(dir.path(), "app.weft", "<p>hi</p>");
        let partial = write_file(dir.path(), "partial.css", ".p{}");
        let compiler = FakeCompiler::new();
        let config = PluginConfig::new(settings_with_cache(CacheMode::On)).with_preprocessor(
            Box::new(MappingPreprocessor::passthrough().with_dependency(partial.clone())),
        );
        let plugin = WeftPlugin::new(config, compiler.clone());

        let result = load(&plugin, &path);
        assert_eq!(result.watch_paths, vec![path.clone(), partial.clone()]);
        load(&plugin, &path);
        assert_eq!(compiler.component_calls.load(Ordering::SeqCst), 1);

        edit_file(&partial, ".p{color:red}");
        load(&plugin, &path);
        assert_eq!(compiler.component_calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn compile_failure_keeps_previous_watch_list() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(dir.path(), "app.weft", "<p>ok</p>");
        let partial = write_file(dir.path(), "partial.css", ".p{}");
        let compiler = FakeCompiler::new();
        let config = PluginConfig::new(settings_with_cache(CacheMode::On)).with_preprocessor(
            Box::new(MappingPreprocessor::passthrough().with_dependency(partial.clone())),
        );
        let plugin = WeftPlugin::new(config, compiler.clone());

        let first = load(&plugin, &path);
        assert!(first.errors.is_empty());

        compiler.fail_next("unexpected token");
        edit_file(&path, "<p>broken");
        let failed = load(&plugin, &path);
        assert_eq!(failed.errors.len(), 1);
        assert!(failed.contents.is_none());
        assert_eq!(failed.watch_paths, vec![path.clone(), partial]);
    }

    #[test]
    fn failed_compile_is_not_cached() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(dir.path(), "app.weft", "<p>broken");
        let compiler = FakeCompiler::new();
        compiler.fail_next("unexpected token");
        let plugin = WeftPlugin::new(
            PluginConfig::new(settings_with_cache(CacheMode::On)),
            compiler.clone(),
        );

        let failed = load(&plugin, &path);
        assert_eq!(failed.errors.len(), 1);
        assert!(plugin.cache().is_empty());

        // The next load compiles again and succeeds.
        let second = load(&plugin, &path);
        assert!(second.errors.is_empty());
        assert_eq!(compiler.component_calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn compile_failure_diagnostic_uses_original_source() {
        let dir = tempfile::tempdir().unwrap();
        let original = "original line one\noriginal line two";
        let path = write_file(dir.path(), "app.weft", original);
        let compiler = FakeCompiler::new();
        compiler.fail_at("bad syntax", RawSpan::on_line(2, 0, 8));
        let config = PluginConfig::new(PluginSettings::default()).with_preprocessor(Box::new(
            MappingPreprocessor::new("completely different".to_string(), SourceMap::new(None)),
        ));
        let plugin = WeftPlugin::new(config, compiler);

        let failed = load(&plugin, &path);
        let location = failed.errors[0].location.as_ref().unwrap();
        assert_eq!(location.line_text, "original line two");
    }

    #[test]
    fn preprocess_failure_adopts_previous_dependency_set() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(dir.path(), "app.weft", "<p>ok</p>");
        let partial = write_file(dir.path(), "partial.css", ".p{}");
        let compiler = FakeCompiler::new();
        let failing = FailingPreprocessor::armed_later();
        let config = PluginConfig::new(settings_with_cache(CacheMode::On))
            .with_preprocessor(Box::new(
                MappingPreprocessor::passthrough().with_dependency(partial.clone()),
            ))
            .with_preprocessor(Box::new(failing.clone()));
        let plugin = WeftPlugin::new(config, compiler);

        assert!(load(&plugin, &path).errors.is_empty());

        failing.arm();
        edit_file(&path, "<p>still ok</p>");
        let failed = load(&plugin, &path);
        assert_eq!(failed.errors.len(), 1);
        assert!(failed.errors[0].text.contains("failing"));
        assert_eq!(failed.watch_paths, vec![path.clone(), partial]);
    }

    #[test]
    fn preprocess_failure_without_history_has_empty_watch_list() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(dir.path(), "app.weft", "<p>hi</p>");
        let failing = FailingPreprocessor::armed_later();
        failing.arm();
        let config =
            PluginConfig::new(PluginSettings::default()).with_preprocessor(Box::new(failing));
        let plugin = WeftPlugin::new(config, FakeCompiler::new());

        let failed = load(&plugin, &path);
        assert_eq!(failed.errors.len(), 1);
        assert!(failed.watch_paths.is_empty());
    }

    #[test]
    fn aggressive_cache_invalidates_importers() {
        let dir = tempfile::tempdir().unwrap();
        let a = write_file(dir.path(), "a.weft", "<p>a</p>");
        let b = write_file(dir.path(), "b.weft", "<p>uses A</p>");
        let compiler = FakeCompiler::new();
        let plugin = WeftPlugin::new(
            PluginConfig::new(settings_with_cache(CacheMode::Aggressive)),
            compiler.clone(),
        );

        load(&plugin, &b);
        assert_eq!(compiler.component_calls.load(Ordering::SeqCst), 1);

        // B's own preprocessing never reported A; only the host's import
        // graph knows about the relationship.
        let mut graph = ImportGraph::new();
        graph.insert(b.clone(), vec![a.clone()]);
        plugin.on_build_end(Some(&graph));

        edit_file(&a, "<p>a edited</p>");
        load(&plugin, &b);
        assert_eq!(compiler.component_calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn non_aggressive_mode_ignores_import_graph() {
        let dir = tempfile::tempdir().unwrap();
        let a = write_file(dir.path(), "a.weft", "<p>a</p>");
        let b = write_file(dir.path(), "b.weft", "<p>uses A</p>");
        let compiler = FakeCompiler::new();
        let plugin = WeftPlugin::new(
            PluginConfig::new(settings_with_cache(CacheMode::On)),
            compiler.clone(),
        );

        load(&plugin, &b);
        let mut graph = ImportGraph::new();
        graph.insert(b.clone(), vec![a.clone()]);
        plugin.on_build_end(Some(&graph));

        edit_file(&a, "<p>a edited</p>");
        load(&plugin, &b);
        assert_eq!(compiler.component_calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn watch_list_attached_when_watching_without_caching() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(dir.path(), "app.weft", "<p>hi</p>");
        let config = PluginConfig::new(PluginSettings {
            cache: Some(CacheMode::Off),
            ..PluginSettings::default()
        });
        let plugin = WeftPlugin::new(config, FakeCompiler::new());
        plugin.on_build_start(true);

        let result = load(&plugin, &path);
        assert_eq!(result.watch_paths, vec![path]);
    }

    #[test]
    fn no_watch_list_for_plain_one_shot_build() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(dir.path(), "app.weft", "<p>hi</p>");
        let plugin = WeftPlugin::new(PluginConfig::new(PluginSettings::default()), FakeCompiler::new());

        let result = load(&plugin, &path);
        assert!(result.watch_paths.is_empty());
    }

    #[test]
    fn missing_component_file_reports_error() {
        let plugin = WeftPlugin::new(PluginConfig::new(PluginSettings::default()), FakeCompiler::new());
        let failed = load(&plugin, Path::new("/nonexistent/app.weft"));
        assert_eq!(failed.errors.len(), 1);
        assert!(failed.errors[0].text.contains("failed to read"));
    }

    #[test]
    fn vendored_module_passes_through() {
        let compiler = FakeCompiler::new();
        let plugin = WeftPlugin::new(
            PluginConfig::new(PluginSettings::default()),
            compiler.clone(),
        );
        let result = load(&plugin, Path::new("node_modules/lib/state.weft.js"));
        assert!(result.is_pass_through());
        assert_eq!(compiler.module_calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn module_compiles_without_touching_cache() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(dir.path(), "state.weft.js", "export let n = 0;");
        let compiler = FakeCompiler::new();
        let plugin = WeftPlugin::new(
            PluginConfig::new(settings_with_cache(CacheMode::On)),
            compiler.clone(),
        );

        let first = load(&plugin, &path);
        assert!(first.errors.is_empty());
        assert_eq!(first.watch_paths, vec![path.clone()]);
        load(&plugin, &path);
        // The module branch never consults the cache, even when enabled.
        assert_eq!(compiler.module_calls.load(Ordering::SeqCst), 2);
        assert!(plugin.cache().is_empty());
    }

    #[test]
    fn module_failure_keeps_previous_watch_list() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(dir.path(), "state.weft.js", "export let n = 0;");
        let compiler = FakeCompiler::new();
        let plugin = WeftPlugin::new(
            PluginConfig::new(PluginSettings::default()),
            compiler.clone(),
        );

        load(&plugin, &path);
        compiler.fail_next("parse error");
        let failed = load(&plugin, &path);
        assert_eq!(failed.errors.len(), 1);
        assert_eq!(failed.watch_paths, vec![path]);
    }

    #[test]
    fn module_warnings_are_converted_and_filtered() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(dir.path(), "state.weft.js", "let unused = 1;");
        let compiler = FakeCompiler::new()
            .with_warning(RawMessage::warning("unused variable", RawSpan::on_line(1, 4, 10)))
            .with_warning(RawMessage::bare_warning("noisy"));
        let config = PluginConfig::new(PluginSettings::default())
            .with_warning_filter(|w| w.message != "noisy");
        let plugin = WeftPlugin::new(config, compiler);

        let result = load(&plugin, &path);
        assert_eq!(result.warnings.len(), 1);
        let location = result.warnings[0].location.as_ref().unwrap();
        assert_eq!(location.line, 1);
        assert_eq!(location.column, 4);
    }
}
