//! Declarative settings deserialized from `weft.toml`.

use serde::Deserialize;
use weft_compiler::{CompileOverrides, ModuleOverrides};

/// The result-cache mode.
///
/// `Off` is the default; the cache-enable heuristics in `weft_cache` may
/// still turn caching on for watch and repeat builds unless the user set a
/// mode explicitly. `Aggressive` additionally harvests the host-reported
/// import graph at the end of each build to widen dependency sets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CacheMode {
    /// No result caching.
    #[default]
    Off,
    /// Cache per-file results, invalidated by dependency mtimes.
    On,
    /// `On`, plus transitive invalidation through the import graph.
    Aggressive,
}

/// Declarative plugin settings.
///
/// Validated once at plugin registration and read-only thereafter.
#[derive(Clone, Debug, Deserialize)]
pub struct PluginSettings {
    /// Extensions (without dot) of component files this plugin compiles.
    #[serde(default = "default_include")]
    pub include: Vec<String>,

    /// File-name suffixes (without leading dot) of standalone module files.
    #[serde(default = "default_module_suffixes")]
    pub module_suffixes: Vec<String>,

    /// Directory names marking a dependency-management boundary; files under
    /// them are passed through untouched.
    #[serde(default = "default_vendor_dirs")]
    pub vendor_dirs: Vec<String>,

    /// Explicit cache mode. `None` leaves the choice to the runtime
    /// heuristics; an explicit value always wins over them.
    #[serde(default)]
    pub cache: Option<CacheMode>,

    /// Whether component files may be used as build entry points.
    ///
    /// Unset by default. Entry-point loads of component files are reported
    /// as errors either way for now; see the pipeline's entry gate.
    #[serde(default)]
    pub entry_binding: bool,

    /// Component compiler option overrides.
    #[serde(default)]
    pub compiler: CompileOverrides,

    /// Module compiler option overrides.
    #[serde(default)]
    pub module_compiler: ModuleOverrides,
}

fn default_include() -> Vec<String> {
    vec!["weft".to_string()]
}

fn default_module_suffixes() -> Vec<String> {
    vec!["weft.js".to_string(), "weft.ts".to_string()]
}

fn default_vendor_dirs() -> Vec<String> {
    vec!["node_modules".to_string()]
}

impl Default for PluginSettings {
    fn default() -> Self {
        Self {
            include: default_include(),
            module_suffixes: default_module_suffixes(),
            vendor_dirs: default_vendor_dirs(),
            cache: None,
            entry_binding: false,
            compiler: CompileOverrides::default(),
            module_compiler: ModuleOverrides::default(),
        }
    }
}
