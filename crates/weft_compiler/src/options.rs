//! Compiler option types and the default-plus-overrides merge.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// How the compiler should emit component styles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CssMode {
    /// Emit the stylesheet as a separate payload (the default; the pipeline
    /// serves it through a virtual asset path).
    #[default]
    External,
    /// Inject styles from the module at runtime.
    Injected,
}

/// Effective options for a component compile.
///
/// Built per compile by layering user overrides over [`Default`], which
/// externalizes stylesheet output.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CompileOptions {
    /// Stylesheet emission mode.
    pub css: CssMode,
    /// Development mode (extra runtime checks in emitted code).
    pub dev: bool,
    /// Options forwarded to the compiler collaborator verbatim.
    pub extra: BTreeMap<String, toml::Value>,
}

/// User-supplied component compiler options; unset fields keep the default.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct CompileOverrides {
    /// Overrides the stylesheet emission mode.
    #[serde(default)]
    pub css: Option<CssMode>,
    /// Overrides development mode.
    #[serde(default)]
    pub dev: Option<bool>,
    /// Extra options merged over the defaults' extras.
    #[serde(default)]
    pub extra: BTreeMap<String, toml::Value>,
}

impl CompileOptions {
    /// Layers `overrides` over these options, field by field.
    pub fn merged_with(mut self, overrides: &CompileOverrides) -> Self {
        if let Some(css) = overrides.css {
            self.css = css;
        }
        if let Some(dev) = overrides.dev {
            self.dev = dev;
        }
        self.extra
            .extend(overrides.extra.iter().map(|(k, v)| (k.clone(), v.clone())));
        self
    }
}

/// Effective options for a standalone module compile.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ModuleOptions {
    /// Development mode.
    pub dev: bool,
    /// Options forwarded to the compiler collaborator verbatim.
    pub extra: BTreeMap<String, toml::Value>,
}

/// User-supplied module compiler options; unset fields keep the default.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ModuleOverrides {
    /// Overrides development mode.
    #[serde(default)]
    pub dev: Option<bool>,
    /// Extra options merged over the defaults' extras.
    #[serde(default)]
    pub extra: BTreeMap<String, toml::Value>,
}

impl ModuleOptions {
    /// Layers `overrides` over these options, field by field.
    pub fn merged_with(mut self, overrides: &ModuleOverrides) -> Self {
        if let Some(dev) = overrides.dev {
            self.dev = dev;
        }
        self.extra
            .extend(overrides.extra.iter().map(|(k, v)| (k.clone(), v.clone())));
        self
    }
}
