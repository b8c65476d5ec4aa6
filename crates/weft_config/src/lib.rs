//! Plugin configuration: declarative settings plus runtime collaborators.
//!
//! Settings that can live in `weft.toml` (cache mode, file filters, compiler
//! option overrides) are deserialized and validated once at plugin
//! registration. Runtime-only parts — the preprocessor chain and the warning
//! filter predicate — attach through [`PluginConfig`] builder methods. The
//! whole configuration is read-only for the plugin instance's lifetime; the
//! cache-enable state it feeds lives in `weft_cache`.

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod filter;
pub mod loader;
pub mod settings;

pub use config::{PluginConfig, WarningFilter};
pub use error::ConfigError;
pub use filter::FileKind;
pub use loader::{load_settings, load_settings_from_str};
pub use settings::{CacheMode, PluginSettings};
