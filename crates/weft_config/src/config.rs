//! The validated, process-wide plugin configuration.

use std::fmt;
use std::sync::Arc;

use weft_compiler::{Preprocessor, RawMessage};

use crate::settings::PluginSettings;

/// Predicate deciding whether a raw compiler warning is kept.
pub type WarningFilter = Arc<dyn Fn(&RawMessage) -> bool + Send + Sync>;

/// The plugin instance's configuration: declarative settings plus the
/// runtime collaborators that cannot live in a settings file.
///
/// Constructed once at plugin registration and read-only thereafter.
pub struct PluginConfig {
    /// Declarative settings (filters, cache mode, compiler overrides).
    pub settings: PluginSettings,
    /// Ordered source-to-source transforms run before compilation.
    pub preprocessors: Vec<Box<dyn Preprocessor>>,
    /// Optional predicate filtering compiler warnings.
    pub warning_filter: Option<WarningFilter>,
}

impl PluginConfig {
    /// Creates a configuration with no preprocessors and no warning filter.
    pub fn new(settings: PluginSettings) -> Self {
        Self {
            settings,
            preprocessors: Vec::new(),
            warning_filter: None,
        }
    }

    /// Appends a transform to the preprocessor chain.
    pub fn with_preprocessor(mut self, preprocessor: Box<dyn Preprocessor>) -> Self {
        self.preprocessors.push(preprocessor);
        self
    }

    /// Sets the warning filter predicate.
    pub fn with_warning_filter(
        mut self,
        filter: impl Fn(&RawMessage) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.warning_filter = Some(Arc::new(filter));
        self
    }

    /// Applies the warning filter; warnings pass when no filter is set.
    pub fn keeps_warning(&self, warning: &RawMessage) -> bool {
        self.warning_filter.as_ref().is_none_or(|f| f(warning))
    }
}

impl fmt::Debug for PluginConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PluginConfig")
            .field("settings", &self.settings)
            .field("preprocessors", &self.preprocessors.len())
            .field("warning_filter", &self.warning_filter.is_some())
            .finish()
    }
}
