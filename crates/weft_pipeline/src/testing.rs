//! Shared fakes for the plugin and pipeline tests.

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use weft_compiler::{
    CompileFailure, CompileOptions, ComponentCompiler, ComponentOutput, EmittedCode,
    ModuleOptions, ModuleOutput, PreprocessFailure, PreprocessOutput, Preprocessor, RawMessage,
};
use weft_diagnostics::RawSpan;
use weft_srcmap::SourceMap;

/// A scriptable compiler that counts calls and echoes its input.
///
/// Handed around as an `Arc` so tests can keep a handle after giving one to
/// the plugin; all knobs use interior mutability.
pub struct FakeCompiler {
    pub component_calls: AtomicUsize,
    pub module_calls: AtomicUsize,
    css: Mutex<Option<String>>,
    emit_js_map: AtomicBool,
    warnings: Mutex<Vec<RawMessage>>,
    fail_with: Mutex<Option<CompileFailure>>,
}

impl FakeCompiler {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            component_calls: AtomicUsize::new(0),
            module_calls: AtomicUsize::new(0),
            css: Mutex::new(None),
            emit_js_map: AtomicBool::new(false),
            warnings: Mutex::new(Vec::new()),
            fail_with: Mutex::new(None),
        })
    }

    /// Makes component compiles emit a stylesheet with the given text.
    pub fn with_css(self: Arc<Self>, css: &str) -> Arc<Self> {
        self.set_css(css);
        self
    }

    /// Makes compiles report the given warning.
    pub fn with_warning(self: Arc<Self>, warning: RawMessage) -> Arc<Self> {
        self.warnings.lock().unwrap().push(warning);
        self
    }

    /// Makes component compiles attach a JS map naming the compiled file.
    pub fn with_js_map(self: Arc<Self>) -> Arc<Self> {
        self.emit_js_map.store(true, Ordering::SeqCst);
        self
    }

    pub fn set_css(&self, css: &str) {
        *self.css.lock().unwrap() = Some(css.to_string());
    }

    /// Fails exactly one subsequent compile with a bare message.
    pub fn fail_next(&self, message: &str) {
        *self.fail_with.lock().unwrap() = Some(CompileFailure::new(message));
    }

    /// Fails exactly one subsequent compile with a positioned message.
    pub fn fail_at(&self, message: &str, span: RawSpan) {
        *self.fail_with.lock().unwrap() = Some(CompileFailure::at(message, span));
    }

    fn take_failure(&self) -> Option<CompileFailure> {
        self.fail_with.lock().unwrap().take()
    }
}

impl ComponentCompiler for FakeCompiler {
    fn compile_component(
        &self,
        source: &str,
        _options: &CompileOptions,
        filename: &str,
    ) -> Result<ComponentOutput, CompileFailure> {
        self.component_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(failure) = self.take_failure() {
            return Err(failure);
        }
        let map = self.emit_js_map.load(Ordering::SeqCst).then(|| SourceMap {
            sources: vec![filename.to_string()],
            mappings: "AAAA".to_string(),
            ..SourceMap::new(Some(filename.to_string()))
        });
        Ok(ComponentOutput {
            js: EmittedCode {
                code: format!("export default /* {filename} */ {source:?};"),
                map,
            },
            css: self.css.lock().unwrap().clone().map(EmittedCode::bare),
            warnings: self.warnings.lock().unwrap().clone(),
        })
    }

    fn compile_module(
        &self,
        source: &str,
        _options: &ModuleOptions,
        filename: &str,
    ) -> Result<ModuleOutput, CompileFailure> {
        self.module_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(failure) = self.take_failure() {
            return Err(failure);
        }
        Ok(ModuleOutput {
            js: EmittedCode::bare(format!("/* {filename} */ {source}")),
            warnings: self.warnings.lock().unwrap().clone(),
        })
    }
}

/// A preprocessor with fixed output, map, and dependency list.
pub struct MappingPreprocessor {
    output: Option<String>,
    map: Option<SourceMap>,
    dependencies: Vec<PathBuf>,
}

impl MappingPreprocessor {
    /// Replaces the source with `output` and reports `map`.
    pub fn new(output: String, map: SourceMap) -> Self {
        Self {
            output: Some(output),
            map: Some(map),
            dependencies: Vec::new(),
        }
    }

    /// Leaves the source untouched and reports nothing.
    pub fn passthrough() -> Self {
        Self {
            output: None,
            map: None,
            dependencies: Vec::new(),
        }
    }

    pub fn with_dependency(mut self, dep: PathBuf) -> Self {
        self.dependencies.push(dep);
        self
    }
}

impl Preprocessor for MappingPreprocessor {
    fn name(&self) -> &str {
        "mapper"
    }

    fn process(
        &self,
        source: &str,
        _filename: &str,
    ) -> Result<PreprocessOutput, PreprocessFailure> {
        Ok(PreprocessOutput {
            code: self.output.clone().unwrap_or_else(|| source.to_string()),
            map: self.map.clone(),
            dependencies: self.dependencies.clone(),
        })
    }
}

/// A preprocessor that succeeds until armed, then fails every call.
#[derive(Clone)]
pub struct FailingPreprocessor {
    armed: Arc<AtomicBool>,
}

impl FailingPreprocessor {
    pub fn armed_later() -> Self {
        Self {
            armed: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn arm(&self) {
        self.armed.store(true, Ordering::SeqCst);
    }
}

impl Preprocessor for FailingPreprocessor {
    fn name(&self) -> &str {
        "failing"
    }

    fn process(
        &self,
        source: &str,
        _filename: &str,
    ) -> Result<PreprocessOutput, PreprocessFailure> {
        if self.armed.load(Ordering::SeqCst) {
            Err(PreprocessFailure::new(self.name(), "synthetic failure"))
        } else {
            Ok(PreprocessOutput::unchanged(source))
        }
    }
}
