//! Folding a source through the preprocessor chain.

use crate::error::PreprocessFailure;
use crate::output::PreprocessOutput;
use crate::traits::Preprocessor;

/// Runs `source` through every transform in order.
///
/// Each transform sees the previous transform's output. Position maps from
/// successive stages are composed so the final map translates straight back
/// to the original input; dependency lists are concatenated in report order.
/// The first failing transform aborts the chain.
pub fn run_chain(
    chain: &[Box<dyn Preprocessor>],
    source: &str,
    filename: &str,
) -> Result<PreprocessOutput, PreprocessFailure> {
    let mut code = source.to_string();
    let mut map = None;
    let mut dependencies = Vec::new();
    for pre in chain {
        let out = pre.process(&code, filename)?;
        code = out.code;
        map = match (out.map, map) {
            (Some(later), Some(earlier)) => Some(later.compose(&earlier)),
            (Some(later), None) => Some(later),
            (None, earlier) => earlier,
        };
        dependencies.extend(out.dependencies);
    }
    Ok(PreprocessOutput {
        code,
        map,
        dependencies,
    })
}
