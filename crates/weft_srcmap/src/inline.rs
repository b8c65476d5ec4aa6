//! Inline data-URL encoding of maps for emitted JS and CSS.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::map::SourceMap;

const DATA_URL_PREFIX: &str = "data:application/json;charset=utf-8;base64,";

/// Renders the trailing `//# sourceMappingURL=...` comment for emitted JS.
pub fn js_comment(map: &SourceMap) -> String {
    format!(
        "\n//# sourceMappingURL={}{}",
        DATA_URL_PREFIX,
        STANDARD.encode(map.to_json())
    )
}

/// Renders the trailing `/*# sourceMappingURL=... */` comment for emitted CSS.
pub fn css_comment(map: &SourceMap) -> String {
    format!(
        "\n/*# sourceMappingURL={}{} */",
        DATA_URL_PREFIX,
        STANDARD.encode(map.to_json())
    )
}

/// Extracts and decodes the map from an inline comment payload, if present.
///
/// Accepts either comment form. Intended for tests and tooling that need to
/// look back inside assembled output.
pub fn extract(contents: &str) -> Option<SourceMap> {
    let start = contents.rfind(DATA_URL_PREFIX)? + DATA_URL_PREFIX.len();
    let payload: String = contents[start..]
        .chars()
        .take_while(|c| !c.is_whitespace() && *c != '*')
        .collect();
    let bytes = STANDARD.decode(payload).ok()?;
    serde_json::from_slice(&bytes).ok()
}
