//! Path classification against the configured filters.

use std::path::Path;

use crate::settings::PluginSettings;

/// What kind of source a path denotes to this plugin.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileKind {
    /// A component file: markup + script + style compiled as one unit.
    Component,
    /// A standalone executable module file.
    Module,
    /// Not this plugin's concern.
    Other,
}

impl PluginSettings {
    /// Classifies a path against the include and module-suffix filters.
    ///
    /// Module suffixes are checked first: `app.weft.js` matches the
    /// `weft.js` suffix even though its final extension is `js`.
    pub fn classify(&self, path: &Path) -> FileKind {
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            return FileKind::Other;
        };
        for suffix in &self.module_suffixes {
            if name.len() > suffix.len() + 1 && name.ends_with(suffix.as_str()) {
                let dot = name.len() - suffix.len() - 1;
                if name.as_bytes()[dot] == b'.' {
                    return FileKind::Module;
                }
            }
        }
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if self.include.iter().any(|inc| inc == ext) => FileKind::Component,
            _ => FileKind::Other,
        }
    }

    /// Returns `true` when the path crosses a dependency-management boundary
    /// (any component of the path names a vendor directory).
    pub fn is_vendored(&self, path: &Path) -> bool {
        path.components().any(|c| {
            c.as_os_str()
                .to_str()
                .is_some_and(|s| self.vendor_dirs.iter().any(|v| v == s))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn classify_component() {
        let s = PluginSettings::default();
        assert_eq!(
            s.classify(&PathBuf::from("src/app.weft")),
            FileKind::Component
        );
    }

    #[test]
    fn classify_module_before_component() {
        let s = PluginSettings::default();
        assert_eq!(
            s.classify(&PathBuf::from("src/state.weft.js")),
            FileKind::Module
        );
        assert_eq!(
            s.classify(&PathBuf::from("src/state.weft.ts")),
            FileKind::Module
        );
    }

    #[test]
    fn classify_other() {
        let s = PluginSettings::default();
        assert_eq!(s.classify(&PathBuf::from("src/main.ts")), FileKind::Other);
        assert_eq!(s.classify(&PathBuf::from("noextension")), FileKind::Other);
    }

    #[test]
    fn suffix_requires_preceding_dot() {
        let s = PluginSettings::default();
        // "xweft.js" ends with "weft.js" but is not a module file.
        assert_eq!(s.classify(&PathBuf::from("xweft.js")), FileKind::Other);
    }

    #[test]
    fn custom_include() {
        let s = PluginSettings {
            include: vec!["cmp".to_string()],
            ..PluginSettings::default()
        };
        assert_eq!(s.classify(&PathBuf::from("a.cmp")), FileKind::Component);
        assert_eq!(s.classify(&PathBuf::from("a.weft")), FileKind::Other);
    }

    #[test]
    fn vendored_paths() {
        let s = PluginSettings::default();
        assert!(s.is_vendored(&PathBuf::from("node_modules/lib/a.weft.js")));
        assert!(s.is_vendored(&PathBuf::from("pkg/node_modules/lib/a.weft.js")));
        assert!(!s.is_vendored(&PathBuf::from("src/a.weft.js")));
    }
}
