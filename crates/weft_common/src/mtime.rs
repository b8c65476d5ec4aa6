//! Modification-time reads for cache validity checks.

use std::io;
use std::path::Path;
use std::time::SystemTime;

/// Reads the current modification time of `path`.
///
/// Any failure (missing file, permission error, a filesystem without mtime
/// support) surfaces as an `Err`; callers in the cache layer treat every
/// failure as an invalidation signal.
pub fn read_mtime(path: &Path) -> io::Result<SystemTime> {
    std::fs::metadata(path)?.modified()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mtime_of_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.weft");
        std::fs::write(&path, "<p/>").unwrap();
        assert!(read_mtime(&path).is_ok());
    }

    #[test]
    fn mtime_of_missing_file_errors() {
        assert!(read_mtime(Path::new("/nonexistent/app.weft")).is_err());
    }

    #[test]
    fn mtime_advances_on_rewrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.weft");
        std::fs::write(&path, "v1").unwrap();
        let first = read_mtime(&path).unwrap();
        std::thread::sleep(std::time::Duration::from_millis(20));
        std::fs::write(&path, "v2").unwrap();
        let second = read_mtime(&path).unwrap();
        assert!(second > first);
    }
}
