//! Artifact writing.
//!
//! Outputs are staged in a temporary file next to their destination and
//! moved into place only once fully written, so a failed run never leaves a
//! partial artifact behind.

use std::{io::Write, path::Path};

use log::debug;
use tempfile::NamedTempFile;

use crate::RstVizError;

/// Writes `contents` to `path` atomically.
///
/// # Errors
///
/// Returns [`RstVizError::Io`] if the temporary file cannot be created or
/// written, or if it cannot be moved onto `path`.
pub fn write_atomic(path: impl AsRef<Path>, contents: &[u8]) -> Result<(), RstVizError> {
    let path = path.as_ref();
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut staged = NamedTempFile::new_in(dir)?;
    staged.write_all(contents)?;
    staged.flush()?;
    staged.persist(path).map_err(|err| RstVizError::Io(err.error))?;

    debug!(path = path.display().to_string(), bytes = contents.len(); "Artifact written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_write_creates_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.dot");

        write_atomic(&path, b"digraph \"rst\" {\n}\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "digraph \"rst\" {\n}\n");
    }

    #[test]
    fn test_write_replaces_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.dot");
        fs::write(&path, "old contents that are longer").unwrap();

        write_atomic(&path, b"new").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn test_write_leaves_no_staging_files() {
        let dir = tempdir().unwrap();
        write_atomic(dir.path().join("out.dot"), b"x").unwrap();

        let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().flatten().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_missing_directory_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("out.dot");

        assert!(matches!(write_atomic(&path, b"x"), Err(RstVizError::Io(_))));
        assert!(!path.exists());
    }
}
