//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use zonegen_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{ZonegenError, ZonegenResult},
};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> ZonegenResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> ZonegenResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> ZonegenError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn writes_documents_under_new_directories() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("out/gcp");
        let file = dir.join("zone.tf.json");
        let fs = LocalFilesystem::new();

        fs.create_dir_all(&dir).unwrap();
        fs.write_file(&file, "{}").unwrap();

        assert!(fs.exists(&file));
        assert_eq!(std::fs::read_to_string(&file).unwrap(), "{}");
    }

    #[test]
    fn write_into_missing_directory_fails() {
        let temp = TempDir::new().unwrap();
        let err = LocalFilesystem::new()
            .write_file(&temp.path().join("missing/zone.tf.json"), "{}")
            .unwrap_err();
        assert!(err.to_string().contains("Failed to write file"));
    }
}
