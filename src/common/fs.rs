//! Whole-file text access for the Podfile
//!
//! Reading and writing go through [`TextStore`] so the apply operation can
//! be exercised against failing stores in tests. [`DiskStore`] writes via a
//! temporary file in the same directory and renames it over the target, so
//! a failed write leaves the original file untouched.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::{self, Result};

/// Whole-file text storage
pub trait TextStore {
    /// Whether a regular file exists at `path`
    fn exists(&self, path: &Path) -> bool;

    /// Read the entire file as UTF-8 text
    fn read(&self, path: &Path) -> Result<String>;

    /// Replace the entire file with `content`
    fn write(&self, path: &Path, content: &str) -> Result<()>;
}

/// [`TextStore`] backed by the local file system
#[derive(Debug, Default, Clone, Copy)]
pub struct DiskStore;

impl TextStore for DiskStore {
    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn read(&self, path: &Path) -> Result<String> {
        std::fs::read_to_string(path).map_err(|e| error::fs::read_failed(path, e))
    }

    fn write(&self, path: &Path, content: &str) -> Result<()> {
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut temp = NamedTempFile::new_in(dir).map_err(|e| error::fs::write_failed(path, e))?;
        temp.write_all(content.as_bytes())
            .and_then(|()| temp.flush())
            .map_err(|e| error::fs::write_failed(path, e))?;

        // Keep the original file's permissions on the replacement
        if let Ok(metadata) = std::fs::metadata(path) {
            std::fs::set_permissions(temp.path(), metadata.permissions())
                .map_err(|e| error::fs::write_failed(path, e))?;
        }

        temp.persist(path)
            .map_err(|e| error::fs::write_failed(path, e.error))?;
        Ok(())
    }
}
