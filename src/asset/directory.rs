//! Ordered search roots for component assets.
//!
//! Directories are appended in precedence order until the first resolution,
//! at which point the list is frozen. Freezing moves the native directory
//! behind every user directory so user assets always win.

use std::fs;
use std::path::{Path, PathBuf};

use crate::debug;
use crate::error::AssetError;

/// A filesystem path with its readability and extension captured at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryPath {
    path: PathBuf,
    readable: bool,
    extension: Option<String>,
}

impl DirectoryPath {
    pub fn new(path: impl AsRef<Path>) -> Self {
        let given = path.as_ref();
        let path = fs::canonicalize(given).unwrap_or_else(|_| given.to_path_buf());

        let (readable, extension) = match fs::metadata(&path) {
            Ok(meta) if meta.is_dir() => (fs::read_dir(&path).is_ok(), None),
            Ok(_) => (
                fs::File::open(&path).is_ok(),
                path.extension()
                    .map(|e| e.to_string_lossy().to_ascii_lowercase()),
            ),
            Err(_) => (false, None),
        };

        Self {
            path,
            readable,
            extension,
        }
    }

    /// Resolved path (canonical when it existed at construction).
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_readable(&self) -> bool {
        self.readable
    }

    /// Lower-cased extension, only set when the path points at a file.
    pub fn extension(&self) -> Option<&str> {
        self.extension.as_deref()
    }

    /// Uniqueness key within a registry.
    fn key(&self) -> String {
        self.path.to_string_lossy().into_owned()
    }
}

/// Ordered, append-only list of asset search roots.
#[derive(Debug, Clone, Default)]
pub struct DirectoryRegistry {
    directories: Vec<DirectoryPath>,
    native: Option<DirectoryPath>,
    frozen: bool,
}

impl DirectoryRegistry {
    /// Create an empty registry. `native` is searched last once frozen.
    pub fn new(native: Option<PathBuf>) -> Self {
        Self {
            directories: Vec::new(),
            native: native.map(DirectoryPath::new),
            frozen: false,
        }
    }

    /// Append a search root.
    ///
    /// Re-adding a path already present keeps its original position.
    pub fn add_directory(&mut self, path: impl AsRef<Path>) -> Result<&mut Self, AssetError> {
        let path = path.as_ref();
        if self.frozen {
            return Err(AssetError::Frozen(path.to_path_buf()));
        }

        let dir = DirectoryPath::new(path);
        if self.directories.iter().any(|d| d.key() == dir.key()) {
            debug!("assets"; "directory already registered: {}", dir.path.display());
        } else {
            if !dir.readable {
                debug!("assets"; "directory not readable (yet): {}", dir.path.display());
            }
            self.directories.push(dir);
        }
        Ok(self)
    }

    /// Freeze the registry and return the final search order.
    ///
    /// The first call places the native directory last; later calls return
    /// the same list unchanged.
    pub fn freeze_and_list(&mut self) -> &[DirectoryPath] {
        if !self.frozen {
            if let Some(native) = self.native.clone() {
                let key = native.key();
                self.directories.retain(|d| d.key() != key);
                self.directories.push(native);
            }
            self.frozen = true;
            debug!("assets"; "directories frozen ({} roots)", self.directories.len());
        }
        &self.directories
    }

    /// Current list without freezing.
    pub fn directories(&self) -> &[DirectoryPath] {
        &self.directories
    }

    pub fn is_frozen(&self) -> bool {
        self.frozen
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn paths(list: &[DirectoryPath]) -> Vec<PathBuf> {
        list.iter().map(|d| d.path().to_path_buf()).collect()
    }

    #[test]
    fn test_directory_path_file_and_dir() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("button.CSS");
        fs::write(&file, "").unwrap();

        let as_dir = DirectoryPath::new(dir.path());
        assert!(as_dir.is_readable());
        assert_eq!(as_dir.extension(), None);

        let as_file = DirectoryPath::new(&file);
        assert!(as_file.is_readable());
        assert_eq!(as_file.extension(), Some("css"));

        let missing = DirectoryPath::new(dir.path().join("missing"));
        assert!(!missing.is_readable());
    }

    #[test]
    fn test_unique_by_resolved_path() {
        let dir = TempDir::new().unwrap();
        let mut registry = DirectoryRegistry::new(None);
        registry.add_directory(dir.path()).unwrap();
        registry.add_directory(dir.path().join(".")).unwrap();
        assert_eq!(registry.directories().len(), 1);
    }

    #[test]
    fn test_native_moved_last_on_freeze() {
        let native = TempDir::new().unwrap();
        let user = TempDir::new().unwrap();

        let mut registry = DirectoryRegistry::new(Some(native.path().to_path_buf()));
        registry.add_directory(native.path()).unwrap();
        registry.add_directory(user.path()).unwrap();

        let list = paths(registry.freeze_and_list());
        assert_eq!(list.len(), 2);
        assert_eq!(list[0], fs::canonicalize(user.path()).unwrap());
        assert_eq!(list[1], fs::canonicalize(native.path()).unwrap());
    }

    #[test]
    fn test_native_appended_when_absent() {
        let native = TempDir::new().unwrap();
        let user = TempDir::new().unwrap();

        let mut registry = DirectoryRegistry::new(Some(native.path().to_path_buf()));
        registry.add_directory(user.path()).unwrap();
        assert_eq!(registry.directories().len(), 1);

        let list = paths(registry.freeze_and_list());
        assert_eq!(list.last(), Some(&fs::canonicalize(native.path()).unwrap()));
    }

    #[test]
    fn test_frozen_rejects_and_keeps_order() {
        let a = TempDir::new().unwrap();
        let b = TempDir::new().unwrap();

        let mut registry = DirectoryRegistry::new(None);
        registry.add_directory(a.path()).unwrap();
        let before = paths(registry.freeze_and_list());

        let err = registry.add_directory(b.path()).unwrap_err();
        assert!(matches!(err, AssetError::Frozen(_)));
        assert!(registry.is_frozen());

        let after = paths(registry.freeze_and_list());
        assert_eq!(before, after);
    }
}
