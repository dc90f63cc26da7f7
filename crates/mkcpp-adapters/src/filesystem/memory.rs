//! In-memory filesystem adapter for testing.

use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use mkcpp_core::application::ApplicationError;
use mkcpp_core::application::ports::Filesystem;
use mkcpp_core::error::MkcppResult;

/// In-memory filesystem for testing.
///
/// Supports injected failures so tests can simulate a directory-creation
/// or write error on a specific path.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: HashMap<PathBuf, String>,
    directories: HashSet<PathBuf>,
    executables: HashSet<PathBuf>,
    failing: HashSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every operation on `path` fail from now on.
    pub fn fail_on(&self, path: impl Into<PathBuf>) {
        self.inner.write().unwrap().failing.insert(path.into());
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        self.inner.read().unwrap().files.get(path).cloned()
    }

    /// Check if a file is marked executable.
    pub fn is_executable(&self, path: &Path) -> bool {
        self.inner.read().unwrap().executables.contains(path)
    }

    /// All directories created so far, unordered.
    pub fn directories(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .unwrap()
            .directories
            .iter()
            .cloned()
            .collect()
    }

    /// All files written so far, unordered.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.inner.read().unwrap().files.keys().cloned().collect()
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> MkcppResult<()> {
        let mut inner = self.inner.write().unwrap();

        if inner.failing.contains(path) {
            return Err(ApplicationError::DirectoryCreation {
                path: path.to_path_buf(),
                reason: "injected failure".into(),
            }
            .into());
        }

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }

        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> MkcppResult<()> {
        let mut inner = self.inner.write().unwrap();

        if inner.failing.contains(path) {
            return Err(ApplicationError::ArtifactWrite {
                path: path.to_path_buf(),
                reason: "injected failure".into(),
            }
            .into());
        }

        // Mirror the real filesystem: the parent must exist.
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(ApplicationError::ArtifactWrite {
                    path: path.to_path_buf(),
                    reason: "parent directory does not exist".into(),
                }
                .into());
            }
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn set_executable(&self, path: &Path) -> MkcppResult<()> {
        let mut inner = self.inner.write().unwrap();

        if !inner.files.contains_key(path) {
            return Err(ApplicationError::ArtifactWrite {
                path: path.to_path_buf(),
                reason: "no such file".into(),
            }
            .into());
        }

        inner.executables.insert(path.to_path_buf());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        let inner = self.inner.read().unwrap();
        inner.files.contains_key(path) || inner.directories.contains(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_dir_all_records_every_ancestor() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("Foo/mac/bin")).unwrap();
        assert!(fs.exists(Path::new("Foo")));
        assert!(fs.exists(Path::new("Foo/mac")));
        assert!(fs.exists(Path::new("Foo/mac/bin")));
    }

    #[test]
    fn injected_failure_surfaces_as_directory_creation_error() {
        let fs = MemoryFilesystem::new();
        fs.fail_on("Foo/src");
        let err = fs.create_dir_all(Path::new("Foo/src")).unwrap_err();
        assert!(matches!(
            err,
            mkcpp_core::error::MkcppError::Application(
                ApplicationError::DirectoryCreation { .. }
            )
        ));
    }

    #[test]
    fn write_requires_an_existing_parent() {
        let fs = MemoryFilesystem::new();
        let err = fs.write_file(Path::new("Foo/mac/build.sh"), "x").unwrap_err();
        assert!(matches!(
            err,
            mkcpp_core::error::MkcppError::Application(ApplicationError::ArtifactWrite { .. })
        ));
    }

    #[test]
    fn executable_bit_round_trips() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("Foo/mac")).unwrap();
        fs.write_file(Path::new("Foo/mac/build.sh"), "#!/bin/bash\n")
            .unwrap();
        fs.set_executable(Path::new("Foo/mac/build.sh")).unwrap();
        assert!(fs.is_executable(Path::new("Foo/mac/build.sh")));
    }
}
