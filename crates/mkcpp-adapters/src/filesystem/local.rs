//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use mkcpp_core::{application::ports::Filesystem, error::MkcppResult};

use mkcpp_core::application::ApplicationError;

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> MkcppResult<()> {
        // std::fs::create_dir_all is already idempotent: an existing
        // directory is not an error.
        std::fs::create_dir_all(path).map_err(|e| directory_error(path, e))
    }

    fn write_file(&self, path: &Path, content: &str) -> MkcppResult<()> {
        // Truncate-and-rewrite: re-runs replace the artifact whole.
        std::fs::write(path, content).map_err(|e| write_error(path, e))
    }

    fn set_executable(&self, path: &Path) -> MkcppResult<()> {
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let metadata = std::fs::metadata(path).map_err(|e| write_error(path, e))?;
            let mut perms = metadata.permissions();
            let mode = perms.mode();
            perms.set_mode(mode | 0o111);
            std::fs::set_permissions(path, perms).map_err(|e| write_error(path, e))?;
        }
        #[cfg(not(unix))]
        {
            // No executable bit to set.
            let _ = path;
        }
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

fn directory_error(path: &Path, e: io::Error) -> mkcpp_core::error::MkcppError {
    ApplicationError::DirectoryCreation {
        path: path.to_path_buf(),
        reason: e.to_string(),
    }
    .into()
}

fn write_error(path: &Path, e: io::Error) -> mkcpp_core::error::MkcppError {
    ApplicationError::ArtifactWrite {
        path: path.to_path_buf(),
        reason: e.to_string(),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_dir_all_is_idempotent() {
        let tmp = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        let nested = tmp.path().join("a/b/c");

        fs.create_dir_all(&nested).unwrap();
        fs.create_dir_all(&nested).unwrap();
        assert!(nested.is_dir());
    }

    #[test]
    fn write_file_truncates_previous_content() {
        let tmp = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        let file = tmp.path().join("out.txt");

        fs.write_file(&file, "a much longer first version\n").unwrap();
        fs.write_file(&file, "short\n").unwrap();
        assert_eq!(std::fs::read_to_string(&file).unwrap(), "short\n");
    }

    #[cfg(unix)]
    #[test]
    fn set_executable_adds_the_execute_bits() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        let file = tmp.path().join("run.sh");

        fs.write_file(&file, "#!/bin/bash\n").unwrap();
        fs.set_executable(&file).unwrap();

        let mode = std::fs::metadata(&file).unwrap().permissions().mode();
        assert_eq!(mode & 0o111, 0o111);
    }

    #[test]
    fn write_into_missing_directory_is_an_artifact_write_error() {
        let tmp = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        let file = tmp.path().join("missing/out.txt");

        let err = fs.write_file(&file, "x").unwrap_err();
        assert!(matches!(
            err,
            mkcpp_core::error::MkcppError::Application(ApplicationError::ArtifactWrite { .. })
        ));
    }
}
