//! Directory tree builder: materialize the fixed project layout.

use std::path::Path;

use tracing::{debug, instrument};

use crate::application::ports::Filesystem;
use crate::domain::ProjectLayout;
use crate::error::MkcppResult;

/// Creates the seven layout directories, strictly in order.
pub struct TreeService<'a> {
    filesystem: &'a dyn Filesystem,
}

impl<'a> TreeService<'a> {
    pub fn new(filesystem: &'a dyn Filesystem) -> Self {
        Self { filesystem }
    }

    /// Idempotently create one directory.
    pub fn create(&self, path: &Path) -> MkcppResult<()> {
        self.filesystem.create_dir_all(path)?;
        debug!(path = %path.display(), "directory ready");
        Ok(())
    }

    /// Create every layout directory front to back, invoking `on_created`
    /// after each success.
    ///
    /// Fails fast: the first failure aborts before any later path is
    /// attempted, and already-created directories are not rolled back.
    #[instrument(skip_all, fields(root = %layout.root().display()))]
    pub fn create_all(
        &self,
        layout: &ProjectLayout,
        mut on_created: impl FnMut(&Path),
    ) -> MkcppResult<()> {
        for dir in layout.directories() {
            self.create(&dir)?;
            on_created(&dir);
        }
        Ok(())
    }
}
