//! Artifact generation: render in memory, write once, mark executable.

use std::path::PathBuf;

use tracing::{info, instrument};

use crate::application::ports::Filesystem;
use crate::domain::{ProjectConfiguration, ProjectLayout};
use crate::error::MkcppResult;
use crate::render::{FormattingContext, render_build_script, render_descriptor};

/// Writes the two generated artifacts through the filesystem port.
///
/// Each artifact is assembled fully in memory and written in a single
/// truncating write, so a re-run always rewrites it whole — there is no
/// incremental merge.
pub struct GenerateService<'a> {
    filesystem: &'a dyn Filesystem,
}

impl<'a> GenerateService<'a> {
    pub fn new(filesystem: &'a dyn Filesystem) -> Self {
        Self { filesystem }
    }

    /// Render and write the platform build script, then mark it executable.
    /// Returns the written path.
    #[instrument(skip_all)]
    pub fn write_build_script(
        &self,
        ctx: &FormattingContext,
        layout: &ProjectLayout,
    ) -> MkcppResult<PathBuf> {
        let path = layout.build_script_path();
        let content = render_build_script(ctx);
        self.filesystem.write_file(&path, &content)?;
        self.filesystem.set_executable(&path)?;
        info!(path = %path.display(), bytes = content.len(), "build script written");
        Ok(path)
    }

    /// Render and write the CMake project descriptor. Returns the written
    /// path.
    #[instrument(skip_all)]
    pub fn write_descriptor(
        &self,
        ctx: &FormattingContext,
        config: &ProjectConfiguration,
        layout: &ProjectLayout,
    ) -> MkcppResult<PathBuf> {
        let path = layout.descriptor_path();
        let content = render_descriptor(ctx, config);
        self.filesystem.write_file(&path, &content)?;
        info!(path = %path.display(), bytes = content.len(), "descriptor written");
        Ok(path)
    }
}
