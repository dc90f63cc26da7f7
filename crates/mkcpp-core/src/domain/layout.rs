//! The fixed directory layout of a generated project.
//!
//! Seven directories, created strictly in the order returned by
//! [`ProjectLayout::directories`] because later entries nest inside earlier
//! ones. The layout is parametrised by a [`Platform`] so that per-target
//! sibling directories can appear later; only the macOS target exists today.

use std::path::PathBuf;

/// Build target platform. Single variant for now; the per-platform directory
/// (`mac/`) is the intended extension point for future targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Platform {
    #[default]
    MacOs,
}

impl Platform {
    /// Name of the per-platform directory under the project root.
    pub fn dir_name(&self) -> &'static str {
        match self {
            Self::MacOs => "mac",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MacOs => write!(f, "macos"),
        }
    }
}

/// All paths of one generated project, rooted at the project name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    root: PathBuf,
    platform: Platform,
}

impl ProjectLayout {
    /// Lay out a project named `name` under the current directory.
    pub fn new(name: impl Into<PathBuf>) -> Self {
        Self {
            root: name.into(),
            platform: Platform::default(),
        }
    }

    pub fn root(&self) -> &PathBuf {
        &self.root
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// Shared asset directory, linked into the binaries directory by the
    /// generated build script.
    pub fn assets_dir(&self) -> PathBuf {
        self.root.join("assets")
    }

    /// Where the user's C++ sources and headers will live.
    pub fn src_dir(&self) -> PathBuf {
        self.root.join("src")
    }

    /// Vendored third-party code.
    pub fn third_party_dir(&self) -> PathBuf {
        self.root.join("3rdParty")
    }

    /// Per-platform directory holding both generated artifacts.
    pub fn platform_dir(&self) -> PathBuf {
        self.root.join(self.platform.dir_name())
    }

    /// Output-binaries directory.
    pub fn bin_dir(&self) -> PathBuf {
        self.platform_dir().join("bin")
    }

    /// Build-internals directory (CMake cache, ninja files).
    pub fn build_dir(&self) -> PathBuf {
        self.platform_dir().join("build")
    }

    /// The seven directories to create, in creation order.
    ///
    /// Order matters: every entry after the first nests inside an earlier
    /// one, and the tree builder creates them front to back.
    pub fn directories(&self) -> [PathBuf; 7] {
        [
            self.root.clone(),
            self.assets_dir(),
            self.src_dir(),
            self.third_party_dir(),
            self.platform_dir(),
            self.bin_dir(),
            self.build_dir(),
        ]
    }

    /// Path of the generated platform build script.
    pub fn build_script_path(&self) -> PathBuf {
        self.platform_dir().join("build.sh")
    }

    /// Path of the generated CMake project descriptor.
    pub fn descriptor_path(&self) -> PathBuf {
        self.platform_dir().join("CMakeLists.txt")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn seven_directories_in_nesting_order() {
        let layout = ProjectLayout::new("Foo");
        let dirs = layout.directories();
        assert_eq!(dirs.len(), 7);
        assert_eq!(dirs[0], Path::new("Foo"));
        assert_eq!(dirs[1], Path::new("Foo/assets"));
        assert_eq!(dirs[2], Path::new("Foo/src"));
        assert_eq!(dirs[3], Path::new("Foo/3rdParty"));
        assert_eq!(dirs[4], Path::new("Foo/mac"));
        assert_eq!(dirs[5], Path::new("Foo/mac/bin"));
        assert_eq!(dirs[6], Path::new("Foo/mac/build"));
    }

    #[test]
    fn every_directory_nests_under_the_root() {
        let layout = ProjectLayout::new("Foo");
        for dir in layout.directories() {
            assert!(dir.starts_with("Foo"), "{dir:?} escapes the root");
        }
    }

    #[test]
    fn artifacts_live_in_the_platform_directory() {
        let layout = ProjectLayout::new("Foo");
        assert_eq!(layout.build_script_path(), Path::new("Foo/mac/build.sh"));
        assert_eq!(
            layout.descriptor_path(),
            Path::new("Foo/mac/CMakeLists.txt")
        );
    }
}
