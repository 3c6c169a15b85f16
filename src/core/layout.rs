//! On-disk layout of build output.

use std::path::{Path, PathBuf};

use super::platform::Platform;
use crate::util::fs::relative_path;

/// Name of the top-level directory inside the archive.
pub const ARCHIVE_ROOT: &str = "discord-rpc";

/// Paths derived from the project root.
///
/// ```text
/// <root>/builds/<config>/                  build directory
/// <root>/builds/install/<config>/          install directory
/// <root>/builds/discord-rpc-<platform>.zip archive
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    root: PathBuf,
}

impl Layout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Layout { root: root.into() }
    }

    /// Project root holding the top-level `CMakeLists.txt`.
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn builds_dir(&self) -> PathBuf {
        self.root.join("builds")
    }

    /// Shared install tree all configurations install into.
    pub fn install_root(&self) -> PathBuf {
        self.builds_dir().join("install")
    }

    pub fn build_dir(&self, config: &str) -> PathBuf {
        self.builds_dir().join(config)
    }

    pub fn install_dir(&self, config: &str) -> PathBuf {
        self.install_root().join(config)
    }

    /// Install prefix as seen from inside the configuration's build directory.
    pub fn relative_install_prefix(&self, config: &str) -> PathBuf {
        relative_path(&self.build_dir(config), &self.install_dir(config))
    }

    pub fn archive_path(&self, platform: Platform) -> PathBuf {
        self.builds_dir()
            .join(format!("{}-{}.zip", ARCHIVE_ROOT, platform))
    }
}
