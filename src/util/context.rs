//! Global context for build operations.
//!
//! Everything an operation would otherwise read from process-global state
//! (working directory, environment variables, the host platform) is
//! captured once here and passed explicitly.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{bail, Result};

use crate::core::{Layout, Platform};
use crate::util::config::Config;
use crate::util::process::find_cmake;
use crate::util::shell::Shell;

/// Environment variables the build reads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    /// Running on a CI machine (`CI=true`).
    pub ci: bool,
    /// Root of the Windows SDK (`WindowsSdkDir`).
    pub windows_sdk_dir: Option<PathBuf>,
    /// The user's home directory.
    pub home: Option<PathBuf>,
}

impl Environment {
    /// Capture the relevant variables from the process environment.
    pub fn from_env() -> Self {
        Environment {
            ci: std::env::var("CI").is_ok_and(|v| v == "true"),
            windows_sdk_dir: std::env::var_os("WindowsSdkDir").map(PathBuf::from),
            home: directories::BaseDirs::new().map(|b| b.home_dir().to_path_buf()),
        }
    }
}

/// Global context containing paths, platform, environment and output.
#[derive(Debug, Clone)]
pub struct GlobalContext {
    layout: Layout,
    platform: Platform,
    env: Environment,
    config: Config,
    cmake: Option<PathBuf>,
    shell: Arc<Shell>,
}

impl GlobalContext {
    /// Create a context rooted at `root` for `platform`.
    pub fn new(root: impl Into<PathBuf>, platform: Platform, env: Environment) -> Self {
        GlobalContext {
            layout: Layout::new(root),
            platform,
            env,
            config: Config::default(),
            cmake: None,
            shell: Arc::new(Shell::default()),
        }
    }

    /// Create a context for the host: detects the platform, reads the
    /// environment and loads the project configuration under `root`.
    pub fn from_host(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        let platform = Platform::detect()?;
        let config = Config::load_from_root(&root)?;
        Ok(Self::new(root, platform, Environment::from_env()).with_config(config))
    }

    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Use a specific CMake executable instead of searching `PATH`.
    pub fn with_cmake(mut self, cmake: Option<PathBuf>) -> Self {
        self.cmake = cmake;
        self
    }

    pub fn with_shell(mut self, shell: Shell) -> Self {
        self.shell = Arc::new(shell);
        self
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Project root.
    pub fn root(&self) -> &Path {
        self.layout.root()
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    pub fn env(&self) -> &Environment {
        &self.env
    }

    /// Check if this is an automated (CI) build.
    pub fn is_ci(&self) -> bool {
        self.env.ci
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn shell(&self) -> &Arc<Shell> {
        &self.shell
    }

    /// Resolve the CMake executable.
    pub fn cmake(&self) -> Result<PathBuf> {
        if let Some(ref cmake) = self.cmake {
            return Ok(cmake.clone());
        }
        match find_cmake() {
            Some(path) => Ok(path),
            None => bail!(
                "CMake not found\n\
                 \n\
                 CMake is required to build the library.\n\
                 Install CMake and ensure it's in your PATH, or pass `--cmake <path>`."
            ),
        }
    }
}
