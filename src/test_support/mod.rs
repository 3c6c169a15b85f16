//! Test utilities for unit tests.
//!
//! [`RecordingRunner`] stands in for the host when operations shell out:
//! it records every command instead of running it and can be told to fail
//! on a matching command line.

use std::path::{Path, PathBuf};

use anyhow::{bail, Result};

use crate::core::Platform;
use crate::util::context::{Environment, GlobalContext};
use crate::util::process::{CommandRunner, ProcessBuilder};
use crate::util::shell::Shell;

/// A command seen by [`RecordingRunner`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCommand {
    pub program: PathBuf,
    pub args: Vec<String>,
    pub cwd: Option<PathBuf>,
    /// Full command line, as printed in error messages.
    pub line: String,
}

/// Command runner that records instead of executing.
#[derive(Debug, Default)]
pub struct RecordingRunner {
    calls: Vec<RecordedCommand>,
    fail_on: Option<String>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        RecordingRunner::default()
    }

    /// Fail any command whose command line contains `pattern`.
    pub fn fail_on(mut self, pattern: impl Into<String>) -> Self {
        self.fail_on = Some(pattern.into());
        self
    }

    /// All commands run so far, including the failing one.
    pub fn calls(&self) -> &[RecordedCommand] {
        &self.calls
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&mut self, cmd: &ProcessBuilder) -> Result<()> {
        let line = cmd.display_command();
        self.calls.push(RecordedCommand {
            program: cmd.get_program().to_path_buf(),
            args: cmd.get_args().to_vec(),
            cwd: cmd.get_cwd().map(Path::to_path_buf),
            line: line.clone(),
        });

        if let Some(ref pattern) = self.fail_on {
            if line.contains(pattern.as_str()) {
                bail!("`{}` failed with exit code 1", line);
            }
        }
        Ok(())
    }
}

/// A quiet context rooted at `root`, using `cmake` as the CMake executable.
pub fn test_context(root: &Path, platform: Platform, env: Environment) -> GlobalContext {
    GlobalContext::new(root, platform, env)
        .with_cmake(Some(PathBuf::from("cmake")))
        .with_shell(Shell::quiet())
}

/// Create a file under `root`, making parent directories as needed.
pub fn touch(root: &Path, relative: &str, contents: &str) -> PathBuf {
    let path = relative
        .split('/')
        .fold(root.to_path_buf(), |acc, part| acc.join(part));
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(&path, contents).unwrap();
    path
}
