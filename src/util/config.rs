//! Optional project configuration.
//!
//! A `rpc-build.toml` next to the top-level `CMakeLists.txt` can override
//! the code-signing identities. Every field is optional:
//!
//! ```toml
//! [sign]
//! windows-identity = "Hammer & Chisel Inc."
//! macos-identity = "Developer ID Application: Hammer & Chisel Inc. (53Q6R32WPB)"
//! timestamp-url = "http://timestamp.digicert.com/rfc3161"
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// File name of the project configuration.
pub const CONFIG_FILE: &str = "rpc-build.toml";

/// Project configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub sign: SignConfig,
}

/// Code-signing settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct SignConfig {
    /// Certificate subject name passed to `signtool /n`.
    pub windows_identity: String,
    /// Signing identity passed to `codesign --sign`.
    pub macos_identity: String,
    /// RFC 3161 timestamp authority used by `signtool /tr`.
    pub timestamp_url: String,
}

impl Default for SignConfig {
    fn default() -> Self {
        SignConfig {
            windows_identity: "Hammer & Chisel Inc.".to_string(),
            macos_identity: "Developer ID Application: Hammer & Chisel Inc. (53Q6R32WPB)"
                .to_string(),
            timestamp_url: "http://timestamp.digicert.com/rfc3161".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config: {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config: {}", path.display()))
    }

    /// Load `rpc-build.toml` from the project root, or defaults if there is none.
    pub fn load_from_root(root: &Path) -> Result<Self> {
        let path = config_path(root);
        if path.exists() {
            tracing::debug!("loading config from {}", path.display());
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }
}

/// Path of the project configuration file.
pub fn config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE)
}
