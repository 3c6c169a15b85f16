//! Host platform detection.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Errors raised while detecting the host platform.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlatformError {
    #[error("unsupported platform `{0}`")]
    Unsupported(String),
}

/// The platforms the library is built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Win,
    Osx,
    Linux,
}

impl Platform {
    /// Detect the platform this binary is running on.
    pub fn detect() -> Result<Self, PlatformError> {
        Self::from_os_identifier(std::env::consts::OS)
    }

    /// Map an operating-system identifier to a platform.
    ///
    /// Accepts both Rust's `std::env::consts::OS` spelling (`windows`,
    /// `macos`, `linux`) and the conventional `sys.platform`-style names
    /// (`win32`, `darwin`, `linux2`).
    pub fn from_os_identifier(id: &str) -> Result<Self, PlatformError> {
        if id.starts_with("win") {
            Ok(Platform::Win)
        } else if id == "darwin" || id == "macos" {
            Ok(Platform::Osx)
        } else if id.starts_with("linux") {
            Ok(Platform::Linux)
        } else {
            Err(PlatformError::Unsupported(id.to_string()))
        }
    }

    /// The short tag used in directory and archive names.
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Win => "win",
            Platform::Osx => "osx",
            Platform::Linux => "linux",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = PlatformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "win" => Ok(Platform::Win),
            "osx" => Ok(Platform::Osx),
            "linux" => Ok(Platform::Linux),
            other => Err(PlatformError::Unsupported(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_os_identifier() {
        assert_eq!(Platform::from_os_identifier("win32"), Ok(Platform::Win));
        assert_eq!(Platform::from_os_identifier("windows"), Ok(Platform::Win));
        assert_eq!(Platform::from_os_identifier("darwin"), Ok(Platform::Osx));
        assert_eq!(Platform::from_os_identifier("macos"), Ok(Platform::Osx));
        assert_eq!(Platform::from_os_identifier("linux"), Ok(Platform::Linux));
        assert_eq!(Platform::from_os_identifier("linux2"), Ok(Platform::Linux));
    }

    #[test]
    fn test_unsupported_identifier() {
        for id in ["freebsd", "sunos5", "", "cygwin", "darwinx"] {
            assert_eq!(
                Platform::from_os_identifier(id),
                Err(PlatformError::Unsupported(id.to_string()))
            );
        }
    }

    #[test]
    fn test_detect_host() {
        let platform = Platform::detect().unwrap();
        if cfg!(target_os = "linux") {
            assert_eq!(platform, Platform::Linux);
        } else if cfg!(target_os = "macos") {
            assert_eq!(platform, Platform::Osx);
        } else if cfg!(windows) {
            assert_eq!(platform, Platform::Win);
        }
    }

    #[test]
    fn test_tag_round_trip() {
        for platform in [Platform::Win, Platform::Osx, Platform::Linux] {
            assert_eq!(platform.to_string().parse::<Platform>(), Ok(platform));
        }
        assert!("darwin".parse::<Platform>().is_err());
    }
}
