//! rpc-build - build, sign and package the discord-rpc native library
//!
//! This crate drives CMake over every build configuration of the host
//! platform, code-signs the installed dynamic libraries and zips the
//! install tree into a single per-platform archive.

pub mod core;
pub mod ops;
pub mod util;

/// Test utilities for unit tests.
#[cfg(test)]
pub mod test_support;

pub use crate::core::{BuildConfig, CmakeOptions, Layout, Platform};
pub use util::context::{Environment, GlobalContext};
