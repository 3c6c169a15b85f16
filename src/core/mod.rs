//! Core types: platforms, build configurations and the output layout.

pub mod config;
pub mod layout;
pub mod platform;

pub use config::{configurations, BuildConfig, CmakeOptions};
pub use layout::{Layout, ARCHIVE_ROOT};
pub use platform::{Platform, PlatformError};
