//! Command implementations

pub mod all;
pub mod archive;
pub mod completions;
pub mod engines;
pub mod libs;
pub mod sign;
