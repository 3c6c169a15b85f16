//! High-level operations.
//!
//! This module contains the implementation of the `rpc-build` commands.

pub mod archive;
pub mod libs;
pub mod sign;

pub use archive::{archive, ArchiveReport};
pub use libs::{build_lib, configure_args, libs, LibsOptions};
pub use sign::{sign, SignError, SignPlan, SignReport};

use anyhow::Result;

use crate::util::context::GlobalContext;
use crate::util::process::CommandRunner;

/// The full pipeline: build every configuration, sign on CI, then archive.
pub fn run_all(
    ctx: &GlobalContext,
    runner: &mut dyn CommandRunner,
    opts: LibsOptions,
) -> Result<ArchiveReport> {
    libs(ctx, runner, opts)?;
    if ctx.is_ci() {
        sign(ctx, runner)?;
    }
    archive(ctx)
}
