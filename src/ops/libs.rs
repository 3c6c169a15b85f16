//! Building the library for every configuration of the platform.

use std::path::Path;

use anyhow::{Context, Result};

use crate::core::{configurations, BuildConfig};
use crate::util::context::GlobalContext;
use crate::util::fs::{ensure_dir, remove_dir_all_if_exists};
use crate::util::process::{CommandRunner, ProcessBuilder};
use crate::util::shell::Status;

/// Options for [`libs`].
#[derive(Debug, Clone, Copy, Default)]
pub struct LibsOptions {
    /// Remove the whole builds directory first.
    pub clean: bool,
}

/// Build and install every configuration for the context's platform.
pub fn libs(ctx: &GlobalContext, runner: &mut dyn CommandRunner, opts: LibsOptions) -> Result<()> {
    let layout = ctx.layout();
    let builds_dir = layout.builds_dir();

    if opts.clean && remove_dir_all_if_exists(&builds_dir)? {
        ctx.shell().status(Status::Removed, builds_dir.display());
    }
    make_dir(ctx, &builds_dir)?;

    let span = ctx
        .shell()
        .span(Status::Building, format!("libraries for {}", ctx.platform()));

    for config in configurations(ctx.platform(), ctx.is_ci()) {
        build_lib(ctx, runner, &config)?;
    }

    span.finish();
    Ok(())
}

/// Configure, build and install a single configuration.
///
/// Every command runs inside the configuration's build directory; the
/// process's own working directory is never changed.
pub fn build_lib(
    ctx: &GlobalContext,
    runner: &mut dyn CommandRunner,
    config: &BuildConfig,
) -> Result<()> {
    let layout = ctx.layout();
    let build_dir = layout.build_dir(&config.name);
    let install_dir = layout.install_dir(&config.name);

    make_dir(ctx, &build_dir)?;
    make_dir(ctx, &install_dir)?;

    let cmake = ctx.cmake()?;

    ctx.shell().status(Status::Building, &config.name);

    let configure = ProcessBuilder::new(&cmake)
        .cwd(&build_dir)
        .args(configure_args(ctx, config));
    runner
        .run(&configure)
        .with_context(|| format!("failed to configure `{}`", config.name))?;

    // Debug builds catch problems early for developers; CI only ships Release.
    if !ctx.is_ci() {
        let debug = ProcessBuilder::new(&cmake)
            .cwd(&build_dir)
            .args(["--build", ".", "--config", "Debug"]);
        runner
            .run(&debug)
            .with_context(|| format!("failed to build `{}` (Debug)", config.name))?;
    }

    let install = ProcessBuilder::new(&cmake)
        .cwd(&build_dir)
        .args(["--build", ".", "--config", "Release", "--target", "install"]);
    runner
        .run(&install)
        .with_context(|| format!("failed to install `{}`", config.name))?;

    Ok(())
}

/// Arguments for the CMake configure step of `config`.
pub fn configure_args(ctx: &GlobalContext, config: &BuildConfig) -> Vec<String> {
    let mut args = vec![
        ctx.root().display().to_string(),
        format!(
            "-DCMAKE_INSTALL_PREFIX={}",
            ctx.layout().relative_install_prefix(&config.name).display()
        ),
    ];

    if let Some(ref generator) = config.generator {
        args.push("-G".to_string());
        args.push(generator.clone());
    }

    if ctx.is_ci() {
        // no clang-format runs on CI
        args.push("-DCLANG_FORMAT_SUFFIX=none".to_string());
    }

    args.extend(config.options.definitions());
    args
}

fn make_dir(ctx: &GlobalContext, path: &Path) -> Result<()> {
    if ensure_dir(path)? {
        ctx.shell().status(Status::Making, path.display());
    }
    Ok(())
}
