//! rpc-build CLI - build, sign and package the discord-rpc library

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, Commands};
use rpc_build::util::{GlobalContext, Shell};

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    // Parse CLI
    let mut cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose {
        EnvFilter::new("rpc_build=debug")
    } else if cli.quiet {
        EnvFilter::new("rpc_build=warn")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("rpc_build=info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    let command = match cli.command.take() {
        Some(Commands::Completions(args)) => return commands::completions::execute(args),
        command => command,
    };

    let ctx = context(&cli)?;
    tracing::debug!(
        root = %ctx.root().display(),
        platform = %ctx.platform(),
        ci = ctx.is_ci(),
        "starting"
    );

    // Execute command
    match command {
        None => commands::all::execute(&ctx, cli.clean),
        Some(Commands::Libs(args)) => commands::libs::execute(&ctx, args),
        Some(Commands::Sign) => commands::sign::execute(&ctx),
        Some(Commands::Archive) => commands::archive::execute(&ctx),
        Some(Commands::Unity) => commands::engines::unity(&ctx),
        Some(Commands::Unreal) => commands::engines::unreal(&ctx),
        Some(Commands::Completions(_)) => Ok(()),
    }
}

fn context(cli: &Cli) -> Result<GlobalContext> {
    let cwd = std::env::current_dir().context("failed to get current directory")?;
    // The configure step runs inside each build directory, so the root must be absolute.
    let root = match cli.root {
        Some(ref root) => cwd.join(root),
        None => cwd,
    };

    Ok(GlobalContext::from_host(root)?
        .with_cmake(cli.cmake.clone())
        .with_shell(Shell::from_flags(cli.quiet, cli.no_color)))
}
