//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Build, sign and package the discord-rpc library for this platform.
///
/// Without a subcommand, builds every configuration, signs the results
/// when running on CI, and writes the archive.
#[derive(Parser)]
#[command(name = "rpc-build")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only print warnings and errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Project root containing the top-level CMakeLists.txt (defaults to current directory)
    #[arg(long, global = true, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// CMake executable to use (defaults to `cmake` on PATH)
    #[arg(long, global = true, env = "RPC_BUILD_CMAKE", value_name = "PATH")]
    pub cmake: Option<PathBuf>,

    /// Remove previous build output before building
    #[arg(long)]
    pub clean: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build and install every configuration for this platform
    Libs(LibsArgs),

    /// Code-sign the installed dynamic libraries
    Sign,

    /// Zip the install directory
    Archive,

    /// Build the Unity project (not implemented)
    Unity,

    /// Build the Unreal project (not implemented)
    Unreal,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args)]
pub struct LibsArgs {
    /// Remove previous build output before building
    #[arg(long)]
    pub clean: bool,
}

#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
