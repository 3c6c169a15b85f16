//! `rpc-build libs` command

use anyhow::Result;

use crate::cli::LibsArgs;
use rpc_build::ops::{libs, LibsOptions};
use rpc_build::util::{GlobalContext, SystemRunner};

pub fn execute(ctx: &GlobalContext, args: LibsArgs) -> Result<()> {
    libs(ctx, &mut SystemRunner, LibsOptions { clean: args.clean })
}
