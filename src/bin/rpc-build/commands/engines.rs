//! `rpc-build unity` and `rpc-build unreal` placeholders

use anyhow::Result;

use rpc_build::util::shell::Status;
use rpc_build::util::GlobalContext;

pub fn unity(ctx: &GlobalContext) -> Result<()> {
    ctx.shell()
        .status(Status::Skipped, "Unity project build is not implemented");
    Ok(())
}

pub fn unreal(ctx: &GlobalContext) -> Result<()> {
    ctx.shell()
        .status(Status::Skipped, "Unreal project build is not implemented");
    Ok(())
}
