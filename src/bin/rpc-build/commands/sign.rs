//! `rpc-build sign` command

use anyhow::Result;

use rpc_build::ops::sign;
use rpc_build::util::{GlobalContext, SystemRunner};

pub fn execute(ctx: &GlobalContext) -> Result<()> {
    sign(ctx, &mut SystemRunner)?;
    Ok(())
}
