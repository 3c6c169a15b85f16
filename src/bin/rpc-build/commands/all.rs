//! Default invocation: `rpc-build [--clean]`

use anyhow::Result;

use rpc_build::ops::{run_all, LibsOptions};
use rpc_build::util::{GlobalContext, SystemRunner};

pub fn execute(ctx: &GlobalContext, clean: bool) -> Result<()> {
    let report = run_all(ctx, &mut SystemRunner, LibsOptions { clean })?;
    tracing::info!("wrote {}", report.path.display());
    Ok(())
}
