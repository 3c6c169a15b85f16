//! `rpc-build archive` command

use anyhow::Result;

use rpc_build::ops::archive;
use rpc_build::util::GlobalContext;

pub fn execute(ctx: &GlobalContext) -> Result<()> {
    let report = archive(ctx)?;
    tracing::info!("wrote {}", report.path.display());
    Ok(())
}
