use super::Context;
use crate::storage::AnalysisStore;

/// Bulk clear is the only destructive operation; individual records are
/// never deleted.
pub fn run(ctx: &Context, force: bool) -> anyhow::Result<()> {
    let records = ctx.store.load()?;

    if records.is_empty() {
        println!("Nothing to clear.");
        return Ok(());
    }

    if !force {
        anyhow::bail!(
            "This would delete {} recorded analyses. Re-run with --force to confirm.",
            records.len()
        );
    }

    ctx.store.clear()?;
    println!("Cleared {} analyses.", records.len());
    Ok(())
}
