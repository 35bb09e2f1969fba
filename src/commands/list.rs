use std::path::PathBuf;

use super::Context;
use crate::cli;
use crate::io::output::create_writer;
use crate::storage::AnalysisStore;

pub fn run(
    ctx: &Context,
    top: Option<usize>,
    format: Option<cli::OutputFormat>,
    output: Option<PathBuf>,
) -> anyhow::Result<()> {
    let mut records = ctx.store.load()?;
    records.reverse(); // newest first
    if let Some(limit) = top {
        records.truncate(limit);
    }

    let mut writer = create_writer(output, ctx.format(format))?;
    writer.write_records(&records)
}
