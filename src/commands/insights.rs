use std::path::PathBuf;

use super::Context;
use crate::cli;
use crate::insights;
use crate::io::output::create_writer;
use crate::storage::AnalysisStore;

pub fn run(
    ctx: &Context,
    format: Option<cli::OutputFormat>,
    output: Option<PathBuf>,
) -> anyhow::Result<()> {
    let records = ctx.store.load()?;
    let insight = insights::summarize(&records);

    let mut writer = create_writer(output, ctx.format(format))?;
    writer.write_insight(&insight)
}
