use chrono::{DateTime, Utc};
use std::path::PathBuf;
use std::time::Duration;

use super::Context;
use crate::cli;
use crate::core::{AnalysisRecord, ModuleMetrics};
use crate::engine;
use crate::io::output::create_writer;
use crate::storage::AnalysisStore;

pub struct AnalyzeOptions {
    pub metrics: ModuleMetrics,
    pub format: Option<cli::OutputFormat>,
    pub output: Option<PathBuf>,
}

pub fn run(ctx: &Context, opts: AnalyzeOptions) -> anyhow::Result<()> {
    let mut records = ctx.store.load()?;

    // Cosmetic latency hook for demos; never part of the engine itself.
    let delay = ctx.config.analysis.simulated_delay_ms;
    if delay > 0 {
        log::debug!("simulated delay of {delay}ms");
        std::thread::sleep(Duration::from_millis(delay));
    }

    let now = next_timestamp(&records);
    let record = engine::analyze_at(&opts.metrics, now)?;

    records.push(record.clone());
    ctx.store.save(&records)?;
    log::info!(
        "analyzed module `{}`: score {} ({})",
        record.module_name,
        record.risk_score,
        record.risk_level
    );

    let mut writer = create_writer(opts.output, ctx.format(opts.format))?;
    writer.write_record(&record)
}

/// Keep ids unique and monotonic even when the clock has not advanced past
/// the last persisted record.
fn next_timestamp(records: &[AnalysisRecord]) -> DateTime<Utc> {
    let now = Utc::now();
    match records.last() {
        Some(last) if now.timestamp_millis() <= last.id => {
            DateTime::from_timestamp_millis(last.id + 1).unwrap_or(now)
        }
        _ => now,
    }
}
