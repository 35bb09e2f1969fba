use crate::core::{AnalysisRecord, RiskLevel};
use crate::insights::PortfolioInsight;
use colored::*;
use comfy_table::{presets::UTF8_FULL, Cell, ContentArrangement, Table};
use serde_json::json;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

/// Presentation collaborator: reads records and insights, never mutates.
pub trait OutputWriter {
    fn write_record(&mut self, record: &AnalysisRecord) -> anyhow::Result<()>;
    fn write_records(&mut self, records: &[AnalysisRecord]) -> anyhow::Result<()>;
    fn write_insight(&mut self, insight: &PortfolioInsight) -> anyhow::Result<()>;
    fn write_dashboard(
        &mut self,
        insight: &PortfolioInsight,
        recent: &[&AnalysisRecord],
    ) -> anyhow::Result<()>;
}

pub fn create_writer(
    output: Option<PathBuf>,
    format: OutputFormat,
) -> anyhow::Result<Box<dyn OutputWriter>> {
    let sink: Box<dyn Write> = match output {
        Some(path) => Box::new(File::create(path)?),
        None => Box::new(std::io::stdout()),
    };

    Ok(match format {
        OutputFormat::Json => Box::new(JsonWriter::new(sink)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(sink)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(sink)),
    })
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn emit(&mut self, value: &serde_json::Value) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        writeln!(self.writer, "{json}")?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_record(&mut self, record: &AnalysisRecord) -> anyhow::Result<()> {
        self.emit(&serde_json::to_value(record)?)
    }

    fn write_records(&mut self, records: &[AnalysisRecord]) -> anyhow::Result<()> {
        self.emit(&serde_json::to_value(records)?)
    }

    fn write_insight(&mut self, insight: &PortfolioInsight) -> anyhow::Result<()> {
        self.emit(&serde_json::to_value(insight)?)
    }

    fn write_dashboard(
        &mut self,
        insight: &PortfolioInsight,
        recent: &[&AnalysisRecord],
    ) -> anyhow::Result<()> {
        self.emit(&json!({
            "summary": insight,
            "recent": recent,
        }))
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_record_table(&mut self, records: &[&AnalysisRecord]) -> anyhow::Result<()> {
        writeln!(
            self.writer,
            "| Module | LOC | Complexity | Commits | Risk | Classification | Effort (pm) | Cost ($) | MI |"
        )?;
        writeln!(
            self.writer,
            "|--------|-----|------------|---------|------|----------------|-------------|----------|----|"
        )?;
        for record in records {
            writeln!(
                self.writer,
                "| {} | {} | {} | {} | {} | {} | {:.2} | {:.2} | {:.2} |",
                record.module_name,
                record.lines_of_code,
                record.complexity,
                record.commit_frequency,
                record.risk_score,
                record.risk_level,
                record.cocomo.effort_person_months,
                record.cocomo.estimated_cost,
                record.maintainability_index,
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_summary(&mut self, insight: &PortfolioInsight) -> anyhow::Result<()> {
        writeln!(self.writer, "| Metric | Value |")?;
        writeln!(self.writer, "|--------|-------|")?;
        writeln!(self.writer, "| Analyses | {} |", insight.total_analyses)?;
        writeln!(
            self.writer,
            "| Average risk score | {:.2} |",
            insight.average_risk_score
        )?;
        writeln!(
            self.writer,
            "| Average maintainability | {:.2} |",
            insight.average_maintainability
        )?;
        writeln!(
            self.writer,
            "| High risk | {} |",
            insight.distribution.high_count
        )?;
        writeln!(
            self.writer,
            "| Medium risk | {} |",
            insight.distribution.medium_count
        )?;
        writeln!(
            self.writer,
            "| Low risk | {} |",
            insight.distribution.low_count
        )?;
        writeln!(
            self.writer,
            "| Total effort (pm) | {:.2} |",
            insight.total_effort_person_months
        )?;
        writeln!(
            self.writer,
            "| Total estimated cost ($) | {:.2} |",
            insight.total_estimated_cost
        )?;
        if let Some(top) = &insight.riskiest_module {
            writeln!(
                self.writer,
                "| Riskiest module | {} ({}) |",
                top.module_name, top.risk_score
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_record(&mut self, record: &AnalysisRecord) -> anyhow::Result<()> {
        writeln!(self.writer, "# Module Analysis: {}", record.module_name)?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Analyzed: {}",
            record.created_at.format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(self.writer)?;
        self.write_record_table(&[record])?;
        writeln!(self.writer, "## Cost Estimate")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Metric | Value |")?;
        writeln!(self.writer, "|--------|-------|")?;
        writeln!(
            self.writer,
            "| Effort | {:.2} person-months |",
            record.cocomo.effort_person_months
        )?;
        writeln!(
            self.writer,
            "| Duration | {:.2} months |",
            record.cocomo.duration_months
        )?;
        writeln!(
            self.writer,
            "| Average staffing | {:.2} people |",
            record.cocomo.average_staffing
        )?;
        writeln!(
            self.writer,
            "| Estimated cost | ${:.2} |",
            record.cocomo.estimated_cost
        )?;
        Ok(())
    }

    fn write_records(&mut self, records: &[AnalysisRecord]) -> anyhow::Result<()> {
        writeln!(self.writer, "# Analysis Results")?;
        writeln!(self.writer)?;
        let refs: Vec<&AnalysisRecord> = records.iter().collect();
        self.write_record_table(&refs)
    }

    fn write_insight(&mut self, insight: &PortfolioInsight) -> anyhow::Result<()> {
        writeln!(self.writer, "# Portfolio Insights")?;
        writeln!(self.writer)?;
        self.write_summary(insight)
    }

    fn write_dashboard(
        &mut self,
        insight: &PortfolioInsight,
        recent: &[&AnalysisRecord],
    ) -> anyhow::Result<()> {
        writeln!(self.writer, "# Dashboard")?;
        writeln!(self.writer)?;
        self.write_summary(insight)?;
        if !recent.is_empty() {
            writeln!(self.writer, "## Recent Analyses")?;
            writeln!(self.writer)?;
            self.write_record_table(recent)?;
        }
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn records_table(records: &[&AnalysisRecord]) -> Table {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec![
                "Module",
                "LOC",
                "Complexity",
                "Commits",
                "Risk",
                "Classification",
                "Effort (pm)",
                "Cost ($)",
                "MI",
                "Analyzed",
            ]);
        for record in records {
            table.add_row(vec![
                Cell::new(&record.module_name),
                Cell::new(record.lines_of_code),
                Cell::new(record.complexity),
                Cell::new(record.commit_frequency),
                Cell::new(record.risk_score),
                Cell::new(record.risk_level),
                Cell::new(format!("{:.2}", record.cocomo.effort_person_months)),
                Cell::new(format!("{:.2}", record.cocomo.estimated_cost)),
                Cell::new(format!("{:.2}", record.maintainability_index)),
                Cell::new(record.created_at.format("%Y-%m-%d %H:%M")),
            ]);
        }
        table
    }

    fn write_summary(&mut self, insight: &PortfolioInsight) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", "PORTFOLIO SUMMARY".bold())?;
        writeln!(self.writer, "  Analyses:                {}", insight.total_analyses)?;
        writeln!(
            self.writer,
            "  Average risk score:      {:.2}",
            insight.average_risk_score
        )?;
        writeln!(
            self.writer,
            "  Average maintainability: {:.2}",
            insight.average_maintainability
        )?;
        writeln!(
            self.writer,
            "  Risk distribution:       {} / {} / {}",
            format!("{} high", insight.distribution.high_count).red(),
            format!("{} medium", insight.distribution.medium_count).yellow(),
            format!("{} low", insight.distribution.low_count).green(),
        )?;
        writeln!(
            self.writer,
            "  Total effort:            {:.2} person-months",
            insight.total_effort_person_months
        )?;
        writeln!(
            self.writer,
            "  Total estimated cost:    ${:.2}",
            insight.total_estimated_cost
        )?;
        if let Some(top) = &insight.riskiest_module {
            writeln!(
                self.writer,
                "  Riskiest module:         {} ({}, score {})",
                top.module_name.bold(),
                colorize_level(top.risk_level),
                top.risk_score
            )?;
        }
        Ok(())
    }
}

fn colorize_level(level: RiskLevel) -> ColoredString {
    match level {
        RiskLevel::High => level.to_string().red().bold(),
        RiskLevel::Medium => level.to_string().yellow(),
        RiskLevel::Low => level.to_string().green(),
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_record(&mut self, record: &AnalysisRecord) -> anyhow::Result<()> {
        writeln!(
            self.writer,
            "{} {}",
            "MODULE ANALYSIS".bold(),
            record.module_name.bold()
        )?;
        writeln!(
            self.writer,
            "  Risk:            {} (score {})",
            colorize_level(record.risk_level),
            record.risk_score
        )?;
        writeln!(
            self.writer,
            "  Maintainability: {:.2}",
            record.maintainability_index
        )?;
        writeln!(
            self.writer,
            "  Effort:          {:.2} person-months over {:.2} months",
            record.cocomo.effort_person_months, record.cocomo.duration_months
        )?;
        writeln!(
            self.writer,
            "  Staffing:        {:.2} people on average",
            record.cocomo.average_staffing
        )?;
        writeln!(
            self.writer,
            "  Estimated cost:  ${:.2}",
            record.cocomo.estimated_cost
        )?;
        writeln!(
            self.writer,
            "  Analyzed:        {}",
            record.created_at.format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        Ok(())
    }

    fn write_records(&mut self, records: &[AnalysisRecord]) -> anyhow::Result<()> {
        if records.is_empty() {
            writeln!(self.writer, "No analyses recorded yet.")?;
            return Ok(());
        }
        let refs: Vec<&AnalysisRecord> = records.iter().collect();
        writeln!(self.writer, "{}", Self::records_table(&refs))?;
        Ok(())
    }

    fn write_insight(&mut self, insight: &PortfolioInsight) -> anyhow::Result<()> {
        self.write_summary(insight)
    }

    fn write_dashboard(
        &mut self,
        insight: &PortfolioInsight,
        recent: &[&AnalysisRecord],
    ) -> anyhow::Result<()> {
        self.write_summary(insight)?;
        if !recent.is_empty() {
            writeln!(self.writer)?;
            writeln!(self.writer, "{}", "RECENT ANALYSES".bold())?;
            writeln!(self.writer, "{}", Self::records_table(recent))?;
        }
        Ok(())
    }
}
