//! Portfolio aggregation over the persisted collection.
//!
//! Pure reads of [`AnalysisRecord`] data; nothing here mutates the store.

use serde::{Deserialize, Serialize};

use crate::core::{round2, AnalysisRecord, RiskLevel};

/// Record counts per classification.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskDistribution {
    pub low_count: usize,
    pub medium_count: usize,
    pub high_count: usize,
    pub total: usize,
}

impl RiskDistribution {
    pub fn count(&self, level: RiskLevel) -> usize {
        match level {
            RiskLevel::Low => self.low_count,
            RiskLevel::Medium => self.medium_count,
            RiskLevel::High => self.high_count,
        }
    }
}

/// The module with the highest risk score in the collection.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ModuleHighlight {
    pub module_name: String,
    pub risk_score: u32,
    pub risk_level: RiskLevel,
}

/// Aggregate view over all analyses, rendered by the dashboard and
/// insights commands.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PortfolioInsight {
    pub total_analyses: usize,
    pub distribution: RiskDistribution,
    pub average_risk_score: f64,
    pub average_maintainability: f64,
    pub total_effort_person_months: f64,
    pub total_estimated_cost: f64,
    pub riskiest_module: Option<ModuleHighlight>,
}

/// Summarize a collection of analyses. Averages are 0.0 for an empty
/// collection rather than NaN.
pub fn summarize(records: &[AnalysisRecord]) -> PortfolioInsight {
    let distribution = distribution(records);
    let total = records.len();

    let (average_risk_score, average_maintainability) = if total == 0 {
        (0.0, 0.0)
    } else {
        let score_sum: u32 = records.iter().map(|r| r.risk_score).sum();
        let mi_sum: f64 = records.iter().map(|r| r.maintainability_index).sum();
        (
            round2(score_sum as f64 / total as f64),
            round2(mi_sum / total as f64),
        )
    };

    let total_effort: f64 = records
        .iter()
        .map(|r| r.cocomo.effort_person_months)
        .sum();
    let total_cost: f64 = records.iter().map(|r| r.cocomo.estimated_cost).sum();

    PortfolioInsight {
        total_analyses: total,
        distribution,
        average_risk_score,
        average_maintainability,
        total_effort_person_months: round2(total_effort),
        total_estimated_cost: round2(total_cost),
        riskiest_module: riskiest(records),
    }
}

fn distribution(records: &[AnalysisRecord]) -> RiskDistribution {
    records.iter().fold(
        RiskDistribution {
            total: records.len(),
            ..RiskDistribution::default()
        },
        |mut acc, record| {
            match record.risk_level {
                RiskLevel::Low => acc.low_count += 1,
                RiskLevel::Medium => acc.medium_count += 1,
                RiskLevel::High => acc.high_count += 1,
            }
            acc
        },
    )
}

fn riskiest(records: &[AnalysisRecord]) -> Option<ModuleHighlight> {
    records
        .iter()
        .max_by_key(|r| r.risk_score)
        .map(|r| ModuleHighlight {
            module_name: r.module_name.clone(),
            risk_score: r.risk_score,
            risk_level: r.risk_level,
        })
}

/// Most recent analyses first, without mutating the stored order.
pub fn recent(records: &[AnalysisRecord], limit: usize) -> Vec<&AnalysisRecord> {
    records.iter().rev().take(limit).collect()
}
