//! The estimation engine's single entry point.
//!
//! `analyze` validates the input, runs the risk scorer, the cost model, and
//! the maintainability index in sequence, then assembles the immutable
//! record. It either fully succeeds or fails before producing any output;
//! it never touches storage.

use chrono::{DateTime, Utc};

use crate::core::{
    AnalysisRecord, ComplexityLevel, ModuleMetrics, RawModuleMetrics, DEFAULT_FUNCTION_POINTS,
    DEFAULT_TEAM_SIZE,
};
use crate::errors::{EstimapError, Result};
use crate::{cost, maintainability, risk};

/// Analyze a module, stamping the current time as id and creation instant.
pub fn analyze(metrics: &ModuleMetrics) -> Result<AnalysisRecord> {
    analyze_at(metrics, Utc::now())
}

/// Deterministic variant of [`analyze`] for tests and for callers that
/// manage id monotonicity across a persisted collection.
pub fn analyze_at(metrics: &ModuleMetrics, now: DateTime<Utc>) -> Result<AnalysisRecord> {
    validate(metrics)?;

    let risk_score = risk::score_risk(
        metrics.lines_of_code,
        metrics.complexity,
        metrics.commit_frequency,
    );
    let risk_level = risk::classify(risk_score);
    let cocomo = cost::estimate(
        metrics.lines_of_code,
        metrics.complexity,
        metrics.team_size,
    );
    let maintainability_index =
        maintainability::index(metrics.lines_of_code, metrics.complexity);

    Ok(AnalysisRecord {
        id: now.timestamp_millis(),
        module_name: metrics.module_name.clone(),
        lines_of_code: metrics.lines_of_code,
        complexity: metrics.complexity,
        commit_frequency: metrics.commit_frequency,
        team_size: metrics.team_size,
        function_points: metrics.function_points.clone(),
        risk_score,
        risk_level,
        cocomo,
        maintainability_index,
        created_at: now,
    })
}

/// Preconditions checked before any arithmetic runs.
pub fn validate(metrics: &ModuleMetrics) -> Result<()> {
    if metrics.module_name.trim().is_empty() {
        return Err(EstimapError::validation("module name must not be empty"));
    }
    if metrics.lines_of_code == 0 {
        return Err(EstimapError::validation(
            "lines of code must be greater than zero",
        ));
    }
    if metrics.team_size == 0 {
        return Err(EstimapError::validation(
            "team size must be greater than zero",
        ));
    }
    Ok(())
}

/// Convert the text-boundary form into validated metrics.
///
/// Unparsable numeric text is rejected with a `Parse` error; nothing
/// numeric ever enters the pipeline undefined.
pub fn parse_metrics(raw: &RawModuleMetrics) -> Result<ModuleMetrics> {
    let lines_of_code = parse_field("linesOfCode", &raw.lines_of_code)?;
    let commit_frequency = parse_field("commitFrequency", &raw.commit_frequency)?;
    let complexity: ComplexityLevel = raw
        .complexity
        .parse()
        .map_err(|message: String| EstimapError::validation(message))?;
    let team_size = match raw.team_size.as_deref().map(str::trim) {
        None | Some("") => DEFAULT_TEAM_SIZE,
        Some(text) => parse_field("teamSize", text)?,
    };
    let function_points = match raw.function_points.as_deref().map(str::trim) {
        None | Some("") => DEFAULT_FUNCTION_POINTS.to_string(),
        Some(text) => text.to_string(),
    };

    Ok(ModuleMetrics {
        module_name: raw.module_name.trim().to_string(),
        lines_of_code,
        complexity,
        commit_frequency,
        team_size,
        function_points,
    })
}

fn parse_field(field: &str, value: &str) -> Result<u64> {
    value
        .trim()
        .parse::<u64>()
        .map_err(|_| EstimapError::parse(field, value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::RiskLevel;

    fn metrics() -> ModuleMetrics {
        ModuleMetrics::new("payments", 2500, ComplexityLevel::High, 30)
    }

    #[test]
    fn test_analyze_assembles_full_record() {
        let record = analyze(&metrics()).unwrap();
        assert_eq!(record.module_name, "payments");
        assert_eq!(record.risk_score, 25 + 35 + 15);
        assert_eq!(record.risk_level, RiskLevel::High);
        assert_eq!(record.function_points, "N/A");
        assert!(record.cocomo.effort_person_months > 0.0);
    }

    #[test]
    fn test_empty_name_rejected() {
        let mut bad = metrics();
        bad.module_name = "   ".to_string();
        assert!(matches!(
            analyze(&bad),
            Err(EstimapError::Validation { .. })
        ));
    }

    #[test]
    fn test_zero_loc_rejected() {
        let mut bad = metrics();
        bad.lines_of_code = 0;
        assert!(analyze(&bad).is_err());
    }

    #[test]
    fn test_parse_metrics_defaults() {
        let raw = RawModuleMetrics {
            module_name: "billing".to_string(),
            lines_of_code: "1200".to_string(),
            complexity: "medium".to_string(),
            commit_frequency: "8".to_string(),
            team_size: None,
            function_points: None,
        };
        let parsed = parse_metrics(&raw).unwrap();
        assert_eq!(parsed.team_size, 5);
        assert_eq!(parsed.function_points, "N/A");
    }

    #[test]
    fn test_parse_metrics_rejects_bad_numbers() {
        let raw = RawModuleMetrics {
            module_name: "billing".to_string(),
            lines_of_code: "12k".to_string(),
            complexity: "medium".to_string(),
            commit_frequency: "8".to_string(),
            team_size: None,
            function_points: None,
        };
        match parse_metrics(&raw) {
            Err(EstimapError::Parse { field, value }) => {
                assert_eq!(field, "linesOfCode");
                assert_eq!(value, "12k");
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }
}
