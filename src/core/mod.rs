use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Self-reported complexity of a module, as entered by the analyst.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComplexityLevel {
    Low,
    Medium,
    High,
}

impl fmt::Display for ComplexityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComplexityLevel::Low => write!(f, "low"),
            ComplexityLevel::Medium => write!(f, "medium"),
            ComplexityLevel::High => write!(f, "high"),
        }
    }
}

impl FromStr for ComplexityLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(ComplexityLevel::Low),
            "medium" => Ok(ComplexityLevel::Medium),
            "high" => Ok(ComplexityLevel::High),
            other => Err(format!("unknown complexity level `{other}`")),
        }
    }
}

/// Three-way classification derived from the risk score.
///
/// Serialized with the same labels the persisted records have always used,
/// so existing collections keep loading.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    #[serde(rename = "Low Risk")]
    Low,
    #[serde(rename = "Medium Risk")]
    Medium,
    #[serde(rename = "High Risk")]
    High,
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "Low Risk"),
            RiskLevel::Medium => write!(f, "Medium Risk"),
            RiskLevel::High => write!(f, "High Risk"),
        }
    }
}

pub const DEFAULT_TEAM_SIZE: u64 = 5;
pub const DEFAULT_FUNCTION_POINTS: &str = "N/A";

/// Validated input for one module analysis.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleMetrics {
    pub module_name: String,
    pub lines_of_code: u64,
    pub complexity: ComplexityLevel,
    pub commit_frequency: u64,
    pub team_size: u64,
    pub function_points: String,
}

impl ModuleMetrics {
    pub fn new(
        module_name: impl Into<String>,
        lines_of_code: u64,
        complexity: ComplexityLevel,
        commit_frequency: u64,
    ) -> Self {
        Self {
            module_name: module_name.into(),
            lines_of_code,
            complexity,
            commit_frequency,
            team_size: DEFAULT_TEAM_SIZE,
            function_points: DEFAULT_FUNCTION_POINTS.to_string(),
        }
    }

    pub fn with_team_size(mut self, team_size: u64) -> Self {
        self.team_size = team_size;
        self
    }

    pub fn with_function_points(mut self, function_points: impl Into<String>) -> Self {
        self.function_points = function_points.into();
        self
    }
}

/// Text-boundary form of [`ModuleMetrics`], as it arrives from a form or a
/// raw API payload. Converted with [`crate::engine::parse_metrics`], which
/// rejects unparsable numbers instead of letting them flow downstream.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RawModuleMetrics {
    pub module_name: String,
    pub lines_of_code: String,
    pub complexity: String,
    pub commit_frequency: String,
    pub team_size: Option<String>,
    pub function_points: Option<String>,
}

/// Parametric cost-model output, all values rounded to 2 decimals.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CocomoEstimate {
    pub effort_person_months: f64,
    pub duration_months: f64,
    pub average_staffing: f64,
    pub estimated_cost: f64,
}

/// One completed analysis. Immutable once created; the collection it lives
/// in only ever grows or is cleared wholesale.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRecord {
    /// Epoch-millisecond surrogate key, unique within a session.
    pub id: i64,
    pub module_name: String,
    pub lines_of_code: u64,
    pub complexity: ComplexityLevel,
    pub commit_frequency: u64,
    pub team_size: u64,
    pub function_points: String,
    pub risk_score: u32,
    pub risk_level: RiskLevel,
    pub cocomo: CocomoEstimate,
    pub maintainability_index: f64,
    pub created_at: DateTime<Utc>,
}

impl AnalysisRecord {
    /// Metrics snapshot embedded in this record.
    pub fn metrics(&self) -> ModuleMetrics {
        ModuleMetrics {
            module_name: self.module_name.clone(),
            lines_of_code: self.lines_of_code,
            complexity: self.complexity,
            commit_frequency: self.commit_frequency,
            team_size: self.team_size,
            function_points: self.function_points.clone(),
        }
    }
}

/// Round to 2 decimal places for display and persistence.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complexity_level_from_str() {
        assert_eq!("low".parse::<ComplexityLevel>(), Ok(ComplexityLevel::Low));
        assert_eq!("HIGH".parse::<ComplexityLevel>(), Ok(ComplexityLevel::High));
        assert_eq!(
            " Medium ".parse::<ComplexityLevel>(),
            Ok(ComplexityLevel::Medium)
        );
        assert!("extreme".parse::<ComplexityLevel>().is_err());
    }

    #[test]
    fn test_risk_level_serialized_labels() {
        let json = serde_json::to_string(&RiskLevel::Medium).unwrap();
        assert_eq!(json, "\"Medium Risk\"");
        let back: RiskLevel = serde_json::from_str("\"High Risk\"").unwrap();
        assert_eq!(back, RiskLevel::High);
    }

    #[test]
    fn test_metrics_defaults() {
        let metrics = ModuleMetrics::new("auth", 1200, ComplexityLevel::Medium, 12);
        assert_eq!(metrics.team_size, DEFAULT_TEAM_SIZE);
        assert_eq!(metrics.function_points, "N/A");
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(2.944), 2.94);
        assert_eq!(round2(2.946), 2.95);
        assert_eq!(round2(23520.0), 23520.0);
        assert_eq!(round2(4.666_97), 4.67);
    }
}
