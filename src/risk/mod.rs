//! Additive risk scoring over three independent metric bands.
//!
//! Each band contributes a fixed point value looked up by threshold, never
//! interpolated. The band sums bound the score to [18, 100] by
//! construction, so no clamping is applied anywhere.

use crate::core::{ComplexityLevel, RiskLevel};

/// Contribution of module size. Thresholds are strict greater-than, so a
/// module of exactly 5000 lines lands in the >2000 band.
pub fn size_band(lines_of_code: u64) -> u32 {
    if lines_of_code > 5000 {
        40
    } else if lines_of_code > 2000 {
        25
    } else if lines_of_code > 1000 {
        15
    } else {
        5
    }
}

/// Contribution of self-reported complexity.
pub fn complexity_band(complexity: ComplexityLevel) -> u32 {
    match complexity {
        ComplexityLevel::High => 35,
        ComplexityLevel::Medium => 20,
        ComplexityLevel::Low => 8,
    }
}

/// Contribution of commit churn over the observation window.
pub fn churn_band(commit_frequency: u64) -> u32 {
    if commit_frequency > 50 {
        25
    } else if commit_frequency > 20 {
        15
    } else {
        5
    }
}

/// Total risk score: the sum of the three band contributions.
///
/// Minimum 18 (5+8+5), maximum 100 (40+35+25).
pub fn score_risk(
    lines_of_code: u64,
    complexity: ComplexityLevel,
    commit_frequency: u64,
) -> u32 {
    size_band(lines_of_code) + complexity_band(complexity) + churn_band(commit_frequency)
}

/// Step-function classification with exclusive lower bounds.
pub fn classify(score: u32) -> RiskLevel {
    if score > 60 {
        RiskLevel::High
    } else if score > 35 {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}
