//! Parametric effort and cost estimation.
//!
//! A fixed-exponent power-law model (organic/semi-detached hybrid COCOMO
//! constants). Computation runs at full f64 precision; results are rounded
//! to 2 decimals at the end for display and persistence.

use crate::core::{round2, CocomoEstimate, ComplexityLevel};

const A: f64 = 2.94;
const B: f64 = 0.91;
const C: f64 = 3.67;
const D: f64 = 0.28;

/// Fixed monetary rate per person-month.
pub const COST_PER_PERSON_MONTH: f64 = 8000.0;

fn effort_multiplier(complexity: ComplexityLevel) -> f64 {
    match complexity {
        ComplexityLevel::High => 1.3,
        ComplexityLevel::Medium => 1.0,
        ComplexityLevel::Low => 0.8,
    }
}

/// Estimate effort, duration, staffing, and cost for a module.
///
/// `team_size` is accepted for interface compatibility but the formula does
/// not consume it: average staffing is derived as effort over duration.
/// Callers must reject non-positive `lines_of_code` before invoking.
pub fn estimate(
    lines_of_code: u64,
    complexity: ComplexityLevel,
    _team_size: u64,
) -> CocomoEstimate {
    let kloc = lines_of_code as f64 / 1000.0;
    let effort = A * kloc.powf(B) * effort_multiplier(complexity);
    let duration = C * effort.powf(D);
    let average_staffing = effort / duration;
    let estimated_cost = effort * COST_PER_PERSON_MONTH;

    CocomoEstimate {
        effort_person_months: round2(effort),
        duration_months: round2(duration),
        average_staffing: round2(average_staffing),
        estimated_cost: round2(estimated_cost),
    }
}
