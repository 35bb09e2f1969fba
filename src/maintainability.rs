//! Logarithmic maintainability index.
//!
//! `171 - 5.2*ln(loc) - 0.23*penalty - 16.2*ln(loc/1000)`. Below 1000 lines
//! the second logarithm goes negative and raises the index; that is a
//! property of the formula and is preserved exactly for compatibility with
//! existing collections.

use crate::core::{round2, ComplexityLevel};

fn complexity_penalty(complexity: ComplexityLevel) -> f64 {
    match complexity {
        ComplexityLevel::High => 20.0,
        ComplexityLevel::Medium => 10.0,
        ComplexityLevel::Low => 5.0,
    }
}

/// Maintainability index rounded to 2 decimals. Higher is generally better,
/// but the result is unbounded in both directions. Callers must reject
/// non-positive `lines_of_code` before invoking.
pub fn index(lines_of_code: u64, complexity: ComplexityLevel) -> f64 {
    let loc = lines_of_code as f64;
    let raw = 171.0
        - 5.2 * loc.ln()
        - 0.23 * complexity_penalty(complexity)
        - 16.2 * (loc / 1000.0).ln();
    round2(raw)
}
