use estimap::core::{ComplexityLevel, RiskLevel};
use estimap::risk::{churn_band, classify, complexity_band, score_risk, size_band};

#[test]
fn test_score_is_band_sum() {
    let score = score_risk(2500, ComplexityLevel::Medium, 30);
    assert_eq!(
        score,
        size_band(2500) + complexity_band(ComplexityLevel::Medium) + churn_band(30)
    );
    assert_eq!(score, 25 + 20 + 15);
}

#[test]
fn test_maximum_band_sum() {
    assert_eq!(score_risk(6000, ComplexityLevel::High, 60), 100);
}

#[test]
fn test_minimum_band_sum() {
    assert_eq!(score_risk(500, ComplexityLevel::Low, 5), 18);
}

#[test]
fn test_thresholds_are_exclusive_lower_bounds() {
    // Exactly at a threshold falls into the lower band.
    assert_eq!(size_band(5000), 25);
    assert_eq!(size_band(2000), 15);
    assert_eq!(size_band(1000), 5);
    assert_eq!(churn_band(50), 15);
    assert_eq!(churn_band(20), 5);
}

#[test]
fn test_classification_step_function() {
    for score in 18..=35 {
        assert_eq!(classify(score), RiskLevel::Low, "score {score}");
    }
    for score in 36..=60 {
        assert_eq!(classify(score), RiskLevel::Medium, "score {score}");
    }
    for score in 61..=100 {
        assert_eq!(classify(score), RiskLevel::High, "score {score}");
    }
}

#[test]
fn test_low_risk_reachable_only_at_small_scores() {
    // With bands bounded below by 18, Low Risk covers [18, 35] exactly.
    assert_eq!(classify(score_risk(1, ComplexityLevel::Low, 0)), RiskLevel::Low);
    assert_eq!(
        classify(score_risk(1000, ComplexityLevel::Medium, 5)),
        RiskLevel::Low
    );
}
